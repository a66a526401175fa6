//! Agent compatibility configuration.
//!
//! The configuration carries the allow-lists a host is validated against:
//! supported operating-system version prefixes and supported edition (SKU)
//! codes. It is a plain JSON file with camelCase field names, matching the
//! agent-config convention of the service the checks gate enrollment into.
//!
//! # Example
//!
//! ```json
//! {
//!   "validOsVersions": ["6.2", "6.3", "10.0"],
//!   "validOsSkus": [7, 8, 10, 79, 80]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Allow-lists describing the systems the sync agent supports.
///
/// Fields omitted from a configuration file fall back to the built-in
/// defaults, so a file may override just one list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
  /// Version-string prefixes considered supported. A host version matches
  /// when it starts with any entry (`10.0` matches `10.0.14393`).
  pub valid_os_versions: Vec<String>,

  /// Operating-system SKU codes considered supported.
  pub valid_os_skus: Vec<u32>,
}

impl Default for Config {
  /// Supported Windows Server releases: 2012 (6.2), 2012 R2 (6.3), and the
  /// 10.0 line (2016 onward); Standard, Datacenter, and Enterprise editions
  /// plus their evaluation SKUs.
  fn default() -> Self {
    Self {
      valid_os_versions: vec!["6.2".to_string(), "6.3".to_string(), "10.0".to_string()],
      valid_os_skus: vec![7, 8, 10, 79, 80],
    }
  }
}

/// Errors that can occur when loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
  /// The file could not be read.
  #[error("failed to read configuration: {0}")]
  Io(#[from] std::io::Error),

  /// The file contents are not a valid configuration document.
  #[error("failed to parse configuration: {0}")]
  Json(#[from] serde_json::Error),
}

impl Config {
  /// Load a configuration from a JSON file.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
  }
}
