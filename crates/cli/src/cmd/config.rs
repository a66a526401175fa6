//! Implementation of the `synceval config` command.
//!
//! Prints the effective configuration (built-in defaults, or the given file
//! merged over them) as pretty JSON.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use synceval_lib::config::Config;

/// Execute the config command.
pub fn cmd_config(config_path: Option<&Path>) -> Result<()> {
  let config = load_config(config_path)?;
  let rendered = serde_json::to_string_pretty(&config).context("Failed to serialize configuration")?;
  println!("{}", rendered);
  Ok(())
}

/// Load the configuration, falling back to the built-in defaults.
fn load_config(path: Option<&Path>) -> Result<Config> {
  match path {
    Some(path) => {
      let display_path = dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
      let config = Config::load(path)
        .with_context(|| format!("Failed to load configuration: {}", display_path.display()))?;
      info!(path = %display_path.display(), "loaded configuration");
      Ok(config)
    }
    None => Ok(Config::default()),
  }
}
