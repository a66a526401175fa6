//! Operating-system version and edition validation.
//!
//! Checks the host's OS version string and edition (SKU) code against the
//! configured allow-lists. The version matches when it starts with any
//! configured prefix; the SKU matches by set membership.

use tracing::{debug, warn};

use crate::config::Config;
use crate::consts::{OS_QUERY_SCRIPT, OS_SKU_FIELD, OS_VERSION_FIELD};
use crate::runner::CommandRunner;

use super::{SystemValidation, ValidationReport};

/// Validates that the host runs a supported operating-system release and
/// edition.
#[derive(Debug, Clone)]
pub struct OsVersionValidation {
  valid_versions: Vec<String>,
  valid_skus: Vec<u32>,
}

impl OsVersionValidation {
  pub fn new(config: &Config) -> Self {
    Self {
      valid_versions: config.valid_os_versions.clone(),
      valid_skus: config.valid_os_skus.clone(),
    }
  }
}

impl SystemValidation for OsVersionValidation {
  fn name(&self) -> &'static str {
    "os-version"
  }

  fn validate_using(&self, runner: &mut dyn CommandRunner) -> ValidationReport {
    runner.add_script(OS_QUERY_SCRIPT);

    let records = match runner.invoke() {
      Ok(records) => records,
      Err(err) => {
        warn!(error = %err, "operating-system query failed");
        return ValidationReport::unavailable(
          self.name(),
          format!("could not query the operating system: {err}"),
        );
      }
    };

    // Anything short of a record with both fields means the system could not
    // be determined, which is distinct from determined-but-unsupported.
    let Some(record) = records.first() else {
      warn!("operating-system query returned no records");
      return ValidationReport::unavailable(self.name(), "operating-system query returned no records");
    };

    let Some(version) = record.get_str(OS_VERSION_FIELD) else {
      return ValidationReport::unavailable(
        self.name(),
        format!("query record has no readable '{OS_VERSION_FIELD}' field"),
      );
    };

    let Some(sku) = record.get_u32(OS_SKU_FIELD) else {
      return ValidationReport::unavailable(
        self.name(),
        format!("query record has no readable '{OS_SKU_FIELD}' field"),
      );
    };

    debug!(version = %version, sku, "operating system reported");

    if !self.valid_versions.iter().any(|prefix| version.starts_with(prefix.as_str())) {
      return ValidationReport::fail(
        self.name(),
        format!(
          "OS version {} is not supported (supported: {})",
          version,
          self.valid_versions.join(", ")
        ),
      );
    }

    if !self.valid_skus.contains(&sku) {
      return ValidationReport::fail(self.name(), format!("OS edition (SKU {sku}) is not supported"));
    }

    ValidationReport::success(self.name())
  }
}
