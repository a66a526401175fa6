//! System validations.
//!
//! Each validation is a straight-line check of one host property against the
//! configuration. [`run_system_validations`] runs the whole set against a
//! single runner and collects the reports.
//!
//! # Modules
//!
//! - [`result`]: the tri-state [`Outcome`] and per-check [`ValidationReport`]
//! - [`os_version`]: OS release/edition compliance

mod os_version;
mod result;

pub use os_version::OsVersionValidation;
pub use result::{Outcome, ValidationReport};

use tracing::info;

use crate::config::Config;
use crate::runner::CommandRunner;

/// A single pre-flight check against the host system.
///
/// Implementations queue their query on the runner, invoke it, and map the
/// result onto a [`ValidationReport`]. Query failures become
/// [`Outcome::Unavailable`] rather than errors; a validation always produces
/// a report.
pub trait SystemValidation {
  /// Stable identifier used in reports and output.
  fn name(&self) -> &'static str;

  /// Run the check against the system behind `runner`.
  fn validate_using(&self, runner: &mut dyn CommandRunner) -> ValidationReport;
}

/// Build the system validation set for `config`.
fn system_validations(config: &Config) -> Vec<Box<dyn SystemValidation>> {
  vec![Box::new(OsVersionValidation::new(config))]
}

/// Run every system validation against `runner` and collect the reports.
pub fn run_system_validations(
  config: &Config,
  runner: &mut dyn CommandRunner,
) -> Vec<ValidationReport> {
  system_validations(config)
    .iter()
    .map(|validation| {
      let report = validation.validate_using(runner);
      info!(validation = validation.name(), outcome = %report.outcome, "validation finished");
      report
    })
    .collect()
}
