//! Validation outcomes and reports.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tri-state result of a single validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
  /// The host satisfies the check.
  Success,
  /// The host was inspected and does not satisfy the check.
  Fail,
  /// The host could not be inspected.
  Unavailable,
}

impl fmt::Display for Outcome {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = match self {
      Outcome::Success => "success",
      Outcome::Fail => "fail",
      Outcome::Unavailable => "unavailable",
    };
    f.write_str(s)
  }
}

/// The result of running one validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
  /// Stable identifier of the validation that produced this report.
  pub name: String,

  pub outcome: Outcome,

  /// Human-readable detail; present for `Fail` and `Unavailable` outcomes.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message: Option<String>,
}

impl ValidationReport {
  pub fn success(name: &str) -> Self {
    Self {
      name: name.to_string(),
      outcome: Outcome::Success,
      message: None,
    }
  }

  pub fn fail(name: &str, message: impl Into<String>) -> Self {
    Self {
      name: name.to_string(),
      outcome: Outcome::Fail,
      message: Some(message.into()),
    }
  }

  pub fn unavailable(name: &str, message: impl Into<String>) -> Self {
    Self {
      name: name.to_string(),
      outcome: Outcome::Unavailable,
      message: Some(message.into()),
    }
  }
}
