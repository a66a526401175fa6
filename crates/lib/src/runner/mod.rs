//! System-information command runner.
//!
//! Validations talk to the host through the [`CommandRunner`] seam: they
//! queue script text, invoke it, and get back zero or more free-form
//! [`Record`]s. The production implementation is [`PowerShellRunner`], which
//! executes the scripts through the platform's instrumentation layer; tests
//! substitute a scripted fake.

mod powershell;

pub use powershell::PowerShellRunner;

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when invoking a system query.
#[derive(Debug, Error)]
pub enum RunnerError {
  /// The query process could not be started.
  #[error("failed to spawn '{program}': {source}")]
  Spawn {
    program: String,
    #[source]
    source: std::io::Error,
  },

  /// The query process exited with a non-zero status.
  #[error("'{program}' exited with status {code:?}: {stderr}")]
  NonZeroExit {
    program: String,
    code: Option<i32>,
    stderr: String,
  },

  /// The query output was not valid JSON.
  #[error("failed to parse query output: {0}")]
  Parse(#[from] serde_json::Error),
}

/// A single system query result: a free-form property bag.
///
/// Field lookup is case-insensitive, matching the property semantics of the
/// instrumentation layer the records come from (`version` and `Version`
/// resolve to the same field).
#[derive(Debug, Clone, PartialEq)]
pub struct Record(serde_json::Map<String, Value>);

impl Record {
  pub fn new(fields: serde_json::Map<String, Value>) -> Self {
    Self(fields)
  }

  fn get(&self, field: &str) -> Option<&Value> {
    self
      .0
      .iter()
      .find(|(key, _)| key.eq_ignore_ascii_case(field))
      .map(|(_, value)| value)
  }

  /// Read a string field, if present and actually a string.
  pub fn get_str(&self, field: &str) -> Option<&str> {
    self.get(field).and_then(Value::as_str)
  }

  /// Read a numeric field as a `u32`, if present and in range.
  pub fn get_u32(&self, field: &str) -> Option<u32> {
    self.get(field).and_then(Value::as_u64).and_then(|n| u32::try_from(n).ok())
  }
}

/// Abstraction over invoking a system-information query.
///
/// Scripts are queued with [`add_script`](Self::add_script) and executed
/// together by [`invoke`](Self::invoke). One invocation, no retries.
pub trait CommandRunner {
  /// Queue a script fragment to run on the next [`invoke`](Self::invoke).
  fn add_script(&mut self, script: &str);

  /// Run the queued scripts and return the resulting records.
  fn invoke(&mut self) -> Result<Vec<Record>, RunnerError>;
}

/// Parse raw query output into records.
///
/// The JSON serializer on the query side emits a single object when the
/// pipeline produced one result and an array when it produced several; both
/// shapes are accepted. Empty output yields no records, and non-object array
/// elements are skipped.
pub fn parse_records(raw: &str) -> Result<Vec<Record>, serde_json::Error> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return Ok(Vec::new());
  }

  let value: Value = serde_json::from_str(trimmed)?;
  let records = match value {
    Value::Object(fields) => vec![Record::new(fields)],
    Value::Array(items) => items
      .into_iter()
      .filter_map(|item| match item {
        Value::Object(fields) => Some(Record::new(fields)),
        _ => None,
      })
      .collect(),
    _ => Vec::new(),
  };

  Ok(records)
}
