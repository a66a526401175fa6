//! Test utilities for synceval-lib.
//!
//! Scripted test doubles for the command runner, used by the unit tests in
//! this crate and by integration tests downstream.

use serde_json::Value;

use crate::runner::{CommandRunner, Record, RunnerError};

enum FakeOutcome {
  Records(Vec<Record>),
  Error(String),
}

impl Default for FakeOutcome {
  fn default() -> Self {
    Self::Records(Vec::new())
  }
}

/// A [`CommandRunner`] that replays a scripted result instead of touching the
/// system.
///
/// Every script passed to [`CommandRunner::add_script`] is captured in
/// [`scripts`](Self::scripts) for inspection.
#[derive(Default)]
pub struct FakeRunner {
  /// Scripts queued so far, in order.
  pub scripts: Vec<String>,
  outcome: FakeOutcome,
}

impl FakeRunner {
  /// Runner whose invoke yields `records`.
  pub fn with_records(records: Vec<Record>) -> Self {
    Self {
      scripts: Vec::new(),
      outcome: FakeOutcome::Records(records),
    }
  }

  /// Runner whose invoke fails with a non-zero exit error carrying `message`
  /// as stderr.
  pub fn failing(message: &str) -> Self {
    Self {
      scripts: Vec::new(),
      outcome: FakeOutcome::Error(message.to_string()),
    }
  }
}

impl CommandRunner for FakeRunner {
  fn add_script(&mut self, script: &str) {
    self.scripts.push(script.to_string());
  }

  fn invoke(&mut self) -> Result<Vec<Record>, RunnerError> {
    match &self.outcome {
      FakeOutcome::Records(records) => Ok(records.clone()),
      FakeOutcome::Error(message) => Err(RunnerError::NonZeroExit {
        program: "fake".to_string(),
        code: Some(1),
        stderr: message.clone(),
      }),
    }
  }
}

/// Build a [`Record`] from a JSON object literal.
///
/// # Panics
///
/// Panics if `value` is not a JSON object; this is a test-only helper.
pub fn record(value: Value) -> Record {
  match value {
    Value::Object(fields) => Record::new(fields),
    other => panic!("record literal must be a JSON object, got {other}"),
  }
}
