//! Shared helpers for CLI integration tests.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A temp working directory plus helpers for staging files in it.
pub struct TestEnv {
  pub temp: TempDir,
}

impl TestEnv {
  pub fn new() -> Self {
    Self {
      temp: TempDir::new().expect("create temp dir"),
    }
  }

  /// Path of a fixture file shipped with the tests.
  pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
      .join("tests")
      .join("fixtures")
      .join(name)
  }

  /// Write `contents` to `name` inside the temp dir and return its path.
  pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
    let path = self.temp.path().join(name);
    fs::write(&path, contents).expect("write test file");
    path
  }

  /// The binary under test, running in the temp dir.
  pub fn synceval(&self) -> Command {
    let mut cmd = Command::cargo_bin("synceval").expect("binary builds");
    cmd.current_dir(self.temp.path());
    cmd
  }
}
