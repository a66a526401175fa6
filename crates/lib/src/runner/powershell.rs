//! PowerShell-backed command runner.
//!
//! Executes queued script fragments through a PowerShell child process and
//! parses the JSON the pipeline writes to stdout.

use std::process::Command;

use tracing::{debug, info};

use super::{CommandRunner, Record, RunnerError, parse_records};

/// Runs system queries through a PowerShell child process.
///
/// Uses `powershell.exe` on Windows and `pwsh` elsewhere. Scripts queued via
/// [`CommandRunner::add_script`] are joined with `; ` and executed in a
/// single `-Command` invocation; the queue is cleared after each invoke.
#[derive(Debug, Clone)]
pub struct PowerShellRunner {
  program: String,
  scripts: Vec<String>,
}

impl PowerShellRunner {
  /// Runner using the platform-default PowerShell binary.
  pub fn new() -> Self {
    Self::with_program(default_program())
  }

  /// Runner using a specific program instead of the platform default.
  ///
  /// The program receives the same argument shape as PowerShell
  /// (`-NoProfile -NonInteractive -Command <script>`).
  pub fn with_program(program: impl Into<String>) -> Self {
    Self {
      program: program.into(),
      scripts: Vec::new(),
    }
  }
}

impl Default for PowerShellRunner {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(windows)]
fn default_program() -> String {
  "powershell.exe".to_string()
}

#[cfg(not(windows))]
fn default_program() -> String {
  "pwsh".to_string()
}

impl CommandRunner for PowerShellRunner {
  fn add_script(&mut self, script: &str) {
    self.scripts.push(script.to_string());
  }

  fn invoke(&mut self) -> Result<Vec<Record>, RunnerError> {
    let script = self.scripts.join("; ");
    self.scripts.clear();

    info!(program = %self.program, "invoking system query");
    debug!(script = %script, "query script");

    let output = Command::new(&self.program)
      .args(["-NoProfile", "-NonInteractive", "-Command", &script])
      .output()
      .map_err(|source| RunnerError::Spawn {
        program: self.program.clone(),
        source,
      })?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
      if !stderr.is_empty() {
        debug!(stderr = %stderr, "query stderr");
      }
      return Err(RunnerError::NonZeroExit {
        program: self.program.clone(),
        code: output.status.code(),
        stderr,
      });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let records = parse_records(&stdout)?;
    debug!(records = records.len(), "query returned");
    Ok(records)
  }
}
