//! Implementation of the `synceval check` command.
//!
//! Runs the system validations against the live host, or against a captured
//! JSON report when `--input` is given, and prints one line per check plus a
//! summary. Exit code 0 when every check succeeds, 1 when any check fails,
//! 2 when any check is unavailable.

use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use tracing::info;

use synceval_lib::config::Config;
use synceval_lib::runner::{CommandRunner, PowerShellRunner, Record, RunnerError, parse_records};
use synceval_lib::validation::{Outcome, ValidationReport, run_system_validations};

/// Replays records captured in a report file instead of querying the host.
struct ReportRunner {
  records: Vec<Record>,
}

impl CommandRunner for ReportRunner {
  fn add_script(&mut self, _script: &str) {}

  fn invoke(&mut self) -> Result<Vec<Record>, RunnerError> {
    Ok(self.records.clone())
  }
}

/// Execute the check command.
pub fn cmd_check(config_path: Option<&Path>, input: Option<&Path>, json: bool) -> Result<()> {
  let config = load_config(config_path)?;
  let started = Instant::now();

  let reports = match input {
    Some(path) => {
      let raw =
        fs::read_to_string(path).with_context(|| format!("Failed to read report: {}", path.display()))?;
      let records =
        parse_records(&raw).with_context(|| format!("Failed to parse report: {}", path.display()))?;
      info!(records = records.len(), path = %path.display(), "evaluating captured report");

      let mut runner = ReportRunner { records };
      run_system_validations(&config, &mut runner)
    }
    None => {
      let mut runner = PowerShellRunner::new();
      run_system_validations(&config, &mut runner)
    }
  };

  let passed = count(&reports, Outcome::Success);
  let failed = count(&reports, Outcome::Fail);
  let unavailable = count(&reports, Outcome::Unavailable);

  if json {
    let rendered = serde_json::to_string_pretty(&reports).context("Failed to serialize reports")?;
    println!("{}", rendered);
  } else {
    print_reports(&reports);

    // Truncated to milliseconds before formatting
    let elapsed = Duration::from_millis(started.elapsed().as_millis() as u64);
    println!();
    println!(
      "Checked {} validation(s) in {}",
      reports.len(),
      humantime::format_duration(elapsed)
    );
    println!("  Passed: {}", passed);
    println!("  Failed: {}", failed);
    println!("  Unavailable: {}", unavailable);
  }

  if failed > 0 {
    std::process::exit(1);
  }
  if unavailable > 0 {
    std::process::exit(2);
  }

  Ok(())
}

fn count(reports: &[ValidationReport], outcome: Outcome) -> usize {
  reports.iter().filter(|r| r.outcome == outcome).count()
}

fn print_reports(reports: &[ValidationReport]) {
  for report in reports {
    let symbol = match report.outcome {
      Outcome::Success => "✓".green().to_string(),
      Outcome::Fail => "✗".red().to_string(),
      Outcome::Unavailable => "?".yellow().to_string(),
    };

    match &report.message {
      Some(message) => println!("  {} {} ({})", symbol, report.name, message),
      None => println!("  {} {}", symbol, report.name),
    }
  }
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
