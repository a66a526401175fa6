use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

/// synceval - pre-flight compatibility evaluation for a file-sync agent host
#[derive(Parser)]
#[command(name = "synceval")]
#[command(author, version, about, long_about = None)]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Run the system validations and print a report
  Check {
    /// Path to a JSON configuration file (built-in defaults if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Evaluate a captured JSON report instead of querying the live system
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Print the reports as JSON instead of text
    #[arg(long)]
    json: bool,
  },

  /// Print the effective configuration as JSON
  Config {
    /// Path to a JSON configuration file (built-in defaults if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
  },

  /// Print version and host platform details
  Info,
}

fn main() -> Result<()> {
  // Initialize logging
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .without_time()
    .init();

  let cli = Cli::parse();

  match cli.command {
    Commands::Check { config, input, json } => cmd::cmd_check(config.as_deref(), input.as_deref(), json),
    Commands::Config { config } => cmd::cmd_config(config.as_deref()),
    Commands::Info => cmd::cmd_info(),
  }
}
