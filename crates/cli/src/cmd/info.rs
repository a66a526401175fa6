//! Implementation of the `synceval info` command.

use anyhow::Result;

use synceval_lib::consts::APP_NAME;

/// Print tool version and host platform details.
pub fn cmd_info() -> Result<()> {
  println!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));
  println!("  OS:   {}", std::env::consts::OS);
  println!("  Arch: {}", std::env::consts::ARCH);
  Ok(())
}
