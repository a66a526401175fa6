mod check;
mod config;
mod info;

pub use check::cmd_check;
pub use config::cmd_config;
pub use info::cmd_info;
