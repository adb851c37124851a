pub mod cli;
pub mod config;
pub mod session;

pub use cli::{build_cli_command, Cli, Commands, OutputFormat};
pub use config::{load_config, DgnConfig};
pub use session::Session;
