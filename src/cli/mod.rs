//! CLI layer: argument parsing, interactive menu, terminal output

pub mod args;
pub mod error;
pub mod menu;
pub mod output;

pub use args::Cli;
pub use error::{CliError, CliResult};
pub use menu::{parse_side, MenuSession};
