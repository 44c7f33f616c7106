//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use clap_complete::Shell;

/// Interactive builder for binary-tree company reporting hierarchies
#[derive(Parser, Debug)]
#[command(name = "orgtree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging (-d, -dd, -ddd)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Session directory for config lookup (default: cwd)
    #[arg(short = 'C', long)]
    pub session_dir: Option<PathBuf>,

    /// Generate shell completions
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,

    /// Show author and version info
    #[arg(long)]
    pub info: bool,
}
