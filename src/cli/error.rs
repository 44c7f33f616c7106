//! CLI-level errors: caller-side input validation.
//!
//! These never reach the tree; the menu reports them and re-prompts.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    #[error("'{0}' is not a side, please enter either 'left' or 'right'")]
    InvalidSide(String),

    #[error("{0} must not be empty")]
    EmptyName(&'static str),
}

pub type CliResult<T> = Result<T, CliError>;
