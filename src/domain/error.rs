//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::entities::Side;

/// Tree errors represent business logic violations.
/// All of them are recoverable at the driver boundary; none end the session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("no team lead found, add a root employee first")]
    NoRoot,

    #[error("no manager named '{0}' exists in the team structure")]
    ManagerNotFound(String),

    #[error("the {side} side of '{manager}' is already taken")]
    SlotTaken { manager: String, side: Side },

    #[error("a team lead already exists")]
    RootAlreadyExists,
}

pub type TreeResult<T> = Result<T, TreeError>;
