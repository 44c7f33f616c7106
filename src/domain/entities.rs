//! Domain entities: core data structures

use std::fmt;

/// One employee in the reporting structure.
///
/// Children are exclusively owned, so the structure is acyclic by
/// construction: a node is only ever referenced from one parent slot
/// (or the tree root).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeNode {
    /// Display name; not required to be unique across the tree
    pub name: String,
    /// Left report, if any
    pub left: Option<Box<EmployeeNode>>,
    /// Right report, if any
    pub right: Option<Box<EmployeeNode>>,
}

impl EmployeeNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            left: None,
            right: None,
        }
    }

    /// Get the child slot for a side.
    pub fn slot(&self, side: Side) -> &Option<Box<EmployeeNode>> {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Get the child slot for a side, mutably.
    pub fn slot_mut(&mut self, side: Side) -> &mut Option<Box<EmployeeNode>> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// One of the two attachment slots on an [`EmployeeNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}
