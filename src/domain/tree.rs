//! The reporting-structure tree and its operations.

use tracing::debug;

use crate::domain::entities::{EmployeeNode, Side};
use crate::domain::error::{TreeError, TreeResult};

/// Indent unit used by [`TeamTree::render`]: spaces per depth level.
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Rendered instead of an empty string when no root has been set.
pub const NO_STRUCTURE_MSG: &str = "There is no team structure yet.";

/// Outcome of one attach attempt during the pre-order search.
///
/// A boolean cannot distinguish "manager not in this subtree" from
/// "manager found but the slot is occupied"; the two must propagate
/// differently (keep searching vs. stop immediately).
enum Attach {
    Attached,
    SlotTaken(Side),
    NotFound,
}

/// Owns the whole reporting hierarchy of one session.
///
/// The root is set exactly once; every other node is created at the moment
/// it is attached as a leaf. No node is ever removed, renamed or moved.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TeamTree {
    root: Option<Box<EmployeeNode>>,
}

impl TeamTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The current root node, if any.
    pub fn root(&self) -> Option<&EmployeeNode> {
        self.root.as_deref()
    }

    /// Create the root node. Allowed exactly once.
    pub fn set_root(&mut self, name: &str) -> TreeResult<()> {
        if self.root.is_some() {
            return Err(TreeError::RootAlreadyExists);
        }
        debug!(name, "setting team lead");
        self.root = Some(Box::new(EmployeeNode::new(name)));
        Ok(())
    }

    /// Attach `employee` under the first node named `manager` in pre-order,
    /// on the given side.
    ///
    /// The search compares names with exact equality and stops at the first
    /// match: the matched node's own subtree is never searched, and on
    /// [`TreeError::SlotTaken`] no sibling subtree is tried for a same-named
    /// duplicate. On failure the tree is left unchanged.
    pub fn insert(&mut self, manager: &str, employee: &str, side: Side) -> TreeResult<()> {
        let root = self.root.as_deref_mut().ok_or(TreeError::NoRoot)?;
        debug!(manager, employee, %side, "inserting employee");
        match Self::try_attach(root, manager, employee, side) {
            Attach::Attached => Ok(()),
            Attach::SlotTaken(side) => Err(TreeError::SlotTaken {
                manager: manager.to_string(),
                side,
            }),
            Attach::NotFound => Err(TreeError::ManagerNotFound(manager.to_string())),
        }
    }

    fn try_attach(node: &mut EmployeeNode, manager: &str, employee: &str, side: Side) -> Attach {
        if node.name == manager {
            let slot = node.slot_mut(side);
            return match slot {
                None => {
                    *slot = Some(Box::new(EmployeeNode::new(employee)));
                    Attach::Attached
                }
                Some(_) => Attach::SlotTaken(side),
            };
        }
        if let Some(left) = node.left.as_deref_mut() {
            match Self::try_attach(left, manager, employee, side) {
                Attach::NotFound => {}
                outcome => return outcome,
            }
        }
        if let Some(right) = node.right.as_deref_mut() {
            match Self::try_attach(right, manager, employee, side) {
                Attach::NotFound => {}
                outcome => return outcome,
            }
        }
        Attach::NotFound
    }

    /// Pre-order textual rendering, one line per node, indented by depth.
    ///
    /// Equivalent to [`Self::render_with_indent`] with the default width.
    pub fn render(&self) -> String {
        self.render_with_indent(DEFAULT_INDENT_WIDTH)
    }

    /// Like [`Self::render`] but with an explicit indent unit width.
    pub fn render_with_indent(&self, indent_width: usize) -> String {
        match self.root.as_deref() {
            None => NO_STRUCTURE_MSG.to_string(),
            Some(root) => {
                let mut out = String::new();
                Self::render_node(root, 0, indent_width, &mut out);
                out
            }
        }
    }

    fn render_node(node: &EmployeeNode, level: usize, indent_width: usize, out: &mut String) {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&" ".repeat(level * indent_width));
        out.push_str("- ");
        out.push_str(&node.name);
        if let Some(left) = node.left.as_deref() {
            Self::render_node(left, level + 1, indent_width, out);
        }
        if let Some(right) = node.right.as_deref() {
            Self::render_node(right, level + 1, indent_width, out);
        }
    }

    /// Number of nodes currently in the tree.
    pub fn node_count(&self) -> usize {
        fn count(node: &EmployeeNode) -> usize {
            1 + node.left.as_deref().map_or(0, count) + node.right.as_deref().map_or(0, count)
        }
        self.root.as_deref().map_or(0, count)
    }

    /// Depth of the tree: 0 when empty, 1 for a lone root.
    pub fn depth(&self) -> usize {
        fn depth(node: &EmployeeNode) -> usize {
            1 + node
                .left
                .as_deref()
                .map_or(0, depth)
                .max(node.right.as_deref().map_or(0, depth))
        }
        self.root.as_deref().map_or(0, depth)
    }
}
