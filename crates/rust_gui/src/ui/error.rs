//! GUI error types

use super::node::NodeId;
use thiserror::Error;

/// Errors returned by structural GUI operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuiError {
    /// The handle does not refer to a live node
    #[error("Unknown node: {0:?}")]
    UnknownNode(NodeId),

    /// The node cannot hold children
    #[error("Node {0:?} is not a container")]
    NotAContainer(NodeId),

    /// The node already has a parent
    #[error("Node {node:?} is already attached to {parent:?}")]
    AlreadyAttached {
        /// Node being attached
        node: NodeId,
        /// Its current parent
        parent: NodeId,
    },

    /// Attaching would make a node its own ancestor
    #[error("Attaching {node:?} to {parent:?} would create a cycle")]
    WouldCreateCycle {
        /// Node being attached
        node: NodeId,
        /// Requested parent
        parent: NodeId,
    },

    /// The node is not a child of the given container
    #[error("Node {node:?} is not a child of {parent:?}")]
    NotAChild {
        /// Node being removed
        node: NodeId,
        /// Container it was expected in
        parent: NodeId,
    },

    /// No page registered under the name
    #[error("Unknown page: {0}")]
    UnknownPage(String),

    /// The node holds a different widget type
    #[error("Node {0:?} is not a {1}")]
    WrongWidget(NodeId, &'static str),

    /// The node's widget is running a hook and cannot be borrowed
    #[error("Node {0:?} is busy")]
    Busy(NodeId),

    /// Interval events need a positive period
    #[error("Interval must be positive")]
    InvalidInterval,
}
