//! Rejected operations.
//!
//! All failure modes of the engine are recoverable outcomes of user interaction
//! (e.g. clicking a vertex that is not yet available). They are returned as
//! [`GraphError`] and never abort the caller.

use crate::node::{Node, NumNodes};

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Reasons an operation was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A node id does not belong to the graph.
    #[error("Node {node} is out of range for a graph with {n} nodes")]
    NodeOutOfRange {
        /// The offending node
        node: Node,
        /// Number of nodes of the graph
        n: NumNodes,
    },

    /// The node was already processed by a topological sort.
    #[error("Node {0} was already processed")]
    AlreadyProcessed(Node),

    /// The node still has unprocessed predecessors.
    #[error("Node {node} is not available yet: {in_degree} predecessor(s) remaining")]
    NodeUnavailable {
        /// The offending node
        node: Node,
        /// Number of remaining unprocessed predecessors
        in_degree: NumNodes,
    },
}

/// Returns `Err(NodeOutOfRange)` unless `u < n`.
pub(crate) fn check_node(u: Node, n: NumNodes) -> Result<()> {
    if u < n {
        Ok(())
    } else {
        Err(GraphError::NodeOutOfRange { node: u, n })
    }
}
