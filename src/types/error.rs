//! Error types for the multigraph library.

use std::fmt::Debug;

use thiserror::Error;

/// All errors that can occur when querying or mutating a multigraph.
///
/// Both variants are "not found" failures. Insertions and membership queries
/// never fail, so nothing else is needed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError<N: Debug> {
    /// Node is not in the graph.
    #[error("Node {0:?} not in graph")]
    NodeNotFound(N),

    /// No edge between the two nodes (or one of them is missing).
    #[error("Edge ({from:?}, {to:?}) not in graph")]
    EdgeNotFound { from: N, to: N },
}

impl<N: Debug> GraphError<N> {
    /// True for every variant; lets callers treat a miss as a recoverable no-op.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NodeNotFound(_) | Self::EdgeNotFound { .. })
    }

    /// The node the error refers to (the tail node for a missing edge).
    pub fn node(&self) -> &N {
        match self {
            Self::NodeNotFound(node) => node,
            Self::EdgeNotFound { from, .. } => from,
        }
    }
}

/// Convenience result type for multigraph operations.
pub type GraphResult<T, N> = Result<T, GraphError<N>>;
