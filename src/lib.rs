//! Multigraph: a minimal in-memory multigraph, directed or undirected.
//!
//! Parallel edges are tracked as a per-pair multiplicity. The graph answers
//! node/edge membership and degree queries and supports insertion and removal.
//! Traversal and other algorithms are left to callers built on top of it.

pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{GraphBuilder, Multigraph};
pub use types::{Direction, GraphError, GraphResult, NodeId};
