//! In-memory graph operations: the core data structure.

pub mod builder;
pub mod multigraph;

pub use builder::GraphBuilder;
pub use multigraph::Multigraph;
