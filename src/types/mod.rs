//! Shared data types for the multigraph library.

pub mod error;

use std::fmt::{self, Debug};
use std::hash::Hash;

pub use error::{GraphError, GraphResult};

/// Anything usable as a node identifier.
///
/// Strings, integers and any other hashable value all qualify through the
/// blanket impl; no identifier type is special-cased.
pub trait NodeId: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> NodeId for T {}

/// Edge direction of a graph, fixed when the graph is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// `u -> v` is distinct from `v -> u`.
    Directed,
    /// Every edge is recorded in both directions.
    #[default]
    Undirected,
}

impl Direction {
    /// Return a human-readable name for this direction.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Directed => "directed",
            Self::Undirected => "undirected",
        }
    }

    pub fn is_directed(&self) -> bool {
        matches!(self, Self::Directed)
    }
}

impl From<bool> for Direction {
    fn from(directed: bool) -> Self {
        if directed {
            Self::Directed
        } else {
            Self::Undirected
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
