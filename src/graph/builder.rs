//! Fluent API for building Multigraph instances.

use crate::types::{Direction, NodeId};

use super::Multigraph;

/// Fluent builder for constructing a Multigraph.
pub struct GraphBuilder<N: NodeId> {
    direction: Direction,
    nodes: Vec<N>,
    edges: Vec<(N, N)>,
}

impl<N: NodeId> GraphBuilder<N> {
    /// Create a new builder for an undirected graph.
    pub fn new() -> Self {
        Self {
            direction: Direction::Undirected,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Create a new builder for a directed graph.
    pub fn directed() -> Self {
        Self::new().direction(Direction::Directed)
    }

    /// Set the direction of the graph being built.
    pub fn direction(mut self, direction: impl Into<Direction>) -> Self {
        self.direction = direction.into();
        self
    }

    /// Add a node, even if no edge touches it.
    pub fn node(&mut self, node: N) -> &mut Self {
        self.nodes.push(node);
        self
    }

    /// Add an edge between two nodes.
    pub fn edge(&mut self, u: N, v: N) -> &mut Self {
        self.edges.push((u, v));
        self
    }

    /// Add several edges, kept in order.
    pub fn edges<I>(&mut self, edges: I) -> &mut Self
    where
        I: IntoIterator<Item = (N, N)>,
    {
        self.edges.extend(edges);
        self
    }

    /// Build the final Multigraph. Nodes go in first, then edges in order.
    pub fn build(self) -> Multigraph<N> {
        let mut graph = Multigraph::new(self.direction);
        for node in self.nodes {
            graph.add_node(node);
        }
        graph.extend(self.edges);
        graph
    }
}

impl<N: NodeId> Default for GraphBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}
