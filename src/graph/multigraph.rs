//! Core graph structure: a node set plus per-pair edge multiplicities.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::types::{Direction, GraphError, GraphResult, NodeId};

/// An in-memory multigraph, directed or undirected.
///
/// Parallel edges are not stored individually: each ordered pair `(u, v)`
/// carries a count of how many `u -> v` edges exist. Undirected graphs keep
/// that count in both `adjacency[u][v]` and `adjacency[v][u]`.
///
/// The graph is not synchronized. Wrap it in a lock to share it across
/// threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Multigraph<N: NodeId> {
    /// Fixed at construction.
    direction: Direction,
    /// All nodes currently present.
    nodes: HashSet<N>,
    /// Adjacency index: node -> (neighbor -> parallel edge count).
    /// Has one entry per node; counts are never zero.
    adjacency: HashMap<N, HashMap<N, usize>>,
}

impl<N: NodeId> Multigraph<N> {
    /// Create a new empty graph. `true` (or [`Direction::Directed`]) makes it directed.
    pub fn new(direction: impl Into<Direction>) -> Self {
        Self {
            direction: direction.into(),
            nodes: HashSet::new(),
            adjacency: HashMap::new(),
        }
    }

    /// Create a new empty directed graph.
    pub fn directed() -> Self {
        Self::new(Direction::Directed)
    }

    /// Create a new empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(Direction::Undirected)
    }

    /// Create a graph from an edge sequence, inserted in order with [`add_edge`].
    ///
    /// Repeated edges raise the multiplicity instead of being rejected.
    ///
    /// [`add_edge`]: Multigraph::add_edge
    pub fn from_edges<I>(edges: I, direction: impl Into<Direction>) -> Self
    where
        I: IntoIterator<Item = (N, N)>,
    {
        let mut graph = Self::new(direction);
        graph.extend(edges);
        graph
    }

    /// The direction this graph was created with.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_directed(&self) -> bool {
        self.direction.is_directed()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges, counting every parallel edge.
    ///
    /// This sums every stored multiplicity, so an undirected edge counts once
    /// per direction it is recorded in.
    pub fn edge_count(&self) -> usize {
        self.adjacency
            .values()
            .flat_map(|neighbors| neighbors.values())
            .sum()
    }

    /// Number of distinct pairs reported by [`edges`](Multigraph::edges).
    pub fn distinct_edge_count(&self) -> usize {
        self.edges().len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether a node is in the graph.
    pub fn has_node(&self, node: &N) -> bool {
        self.nodes.contains(node)
    }

    /// Whether at least one `u -> v` edge exists.
    ///
    /// Undirected graphs store both directions, so either argument order works.
    pub fn has_edge(&self, u: &N, v: &N) -> bool {
        if !(self.has_node(u) && self.has_node(v)) {
            return false;
        }
        self.adjacency
            .get(u)
            .is_some_and(|neighbors| neighbors.contains_key(v))
    }

    /// Number of parallel `u -> v` edges, 0 if there are none.
    pub fn multiplicity(&self, u: &N, v: &N) -> usize {
        self.adjacency
            .get(u)
            .and_then(|neighbors| neighbors.get(v))
            .copied()
            .unwrap_or(0)
    }

    /// Iterate over all nodes, in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.nodes.iter()
    }

    /// Iterate over `(neighbor, multiplicity)` pairs of a node's outgoing edges.
    pub fn neighbors<'a>(
        &'a self,
        node: &N,
    ) -> GraphResult<impl Iterator<Item = (&'a N, usize)> + 'a, N> {
        self.adjacency
            .get(node)
            .map(|neighbors| neighbors.iter().map(|(v, &count)| (v, count)))
            .ok_or_else(|| GraphError::NodeNotFound(node.clone()))
    }

    /// Add a node. Adding a node that is already present does nothing.
    pub fn add_node(&mut self, node: N) {
        if self.nodes.contains(&node) {
            return;
        }
        log::trace!("Adding node {:?}", node);
        self.adjacency.insert(node.clone(), HashMap::new());
        self.nodes.insert(node);
    }

    /// Add one `u -> v` edge (`u -- v` when undirected).
    ///
    /// Missing endpoints are created first, so an edge can introduce new
    /// nodes. In an undirected graph both `u -> v` and `v -> u` are
    /// incremented independently; for a self-loop that means the single
    /// `u -> u` count goes up by two.
    pub fn add_edge(&mut self, u: N, v: N) {
        self.add_node(u.clone());
        self.add_node(v.clone());
        log::trace!("Adding edge {:?} -> {:?}", u, v);

        if !self.is_directed() {
            self.increment(v.clone(), u.clone());
        }
        self.increment(u, v);
    }

    /// Remove a node and every edge into or out of it.
    pub fn remove_node(&mut self, node: &N) -> GraphResult<(), N> {
        if !self.has_node(node) {
            return Err(GraphError::NodeNotFound(node.clone()));
        }

        let mut purged = 0usize;
        for neighbors in self.adjacency.values_mut() {
            if neighbors.remove(node).is_some() {
                purged += 1;
            }
        }
        self.adjacency.remove(node);
        self.nodes.remove(node);

        log::debug!(
            "Removed node {:?} ({} adjacency entries referenced it)",
            node,
            purged
        );
        Ok(())
    }

    /// Remove one parallel `u -> v` edge (both directions when undirected).
    ///
    /// Call repeatedly until [`has_edge`](Multigraph::has_edge) is false to
    /// drop every parallel edge between the pair.
    pub fn remove_edge(&mut self, u: &N, v: &N) -> GraphResult<(), N> {
        if !self.has_edge(u, v) {
            return Err(GraphError::EdgeNotFound {
                from: u.clone(),
                to: v.clone(),
            });
        }

        self.decrement(u, v);
        if !self.is_directed() {
            self.decrement(v, u);
        }

        log::debug!("Removed edge {:?} -> {:?}", u, v);
        Ok(())
    }

    /// Sum of multiplicities of edges pointing into a node.
    pub fn indegree(&self, node: &N) -> GraphResult<usize, N> {
        if !self.has_node(node) {
            return Err(GraphError::NodeNotFound(node.clone()));
        }
        Ok(self
            .adjacency
            .values()
            .filter_map(|neighbors| neighbors.get(node))
            .sum())
    }

    /// Sum of multiplicities of edges leaving a node.
    pub fn outdegree(&self, node: &N) -> GraphResult<usize, N> {
        if !self.has_node(node) {
            return Err(GraphError::NodeNotFound(node.clone()));
        }
        Ok(self
            .adjacency
            .get(node)
            .map(|neighbors| neighbors.values().sum())
            .unwrap_or(0))
    }

    /// Snapshot of the distinct edges, ignoring multiplicity.
    ///
    /// Directed graphs report every `(u, v)` pair present. Undirected graphs
    /// report each unordered pair once: `(v, u)` is skipped when `(u, v)` was
    /// already recorded. The set is rebuilt on every call.
    pub fn edges(&self) -> HashSet<(N, N)> {
        let mut seen: HashSet<(&N, &N)> = HashSet::new();
        for (u, neighbors) in &self.adjacency {
            for v in neighbors.keys() {
                if self.is_directed() || !seen.contains(&(v, u)) {
                    seen.insert((u, v));
                }
            }
        }
        seen.into_iter()
            .map(|(u, v)| (u.clone(), v.clone()))
            .collect()
    }

    /// Remove every node and edge. The direction is kept.
    pub fn clear(&mut self) {
        log::debug!("Clearing graph with {} nodes", self.nodes.len());
        self.nodes.clear();
        self.adjacency.clear();
    }

    fn increment(&mut self, from: N, to: N) {
        *self
            .adjacency
            .entry(from)
            .or_default()
            .entry(to)
            .or_insert(0) += 1;
    }

    fn decrement(&mut self, from: &N, to: &N) {
        let Some(neighbors) = self.adjacency.get_mut(from) else {
            return;
        };
        match neighbors.get_mut(to) {
            Some(count) if *count > 1 => *count -= 1,
            Some(_) => {
                neighbors.remove(to);
            }
            None => {}
        }
    }
}

impl<N: NodeId> Default for Multigraph<N> {
    fn default() -> Self {
        Self::new(Direction::default())
    }
}

impl<N: NodeId> Extend<(N, N)> for Multigraph<N> {
    fn extend<I: IntoIterator<Item = (N, N)>>(&mut self, edges: I) {
        for (u, v) in edges {
            self.add_edge(u, v);
        }
    }
}

/// Collects into an undirected graph; use [`Multigraph::from_edges`] for directed.
impl<N: NodeId> FromIterator<(N, N)> for Multigraph<N> {
    fn from_iter<I: IntoIterator<Item = (N, N)>>(edges: I) -> Self {
        Self::from_edges(edges, Direction::Undirected)
    }
}

impl<N: NodeId> fmt::Display for Multigraph<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{} Multigraph with {} nodes, {} edges>",
            self.direction,
            self.node_count(),
            self.edge_count()
        )
    }
}
