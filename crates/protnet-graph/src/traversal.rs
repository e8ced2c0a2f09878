//! The read surface shared by graphs and views.
//!
//! Algorithm collaborators, ranking and serialization only need to walk
//! nodes, edges and adjacency. `Traversal` is that surface; both [`Graph`]
//! and [`InducedSubgraph`](crate::InducedSubgraph) implement it, so the
//! same query can run over a whole network or one region of it.

use crate::edge::Edge;
use crate::graph::Graph;
use protnet_core::{Node, NodeId};

/// Read-only traversal of an undirected attributed graph.
///
/// Enumeration order is unspecified for every implementation.
pub trait Traversal {
    /// Gets a node by id, if it is visible through this graph.
    fn node(&self, id: NodeId) -> Option<&Node>;

    /// Iterates over all visible nodes.
    fn nodes(&self) -> impl Iterator<Item = &Node> + '_;

    /// Iterates over all visible edges.
    fn edges(&self) -> impl Iterator<Item = &Edge> + '_;

    /// Iterates over the visible neighbors of `id`.
    fn neighbors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_;

    /// Gets the edge joining `a` and `b`, in either order.
    fn edge_between(&self, a: NodeId, b: NodeId) -> Option<&Edge>;

    fn has_edge_between(&self, a: NodeId, b: NodeId) -> bool {
        self.edge_between(a, b).is_some()
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes().map(Node::id)
    }

    fn node_count(&self) -> usize {
        self.nodes().count()
    }

    fn edge_count(&self) -> usize {
        self.edges().count()
    }
}

impl Traversal for Graph {
    fn node(&self, id: NodeId) -> Option<&Node> {
        Graph::node(self, id)
    }

    fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        Graph::nodes(self)
    }

    fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        Graph::edges(self)
    }

    fn neighbors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        Graph::neighbors(self, id)
    }

    fn edge_between(&self, a: NodeId, b: NodeId) -> Option<&Edge> {
        Graph::edge_between(self, a, b)
    }

    fn node_count(&self) -> usize {
        Graph::node_count(self)
    }

    fn edge_count(&self) -> usize {
        Graph::edge_count(self)
    }
}

/// Presents an undirected graph to code that expects directed adjacency.
///
/// Every interaction counts in both directions: the predecessors of a
/// node are exactly its successors. PageRank-style collaborators consume
/// the network through this adapter.
#[derive(Debug)]
pub struct Directed<'g, G> {
    inner: &'g G,
}

impl<G> Clone for Directed<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G> Copy for Directed<'_, G> {}

impl<'g, G: Traversal> Directed<'g, G> {
    pub fn new(inner: &'g G) -> Self {
        Self { inner }
    }

    /// The wrapped graph.
    pub fn inner(&self) -> &'g G {
        self.inner
    }

    pub fn nodes(&self) -> impl Iterator<Item = &'g Node> + 'g {
        self.inner.nodes()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + 'g {
        self.inner.node_ids()
    }

    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Nodes reachable over one outgoing edge.
    pub fn successors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + 'g {
        self.inner.neighbors(id)
    }

    /// Nodes with an edge into `id`. Identical to [`Self::successors`].
    pub fn predecessors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + 'g {
        self.inner.neighbors(id)
    }

    /// True if `from` and `to` are adjacent, in either order.
    pub fn has_edge_from_to(&self, from: NodeId, to: NodeId) -> bool {
        self.inner.has_edge_between(from, to)
    }

    pub fn out_degree(&self, id: NodeId) -> usize {
        self.successors(id).count()
    }

    pub fn in_degree(&self, id: NodeId) -> usize {
        self.predecessors(id).count()
    }
}
