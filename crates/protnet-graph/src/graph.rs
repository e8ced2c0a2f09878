//! Core graph data structure.
//!
//! `Graph` wraps an undirected petgraph arena and adds an id index so
//! nodes can be addressed by their stable `NodeId`. Nodes and edges are
//! never removed, so arena slots never move and every handle stays valid
//! for the graph's lifetime.

use crate::edge::{Edge, EdgeId};
use petgraph::graph::{NodeIndex, UnGraph};
use protnet_core::{Attributes, Node, NodeId, StructuralError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// An undirected, attributed interaction network.
///
/// At most one edge joins any pair of nodes and self-loops are rejected.
/// Enumeration order of nodes and edges is unspecified; sort explicitly
/// when order matters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    /// The underlying petgraph arena. Also serves as the adjacency index.
    pub(crate) graph: UnGraph<Node, Edge>,

    /// Maps node ids to arena slots.
    id_index: HashMap<NodeId, NodeIndex>,

    /// Next id handed out by `add_node`.
    next_id: u64,

    /// Graph-level default attributes.
    pub graph_attrs: Attributes,

    /// Default attributes applied to every node by the codec.
    pub node_attrs: Attributes,

    /// Default attributes applied to every edge by the codec.
    pub edge_attrs: Attributes,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self {
            graph: UnGraph::default(),
            id_index: HashMap::new(),
            next_id: 0,
            graph_attrs: Attributes::new(),
            node_attrs: Attributes::new(),
            edge_attrs: Attributes::new(),
        }
    }

    /// Adds a node with a fresh id.
    pub fn add_node(&mut self) -> NodeId {
        let id = self.fresh_id();
        self.insert_node(Node::new(id));
        id
    }

    /// Adds a node with a fresh id and the given display name.
    pub fn add_named_node(&mut self, name: impl Into<String>) -> NodeId {
        let id = self.fresh_id();
        self.insert_node(Node::new(id).with_name(name));
        id
    }

    /// Adds a node under an id chosen by the caller.
    ///
    /// Used by codecs that carry their own numbering. Later calls to
    /// `add_node` continue past the largest id seen.
    pub fn add_node_with_id(&mut self, id: NodeId) -> Result<NodeId, StructuralError> {
        if self.id_index.contains_key(&id) {
            debug!("Rejected duplicate node id {}", id);
            return Err(StructuralError::DuplicateId(id));
        }
        self.insert_node(Node::new(id));
        Ok(id)
    }

    /// Next unused id. Past `u64::MAX` the search wraps to the lowest free id.
    fn fresh_id(&mut self) -> NodeId {
        let mut candidate = self.next_id;
        while self.id_index.contains_key(&NodeId(candidate)) {
            candidate = candidate.wrapping_add(1);
        }
        self.next_id = candidate.wrapping_add(1);
        NodeId(candidate)
    }

    fn insert_node(&mut self, node: Node) {
        let id = node.id();
        let index = self.graph.add_node(node);
        self.id_index.insert(id, index);
        self.next_id = self.next_id.max(id.0.saturating_add(1));
    }

    /// Adds an edge between two nodes, or returns the existing one.
    ///
    /// Fails if either endpoint is not in this graph or if `a == b`.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<EdgeId, StructuralError> {
        let ia = self.index_of(a).ok_or(StructuralError::InvalidEndpoint(a))?;
        let ib = self.index_of(b).ok_or(StructuralError::InvalidEndpoint(b))?;
        if a == b {
            debug!("Rejected self-loop on node {}", a);
            return Err(StructuralError::SelfLoop(a));
        }

        if let Some(existing) = self.graph.find_edge(ia, ib) {
            return Ok(EdgeId(existing));
        }
        Ok(EdgeId(self.graph.add_edge(ia, ib, Edge::new(a, b))))
    }

    pub(crate) fn index_of(&self, id: NodeId) -> Option<NodeIndex> {
        self.id_index.get(&id).copied()
    }

    /// Returns true if a node with this id is registered.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.id_index.contains_key(&id)
    }

    /// Gets a node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        let index = self.index_of(id)?;
        self.graph.node_weight(index)
    }

    /// Gets a node by id for attribute updates.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let index = self.index_of(id)?;
        self.graph.node_weight_mut(index)
    }

    /// Gets an edge by handle.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.graph.edge_weight(id.0)
    }

    /// Gets an edge by handle for attribute updates.
    pub fn edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge> {
        self.graph.edge_weight_mut(id.0)
    }

    /// Finds the handle of the edge joining `a` and `b`, in either order.
    pub fn edge_id_between(&self, a: NodeId, b: NodeId) -> Option<EdgeId> {
        let ia = self.index_of(a)?;
        let ib = self.index_of(b)?;
        self.graph.find_edge(ia, ib).map(EdgeId)
    }

    /// Gets the edge joining `a` and `b`, in either order.
    pub fn edge_between(&self, a: NodeId, b: NodeId) -> Option<&Edge> {
        let id = self.edge_id_between(a, b)?;
        self.edge(id)
    }

    /// Gets the edge joining `a` and `b` for attribute updates.
    pub fn edge_between_mut(&mut self, a: NodeId, b: NodeId) -> Option<&mut Edge> {
        let id = self.edge_id_between(a, b)?;
        self.edge_mut(id)
    }

    pub fn has_edge_between(&self, a: NodeId, b: NodeId) -> bool {
        self.edge_id_between(a, b).is_some()
    }

    /// Iterates over all nodes, in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.graph.node_weights()
    }

    /// Iterates over all nodes for attribute updates.
    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.graph.node_weights_mut()
    }

    /// Iterates over all node ids.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.graph.node_weights().map(Node::id)
    }

    /// Iterates over all edges, in no particular order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.graph.edge_weights()
    }

    /// Iterates over all edges for attribute updates.
    pub fn edges_mut(&mut self) -> impl Iterator<Item = &mut Edge> {
        self.graph.edge_weights_mut()
    }

    /// Iterates over all edge handles.
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.graph.edge_indices().map(EdgeId)
    }

    /// Iterates over the ids of the nodes adjacent to `id`.
    ///
    /// Empty when `id` is not in the graph.
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.index_of(id)
            .into_iter()
            .flat_map(move |index| self.graph.neighbors(index))
            .map(move |index| self.graph[index].id())
    }

    /// Iterates over the edges incident to `id`.
    pub fn incident_edges(&self, id: NodeId) -> impl Iterator<Item = &Edge> + '_ {
        self.index_of(id)
            .into_iter()
            .flat_map(move |index| self.graph.edges(index))
            .map(|edge_ref| edge_ref.weight())
    }

    /// Number of edges incident to `id`.
    pub fn degree(&self, id: NodeId) -> usize {
        self.incident_edges(id).count()
    }

    /// Ids of the nodes whose attribute `key` equals `value`.
    ///
    /// Typical use is picking one community before inducing a subgraph.
    pub fn select_by_attribute(&self, key: &str, value: &str) -> Vec<NodeId> {
        self.nodes()
            .filter(|node| node.attributes.get(key) == value)
            .map(Node::id)
            .collect()
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// The graph, node and edge default attribute bags, in that order.
    pub fn default_attributes(&self) -> (&Attributes, &Attributes, &Attributes) {
        (&self.graph_attrs, &self.node_attrs, &self.edge_attrs)
    }
}

/// Graph statistics for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    /// Nodes with no incident edges.
    pub isolated_nodes: usize,
}

impl Graph {
    /// Returns graph statistics.
    pub fn stats(&self) -> GraphStats {
        let isolated_nodes = self
            .graph
            .node_indices()
            .filter(|&index| self.graph.neighbors(index).next().is_none())
            .count();
        GraphStats {
            node_count: self.node_count(),
            edge_count: self.edge_count(),
            isolated_nodes,
        }
    }
}
