//! Induced subgraph views.
//!
//! An `InducedSubgraph` restricts a [`Graph`] to a selection of nodes and
//! the edges with both ends in that selection. Nothing is copied: the view
//! borrows the graph, and when it borrows mutably, attribute writes land
//! directly in the graph.

use crate::edge::Edge;
use crate::graph::Graph;
use crate::traversal::Traversal;
use protnet_core::{Node, NodeId};
use std::collections::HashSet;
use std::ops::{Deref, DerefMut};

/// A view of a graph limited to a node selection.
///
/// `G` is `&Graph` for a read-only view or `&mut Graph` for a view that
/// can update attributes of the selected entities. No nodes or edges can
/// be added through a view.
#[derive(Debug)]
pub struct InducedSubgraph<G> {
    graph: G,
    selection: HashSet<NodeId>,
}

impl<G: Deref<Target = Graph>> InducedSubgraph<G> {
    /// Builds a view over `graph` keeping only `ids`.
    ///
    /// Duplicate ids collapse, and ids not in the graph are dropped.
    pub fn new(graph: G, ids: impl IntoIterator<Item = NodeId>) -> Self {
        let selection = ids
            .into_iter()
            .filter(|id| graph.contains_node(*id))
            .collect();
        Self { graph, selection }
    }

    /// Returns true if `id` is part of the view.
    pub fn is_selected(&self, id: NodeId) -> bool {
        self.selection.contains(&id)
    }

    /// The selected ids, in no particular order.
    pub fn selection(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.selection.iter().copied()
    }

    /// The underlying graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Gets a node by id, if selected.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        if !self.is_selected(id) {
            return None;
        }
        self.graph.node(id)
    }

    /// Iterates over the selected nodes.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.graph
            .nodes()
            .filter(move |node| self.selection.contains(&node.id()))
    }

    /// Iterates over the edges with both endpoints selected.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.graph.edges().filter(move |edge| self.keeps_edge(edge))
    }

    /// Iterates over the selected neighbors of a selected node.
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.is_selected(id)
            .then(|| self.graph.neighbors(id))
            .into_iter()
            .flatten()
            .filter(move |neighbor| self.selection.contains(neighbor))
    }

    /// Gets the edge joining `a` and `b` if both are selected.
    pub fn edge_between(&self, a: NodeId, b: NodeId) -> Option<&Edge> {
        if !self.is_selected(a) || !self.is_selected(b) {
            return None;
        }
        self.graph.edge_between(a, b)
    }

    pub fn node_count(&self) -> usize {
        self.selection.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    fn keeps_edge(&self, edge: &Edge) -> bool {
        self.selection.contains(&edge.from()) && self.selection.contains(&edge.to())
    }
}

impl<G: DerefMut<Target = Graph>> InducedSubgraph<G> {
    /// Gets a selected node for attribute updates.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        if !self.selection.contains(&id) {
            return None;
        }
        self.graph.node_mut(id)
    }

    /// Gets the edge between two selected nodes for attribute updates.
    pub fn edge_between_mut(&mut self, a: NodeId, b: NodeId) -> Option<&mut Edge> {
        if !self.selection.contains(&a) || !self.selection.contains(&b) {
            return None;
        }
        self.graph.edge_between_mut(a, b)
    }

    /// Iterates over the selected nodes for attribute updates.
    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut Node> + '_ {
        let selection = &self.selection;
        self.graph
            .nodes_mut()
            .filter(move |node| selection.contains(&node.id()))
    }
}

impl<G: Deref<Target = Graph>> Traversal for InducedSubgraph<G> {
    fn node(&self, id: NodeId) -> Option<&Node> {
        InducedSubgraph::node(self, id)
    }

    fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        InducedSubgraph::nodes(self)
    }

    fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        InducedSubgraph::edges(self)
    }

    fn neighbors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        InducedSubgraph::neighbors(self, id)
    }

    fn edge_between(&self, a: NodeId, b: NodeId) -> Option<&Edge> {
        InducedSubgraph::edge_between(self, a, b)
    }

    fn node_count(&self) -> usize {
        InducedSubgraph::node_count(self)
    }
}

impl Graph {
    /// Read-only view of the subgraph induced by `ids`.
    pub fn induce(&self, ids: impl IntoIterator<Item = NodeId>) -> InducedSubgraph<&Graph> {
        InducedSubgraph::new(self, ids)
    }

    /// Writable view of the subgraph induced by `ids`.
    pub fn induce_mut(
        &mut self,
        ids: impl IntoIterator<Item = NodeId>,
    ) -> InducedSubgraph<&mut Graph> {
        InducedSubgraph::new(self, ids)
    }
}
