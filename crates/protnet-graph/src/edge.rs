//! Edge types for the interaction network.
//!
//! Edges are undirected interactions between two distinct nodes. They
//! refer to their endpoints by id only; the graph owns both the nodes and
//! the edges.

use petgraph::graph::EdgeIndex;
use protnet_core::{Attributes, NodeId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable handle to an edge in a [`Graph`](crate::Graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeId(pub(crate) EdgeIndex);

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0.index())
    }
}

/// An interaction between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    from: NodeId,
    to: NodeId,

    /// Per-edge metadata, including analysis results.
    pub attributes: Attributes,
}

impl Edge {
    pub(crate) fn new(from: NodeId, to: NodeId) -> Self {
        Self {
            from,
            to,
            attributes: Attributes::new(),
        }
    }

    /// The endpoint the edge was first added from.
    pub fn from(&self) -> NodeId {
        self.from
    }

    /// The endpoint the edge was first added to.
    pub fn to(&self) -> NodeId {
        self.to
    }

    /// Both endpoints, lowest id first.
    pub fn endpoints(&self) -> (NodeId, NodeId) {
        if self.from <= self.to {
            (self.from, self.to)
        } else {
            (self.to, self.from)
        }
    }

    /// Returns true if `id` is one of the endpoints.
    pub fn touches(&self, id: NodeId) -> bool {
        self.from == id || self.to == id
    }

    /// Given one endpoint, returns the other.
    pub fn opposite(&self, id: NodeId) -> Option<NodeId> {
        if id == self.from {
            Some(self.to)
        } else if id == self.to {
            Some(self.from)
        } else {
            None
        }
    }

    /// Shorthand for `self.attributes.get(key)`.
    pub fn attr(&self, key: &str) -> &str {
        self.attributes.get(key)
    }

    /// Shorthand for `self.attributes.set(key, value)`.
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.set(key, value);
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {}", self.from, self.to)
    }
}
