//! Network nodes.
//!
//! A node is one protein (or any other interactor) in the network. It has
//! a graph-unique integer id, a display name used by codecs and renderers,
//! and its own attribute bag that analysis passes write into.

use crate::attributes::Attributes;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Graph-unique node identifier.
///
/// Ids are assigned by the graph and stay stable for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A node in the interaction network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    id: NodeId,

    /// Display name (the codec's node identifier, e.g. a gene symbol).
    pub name: String,

    /// Per-node metadata, including analysis results.
    pub attributes: Attributes,
}

impl Node {
    /// Creates a node with no name and no attributes.
    ///
    /// Only the graph hands out ids, so this is meant for graph internals
    /// and tests.
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            name: String::new(),
            attributes: Attributes::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the display name, falling back to the id when unnamed.
    pub fn display_name(&self) -> String {
        if self.name.is_empty() {
            self.id.to_string()
        } else {
            self.name.clone()
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
