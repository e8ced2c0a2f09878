//! Ranking nodes and edges by a numeric attribute.
//!
//! Analysis passes leave their results as string attributes. A
//! `RankedQuery` parses one of them back into numbers and orders the
//! entities of a graph (or view) from highest to lowest.

use crate::edge::Edge;
use crate::traversal::Traversal;
use protnet_core::{Attributes, Node, ParseError};
use tracing::debug;

/// Orders entities descending by a named numeric attribute.
///
/// By default a missing attribute counts as `0.0`, which cannot be told
/// apart from a computed zero. Call [`RankedQuery::require_present`] to
/// fail on missing values instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedQuery {
    key: String,
    require_present: bool,
}

impl RankedQuery {
    /// Creates a query over attribute `key`.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            require_present: false,
        }
    }

    /// Fails with [`ParseError::Missing`] when an entity lacks the key.
    pub fn require_present(mut self) -> Self {
        self.require_present = true;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads the ranked attribute from one bag.
    pub fn value_of(&self, attrs: &Attributes) -> Result<f64, ParseError> {
        let raw = attrs.get(&self.key);
        if raw.is_empty() {
            if self.require_present {
                return Err(ParseError::Missing {
                    key: self.key.clone(),
                });
            }
            return Ok(0.0);
        }
        let value = raw
            .parse::<f64>()
            .map_err(|e| ParseError::not_numeric(&self.key, raw, e))?;
        if value.is_nan() {
            return Err(ParseError::NotANumber {
                key: self.key.clone(),
            });
        }
        Ok(value)
    }

    /// Nodes paired with their parsed value, highest first.
    pub fn scored_nodes<'g, T: Traversal>(
        &self,
        graph: &'g T,
    ) -> Result<Vec<(&'g Node, f64)>, ParseError> {
        let mut scored = graph
            .nodes()
            .map(|node| Ok((node, self.value_of(&node.attributes)?)))
            .collect::<Result<Vec<_>, ParseError>>()?;
        sort_descending(&mut scored);
        debug!("Ranked {} nodes by {:?}", scored.len(), self.key);
        Ok(scored)
    }

    /// Edges paired with their parsed value, highest first.
    pub fn scored_edges<'g, T: Traversal>(
        &self,
        graph: &'g T,
    ) -> Result<Vec<(&'g Edge, f64)>, ParseError> {
        let mut scored = graph
            .edges()
            .map(|edge| Ok((edge, self.value_of(&edge.attributes)?)))
            .collect::<Result<Vec<_>, ParseError>>()?;
        sort_descending(&mut scored);
        debug!("Ranked {} edges by {:?}", scored.len(), self.key);
        Ok(scored)
    }

    /// All nodes, highest value first.
    pub fn rank_nodes<'g, T: Traversal>(&self, graph: &'g T) -> Result<Vec<&'g Node>, ParseError> {
        Ok(self
            .scored_nodes(graph)?
            .into_iter()
            .map(|(node, _)| node)
            .collect())
    }

    /// All edges, highest value first.
    pub fn rank_edges<'g, T: Traversal>(&self, graph: &'g T) -> Result<Vec<&'g Edge>, ParseError> {
        Ok(self
            .scored_edges(graph)?
            .into_iter()
            .map(|(edge, _)| edge)
            .collect())
    }
}

/// Ties keep no particular order.
fn sort_descending<T>(scored: &mut [(T, f64)]) {
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
}

/// Nodes of `graph` sorted descending by attribute `key`.
pub fn nodes_by_attribute<'g, T: Traversal>(
    key: &str,
    graph: &'g T,
) -> Result<Vec<&'g Node>, ParseError> {
    RankedQuery::new(key).rank_nodes(graph)
}

/// Edges of `graph` sorted descending by attribute `key`.
pub fn edges_by_attribute<'g, T: Traversal>(
    key: &str,
    graph: &'g T,
) -> Result<Vec<&'g Edge>, ParseError> {
    RankedQuery::new(key).rank_edges(graph)
}
