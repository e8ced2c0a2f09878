//! Clique membership aggregation.
//!
//! A maximal-clique enumerator hands back raw node sets. The aggregator
//! keeps the ones of at least `k` nodes, numbers them in the order they
//! arrived, and records on every member node which cliques it belongs to
//! (`"clique"`, comma-joined labels) and how many (`"clique_count"`).

use crate::graph::Graph;
use crate::traversal::Traversal;
use protnet_core::{NodeId, StructuralError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::info;

/// Attribute holding the comma-joined clique labels of a node.
pub const CLIQUE_ATTR: &str = "clique";

/// Attribute holding the number of clique labels of a node.
pub const CLIQUE_COUNT_ATTR: &str = "clique_count";

/// Writes clique membership attributes from a raw clique enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliqueAggregator {
    min_size: usize,
    reset_first: bool,
}

/// Outcome of one aggregation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliqueSummary {
    /// Cliques of at least the minimum size; labels run `0..kept`.
    pub kept: usize,
    /// Cliques dropped for being too small.
    pub discarded: usize,
    /// Distinct nodes that received a label in this run.
    pub labelled_nodes: usize,
}

impl CliqueAggregator {
    /// Keeps cliques with at least `min_size` members.
    pub fn new(min_size: usize) -> Self {
        Self {
            min_size,
            reset_first: false,
        }
    }

    /// Clears earlier clique attributes before labelling.
    ///
    /// Without this, labels from a previous run stay on the nodes and new
    /// labels are appended after them.
    pub fn reset_first(mut self) -> Self {
        self.reset_first = true;
        self
    }

    pub fn min_size(&self) -> usize {
        self.min_size
    }

    /// Labels the cliques of at least `min_size` nodes onto `graph`.
    ///
    /// Every member id is checked before anything is written, so an
    /// unknown node leaves the graph untouched.
    pub fn aggregate<I, C>(
        &self,
        graph: &mut Graph,
        cliques: I,
    ) -> Result<CliqueSummary, StructuralError>
    where
        I: IntoIterator<Item = C>,
        C: IntoIterator<Item = NodeId>,
    {
        // Members are sets; ordering inside a clique carries no meaning.
        let cliques: Vec<Vec<NodeId>> = cliques
            .into_iter()
            .map(|clique| {
                clique
                    .into_iter()
                    .collect::<BTreeSet<_>>()
                    .into_iter()
                    .collect()
            })
            .collect();

        if let Some(&unknown) = cliques
            .iter()
            .flatten()
            .find(|id| !graph.contains_node(**id))
        {
            return Err(StructuralError::InvalidEndpoint(unknown));
        }

        if self.reset_first {
            clear_cliques(graph);
        }

        let mut labelled = BTreeSet::new();
        let mut kept = 0usize;
        for clique in cliques.iter().filter(|c| c.len() >= self.min_size) {
            for &id in clique {
                if let Some(node) = graph.node_mut(id) {
                    let labels = match node.attr(CLIQUE_ATTR) {
                        "" => kept.to_string(),
                        existing => format!("{existing},{kept}"),
                    };
                    node.set_attr(CLIQUE_ATTR, labels);
                    labelled.insert(id);
                }
            }
            kept += 1;
        }

        for &id in &labelled {
            if let Some(node) = graph.node_mut(id) {
                let count = node.attr(CLIQUE_ATTR).split(',').count();
                node.set_attr(CLIQUE_COUNT_ATTR, count.to_string());
            }
        }

        let summary = CliqueSummary {
            kept,
            discarded: cliques.len() - kept,
            labelled_nodes: labelled.len(),
        };
        info!(
            "Aggregated {} cliques of size >= {} ({} discarded, {} nodes labelled)",
            summary.kept, self.min_size, summary.discarded, summary.labelled_nodes
        );
        Ok(summary)
    }
}

/// Removes clique attributes from every node.
pub fn clear_cliques(graph: &mut Graph) {
    for node in graph.nodes_mut() {
        node.attributes.remove(CLIQUE_ATTR);
        node.attributes.remove(CLIQUE_COUNT_ATTR);
    }
}

/// Ids of the nodes carrying clique label `label`.
pub fn clique_members<T: Traversal>(graph: &T, label: usize) -> Vec<NodeId> {
    let label = label.to_string();
    let mut members: Vec<NodeId> = graph
        .nodes()
        .filter(|node| node.attr(CLIQUE_ATTR).split(',').any(|l| l == label))
        .map(|node| node.id())
        .collect();
    members.sort();
    members
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(graph: &mut Graph, names: &[&str]) -> Vec<NodeId> {
        names.iter().map(|name| graph.add_named_node(*name)).collect()
    }

    #[test]
    fn test_overlapping_cliques() {
        let mut graph = Graph::new();
        let ids = named(&mut graph, &["A", "B", "C", "D"]);
        let (a, b, c, d) = (ids[0], ids[1], ids[2], ids[3]);

        let summary = CliqueAggregator::new(3)
            .aggregate(&mut graph, vec![vec![a, b, c], vec![b, c, d]])
            .unwrap();

        assert_eq!(summary.kept, 2);
        assert_eq!(summary.labelled_nodes, 4);

        let node = |id| graph.node(id).unwrap();
        assert_eq!(node(b).attr(CLIQUE_ATTR), "0,1");
        assert_eq!(node(b).attr(CLIQUE_COUNT_ATTR), "2");
        assert_eq!(node(a).attr(CLIQUE_ATTR), "0");
        assert_eq!(node(a).attr(CLIQUE_COUNT_ATTR), "1");
        assert_eq!(node(d).attr(CLIQUE_ATTR), "1");
    }

    #[test]
    fn test_small_cliques_discarded_without_label() {
        let mut graph = Graph::new();
        let ids = named(&mut graph, &["A", "B", "C", "D", "E"]);

        let summary = CliqueAggregator::new(3)
            .aggregate(
                &mut graph,
                vec![
                    vec![ids[3], ids[4]],
                    vec![ids[0], ids[1], ids[2]],
                ],
            )
            .unwrap();

        assert_eq!(summary.kept, 1);
        assert_eq!(summary.discarded, 1);
        // The surviving clique is labelled 0 even though it came second.
        assert_eq!(graph.node(ids[0]).unwrap().attr(CLIQUE_ATTR), "0");
        assert_eq!(graph.node(ids[3]).unwrap().attr(CLIQUE_ATTR), "");
        assert_eq!(graph.node(ids[3]).unwrap().attr(CLIQUE_COUNT_ATTR), "");
    }

    #[test]
    fn test_rerun_accumulates() {
        let mut graph = Graph::new();
        let ids = named(&mut graph, &["A", "B", "C"]);
        let aggregator = CliqueAggregator::new(3);

        aggregator.aggregate(&mut graph, vec![ids.clone()]).unwrap();
        aggregator.aggregate(&mut graph, vec![ids.clone()]).unwrap();

        let a = graph.node(ids[0]).unwrap();
        assert_eq!(a.attr(CLIQUE_ATTR), "0,0");
        assert_eq!(a.attr(CLIQUE_COUNT_ATTR), "2");
    }

    #[test]
    fn test_reset_first_replaces() {
        let mut graph = Graph::new();
        let ids = named(&mut graph, &["A", "B", "C", "D"]);

        CliqueAggregator::new(3)
            .aggregate(&mut graph, vec![vec![ids[0], ids[1], ids[2]]])
            .unwrap();
        CliqueAggregator::new(3)
            .reset_first()
            .aggregate(&mut graph, vec![vec![ids[1], ids[2], ids[3]]])
            .unwrap();

        assert_eq!(graph.node(ids[0]).unwrap().attr(CLIQUE_ATTR), "");
        assert_eq!(graph.node(ids[0]).unwrap().attr(CLIQUE_COUNT_ATTR), "");
        assert_eq!(graph.node(ids[1]).unwrap().attr(CLIQUE_ATTR), "0");
        assert_eq!(graph.node(ids[1]).unwrap().attr(CLIQUE_COUNT_ATTR), "1");
    }

    #[test]
    fn test_unknown_member_writes_nothing() {
        let mut graph = Graph::new();
        let ids = named(&mut graph, &["A", "B", "C"]);
        let ghost = NodeId(77);

        let err = CliqueAggregator::new(3)
            .aggregate(&mut graph, vec![ids.clone(), vec![ids[0], ids[1], ghost]])
            .unwrap_err();

        assert_eq!(err, StructuralError::InvalidEndpoint(ghost));
        assert!(graph.nodes().all(|n| n.attr(CLIQUE_ATTR).is_empty()));
    }

    #[test]
    fn test_duplicate_members_counted_once() {
        let mut graph = Graph::new();
        let ids = named(&mut graph, &["A", "B"]);

        let summary = CliqueAggregator::new(3)
            .aggregate(&mut graph, vec![vec![ids[0], ids[1], ids[1]]])
            .unwrap();

        assert_eq!(summary.kept, 0);
        assert_eq!(summary.discarded, 1);
    }

    #[test]
    fn test_clique_members() {
        let mut graph = Graph::new();
        let ids = named(&mut graph, &["A", "B", "C", "D"]);
        CliqueAggregator::new(3)
            .aggregate(
                &mut graph,
                vec![vec![ids[0], ids[1], ids[2]], vec![ids[1], ids[2], ids[3]]],
            )
            .unwrap();

        assert_eq!(clique_members(&graph, 1), vec![ids[1], ids[2], ids[3]]);
        assert!(clique_members(&graph, 2).is_empty());

        let members = clique_members(&graph, 0);
        let view = graph.induce(members);
        assert_eq!(view.node_count(), 3);
    }
}
