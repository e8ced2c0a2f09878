//! Writing collaborator results back into the graph.
//!
//! The numerical algorithms (centralities, PageRank, modularization,
//! clique enumeration) live outside this crate. Each is reached through a
//! small trait that reads the graph and returns raw numbers or node sets.
//! The functions here run a collaborator and store what it returns as a
//! named attribute on every affected node or edge, where `RankedQuery`
//! and the codec pick it up.

use crate::clique::{CliqueAggregator, CliqueSummary};
use crate::graph::Graph;
use crate::traversal::Directed;
use protnet_core::{AnalysisConfig, NodeId, StructuralError};
use std::collections::HashMap;
use tracing::{debug, info};

pub const BETWEENNESS: &str = "betweenness";
pub const EDGE_BETWEENNESS: &str = "edge_betweenness";
pub const RANK: &str = "rank";
pub const CLOSENESS: &str = "closeness";
pub const FARNESS: &str = "farness";
pub const COMMUNITY: &str = "community";

/// Computes one number per node (betweenness, closeness, farness).
pub trait NodeScorer {
    fn score(&self, graph: &Graph) -> HashMap<NodeId, f64>;
}

/// Computes one number per edge, keyed by its endpoints in either order.
pub trait EdgeScorer {
    fn score(&self, graph: &Graph) -> HashMap<(NodeId, NodeId), f64>;
}

/// PageRank over the directed view of the network.
pub trait PageRanker {
    fn page_rank(
        &self,
        graph: &Directed<'_, Graph>,
        damping: f64,
        tolerance: f64,
    ) -> HashMap<NodeId, f64>;
}

/// Partitions the nodes into communities at a given resolution.
pub trait Modularizer {
    fn communities(&self, graph: &Graph, resolution: f64) -> Vec<Vec<NodeId>>;
}

/// Enumerates maximal cliques.
pub trait CliqueEnumerator {
    fn maximal_cliques(&self, graph: &Graph) -> Vec<Vec<NodeId>>;
}

/// Stores `scores` under `key` on each listed node.
///
/// Every id is checked first; an unknown id fails without writing.
/// Returns the number of nodes written.
pub fn write_node_scores<I>(
    graph: &mut Graph,
    key: &str,
    scores: I,
) -> Result<usize, StructuralError>
where
    I: IntoIterator<Item = (NodeId, f64)>,
{
    let scores: Vec<(NodeId, f64)> = scores.into_iter().collect();
    if let Some(&(unknown, _)) = scores.iter().find(|(id, _)| !graph.contains_node(*id)) {
        return Err(StructuralError::InvalidEndpoint(unknown));
    }

    for (id, value) in &scores {
        if let Some(node) = graph.node_mut(*id) {
            node.set_attr(key, value.to_string());
        }
    }
    debug!("Wrote {:?} on {} nodes", key, scores.len());
    Ok(scores.len())
}

/// Stores `scores` under `key` on each listed edge.
///
/// Every pair is checked first; a pair naming an unknown node or an absent
/// edge fails without writing. Returns the number of edges written.
pub fn write_edge_scores<I>(
    graph: &mut Graph,
    key: &str,
    scores: I,
) -> Result<usize, StructuralError>
where
    I: IntoIterator<Item = ((NodeId, NodeId), f64)>,
{
    let mut resolved = Vec::new();
    for ((a, b), value) in scores {
        for id in [a, b] {
            if !graph.contains_node(id) {
                return Err(StructuralError::InvalidEndpoint(id));
            }
        }
        let edge = graph
            .edge_id_between(a, b)
            .ok_or(StructuralError::MissingEdge(a, b))?;
        resolved.push((edge, value));
    }

    for (edge, value) in &resolved {
        if let Some(edge) = graph.edge_mut(*edge) {
            edge.set_attr(key, value.to_string());
        }
    }
    debug!("Wrote {:?} on {} edges", key, resolved.len());
    Ok(resolved.len())
}

/// Stores each node's community index under `"community"`.
///
/// The index is the community's position in `communities`.
pub fn write_communities<I, C>(graph: &mut Graph, communities: I) -> Result<usize, StructuralError>
where
    I: IntoIterator<Item = C>,
    C: IntoIterator<Item = NodeId>,
{
    let assignments: Vec<(NodeId, usize)> = communities
        .into_iter()
        .enumerate()
        .flat_map(|(index, members)| members.into_iter().map(move |id| (id, index)))
        .collect();
    if let Some(&(unknown, _)) = assignments
        .iter()
        .find(|(id, _)| !graph.contains_node(*id))
    {
        return Err(StructuralError::InvalidEndpoint(unknown));
    }

    for (id, index) in &assignments {
        if let Some(node) = graph.node_mut(*id) {
            node.set_attr(COMMUNITY, index.to_string());
        }
    }
    Ok(assignments.len())
}

/// Betweenness centrality into `"betweenness"`.
///
/// Scorers commonly omit nodes with zero betweenness; those are written
/// as `0` so every node carries the attribute.
pub fn betweenness(graph: &mut Graph, scorer: &impl NodeScorer) -> Result<usize, StructuralError> {
    let mut scores = scorer.score(graph);
    for id in graph.node_ids() {
        scores.entry(id).or_insert(0.0);
    }
    let written = write_node_scores(graph, BETWEENNESS, scores)?;
    info!("Betweenness written for {} nodes", written);
    Ok(written)
}

/// Edge betweenness centrality into `"edge_betweenness"`.
pub fn edge_betweenness(
    graph: &mut Graph,
    scorer: &impl EdgeScorer,
) -> Result<usize, StructuralError> {
    let scores = scorer.score(graph);
    let written = write_edge_scores(graph, EDGE_BETWEENNESS, scores)?;
    info!("Edge betweenness written for {} edges", written);
    Ok(written)
}

/// PageRank into `"rank"`.
pub fn page_rank(
    graph: &mut Graph,
    ranker: &impl PageRanker,
    damping: f64,
    tolerance: f64,
) -> Result<usize, StructuralError> {
    let scores = ranker.page_rank(&Directed::new(&*graph), damping, tolerance);
    let written = write_node_scores(graph, RANK, scores)?;
    info!("PageRank written for {} nodes (damping {})", written, damping);
    Ok(written)
}

/// Closeness centrality into `"closeness"`.
pub fn closeness(graph: &mut Graph, scorer: &impl NodeScorer) -> Result<usize, StructuralError> {
    let scores = scorer.score(graph);
    let written = write_node_scores(graph, CLOSENESS, scores)?;
    info!("Closeness written for {} nodes", written);
    Ok(written)
}

/// Farness centrality into `"farness"`.
pub fn farness(graph: &mut Graph, scorer: &impl NodeScorer) -> Result<usize, StructuralError> {
    let scores = scorer.score(graph);
    let written = write_node_scores(graph, FARNESS, scores)?;
    info!("Farness written for {} nodes", written);
    Ok(written)
}

/// Community membership into `"community"`.
pub fn communities(
    graph: &mut Graph,
    modularizer: &impl Modularizer,
    resolution: f64,
) -> Result<usize, StructuralError> {
    let found = modularizer.communities(graph, resolution);
    let groups = found.len();
    let written = write_communities(graph, found)?;
    info!(
        "{} communities at resolution {} ({} nodes assigned)",
        groups, resolution, written
    );
    Ok(written)
}

/// Maximal cliques of at least `min_size` into `"clique"`/`"clique_count"`.
pub fn cliques(
    graph: &mut Graph,
    enumerator: &impl CliqueEnumerator,
    aggregator: &CliqueAggregator,
) -> Result<CliqueSummary, StructuralError> {
    let found = enumerator.maximal_cliques(graph);
    aggregator.aggregate(graph, found)
}

/// Runs the parameterised passes with values from one config.
#[derive(Debug, Clone, Default)]
pub struct Analysis {
    config: AnalysisConfig,
}

impl Analysis {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn page_rank(
        &self,
        graph: &mut Graph,
        ranker: &impl PageRanker,
    ) -> Result<usize, StructuralError> {
        page_rank(
            graph,
            ranker,
            self.config.pagerank_damping,
            self.config.pagerank_tolerance,
        )
    }

    pub fn communities(
        &self,
        graph: &mut Graph,
        modularizer: &impl Modularizer,
    ) -> Result<usize, StructuralError> {
        communities(graph, modularizer, self.config.community_resolution)
    }

    pub fn cliques(
        &self,
        graph: &mut Graph,
        enumerator: &impl CliqueEnumerator,
    ) -> Result<CliqueSummary, StructuralError> {
        cliques(graph, enumerator, &CliqueAggregator::new(self.config.clique_min_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clique::CLIQUE_ATTR;

    /// Path a - b - c.
    fn path3() -> (Graph, [NodeId; 3]) {
        let mut graph = Graph::new();
        let a = graph.add_named_node("a");
        let b = graph.add_named_node("b");
        let c = graph.add_named_node("c");
        graph.add_edge(a, b).unwrap();
        graph.add_edge(b, c).unwrap();
        (graph, [a, b, c])
    }

    /// Reports only the nodes with degree above one, like scorers that
    /// drop zero entries.
    struct SparseBetweenness;

    impl NodeScorer for SparseBetweenness {
        fn score(&self, graph: &Graph) -> HashMap<NodeId, f64> {
            graph
                .node_ids()
                .filter(|&id| graph.degree(id) > 1)
                .map(|id| (id, 1.0))
                .collect()
        }
    }

    struct Fixed(HashMap<NodeId, f64>);

    impl NodeScorer for Fixed {
        fn score(&self, _graph: &Graph) -> HashMap<NodeId, f64> {
            self.0.clone()
        }
    }

    struct UniformEdges(f64);

    impl EdgeScorer for UniformEdges {
        fn score(&self, graph: &Graph) -> HashMap<(NodeId, NodeId), f64> {
            graph.edges().map(|e| ((e.to(), e.from()), self.0)).collect()
        }
    }

    /// Rank proportional to in-degree on the directed view.
    struct InDegreeRank;

    impl PageRanker for InDegreeRank {
        fn page_rank(
            &self,
            graph: &Directed<'_, Graph>,
            damping: f64,
            _tolerance: f64,
        ) -> HashMap<NodeId, f64> {
            graph
                .node_ids()
                .map(|id| (id, damping * graph.in_degree(id) as f64))
                .collect()
        }
    }

    struct SplitAt(usize);

    impl Modularizer for SplitAt {
        fn communities(&self, graph: &Graph, _resolution: f64) -> Vec<Vec<NodeId>> {
            let mut ids: Vec<NodeId> = graph.node_ids().collect();
            ids.sort();
            let rest = ids.split_off(self.0);
            vec![ids, rest]
        }
    }

    struct OneClique(Vec<NodeId>);

    impl CliqueEnumerator for OneClique {
        fn maximal_cliques(&self, _graph: &Graph) -> Vec<Vec<NodeId>> {
            vec![self.0.clone()]
        }
    }

    #[test]
    fn test_betweenness_fills_zero() {
        let (mut graph, [a, b, c]) = path3();
        let written = betweenness(&mut graph, &SparseBetweenness).unwrap();

        assert_eq!(written, 3);
        assert_eq!(graph.node(b).unwrap().attr(BETWEENNESS), "1");
        assert_eq!(graph.node(a).unwrap().attr(BETWEENNESS), "0");
        assert_eq!(graph.node(c).unwrap().attr(BETWEENNESS), "0");
    }

    #[test]
    fn test_closeness_and_farness() {
        let (mut graph, [a, b, _]) = path3();
        closeness(&mut graph, &Fixed(HashMap::from([(a, 0.5), (b, 1.0)]))).unwrap();
        farness(&mut graph, &Fixed(HashMap::from([(a, 3.0)]))).unwrap();

        let node = graph.node(a).unwrap();
        assert_eq!(node.attr(CLOSENESS), "0.5");
        assert_eq!(node.attr(FARNESS), "3");
    }

    #[test]
    fn test_unknown_node_score_rejected() {
        let (mut graph, [a, ..]) = path3();
        let ghost = NodeId(50);
        let err = closeness(&mut graph, &Fixed(HashMap::from([(a, 0.5), (ghost, 1.0)])))
            .unwrap_err();

        assert_eq!(err, StructuralError::InvalidEndpoint(ghost));
        assert_eq!(graph.node(a).unwrap().attr(CLOSENESS), "");
    }

    #[test]
    fn test_edge_betweenness_reversed_keys() {
        let (mut graph, [a, b, c]) = path3();
        let written = edge_betweenness(&mut graph, &UniformEdges(2.5)).unwrap();

        assert_eq!(written, 2);
        assert_eq!(graph.edge_between(a, b).unwrap().attr(EDGE_BETWEENNESS), "2.5");
        assert_eq!(graph.edge_between(c, b).unwrap().attr(EDGE_BETWEENNESS), "2.5");
    }

    #[test]
    fn test_edge_score_for_absent_edge() {
        let (mut graph, [a, _, c]) = path3();
        let err = write_edge_scores(&mut graph, EDGE_BETWEENNESS, [((a, c), 1.0)]).unwrap_err();
        assert_eq!(err, StructuralError::MissingEdge(a, c));
    }

    #[test]
    fn test_page_rank_sees_bidirectional_edges() {
        let (mut graph, [a, b, c]) = path3();
        page_rank(&mut graph, &InDegreeRank, 0.5, 1e-6).unwrap();

        assert_eq!(graph.node(b).unwrap().attr(RANK), "1");
        assert_eq!(graph.node(a).unwrap().attr(RANK), "0.5");
        assert_eq!(graph.node(c).unwrap().attr(RANK), "0.5");
    }

    #[test]
    fn test_communities_by_position() {
        let (mut graph, [a, b, c]) = path3();
        let written = communities(&mut graph, &SplitAt(2), 1.0).unwrap();

        assert_eq!(written, 3);
        assert_eq!(graph.node(a).unwrap().attr(COMMUNITY), "0");
        assert_eq!(graph.node(b).unwrap().attr(COMMUNITY), "0");
        assert_eq!(graph.node(c).unwrap().attr(COMMUNITY), "1");

        let mut first = graph.select_by_attribute(COMMUNITY, "0");
        first.sort();
        assert_eq!(first, vec![a, b]);
    }

    #[test]
    fn test_analysis_uses_config() {
        let (mut graph, [a, b, c]) = path3();
        let analysis = Analysis::new(AnalysisConfig {
            pagerank_damping: 0.25,
            clique_min_size: 4,
            ..AnalysisConfig::default()
        });

        analysis.page_rank(&mut graph, &InDegreeRank).unwrap();
        assert_eq!(graph.node(b).unwrap().attr(RANK), "0.5");

        let summary = analysis.cliques(&mut graph, &OneClique(vec![a, b, c])).unwrap();
        assert_eq!(summary.kept, 0);
        assert_eq!(graph.node(a).unwrap().attr(CLIQUE_ATTR), "");

        let summary = Analysis::default()
            .cliques(&mut graph, &OneClique(vec![a, b, c]))
            .unwrap();
        assert_eq!(summary.kept, 1);
        assert_eq!(graph.node(a).unwrap().attr(CLIQUE_ATTR), "0");
    }
}
