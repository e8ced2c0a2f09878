//! Protnet Graph - attributed interaction network store
//!
//! This crate holds the undirected graph that protein-interaction analyses
//! run against, the views used to scope work to part of it, and the
//! queries that turn analysis attributes into ordered results.
//!
//! # Architecture
//!
//! The graph uses petgraph internally with an id index on top. Nodes and
//! edges are addressed by `NodeId`/`EdgeId` handles; attribute writes go
//! straight into the graph's own storage.
//!
//! - [`Graph`] owns nodes, edges and adjacency.
//! - [`InducedSubgraph`] restricts a graph to a node selection.
//! - [`Traversal`] is the read surface both of them expose.
//! - [`RankedQuery`] and [`CliqueAggregator`] read analysis attributes back.
//! - [`analysis`] runs external algorithms and stores their results.
//!
//! # Example
//!
//! ```
//! use protnet_graph::{nodes_by_attribute, Graph};
//!
//! let mut graph = Graph::new();
//! let a = graph.add_named_node("TP53");
//! let b = graph.add_named_node("MDM2");
//! graph.add_edge(a, b).unwrap();
//!
//! graph.node_mut(a).unwrap().set_attr("rank", "0.7");
//! graph.node_mut(b).unwrap().set_attr("rank", "0.3");
//!
//! let ranked = nodes_by_attribute("rank", &graph).unwrap();
//! assert_eq!(ranked[0].name, "TP53");
//! ```

pub mod analysis;
mod clique;
mod edge;
mod graph;
mod induced;
mod ranking;
mod store;
mod traversal;

pub use analysis::Analysis;
pub use clique::{
    clear_cliques, clique_members, CliqueAggregator, CliqueSummary, CLIQUE_ATTR,
    CLIQUE_COUNT_ATTR,
};
pub use edge::{Edge, EdgeId};
pub use graph::{Graph, GraphStats};
pub use induced::InducedSubgraph;
pub use ranking::{edges_by_attribute, nodes_by_attribute, RankedQuery};
pub use store::{GraphStore, StoreError};
pub use traversal::{Directed, Traversal};

pub use protnet_core::{Attribute, Attributes, Node, NodeId};
