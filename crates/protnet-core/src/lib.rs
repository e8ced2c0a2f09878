//! Protnet Core - entities for attributed interaction networks
//!
//! This crate holds the pieces every other protnet crate shares: the
//! attribute bag attached to nodes and edges, the node type itself, the
//! error taxonomy, and the analysis configuration.
//!
//! # Example
//!
//! ```
//! use protnet_core::{Attributes, Node, NodeId};
//!
//! let mut node = Node::new(NodeId(0)).with_name("TP53");
//! node.attributes.set("betweenness", "12.5");
//! assert_eq!(node.attr("betweenness"), "12.5");
//!
//! let attrs: Attributes = [("shape", "box")].into_iter().collect();
//! assert_eq!(attrs.get("color"), "");
//! ```

pub mod attributes;
pub mod config;
pub mod error;
pub mod node;
pub mod render;

pub use attributes::{Attribute, Attributes};
pub use config::AnalysisConfig;
pub use error::{ConfigError, Error, ParseError, Result, StructuralError};
pub use node::{Node, NodeId};
pub use render::RenderEngine;
