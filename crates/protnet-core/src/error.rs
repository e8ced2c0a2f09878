//! Error types shared across protnet crates.
//!
//! Lookups that miss are not errors; they return `None`. Everything here
//! aborts the operation that raised it and is handed straight back to the
//! caller.

use crate::node::NodeId;
use std::io;
use std::num::ParseFloatError;
use std::path::PathBuf;
use thiserror::Error;

/// Violations of the graph's structural invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    #[error("node {0} is not registered in this graph")]
    InvalidEndpoint(NodeId),

    #[error("self-loop on node {0} is not allowed")]
    SelfLoop(NodeId),

    #[error("node id {0} is already registered")]
    DuplicateId(NodeId),

    #[error("no edge between nodes {0} and {1}")]
    MissingEdge(NodeId, NodeId),
}

/// An attribute value could not be read as the type a query needs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("attribute {key:?} has non-numeric value {value:?}: {source}")]
    NotNumeric {
        key: String,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("attribute {key:?} is not set")]
    Missing { key: String },

    #[error("attribute {key:?} is NaN and cannot be ordered")]
    NotANumber { key: String },
}

impl ParseError {
    pub fn not_numeric(key: &str, value: &str, source: ParseFloatError) -> Self {
        Self::NotNumeric {
            key: key.to_string(),
            value: value.to_string(),
            source,
        }
    }
}

/// Bad configuration, caught before anything runs.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unknown render engine {0:?} (expected one of dot, neato, fdp, sfdp)")]
    UnknownEngine(String),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Any error raised by the protnet core.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Structural(#[from] StructuralError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
