//! Renderer engine selection.
//!
//! Rendering itself happens outside this workspace. The engine name is
//! still checked here so a bad name fails before anything is invoked.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A GraphViz layout engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RenderEngine {
    /// Hierarchical layout.
    #[default]
    Dot,
    /// Spring model layout.
    Neato,
    /// Force-directed placement.
    Fdp,
    /// Scalable force-directed placement for large networks.
    Sfdp,
}

impl RenderEngine {
    pub const ALL: [RenderEngine; 4] = [Self::Dot, Self::Neato, Self::Fdp, Self::Sfdp];

    /// The engine's executable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dot => "dot",
            Self::Neato => "neato",
            Self::Fdp => "fdp",
            Self::Sfdp => "sfdp",
        }
    }
}

impl fmt::Display for RenderEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderEngine {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|engine| engine.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownEngine(s.to_string()))
    }
}

impl TryFrom<String> for RenderEngine {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RenderEngine> for String {
    fn from(engine: RenderEngine) -> Self {
        engine.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_engines() {
        for name in ["dot", "neato", "fdp", "sfdp"] {
            let engine: RenderEngine = name.parse().unwrap();
            assert_eq!(engine.to_string(), name);
        }
    }

    #[test]
    fn test_unknown_engine_rejected() {
        let err = "circo".parse::<RenderEngine>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownEngine(ref name) if name == "circo"));
    }

    #[test]
    fn test_engine_names_are_case_sensitive() {
        assert!("DOT".parse::<RenderEngine>().is_err());
    }
}
