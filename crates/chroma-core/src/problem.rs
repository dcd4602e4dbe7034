//! Graph coloring problems described in TOML.
//!
//! ```toml
//! nodes = ["lonely"]                   # optional isolated nodes
//! edges = [["a", "b"], ["b", "c"]]
//! palette = ["red", "green", "blue"]   # optional
//!
//! [precolored]                         # optional
//! a = "red"
//! ```
//!
//! A problem without a palette is colored with the numbered palette
//! `"0"`, `"1"`, … of whatever size the caller picks, so pre-colored values
//! must then be numbers.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};

use crate::coloring::{Coloring, Palette};
use crate::error::ErrorCode;
use crate::graph::LabeledGraph;

/// Failure to load a problem file or resolve it against its graph.
#[derive(Debug, thiserror::Error)]
pub enum ProblemError {
    #[error("failed to read problem file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid problem TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("pre-colored node {node} does not appear in nodes or edges")]
    UnknownPrecoloredNode { node: String },
}

impl ProblemError {
    /// Machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Read { .. } | Self::Parse(_) => ErrorCode::ProblemParseError,
            Self::UnknownPrecoloredNode { .. } => ErrorCode::ForeignNode,
        }
    }
}

/// A coloring problem: a labelled graph plus optional palette and
/// pre-coloring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Problem {
    #[serde(default)]
    pub nodes: Vec<String>,
    #[serde(default)]
    pub edges: Vec<(String, String)>,
    #[serde(default)]
    pub palette: Option<Vec<String>>,
    #[serde(default)]
    pub precolored: BTreeMap<String, String>,
}

impl Problem {
    /// Parse a problem from TOML text.
    ///
    /// # Errors
    ///
    /// [`ProblemError::Parse`] on invalid TOML or unknown keys.
    pub fn from_toml_str(content: &str) -> Result<Self, ProblemError> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a problem file.
    ///
    /// # Errors
    ///
    /// [`ProblemError::Read`] if the file cannot be read, otherwise as
    /// [`Problem::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self, ProblemError> {
        let content = std::fs::read_to_string(path).map_err(|source| ProblemError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Build the graph: listed nodes first, then edge endpoints in order of
    /// first mention.
    #[must_use]
    pub fn graph(&self) -> LabeledGraph {
        LabeledGraph::from_parts(
            self.nodes.iter().map(String::as_str),
            self.edges.iter().map(|(a, b)| (a.as_str(), b.as_str())),
        )
    }

    /// The problem's own palette, or the numbered palette of `default_size`.
    #[must_use]
    pub fn palette(&self, default_size: usize) -> Palette<String> {
        self.palette.as_ref().map_or_else(
            || (0..default_size).map(|i| i.to_string()).collect(),
            |colors| colors.iter().cloned().collect(),
        )
    }

    /// Returns `true` if the problem pre-colors any node.
    #[must_use]
    pub fn has_precolored(&self) -> bool {
        !self.precolored.is_empty()
    }

    /// The pre-coloring as a partial ledger over `graph`'s node indices.
    ///
    /// # Errors
    ///
    /// [`ProblemError::UnknownPrecoloredNode`] for a label `graph` lacks.
    pub fn partial(
        &self,
        graph: &LabeledGraph,
    ) -> Result<Coloring<NodeIndex, String>, ProblemError> {
        self.precolored
            .iter()
            .map(|(label, color)| {
                graph
                    .node_index(label)
                    .map(|idx| (idx, color.clone()))
                    .ok_or_else(|| ProblemError::UnknownPrecoloredNode {
                        node: label.clone(),
                    })
            })
            .collect()
    }
}
