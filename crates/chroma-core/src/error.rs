//! Error types for the coloring engine.
//!
//! Two kinds of failure exist:
//!
//! - [`UsageError`]: the caller handed the engine something it cannot work
//!   with (a directed graph, a self-loop, a pre-colored node that is not in
//!   the graph). Reported at the call that violates the contract.
//! - [`NotEnoughColors`]: the palette cannot produce a valid result under the
//!   chosen algorithm. Expected and recoverable, e.g. by retrying with a
//!   larger palette.
//!
//! [`ColoringError`] unifies both for the backtracking entry points, which
//! can fail either way. [`ErrorCode`] maps every kind to a stable
//! machine-readable code for the CLI.

use std::fmt;

use crate::coloring::{Algorithm, Palette};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// The caller violated the engine's input contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    /// Coloring is defined only over undirected graphs.
    #[error("graph coloring algorithms do not work with directed graphs")]
    DirectedGraph,

    /// A node adjacent to itself can never be colored validly.
    #[error("node {node} has a self-loop and cannot be colored")]
    SelfLoop {
        /// Debug rendering of the offending node.
        node: String,
    },

    /// A partial coloring assigned a color to a node the graph does not contain.
    #[error("pre-colored node {node} is not part of the graph")]
    ForeignNode {
        /// Debug rendering of the offending node.
        node: String,
    },
}

/// The palette was exhausted before every node received a color.
///
/// For [`Algorithm::Greedy`] this only means the heuristic failed with this
/// palette. For [`Algorithm::Backtracking`] it is exact: no assignment of
/// palette colors (consistent with any pre-coloring) exists.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "not enough colors: {algorithm} coloring failed with a palette of {} colors ({uncolored} nodes left uncolored)",
    .palette.len()
)]
pub struct NotEnoughColors<C: fmt::Debug> {
    /// Algorithm that gave up.
    pub algorithm: Algorithm,
    /// The palette that proved insufficient.
    pub palette: Palette<C>,
    /// Nodes still without a color when the algorithm gave up.
    pub uncolored: usize,
}

/// Any failure of a coloring run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColoringError<C: fmt::Debug> {
    /// Invalid input.
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// The palette is insufficient.
    #[error("{0}")]
    NotEnoughColors(NotEnoughColors<C>),
}

impl<C: fmt::Debug> From<NotEnoughColors<C>> for ColoringError<C> {
    fn from(err: NotEnoughColors<C>) -> Self {
        Self::NotEnoughColors(err)
    }
}

impl<C: fmt::Debug> ColoringError<C> {
    /// Machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Usage(usage) => usage.code(),
            Self::NotEnoughColors(_) => ErrorCode::NotEnoughColors,
        }
    }

    /// Returns `true` for the recoverable palette-exhaustion outcome.
    #[must_use]
    pub const fn is_not_enough_colors(&self) -> bool {
        matches!(self, Self::NotEnoughColors(_))
    }
}

impl UsageError {
    /// Machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::DirectedGraph => ErrorCode::DirectedGraph,
            Self::SelfLoop { .. } => ErrorCode::SelfLoop,
            Self::ForeignNode { .. } => ErrorCode::ForeignNode,
        }
    }
}

// ---------------------------------------------------------------------------
// ErrorCode
// ---------------------------------------------------------------------------

/// Machine-readable error codes for scripted callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    DirectedGraph,
    SelfLoop,
    ForeignNode,
    NotEnoughColors,
    ProblemParseError,
    ConfigParseError,
    ConfigReadError,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::DirectedGraph => "E1001",
            Self::SelfLoop => "E1002",
            Self::ForeignNode => "E1003",
            Self::NotEnoughColors => "E2001",
            Self::ProblemParseError => "E3001",
            Self::ConfigParseError => "E3002",
            Self::ConfigReadError => "E3003",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::DirectedGraph => "Directed graph",
            Self::SelfLoop => "Self-loop in graph",
            Self::ForeignNode => "Pre-colored node not in graph",
            Self::NotEnoughColors => "Not enough colors",
            Self::ProblemParseError => "Problem file parse error",
            Self::ConfigParseError => "Config file parse error",
            Self::ConfigReadError => "Config file unreadable",
        }
    }

    /// Optional remediation hint for operators.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::DirectedGraph => None,
            Self::SelfLoop => Some("Remove edges that connect a node to itself."),
            Self::ForeignNode => Some("Only pre-color nodes that appear in the graph."),
            Self::NotEnoughColors => Some("Retry with a larger palette (`--colors`)."),
            Self::ProblemParseError => Some("Fix the TOML syntax of the problem file and retry."),
            Self::ConfigParseError => Some("Fix syntax in chroma.toml and retry."),
            Self::ConfigReadError => Some("Check that the --config path exists and is readable."),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
