//! The coloring engine.
//!
//! # Overview
//!
//! Two algorithms assign colors from a caller-supplied [`Palette`] so that no
//! two adjacent nodes share a color:
//!
//! - [`greedy`]: first-fit by descending degree, one color class per pass
//!   over a [`DegreeQueue`]. Fast, never uses more than `max_degree + 1`
//!   colors, but not minimal. Failure only means the heuristic ran out of
//!   colors.
//! - [`backtracking`]: exhaustive depth-first search over the palette. Exact:
//!   failure proves no coloring with this palette exists (given any
//!   pre-coloring passed to [`backtracking_from`]).
//!
//! Both produce a [`Coloring`] ledger. The usual entry point is the
//! [`coloring`] selector:
//!
//! ```text
//! coloring(&graph)?            validates the graph (undirected, no self-loops)
//!   .with_colors(palette)      fixes the palette
//!   .greedy()                  | .backtracking() | .backtracking_from(partial)
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod backtracking;
pub mod greedy;
pub mod ledger;
pub mod palette;
pub mod queue;
pub mod selector;
pub mod verify;

pub use backtracking::{backtracking, backtracking_from};
pub use greedy::greedy;
pub use ledger::Coloring;
pub use palette::Palette;
pub use queue::DegreeQueue;
pub use selector::{AlgorithmSelector, ColorsBuilder, coloring};
pub use verify::{Violation, verify};

/// The available coloring algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// First-fit heuristic by descending degree.
    #[default]
    Greedy,
    /// Exhaustive search over the palette.
    Backtracking,
}

impl Algorithm {
    /// Lowercase name, as used in config files and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Greedy => "greedy",
            Self::Backtracking => "backtracking",
        }
    }

    /// Returns `true` if a failure of this algorithm proves infeasibility.
    #[must_use]
    pub const fn is_exact(self) -> bool {
        matches!(self, Self::Backtracking)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
