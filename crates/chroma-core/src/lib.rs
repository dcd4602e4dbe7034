#![forbid(unsafe_code)]
//! chroma-core library.
//!
//! Vertex coloring for undirected graphs: a first-fit greedy heuristic and an
//! exhaustive backtracking search over a fixed palette, which can also extend
//! a partial pre-coloring.
//!
//! # Conventions
//!
//! - **Errors**: Library failures are typed (`thiserror`); configuration
//!   loading uses `anyhow::Result`.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).
//!
//! # Typical Usage
//!
//! ```rust
//! use chroma_core::coloring::{Palette, coloring};
//! use petgraph::graph::UnGraph;
//!
//! let mut g = UnGraph::<&str, ()>::new_undirected();
//! let a = g.add_node("a");
//! let b = g.add_node("b");
//! let c = g.add_node("c");
//! g.extend_with_edges([(a, b), (b, c), (c, a)]);
//!
//! let result = coloring(&g)?
//!     .with_colors(Palette::from(vec!["red", "green", "blue"]))
//!     .backtracking()?;
//! assert_eq!(result.required_colors(), 3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod coloring;
pub mod config;
pub mod error;
pub mod graph;
pub mod problem;

pub use coloring::{Algorithm, Coloring, Palette, coloring};
pub use error::{ColoringError, ErrorCode, NotEnoughColors, UsageError};
pub use graph::ColoringGraph;
pub use problem::{Problem, ProblemError};
