//! Independent validity check for a finished coloring.

use std::fmt;

use crate::graph::ColoringGraph;

use super::Coloring;

/// Why a coloring is not a valid complete coloring of a graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    /// A graph node has no color.
    #[error("node {node} is uncolored")]
    Uncolored { node: String },

    /// Two adjacent nodes share a color.
    #[error("adjacent nodes {a} and {b} share color {color}")]
    Conflict { a: String, b: String, color: String },
}

/// Check that every node of `graph` is colored and no edge joins two nodes
/// of the same color. Reports the first violation in node order.
///
/// # Errors
///
/// The first [`Violation`] found.
pub fn verify<G, C>(graph: &G, coloring: &Coloring<G::Node, C>) -> Result<(), Violation>
where
    G: ColoringGraph,
    C: Clone + PartialEq + fmt::Debug,
{
    for node in graph.nodes() {
        let Some(color) = coloring.color(&node) else {
            return Err(Violation::Uncolored {
                node: format!("{node:?}"),
            });
        };
        if let Some(other) = graph
            .neighbors(&node)
            .find(|n| *n != node && coloring.color(n) == Some(color))
        {
            return Err(Violation::Conflict {
                a: format!("{node:?}"),
                b: format!("{other:?}"),
                color: format!("{color:?}"),
            });
        }
    }
    Ok(())
}
