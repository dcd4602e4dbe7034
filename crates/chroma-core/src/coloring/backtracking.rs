//! Exhaustive backtracking search over a fixed palette.
//!
//! # Algorithm
//!
//! The working list holds every graph node that the (possibly empty) partial
//! coloring leaves uncolored, in graph order. The search walks it depth
//! first:
//!
//! - at position `i`, try the palette colors in order, starting after the
//!   last color tried there; the first color that no colored neighbour
//!   already holds is kept and the search advances to `i + 1`;
//! - when every color at `i` conflicts, the node's color is removed and the
//!   search steps back to `i - 1` to try its next color;
//! - success when the last position is colored, failure when position 0
//!   runs out of colors.
//!
//! The recursion is unrolled into a per-position "next color" stack, so
//! search depth is bounded by the node count rather than the call stack.
//!
//! # Partial colorings
//!
//! Pre-colored nodes are never reassigned or removed. They are checked once
//! up front: a node that is not part of the graph is a usage error, and two
//! adjacent pre-colored nodes sharing a color make the problem infeasible.
//!
//! # Exactness
//!
//! Every combination is eventually tried, so failure proves the palette
//! cannot color the graph (consistently with the pre-coloring). On failure
//! the ledger is dropped: no partial result escapes.

use std::fmt;

use tracing::{debug, instrument, trace};

use super::{Algorithm, Coloring, Palette};
use crate::error::{ColoringError, NotEnoughColors, UsageError};
use crate::graph::ColoringGraph;

/// Find a coloring of `graph` that uses only `palette` colors.
///
/// # Errors
///
/// [`ColoringError::NotEnoughColors`] when no such coloring exists.
pub fn backtracking<G, C>(
    graph: &G,
    palette: &Palette<C>,
) -> Result<Coloring<G::Node, C>, ColoringError<C>>
where
    G: ColoringGraph,
    C: Clone + PartialEq + fmt::Debug,
{
    backtracking_from(graph, palette, Coloring::new())
}

/// Extend the partial coloring `partial` to all of `graph` using only
/// `palette` colors. Pre-colored nodes keep their colors.
///
/// Pre-colored nodes may use colors outside the palette; they still count
/// toward [`Coloring::required_colors`].
///
/// # Errors
///
/// - [`UsageError::ForeignNode`] if `partial` colors a node not in `graph`.
/// - [`ColoringError::NotEnoughColors`] if the pre-coloring conflicts with
///   itself or cannot be extended with `palette`.
#[instrument(skip_all, fields(nodes = graph.node_count(), colors = palette.len(), precolored = partial.len()))]
pub fn backtracking_from<G, C>(
    graph: &G,
    palette: &Palette<C>,
    partial: Coloring<G::Node, C>,
) -> Result<Coloring<G::Node, C>, ColoringError<C>>
where
    G: ColoringGraph,
    C: Clone + PartialEq + fmt::Debug,
{
    if let Some((node, _)) = partial.iter().find(|(node, _)| !graph.contains_node(node)) {
        return Err(UsageError::ForeignNode {
            node: format!("{node:?}"),
        }
        .into());
    }

    let working: Vec<G::Node> = graph
        .nodes()
        .filter(|node| !partial.contains_colored_node(node))
        .collect();

    let infeasible = |uncolored: usize| -> ColoringError<C> {
        NotEnoughColors {
            algorithm: Algorithm::Backtracking,
            palette: palette.clone(),
            uncolored,
        }
        .into()
    };

    if let Some((node, _)) = partial.iter().find(|(node, _)| has_conflict(graph, &partial, node)) {
        debug!(?node, "pre-coloring conflicts with itself");
        return Err(infeasible(working.len()));
    }

    let mut search = Search {
        graph,
        palette,
        working: &working,
        coloring: partial,
    };
    if search.run() {
        debug!(required = search.coloring.required_colors(), "backtracking coloring found");
        Ok(search.coloring)
    } else {
        debug!("no coloring with this palette");
        Err(infeasible(working.len()))
    }
}

/// Returns `true` if a neighbour of `node` holds the same color as `node`.
///
/// Unassigned nodes and unassigned neighbours never conflict.
fn has_conflict<G, C>(graph: &G, coloring: &Coloring<G::Node, C>, node: &G::Node) -> bool
where
    G: ColoringGraph,
    C: Clone + PartialEq,
{
    let Some(color) = coloring.color(node) else {
        return false;
    };
    graph
        .neighbors(node)
        .any(|neighbor| coloring.color(&neighbor) == Some(color))
}

// ---------------------------------------------------------------------------
// Search state
// ---------------------------------------------------------------------------

struct Search<'a, G: ColoringGraph, C> {
    graph: &'a G,
    palette: &'a Palette<C>,
    working: &'a [G::Node],
    coloring: Coloring<G::Node, C>,
}

impl<G, C> Search<'_, G, C>
where
    G: ColoringGraph,
    C: Clone + PartialEq + fmt::Debug,
{
    /// Depth-first search over `working`. Returns `true` with `coloring`
    /// complete, or `false` with `coloring` back to its initial contents.
    fn run(&mut self) -> bool {
        let len = self.working.len();
        if len == 0 {
            return true;
        }

        // next_color[i]: palette index to try next at position i.
        let mut next_color = vec![0_usize; len];
        let mut pos = 0;

        loop {
            if self.place_next_color(pos, &mut next_color[pos]) {
                if pos + 1 == len {
                    return true;
                }
                pos += 1;
                next_color[pos] = 0;
            } else {
                // Undo before stepping back: the level above must see this
                // node unassigned.
                self.coloring.remove_color(&self.working[pos]);
                trace!(pos, "backtrack");
                if pos == 0 {
                    return false;
                }
                pos -= 1;
            }
        }
    }

    /// Try palette colors from `*next` onward at `pos`; keep the first one
    /// without a conflict. Returns `false` once the palette is exhausted.
    fn place_next_color(&mut self, pos: usize, next: &mut usize) -> bool {
        let (working, palette) = (self.working, self.palette);
        let node = &working[pos];
        while let Some(color) = palette.as_slice().get(*next) {
            *next += 1;
            self.coloring.add_color(node.clone(), color.clone());
            if !has_conflict(self.graph, &self.coloring, node) {
                return true;
            }
        }
        false
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
