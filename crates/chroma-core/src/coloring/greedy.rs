//! First-fit greedy coloring by descending degree.
//!
//! # Algorithm
//!
//! 1. Put every node in a [`DegreeQueue`].
//! 2. For each palette color, in palette order, scan the remaining queue top
//!    to bottom. A node with no edge to any node already placed in this
//!    color's class joins the class: it gets the color and leaves the queue.
//! 3. The next color starts a fresh scan of the (smaller) queue.
//!
//! Stops with a complete coloring once the queue is empty, or with
//! [`NotEnoughColors`] if nodes remain after the last color's pass.
//!
//! # Bounds
//!
//! A node left over after pass `k` has a neighbour in class `k`, so a node of
//! degree `d` is colored within `d + 1` passes: at most `max_degree + 1`
//! colors are used. The result is valid but not minimal, and running out of
//! colors proves nothing about what another palette (or algorithm) could do.

use std::fmt;

use tracing::{debug, instrument};

use super::{Algorithm, Coloring, DegreeQueue, Palette};
use crate::error::NotEnoughColors;
use crate::graph::ColoringGraph;

/// Color `graph` greedily with colors from `palette`.
///
/// An empty graph yields an empty coloring for any palette, including an
/// empty one.
///
/// # Errors
///
/// [`NotEnoughColors`] if nodes remain uncolored after every palette color
/// has had its pass.
#[instrument(skip_all, fields(nodes = graph.node_count(), colors = palette.len()))]
pub fn greedy<G, C>(
    graph: &G,
    palette: &Palette<C>,
) -> Result<Coloring<G::Node, C>, NotEnoughColors<C>>
where
    G: ColoringGraph,
    C: Clone + PartialEq + fmt::Debug,
{
    let mut coloring = Coloring::new();
    let mut queue = DegreeQueue::from_graph(graph);
    let mut colors = palette.iter();

    while !queue.is_empty() {
        let Some(color) = colors.next() else {
            debug!(uncolored = queue.len(), "palette exhausted");
            return Err(NotEnoughColors {
                algorithm: Algorithm::Greedy,
                palette: palette.clone(),
                uncolored: queue.len(),
            });
        };

        // Nodes given `color` during this pass.
        let mut class: Vec<G::Node> = Vec::new();
        let mut scan = queue.scan();
        while let Some(candidate) = scan.next() {
            if class.iter().any(|placed| graph.has_edge(placed, candidate)) {
                continue;
            }
            let node = candidate.clone();
            scan.remove_current();
            coloring.add_color(node.clone(), color.clone());
            class.push(node);
        }

        debug!(?color, class_size = class.len(), remaining = queue.len(), "color pass done");
    }

    debug!(required = coloring.required_colors(), "greedy coloring complete");
    Ok(coloring)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coloring::verify;
    use crate::graph::{LabeledGraph, generate};

    #[test]
    fn empty_graph_needs_no_colors() {
        let g = LabeledGraph::new();
        let result = greedy(&g, &Palette::numbered(1)).expect("empty graph colors");
        assert!(result.is_empty());
        assert_eq!(result.required_colors(), 0);

        let result = greedy(&g, &Palette::<u8>::new([])).expect("even without colors");
        assert_eq!(result.required_colors(), 0);
    }

    #[test]
    fn triangle_with_one_color_fails() {
        let g = LabeledGraph::from_edges([("1", "2"), ("2", "3"), ("3", "1")]);
        let err = greedy(&g, &Palette::numbered(1)).expect_err("triangle needs 3 colors");
        assert_eq!(err.algorithm, Algorithm::Greedy);
        assert_eq!(err.uncolored, 2);
        assert_eq!(err.palette, Palette::numbered(1));
    }

    #[test]
    fn highest_degree_node_takes_first_color() {
        // Star: the hub has the highest degree and is scanned first.
        let g = LabeledGraph::from_edges([("a", "hub"), ("b", "hub"), ("c", "hub")]);
        let result = greedy(&g, &Palette::from(["red", "blue"])).expect("star is 2-colorable");
        let hub = g.node_index("hub").expect("hub");
        assert_eq!(result.color(&hub), Some(&"red"));
        for leaf in ["a", "b", "c"] {
            let idx = g.node_index(leaf).expect("leaf");
            assert_eq!(result.color(&idx), Some(&"blue"));
        }
        assert_eq!(result.required_colors(), 2);
    }

    #[test]
    fn isolated_nodes_share_one_color() {
        let g = generate::empty(100);
        let result = greedy(&g, &Palette::numbered(1)).expect("no edges");
        assert_eq!(result.required_colors(), 1);
        assert_eq!(result.len(), 100);
    }

    #[test]
    fn bipartite_uses_two_colors() {
        let g = generate::complete_bipartite(50, 50);
        let result = greedy(&g, &Palette::numbered(11)).expect("bipartite");
        assert_eq!(result.required_colors(), 2);
        assert!(verify(&g, &result).is_ok());
    }

    #[test]
    fn complete_graph_uses_every_color() {
        let g = generate::complete(100);
        let result = greedy(&g, &Palette::numbered(100)).expect("K100 with 100 colors");
        assert_eq!(result.required_colors(), 100);
        assert!(verify(&g, &result).is_ok());
    }

    #[test]
    fn unused_palette_colors_are_not_required() {
        let g = generate::cycle(6);
        let result = greedy(&g, &Palette::numbered(11)).expect("even cycle");
        assert_eq!(result.required_colors(), 2);
    }
}
