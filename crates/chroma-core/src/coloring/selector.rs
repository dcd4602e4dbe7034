//! Fluent entry point: graph, then palette, then algorithm.
//!
//! ```text
//! coloring(&graph)?.with_colors(palette).backtracking()
//! ```
//!
//! [`coloring`] validates the graph once. The palette is captured by
//! [`ColorsBuilder::with_colors`], and every algorithm method on
//! [`AlgorithmSelector`] borrows the selector, so one validated graph and
//! palette can be run through several algorithms.

use std::fmt;

use tracing::instrument;

use super::{Algorithm, Coloring, Palette, backtracking, greedy};
use crate::error::{ColoringError, NotEnoughColors, UsageError};
use crate::graph::{ColoringGraph, check_colorable};

/// Start a coloring run over `graph`.
///
/// # Errors
///
/// [`UsageError::DirectedGraph`] for a directed graph and
/// [`UsageError::SelfLoop`] if any node is adjacent to itself.
#[instrument(skip_all, fields(nodes = graph.node_count()))]
pub fn coloring<G: ColoringGraph>(graph: &G) -> Result<ColorsBuilder<'_, G>, UsageError> {
    check_colorable(graph)?;
    Ok(ColorsBuilder { graph })
}

/// A validated graph awaiting its palette.
#[derive(Debug)]
pub struct ColorsBuilder<'g, G> {
    graph: &'g G,
}

impl<'g, G: ColoringGraph> ColorsBuilder<'g, G> {
    /// Fix the palette the algorithms may draw from.
    #[must_use]
    pub fn with_colors<C>(self, palette: impl Into<Palette<C>>) -> AlgorithmSelector<'g, G, C> {
        AlgorithmSelector {
            graph: self.graph,
            palette: palette.into(),
        }
    }
}

/// A validated graph and a palette, ready to run an algorithm.
#[derive(Debug)]
pub struct AlgorithmSelector<'g, G, C> {
    graph: &'g G,
    palette: Palette<C>,
}

impl<G, C> AlgorithmSelector<'_, G, C>
where
    G: ColoringGraph,
    C: Clone + PartialEq + fmt::Debug,
{
    /// The palette in use.
    #[must_use]
    pub const fn palette(&self) -> &Palette<C> {
        &self.palette
    }

    /// Run [`greedy`](super::greedy()).
    ///
    /// # Errors
    ///
    /// [`NotEnoughColors`] if the heuristic runs out of colors.
    pub fn greedy(&self) -> Result<Coloring<G::Node, C>, NotEnoughColors<C>> {
        greedy(self.graph, &self.palette)
    }

    /// Run [`backtracking`](super::backtracking()).
    ///
    /// # Errors
    ///
    /// [`ColoringError::NotEnoughColors`] if no coloring with this palette
    /// exists.
    pub fn backtracking(&self) -> Result<Coloring<G::Node, C>, ColoringError<C>> {
        backtracking::backtracking(self.graph, &self.palette)
    }

    /// Run [`backtracking_from`](super::backtracking_from) seeded with
    /// `partial`.
    ///
    /// # Errors
    ///
    /// [`UsageError::ForeignNode`] if `partial` colors a node outside the
    /// graph; [`ColoringError::NotEnoughColors`] if `partial` cannot be
    /// extended.
    pub fn backtracking_from(
        &self,
        partial: Coloring<G::Node, C>,
    ) -> Result<Coloring<G::Node, C>, ColoringError<C>> {
        backtracking::backtracking_from(self.graph, &self.palette, partial)
    }

    /// Run the algorithm named by `algorithm`.
    ///
    /// # Errors
    ///
    /// Whatever the chosen algorithm reports, as a [`ColoringError`].
    pub fn apply(&self, algorithm: Algorithm) -> Result<Coloring<G::Node, C>, ColoringError<C>> {
        match algorithm {
            Algorithm::Greedy => Ok(self.greedy()?),
            Algorithm::Backtracking => self.backtracking(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coloring::verify;
    use crate::graph::LabeledGraph;
    use petgraph::graph::{DiGraph, UnGraph};

    fn triangle() -> LabeledGraph {
        LabeledGraph::from_edges([("1", "2"), ("2", "3"), ("3", "1")])
    }

    #[test]
    fn directed_graph_is_a_usage_error() {
        let mut g = DiGraph::<(), ()>::new();
        let a = g.add_node(());
        let b = g.add_node(());
        g.add_edge(a, b, ());
        assert_eq!(coloring(&g).err(), Some(UsageError::DirectedGraph));
    }

    #[test]
    fn self_loop_is_a_usage_error() {
        let mut g = UnGraph::<(), ()>::new_undirected();
        let a = g.add_node(());
        g.add_edge(a, a, ());
        assert!(matches!(coloring(&g), Err(UsageError::SelfLoop { .. })));
    }

    #[test]
    fn triangle_with_one_color() {
        let g = triangle();
        let selector = coloring(&g).expect("valid graph").with_colors([0]);
        assert!(selector.greedy().is_err());
        assert!(selector.backtracking().is_err());
    }

    #[test]
    fn triangle_with_three_colors() {
        let g = triangle();
        let selector = coloring(&g)
            .expect("valid graph")
            .with_colors(vec!["red", "green", "blue"]);
        assert_eq!(selector.palette().len(), 3);

        for algorithm in [Algorithm::Greedy, Algorithm::Backtracking] {
            let result = selector.apply(algorithm).expect("3 colors suffice");
            assert_eq!(result.required_colors(), 3, "{algorithm}");
            assert!(verify(&g, &result).is_ok());
        }
    }

    #[test]
    fn apply_greedy_wraps_not_enough_colors() {
        let g = triangle();
        let err = coloring(&g)
            .expect("valid graph")
            .with_colors(Palette::numbered(2))
            .apply(Algorithm::Greedy)
            .expect_err("triangle needs 3");
        assert!(err.is_not_enough_colors());
    }

    #[test]
    fn backtracking_from_partial() {
        let g = triangle();
        let two = g.node_index("2").expect("node 2");
        let partial: Coloring<_, _> = [(two, 2)].into_iter().collect();
        let result = coloring(&g)
            .expect("valid graph")
            .with_colors(Palette::numbered(3))
            .backtracking_from(partial)
            .expect("extends");
        assert_eq!(result.color(&two), Some(&2));
        assert_eq!(result.required_colors(), 3);
    }
}
