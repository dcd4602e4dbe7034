//! Graph collaborator for the coloring engine.
//!
//! # Overview
//!
//! The colorers never store nodes or edges themselves. They consume a graph
//! through the read-only [`ColoringGraph`] contract: enumerate nodes in a
//! stable order, report degrees and neighbours, and test adjacency.
//!
//! Adapters are provided for:
//!
//! - [`petgraph::Graph`] (any edge type or index type), keyed by `NodeIndex`
//! - [`petgraph::graphmap::GraphMap`], keyed by the map's node weight
//! - [`build::LabeledGraph`], string-labelled graphs built from edge lists
//!
//! Directed graphs implement the contract too, so that
//! [`check_colorable`] can reject them at the boundary with a usage error
//! instead of refusing to compile.
//!
//! ## Submodules
//!
//! ```text
//! build     LabeledGraph: string labels over an undirected petgraph
//! stats     GraphStats: counts, degrees, density, components
//! generate  complete / bipartite / cycle / random / Sudoku graphs
//! ```

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use petgraph::graph::{Graph, IndexType, NodeIndex};
use petgraph::graphmap::{GraphMap, NodeTrait};
use petgraph::EdgeType;

use crate::error::UsageError;

pub mod build;
pub mod generate;
pub mod stats;

pub use build::LabeledGraph;
pub use stats::GraphStats;

// ---------------------------------------------------------------------------
// ColoringGraph
// ---------------------------------------------------------------------------

/// Read-only view of a graph as consumed by the colorers.
///
/// Node enumeration must be stable for the lifetime of a borrow: both
/// colorers derive their iteration order from it.
pub trait ColoringGraph {
    /// Node handle type.
    type Node: Clone + Eq + Hash + fmt::Debug;

    /// Returns `true` if edges are directed.
    fn is_directed(&self) -> bool;

    /// All nodes, in a stable order.
    fn nodes(&self) -> impl Iterator<Item = Self::Node> + '_;

    /// Number of nodes.
    fn node_count(&self) -> usize;

    /// Returns `true` if `node` belongs to the graph.
    fn contains_node(&self, node: &Self::Node) -> bool;

    /// Nodes adjacent to `node`. May repeat a neighbour joined by parallel edges.
    fn neighbors(&self, node: &Self::Node) -> impl Iterator<Item = Self::Node> + '_;

    /// Returns `true` if an edge connects `a` and `b`.
    fn has_edge(&self, a: &Self::Node, b: &Self::Node) -> bool;

    /// Number of distinct neighbours of `node`, not counting `node` itself.
    fn degree(&self, node: &Self::Node) -> usize {
        self.neighbors(node)
            .filter(|other| other != node)
            .collect::<HashSet<_>>()
            .len()
    }
}

/// Reject graphs the engine is not defined over.
///
/// # Errors
///
/// [`UsageError::DirectedGraph`] for directed graphs and
/// [`UsageError::SelfLoop`] for the first node adjacent to itself.
pub fn check_colorable<G: ColoringGraph>(graph: &G) -> Result<(), UsageError> {
    if graph.is_directed() {
        return Err(UsageError::DirectedGraph);
    }

    if let Some(node) = graph.nodes().find(|n| graph.has_edge(n, n)) {
        return Err(UsageError::SelfLoop {
            node: format!("{node:?}"),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// petgraph adapters
// ---------------------------------------------------------------------------

impl<N, E, Ty, Ix> ColoringGraph for Graph<N, E, Ty, Ix>
where
    Ty: EdgeType,
    Ix: IndexType,
{
    type Node = NodeIndex<Ix>;

    fn is_directed(&self) -> bool {
        Ty::is_directed()
    }

    fn nodes(&self) -> impl Iterator<Item = NodeIndex<Ix>> + '_ {
        self.node_indices()
    }

    fn node_count(&self) -> usize {
        Graph::node_count(self)
    }

    fn contains_node(&self, node: &NodeIndex<Ix>) -> bool {
        self.node_weight(*node).is_some()
    }

    fn neighbors(&self, node: &NodeIndex<Ix>) -> impl Iterator<Item = NodeIndex<Ix>> + '_ {
        Graph::neighbors(self, *node)
    }

    fn has_edge(&self, a: &NodeIndex<Ix>, b: &NodeIndex<Ix>) -> bool {
        self.contains_edge(*a, *b)
    }
}

impl<N, E, Ty> ColoringGraph for GraphMap<N, E, Ty>
where
    N: NodeTrait + fmt::Debug,
    Ty: EdgeType,
{
    type Node = N;

    fn is_directed(&self) -> bool {
        Ty::is_directed()
    }

    fn nodes(&self) -> impl Iterator<Item = N> + '_ {
        GraphMap::nodes(self)
    }

    fn node_count(&self) -> usize {
        GraphMap::node_count(self)
    }

    fn contains_node(&self, node: &N) -> bool {
        GraphMap::contains_node(self, *node)
    }

    fn neighbors(&self, node: &N) -> impl Iterator<Item = N> + '_ {
        GraphMap::neighbors(self, *node)
    }

    fn has_edge(&self, a: &N, b: &N) -> bool {
        self.contains_edge(*a, *b)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
