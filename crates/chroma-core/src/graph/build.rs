//! String-labelled undirected graphs built from node and edge lists.
//!
//! # Overview
//!
//! Problem files and the CLI name nodes with strings. [`LabeledGraph`] keeps
//! a petgraph [`UnGraph`] whose node weights are those labels, plus a label
//! → [`NodeIndex`] map for lookups. Nodes keep first-mention order, which is
//! the order the colorers see.
//!
//! ## Duplicates
//!
//! Parallel edges collapse into one (petgraph allows them by default).
//! Self-loops are kept so that [`crate::graph::check_colorable`] can report
//! them instead of silently dropping part of the input.

#![allow(clippy::module_name_repetitions)]

use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};
use tracing::instrument;

use super::ColoringGraph;

// ---------------------------------------------------------------------------
// LabeledGraph
// ---------------------------------------------------------------------------

/// An undirected graph whose nodes carry string labels.
#[derive(Debug, Clone, Default)]
pub struct LabeledGraph {
    /// Undirected graph: node weights are labels.
    pub graph: UnGraph<String, ()>,
    /// Mapping from label to petgraph `NodeIndex`.
    pub node_map: HashMap<String, NodeIndex>,
}

impl LabeledGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from explicit nodes followed by edges.
    ///
    /// `nodes` may list isolated nodes; endpoints of `edges` that were not
    /// listed are added on first mention.
    #[must_use]
    #[instrument(skip_all)]
    pub fn from_parts<S, I, J>(nodes: I, edges: J) -> Self
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = (S, S)>,
    {
        let mut graph = Self::new();
        for node in nodes {
            graph.add_node(node.as_ref());
        }
        for (a, b) in edges {
            graph.add_edge(a.as_ref(), b.as_ref());
        }
        graph
    }

    /// Build a graph from an edge list alone.
    #[must_use]
    pub fn from_edges<S, J>(edges: J) -> Self
    where
        S: AsRef<str>,
        J: IntoIterator<Item = (S, S)>,
    {
        Self::from_parts(std::iter::empty::<S>(), edges)
    }

    /// Add a node, returning the existing index if the label is already present.
    pub fn add_node(&mut self, label: &str) -> NodeIndex {
        if let Some(idx) = self.node_map.get(label) {
            return *idx;
        }
        let idx = self.graph.add_node(label.to_string());
        self.node_map.insert(label.to_string(), idx);
        idx
    }

    /// Connect two labels, adding either endpoint if needed.
    ///
    /// Returns `false` if the edge already existed.
    pub fn add_edge(&mut self, a: &str, b: &str) -> bool {
        let ia = self.add_node(a);
        let ib = self.add_node(b);
        // Avoid duplicate edges (petgraph allows them by default).
        if self.graph.contains_edge(ia, ib) {
            return false;
        }
        self.graph.add_edge(ia, ib, ());
        true
    }

    /// Return the number of nodes in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Return the number of edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Look up the `NodeIndex` for a label.
    #[must_use]
    pub fn node_index(&self, label: &str) -> Option<NodeIndex> {
        self.node_map.get(label).copied()
    }

    /// Return the label of a node.
    #[must_use]
    pub fn label(&self, idx: NodeIndex) -> Option<&str> {
        self.graph.node_weight(idx).map(String::as_str)
    }
}

impl ColoringGraph for LabeledGraph {
    type Node = NodeIndex;

    fn is_directed(&self) -> bool {
        false
    }

    fn nodes(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn contains_node(&self, node: &NodeIndex) -> bool {
        self.graph.node_weight(*node).is_some()
    }

    fn neighbors(&self, node: &NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors(*node)
    }

    fn has_edge(&self, a: &NodeIndex, b: &NodeIndex) -> bool {
        self.graph.contains_edge(*a, *b)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
