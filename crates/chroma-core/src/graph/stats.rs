//! Basic statistics for a graph about to be colored.
//!
//! # Statistics Provided
//!
//! - **node_count** / **edge_count**: sizes, counting each undirected edge
//!   once and ignoring parallel edges.
//! - **density**: `edge_count / (node_count * (node_count - 1) / 2)`. A
//!   complete graph has density 1.0; empty or single-node graphs 0.0.
//! - **max_degree** / **min_degree**: over distinct neighbours.
//! - **component_count**: connected components.
//! - **isolated_node_count**: nodes with no neighbours.
//! - **greedy_bound**: `max_degree + 1`, the most colors the greedy colorer
//!   can need (0 for the empty graph).

use std::collections::{HashSet, VecDeque};

use super::ColoringGraph;

// ---------------------------------------------------------------------------
// GraphStats
// ---------------------------------------------------------------------------

/// Summary statistics for a graph.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphStats {
    /// Number of nodes.
    pub node_count: usize,
    /// Number of distinct undirected edges.
    pub edge_count: usize,
    /// Ratio of edges to the maximum possible number of edges.
    pub density: f64,
    /// Highest degree of any node.
    pub max_degree: usize,
    /// Lowest degree of any node (0 for the empty graph).
    pub min_degree: usize,
    /// Number of connected components.
    pub component_count: usize,
    /// Number of nodes with no neighbours.
    pub isolated_node_count: usize,
}

impl GraphStats {
    /// Compute statistics for any [`ColoringGraph`].
    #[must_use]
    pub fn from_graph<G: ColoringGraph>(graph: &G) -> Self {
        let degrees: Vec<usize> = graph.nodes().map(|n| graph.degree(&n)).collect();
        let node_count = degrees.len();
        let edge_count = degrees.iter().sum::<usize>() / 2;

        Self {
            node_count,
            edge_count,
            density: compute_density(node_count, edge_count),
            max_degree: degrees.iter().copied().max().unwrap_or(0),
            min_degree: degrees.iter().copied().min().unwrap_or(0),
            component_count: count_components(graph),
            isolated_node_count: degrees.iter().filter(|&&d| d == 0).count(),
        }
    }

    /// Upper bound on the colors the greedy colorer uses: `max_degree + 1`.
    #[must_use]
    pub const fn greedy_bound(&self) -> usize {
        if self.node_count == 0 {
            0
        } else {
            self.max_degree + 1
        }
    }

    /// Return `true` if the graph has no edges (one color suffices).
    #[must_use]
    pub const fn is_edgeless(&self) -> bool {
        self.edge_count == 0
    }

    /// Return `true` if every pair of distinct nodes is adjacent.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.node_count > 0 && self.min_degree + 1 == self.node_count
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

#[allow(clippy::cast_precision_loss)]
fn compute_density(node_count: usize, edge_count: usize) -> f64 {
    if node_count < 2 {
        return 0.0_f64;
    }
    let max_edges = (node_count * (node_count - 1) / 2) as f64;
    edge_count as f64 / max_edges
}

/// Breadth-first flood fill over the collaborator's neighbour lists.
fn count_components<G: ColoringGraph>(graph: &G) -> usize {
    let mut seen: HashSet<G::Node> = HashSet::with_capacity(graph.node_count());
    let mut queue = VecDeque::new();
    let mut count = 0;

    for start in graph.nodes() {
        if !seen.insert(start.clone()) {
            continue;
        }
        count += 1;
        queue.push_back(start);
        while let Some(node) = queue.pop_front() {
            for next in graph.neighbors(&node) {
                if seen.insert(next.clone()) {
                    queue.push_back(next);
                }
            }
        }
    }

    count
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
