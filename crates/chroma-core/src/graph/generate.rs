//! Graph generators for tests, benchmarks, and the CLI `generate` command.
//!
//! Every generator returns an undirected petgraph graph whose node weight is
//! the node's position in insertion order. Random graphs are seeded so runs
//! are reproducible.

use petgraph::graph::{NodeIndex, UnGraph};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// `n` nodes, no edges.
#[must_use]
pub fn empty(n: usize) -> UnGraph<usize, ()> {
    let mut g = UnGraph::with_capacity(n, 0);
    for i in 0..n {
        g.add_node(i);
    }
    g
}

/// Complete graph `K_n`: every pair of distinct nodes is adjacent.
#[must_use]
pub fn complete(n: usize) -> UnGraph<usize, ()> {
    let mut g = empty(n);
    for a in 0..n {
        for b in (a + 1)..n {
            g.add_edge(NodeIndex::new(a), NodeIndex::new(b), ());
        }
    }
    g
}

/// Complete bipartite graph `K_{left,right}`.
///
/// The first `left` nodes form one side, the remaining `right` nodes the
/// other; every cross pair is adjacent.
#[must_use]
pub fn complete_bipartite(left: usize, right: usize) -> UnGraph<usize, ()> {
    let mut g = empty(left + right);
    for a in 0..left {
        for b in left..(left + right) {
            g.add_edge(NodeIndex::new(a), NodeIndex::new(b), ());
        }
    }
    g
}

/// Cycle graph `C_n`: node `i` is adjacent to `i + 1`, and the last node to
/// the first. `n < 3` produces a path (no self-loops, no parallel edges).
#[must_use]
pub fn cycle(n: usize) -> UnGraph<usize, ()> {
    let mut g = empty(n);
    for i in 1..n {
        g.add_edge(NodeIndex::new(i - 1), NodeIndex::new(i), ());
    }
    if n >= 3 {
        g.add_edge(NodeIndex::new(n - 1), NodeIndex::new(0), ());
    }
    g
}

/// Erdős–Rényi `G(n, p)`: each pair is adjacent with probability `p`.
///
/// `p` is clamped to `[0, 1]` (NaN counts as 0). The same `seed` always
/// yields the same graph.
#[must_use]
pub fn random(n: usize, p: f64, seed: u64) -> UnGraph<usize, ()> {
    let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
    let mut rng = StdRng::seed_from_u64(seed);
    let mut g = empty(n);
    for a in 0..n {
        for b in (a + 1)..n {
            if rng.gen_bool(p) {
                g.add_edge(NodeIndex::new(a), NodeIndex::new(b), ());
            }
        }
    }
    g
}

// ---------------------------------------------------------------------------
// Sudoku
// ---------------------------------------------------------------------------

/// The 9×9 Sudoku constraint graph.
///
/// One node per cell (row-major insertion order); two cells are adjacent when
/// they share a row, a column, or a 3×3 box. A proper 9-coloring is a solved
/// grid.
#[derive(Debug, Clone)]
pub struct SudokuGraph {
    /// Constraint graph; node weights are `(row, col)`.
    pub graph: UnGraph<(usize, usize), ()>,
    /// `cells[row][col]` is the node for that cell.
    pub cells: [[NodeIndex; 9]; 9],
}

impl SudokuGraph {
    /// Build the constraint graph (81 nodes, 810 edges).
    #[must_use]
    pub fn new() -> Self {
        let mut graph = UnGraph::with_capacity(81, 810);
        let mut cells = [[NodeIndex::new(0); 9]; 9];
        for (row, line) in cells.iter_mut().enumerate() {
            for (col, cell) in line.iter_mut().enumerate() {
                *cell = graph.add_node((row, col));
            }
        }

        for a in 0..81 {
            for b in (a + 1)..81 {
                let (ra, ca) = (a / 9, a % 9);
                let (rb, cb) = (b / 9, b % 9);
                let same_box = ra / 3 == rb / 3 && ca / 3 == cb / 3;
                if ra == rb || ca == cb || same_box {
                    graph.add_edge(cells[ra][ca], cells[rb][cb], ());
                }
            }
        }

        Self { graph, cells }
    }

    /// Node for the cell at `(row, col)`.
    #[must_use]
    pub const fn cell(&self, row: usize, col: usize) -> NodeIndex {
        self.cells[row][col]
    }
}

impl Default for SudokuGraph {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ColoringGraph;

    #[test]
    fn generator_sizes() {
        assert_eq!(empty(7).edge_count(), 0);
        assert_eq!(complete(6).edge_count(), 15);
        assert_eq!(complete_bipartite(3, 4).edge_count(), 12);
        assert_eq!(cycle(6).edge_count(), 6);
        assert_eq!(cycle(2).edge_count(), 1);
        assert_eq!(cycle(1).edge_count(), 0);
    }

    #[test]
    fn random_is_reproducible() {
        let a = random(30, 0.3, 42);
        let b = random(30, 0.3, 42);
        let edges_a: Vec<_> = a.raw_edges().iter().map(|e| (e.source(), e.target())).collect();
        let edges_b: Vec<_> = b.raw_edges().iter().map(|e| (e.source(), e.target())).collect();
        assert_eq!(edges_a, edges_b);
        assert_eq!(random(10, 0.0, 1).edge_count(), 0);
        assert_eq!(random(10, 1.0, 1).edge_count(), 45);
    }

    #[test]
    fn sudoku_graph_shape() {
        let sudoku = SudokuGraph::new();
        assert_eq!(sudoku.graph.node_count(), 81);
        assert_eq!(sudoku.graph.edge_count(), 810);
        // 8 in the row + 8 in the column + 4 more in the box.
        for node in ColoringGraph::nodes(&sudoku.graph) {
            assert_eq!(ColoringGraph::degree(&sudoku.graph, &node), 20);
        }
        assert!(sudoku.graph.contains_edge(sudoku.cell(0, 0), sudoku.cell(2, 2)));
        assert!(!sudoku.graph.contains_edge(sudoku.cell(0, 0), sudoku.cell(3, 3)));
    }
}
