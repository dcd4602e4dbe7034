//! Uncolored nodes ordered by descending degree.
//!
//! # Overview
//!
//! The greedy colorer walks the still-uncolored nodes highest-degree first,
//! removing each node it colors, then starts over from the top for the next
//! color. [`DegreeQueue`] supports exactly that:
//!
//! - built once from a degree snapshot of every node,
//! - scanned through a [`Scan`] cursor that offers `next` and
//!   `remove_current`,
//! - removals land in the queue itself, so a fresh scan omits them.
//!
//! ## Layout
//!
//! Nodes are stored flattened, sorted by degree (descending) with graph
//! order preserved inside each degree bucket. Removal clears the node's bit
//! in a [`FixedBitSet`] of live slots instead of shifting the vector, so a
//! scan never invalidates.

use std::cmp::Reverse;

use fixedbitset::FixedBitSet;

use crate::graph::ColoringGraph;

/// Nodes bucketed by degree, iterated highest degree first.
#[derive(Debug, Clone)]
pub struct DegreeQueue<N> {
    /// `(degree, node)` sorted by descending degree, stable within a degree.
    entries: Vec<(usize, N)>,
    /// Slots still holding an uncolored node.
    live: FixedBitSet,
    remaining: usize,
}

impl<N> DegreeQueue<N> {
    /// Build a queue from `(node, degree)` pairs.
    ///
    /// Nodes sharing a degree keep the order in which they were supplied.
    #[must_use]
    pub fn from_degrees(nodes: impl IntoIterator<Item = (N, usize)>) -> Self {
        let mut entries: Vec<(usize, N)> = nodes.into_iter().map(|(n, d)| (d, n)).collect();
        entries.sort_by_key(|(degree, _)| Reverse(*degree));

        let mut live = FixedBitSet::with_capacity(entries.len());
        live.insert_range(..);

        Self {
            remaining: entries.len(),
            entries,
            live,
        }
    }

    /// Build a queue over every node of `graph`, using its degrees.
    #[must_use]
    pub fn from_graph<G>(graph: &G) -> Self
    where
        G: ColoringGraph<Node = N>,
    {
        Self::from_degrees(graph.nodes().map(|node| {
            let degree = graph.degree(&node);
            (node, degree)
        }))
    }

    /// Number of nodes not yet removed.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.remaining
    }

    /// Returns `true` once every node has been removed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    /// Number of distinct degrees that still hold at least one node.
    #[must_use]
    pub fn degree_buckets(&self) -> usize {
        let mut buckets = 0;
        let mut last = None;
        for slot in self.live.ones() {
            let degree = self.entries[slot].0;
            if last != Some(degree) {
                buckets += 1;
                last = Some(degree);
            }
        }
        buckets
    }

    /// Remaining nodes in scan order.
    pub fn iter(&self) -> impl Iterator<Item = &N> + '_ {
        self.live.ones().map(|slot| &self.entries[slot].1)
    }

    /// Start a fresh scan from the highest degree.
    pub fn scan(&mut self) -> Scan<'_, N> {
        Scan {
            queue: self,
            next: 0,
            current: None,
        }
    }

    fn remove_slot(&mut self, slot: usize) -> bool {
        if !self.live.contains(slot) {
            return false;
        }
        self.live.set(slot, false);
        self.remaining -= 1;
        true
    }
}

/// Forward cursor over a [`DegreeQueue`] that can remove the node it last
/// produced.
///
/// Not an [`Iterator`]: yielded references borrow the cursor, so the node
/// must be cloned (or dropped) before calling [`Scan::remove_current`].
#[derive(Debug)]
pub struct Scan<'q, N> {
    queue: &'q mut DegreeQueue<N>,
    next: usize,
    current: Option<usize>,
}

impl<N> Scan<'_, N> {
    /// Produce the next remaining node, or `None` at the end of the queue.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&N> {
        while self.next < self.queue.entries.len() {
            let slot = self.next;
            self.next += 1;
            if self.queue.live.contains(slot) {
                self.current = Some(slot);
                return Some(&self.queue.entries[slot].1);
            }
        }
        self.current = None;
        None
    }

    /// Remove the node most recently produced by [`Scan::next`] from the queue.
    ///
    /// Returns `false` if there is no such node or it was already removed.
    pub fn remove_current(&mut self) -> bool {
        match self.current.take() {
            Some(slot) => self.queue.remove_slot(slot),
            None => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::LabeledGraph;

    fn drain_order(queue: &mut DegreeQueue<&'static str>) -> Vec<&'static str> {
        let mut out = Vec::new();
        let mut scan = queue.scan();
        while let Some(node) = scan.next() {
            out.push(*node);
        }
        out
    }

    #[test]
    fn scans_highest_degree_first_stable_within_bucket() {
        let mut q = DegreeQueue::from_degrees([("a", 1), ("b", 3), ("c", 1), ("d", 2), ("e", 3)]);
        assert_eq!(drain_order(&mut q), ["b", "e", "d", "a", "c"]);
        assert_eq!(q.degree_buckets(), 3);
        assert_eq!(q.len(), 5);
    }

    #[test]
    fn removal_is_visible_to_fresh_scan() {
        let mut q = DegreeQueue::from_degrees([("a", 2), ("b", 1), ("c", 0)]);
        {
            let mut scan = q.scan();
            while let Some(node) = scan.next() {
                if *node != "b" {
                    assert!(scan.remove_current());
                }
            }
        }
        assert_eq!(q.len(), 1);
        assert_eq!(drain_order(&mut q), ["b"]);
        assert_eq!(q.degree_buckets(), 1);
    }

    #[test]
    fn remove_current_needs_a_current_node() {
        let mut q = DegreeQueue::from_degrees([("a", 0)]);
        let mut scan = q.scan();
        assert!(!scan.remove_current());
        assert!(scan.next().is_some());
        assert!(scan.remove_current());
        assert!(!scan.remove_current(), "already removed");
        assert!(scan.next().is_none());
        assert!(q.is_empty());
    }

    #[test]
    fn empty_queue() {
        let mut q: DegreeQueue<&str> = DegreeQueue::from_degrees([]);
        assert!(q.is_empty());
        assert_eq!(q.degree_buckets(), 0);
        assert!(q.scan().next().is_none());
    }

    #[test]
    fn from_graph_uses_collaborator_degrees() {
        let g = LabeledGraph::from_parts(["iso"], [("hub", "x"), ("hub", "y"), ("x", "y"), ("y", "z")]);
        let q = DegreeQueue::from_graph(&g);
        let order: Vec<_> = q.iter().filter_map(|idx| g.label(*idx)).collect();
        // hub=2, x=2, y=3, z=1, iso=0
        assert_eq!(order, ["y", "hub", "x", "z", "iso"]);
    }
}
