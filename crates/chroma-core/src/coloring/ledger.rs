//! The color-assignment ledger.
//!
//! # Overview
//!
//! A [`Coloring`] maps nodes to colors and tracks which distinct colors are
//! in use. It is both the working state of the colorers and the result handed
//! back to callers; callers can also pre-populate one as a partial coloring
//! for [`crate::coloring::backtracking_from`].
//!
//! ## Invariants
//!
//! - A node is present iff it has been assigned a color.
//! - The in-use set is exactly the set of distinct assigned colors:
//!   assigning a color already in use does not grow it, overwriting a node's
//!   color releases the old one, and removing the last holder of a color
//!   shrinks it.
//!
//! Colors need only [`PartialEq`], so the in-use set is a small list of
//! `(color, holders)` pairs in first-use order.

use std::collections::HashMap;
use std::hash::Hash;

/// Node → color assignments plus the distinct colors they use.
#[derive(Debug, Clone)]
pub struct Coloring<N, C> {
    assignments: HashMap<N, C>,
    /// Distinct colors in first-use order, each with its number of holders.
    in_use: Vec<(C, usize)>,
}

impl<N, C> Default for Coloring<N, C> {
    fn default() -> Self {
        Self {
            assignments: HashMap::new(),
            in_use: Vec::new(),
        }
    }
}

impl<N, C> Coloring<N, C>
where
    N: Eq + Hash,
    C: Clone + PartialEq,
{
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `color` to `node`, replacing any previous color.
    ///
    /// Returns the previous color, if any.
    pub fn add_color(&mut self, node: N, color: C) -> Option<C> {
        self.acquire(&color);
        let previous = self.assignments.insert(node, color);
        if let Some(old) = &previous {
            self.release(old);
        }
        previous
    }

    /// Remove `node`'s color. No-op for an unassigned node.
    ///
    /// Returns the removed color, if any.
    pub fn remove_color(&mut self, node: &N) -> Option<C> {
        let removed = self.assignments.remove(node);
        if let Some(color) = &removed {
            self.release(color);
        }
        removed
    }

    /// The color assigned to `node`, or `None` if it is unassigned.
    #[must_use]
    pub fn color(&self, node: &N) -> Option<&C> {
        self.assignments.get(node)
    }

    /// Number of distinct colors currently in use.
    ///
    /// This is the number of colors the coloring actually required, not the
    /// palette size.
    #[must_use]
    pub fn required_colors(&self) -> usize {
        self.in_use.len()
    }

    /// Returns `true` if `node` has a color.
    #[must_use]
    pub fn contains_colored_node(&self, node: &N) -> bool {
        self.assignments.contains_key(node)
    }

    /// Distinct colors in use, in first-use order.
    pub fn colors_in_use(&self) -> impl Iterator<Item = &C> + '_ {
        self.in_use.iter().map(|(color, _)| color)
    }

    /// Nodes grouped by color, classes in first-use order.
    ///
    /// Node order within a class is unspecified.
    #[must_use]
    pub fn color_classes(&self) -> Vec<(&C, Vec<&N>)> {
        let mut classes: Vec<(&C, Vec<&N>)> = self
            .in_use
            .iter()
            .map(|(color, holders)| (color, Vec::with_capacity(*holders)))
            .collect();
        for (node, color) in &self.assignments {
            if let Some((_, members)) = classes.iter_mut().find(|(c, _)| *c == color) {
                members.push(node);
            }
        }
        classes
    }

    fn acquire(&mut self, color: &C) {
        match self.in_use.iter_mut().find(|(c, _)| c == color) {
            Some((_, holders)) => *holders += 1,
            None => self.in_use.push((color.clone(), 1)),
        }
    }

    fn release(&mut self, color: &C) {
        if let Some(pos) = self.in_use.iter().position(|(c, _)| c == color) {
            self.in_use[pos].1 -= 1;
            if self.in_use[pos].1 == 0 {
                self.in_use.remove(pos);
            }
        }
    }
}

impl<N, C> Coloring<N, C> {
    /// Number of colored nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Returns `true` if no node is colored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// All `(node, color)` assignments, in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&N, &C)> + '_ {
        self.assignments.iter()
    }
}

impl<N, C> PartialEq for Coloring<N, C>
where
    N: Eq + Hash,
    C: PartialEq,
{
    /// Two ledgers are equal when they hold the same assignments.
    fn eq(&self, other: &Self) -> bool {
        self.assignments == other.assignments
    }
}

impl<N, C> FromIterator<(N, C)> for Coloring<N, C>
where
    N: Eq + Hash,
    C: Clone + PartialEq,
{
    fn from_iter<I: IntoIterator<Item = (N, C)>>(iter: I) -> Self {
        let mut coloring = Self::new();
        for (node, color) in iter {
            coloring.add_color(node, color);
        }
        coloring
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
