//! Ordered, duplicate-free color palettes.
//!
//! The order of a palette is the order in which both colorers try colors, so
//! results are reproducible for a given palette. Colors only need equality;
//! duplicates are dropped on construction, keeping the first occurrence.

use std::ops::Index;

/// A finite set of distinct colors with a fixed iteration order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette<C> {
    colors: Vec<C>,
}

impl<C: PartialEq> Palette<C> {
    /// Build a palette, dropping repeated colors.
    #[must_use]
    pub fn new(colors: impl IntoIterator<Item = C>) -> Self {
        let mut palette = Self { colors: Vec::new() };
        for color in colors {
            palette.push(color);
        }
        palette
    }

    /// Append `color` unless it is already present. Returns `true` if added.
    pub fn push(&mut self, color: C) -> bool {
        if self.colors.contains(&color) {
            return false;
        }
        self.colors.push(color);
        true
    }

    /// Returns `true` if `color` belongs to the palette.
    #[must_use]
    pub fn contains(&self, color: &C) -> bool {
        self.colors.contains(color)
    }
}

impl<C> Palette<C> {
    /// Number of colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns `true` if the palette has no colors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Colors in trial order.
    pub fn iter(&self) -> std::slice::Iter<'_, C> {
        self.colors.iter()
    }

    /// Colors as a slice, in trial order.
    #[must_use]
    pub fn as_slice(&self) -> &[C] {
        &self.colors
    }
}

impl Palette<usize> {
    /// The palette `0, 1, …, n - 1`.
    #[must_use]
    pub fn numbered(n: usize) -> Self {
        Self {
            colors: (0..n).collect(),
        }
    }
}

impl<C> Index<usize> for Palette<C> {
    type Output = C;

    fn index(&self, index: usize) -> &C {
        &self.colors[index]
    }
}

impl<C: PartialEq> From<Vec<C>> for Palette<C> {
    fn from(colors: Vec<C>) -> Self {
        Self::new(colors)
    }
}

impl<C: PartialEq, const N: usize> From<[C; N]> for Palette<C> {
    fn from(colors: [C; N]) -> Self {
        Self::new(colors)
    }
}

impl<C: PartialEq> FromIterator<C> for Palette<C> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a, C> IntoIterator for &'a Palette<C> {
    type Item = &'a C;
    type IntoIter = std::slice::Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}
