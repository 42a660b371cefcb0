//! Ordered color lists.
//!
//! A [`Palette`] preserves insertion order: for strip decode it is the
//! left-to-right swatch order, for frequency sampling it is descending
//! frequency rank. Nothing deduplicates a palette implicitly.

use crate::Rgba;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Ordered sequence of colors.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    colors: Vec<Rgba>,
}

impl Palette {
    /// Creates an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of colors.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// `true` if the palette holds no colors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Appends a color.
    #[inline]
    pub fn push(&mut self, color: Rgba) {
        self.colors.push(color);
    }

    /// Colors in order.
    #[inline]
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    /// Iterates colors in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Rgba> {
        self.colors.iter()
    }

    /// Keeps only the first `len` colors.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        self.colors.truncate(len);
    }

    /// Consumes the palette, returning its colors.
    pub fn into_vec(self) -> Vec<Rgba> {
        self.colors
    }
}

impl From<Vec<Rgba>> for Palette {
    fn from(colors: Vec<Rgba>) -> Self {
        Self { colors }
    }
}

impl FromIterator<Rgba> for Palette {
    fn from_iter<I: IntoIterator<Item = Rgba>>(iter: I) -> Self {
        Self {
            colors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Palette {
    type Item = Rgba;
    type IntoIter = std::vec::IntoIter<Rgba>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.into_iter()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Rgba;
    type IntoIter = std::slice::Iter<'a, Rgba>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

impl Index<usize> for Palette {
    type Output = Rgba;

    fn index(&self, index: usize) -> &Rgba {
        &self.colors[index]
    }
}

/// A palette with a display name, as read from and written to palette files.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NamedPalette {
    /// Palette name
    pub name: String,
    /// Colors in order
    pub colors: Palette,
}

impl NamedPalette {
    /// Creates a named palette.
    pub fn new(name: impl Into<String>, colors: Palette) -> Self {
        Self {
            name: name.into(),
            colors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_preserved() {
        let p: Palette = [Rgba::WHITE, Rgba::BLACK, Rgba::WHITE].into_iter().collect();
        assert_eq!(p.len(), 3);
        assert_eq!(p[0], Rgba::WHITE);
        assert_eq!(p[1], Rgba::BLACK);
        assert_eq!(p[2], Rgba::WHITE);
    }

    #[test]
    fn test_truncate() {
        let mut p = Palette::from(vec![Rgba::WHITE; 5]);
        p.truncate(2);
        assert_eq!(p.len(), 2);
    }
}
