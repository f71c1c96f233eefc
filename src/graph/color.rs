// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Color type and runtime palette.
//!
//! A [`Color`] is an index into a [`Palette`]. The palette is ordinary
//! runtime data: the solver is parameterized by however many colors the
//! caller supplies, and "uncolored" is represented as `Option<Color>::None`
//! rather than a sentinel palette entry.

/// A color in the range `0..palette.len()`.
///
/// This is a newtype wrapper to provide type safety and prevent mixing
/// colors with other integer values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color(u8);

impl Color {
    /// Create a new color from a palette index.
    pub fn new(value: u8) -> Self {
        Self(value)
    }

    /// Get the underlying value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Get the color as a usize (for array indexing).
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// The color names the original map-coloring problem used.
const DEFAULT_NAMES: [&str; 4] = ["Blue", "Yellow", "Red", "Green"];

/// A fixed set of named colors available to the solver.
///
/// The palette size is an input to the search, not something the search
/// discovers; a graph that cannot be colored with this palette is reported
/// as unsatisfiable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    names: Vec<String>,
}

impl Palette {
    /// A palette with the given color names, in canonical order.
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// A palette of `size` colors, using the four classic map-coloring
    /// names first and generated names beyond them.
    pub fn of_size(size: usize) -> Self {
        let names = (0..size)
            .map(|i| match DEFAULT_NAMES.get(i) {
                Some(name) => (*name).to_string(),
                None => format!("Color{}", i + 1),
            })
            .collect();
        Self { names }
    }

    /// Number of colors in the palette.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True if the palette has no colors at all.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The display name of a color.
    ///
    /// # Panics
    ///
    /// Panics if the color is not from this palette.
    pub fn name(&self, color: Color) -> &str {
        &self.names[color.as_usize()]
    }

    /// All colors in canonical order.
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        (0..self.names.len()).map(|i| Color::new(i as u8))
    }
}

impl Default for Palette {
    /// The original four-color map palette.
    fn default() -> Self {
        Self::of_size(DEFAULT_NAMES.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_roundtrip() {
        let c = Color::new(3);
        assert_eq!(c.value(), 3);
        assert_eq!(c.as_usize(), 3);
    }

    #[test]
    fn test_default_palette() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 4);
        assert_eq!(palette.name(Color::new(0)), "Blue");
        assert_eq!(palette.name(Color::new(3)), "Green");
    }

    #[test]
    fn test_oversized_palette_names() {
        let palette = Palette::of_size(6);
        assert_eq!(palette.name(Color::new(4)), "Color5");
        assert_eq!(palette.name(Color::new(5)), "Color6");
    }

    #[test]
    fn test_canonical_order() {
        let palette = Palette::of_size(3);
        let colors: Vec<u8> = palette.colors().map(Color::value).collect();
        assert_eq!(colors, vec![0, 1, 2]);
    }
}
