//! Store-floor grid geometry.
//!
//! The recorded data addresses the floor as a 1-based grid of square cells;
//! the rendering collaborator addresses it in pixels.  The mapping is
//!
//! ```text
//! pixel = (grid - 1) * cell_size
//! ```
//!
//! with `cell_size` fixed for the whole replay (see
//! [`ReplayConfig`][crate::ReplayConfig]).

use std::fmt;

/// A 1-based cell coordinate on the store floor grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCell {
    pub x: u32,
    pub y: u32,
}

impl GridCell {
    #[inline]
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Top-left pixel of this cell for a given cell size.
    ///
    /// Coordinates are 1-based in the data; a malformed 0 coordinate maps to
    /// pixel 0 rather than wrapping.
    #[inline]
    pub fn to_pixel(self, cell_size: u32) -> PixelPoint {
        PixelPoint {
            x: self.x.saturating_sub(1) * cell_size,
            y: self.y.saturating_sub(1) * cell_size,
        }
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Top-left pixel position of a cell on the rendering surface.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelPoint {
    pub x: u32,
    pub y: u32,
}

impl fmt::Display for PixelPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "px({}, {})", self.x, self.y)
    }
}
