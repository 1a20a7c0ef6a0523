//! Image dimensions and size utilities

use ndarray::Array2;
use std::fmt;

/// Image dimensions structure
///
/// Represents the width and height of a reconstruction grid.
/// Uses usize for direct compatibility with ndarray indexing, where arrays are
/// addressed `[row, col]` and therefore `height` is the row count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelShape {
    /// Image width in pixels (columns)
    pub width: usize,
    /// Image height in pixels (rows)
    pub height: usize,
}

impl PixelShape {
    /// Grid size used by the forward simulation and every reconstruction of it.
    pub const NOMINAL: PixelShape = PixelShape {
        width: 256,
        height: 256,
    };

    /// Create a new PixelShape
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Get total number of pixels
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// ndarray dimension tuple `(rows, cols)`
    pub fn to_dim(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// All-zero image of this shape, the stand-in for any artifact that
    /// could not be loaded.
    pub fn zeros(&self) -> Array2<f64> {
        Array2::zeros(self.to_dim())
    }
}

impl Default for PixelShape {
    fn default() -> Self {
        Self::NOMINAL
    }
}

impl fmt::Display for PixelShape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
