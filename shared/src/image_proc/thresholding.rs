//! Closed intensity-band filter for normalized images.

use ndarray::Array2;
use std::fmt;

/// Closed interval `[low, high]` of normalized intensities to keep.
///
/// Values inside the band pass through unchanged; everything else, including
/// NaN, becomes 0. Applying the same band twice gives the same result as
/// applying it once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntensityBand {
    pub low: f64,
    pub high: f64,
}

impl IntensityBand {
    /// Normalized range highlighted as ischemic penumbra.
    pub const PENUMBRA: IntensityBand = IntensityBand {
        low: 0.45,
        high: 0.75,
    };

    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Whether `value` lies in the band (inclusive on both ends).
    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }

    /// Copy of `image` with every out-of-band element zeroed.
    pub fn apply(&self, image: &Array2<f64>) -> Array2<f64> {
        image.mapv(|v| if self.contains(v) { v } else { 0.0 })
    }
}

impl Default for IntensityBand {
    fn default() -> Self {
        Self::PENUMBRA
    }
}

impl fmt::Display for IntensityBand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{:.2}, {:.2}]", self.low, self.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_band_edges_are_inclusive() {
        let band = IntensityBand::PENUMBRA;
        assert!(band.contains(0.45));
        assert!(band.contains(0.75));
        assert!(band.contains(0.6));
        assert!(!band.contains(0.4499));
        assert!(!band.contains(0.7501));
        assert!(!band.contains(f64::NAN));
    }

    #[test]
    fn test_apply_zeroes_outside_band() {
        let image = array![[0.1, 0.45, 0.5], [0.75, 0.8, 1.0]];
        let banded = IntensityBand::PENUMBRA.apply(&image);

        assert_eq!(banded, array![[0.0, 0.45, 0.5], [0.75, 0.0, 0.0]]);
    }

    #[test]
    fn test_apply_preserves_shape_and_is_idempotent() {
        let image = Array2::from_shape_fn((7, 5), |(r, c)| ((r * 5 + c) as f64) / 34.0);
        let band = IntensityBand::PENUMBRA;

        let once = band.apply(&image);
        let twice = band.apply(&once);

        assert_eq!(once.dim(), image.dim());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_nan_becomes_zero() {
        let banded = IntensityBand::PENUMBRA.apply(&array![[f64::NAN, 0.5]]);
        assert_eq!(banded, array![[0.0, 0.5]]);
    }

    #[test]
    fn test_display() {
        assert_eq!(IntensityBand::PENUMBRA.to_string(), "[0.45, 0.75]");
    }
}
