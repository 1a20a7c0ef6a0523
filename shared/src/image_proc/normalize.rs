//! Normalization of reconstruction artifacts to the \[0, 1\] display range.
//!
//! Each artifact is reduced to a non-negative magnitude image and divided by its
//! own maximum. When the maximum is not positive (an all-zero image) the division
//! is skipped and the image is returned unchanged, which keeps it all-zero. An
//! infinite maximum maps the infinite entries to 1 and every finite entry to 0.
//!
//! Two policies exist because the ground-truth source is handled differently from
//! the two reconstructions:
//!
//! - [`Normalization::ClampNegatives`] takes the magnitude and then clamps to zero
//!   before searching for the maximum. Non-finite entries become 0.
//! - [`Normalization::MagnitudeOnly`] takes the magnitude only. NaN entries are
//!   skipped when searching for the maximum but stay NaN in the output; the
//!   colormap and the intensity band both treat them as 0.

use ndarray::Array2;

/// How an artifact is reduced to a non-negative image before scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Normalization {
    /// `|x|`, clamped at zero, then divided by the maximum.
    ClampNegatives,
    /// `|x|`, then divided by the maximum.
    MagnitudeOnly,
}

impl Normalization {
    /// Apply the policy, returning a new array of the same shape.
    pub fn apply(&self, image: &Array2<f64>) -> Array2<f64> {
        let magnitude = match self {
            Normalization::ClampNegatives => image.mapv(|v| {
                if v.is_finite() {
                    v.abs().max(0.0)
                } else {
                    0.0
                }
            }),
            Normalization::MagnitudeOnly => image.mapv(f64::abs),
        };
        scale_by_max(magnitude)
    }
}

/// Largest non-NaN element, or `None` when there is none.
pub fn max_ignoring_nan(image: &Array2<f64>) -> Option<f64> {
    image
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(None, |acc: Option<f64>, v| {
            Some(match acc {
                Some(max) if max >= v => max,
                _ => v,
            })
        })
}

/// Divide every element by the maximum when the maximum is positive.
///
/// An infinite maximum dominates everything else: infinite entries become 1
/// and finite ones 0. NaN entries stay NaN.
fn scale_by_max(mut image: Array2<f64>) -> Array2<f64> {
    match max_ignoring_nan(&image) {
        Some(max) if max == f64::INFINITY => {
            image.mapv_inplace(|v| {
                if v.is_nan() {
                    v
                } else if v == f64::INFINITY {
                    1.0
                } else {
                    0.0
                }
            });
            image
        }
        Some(max) if max > 0.0 => {
            image.mapv_inplace(|v| v / max);
            image
        }
        _ => image,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_scales_to_unit_max() {
        let image = array![[0.0, 2.0], [4.0, 8.0]];
        let normalized = Normalization::ClampNegatives.apply(&image);

        assert_relative_eq!(normalized[[0, 1]], 0.25);
        assert_relative_eq!(normalized[[1, 0]], 0.5);
        assert_relative_eq!(normalized[[1, 1]], 1.0);
    }

    #[test]
    fn test_negative_values_use_magnitude() {
        let image = array![[-4.0, 2.0], [0.0, 1.0]];
        for policy in [Normalization::ClampNegatives, Normalization::MagnitudeOnly] {
            let normalized = policy.apply(&image);
            assert_relative_eq!(normalized[[0, 0]], 1.0);
            assert_relative_eq!(normalized[[0, 1]], 0.5);
            assert_relative_eq!(normalized[[1, 1]], 0.25);
        }
    }

    #[test]
    fn test_all_zero_input_stays_zero() {
        let image = Array2::<f64>::zeros((16, 16));
        for policy in [Normalization::ClampNegatives, Normalization::MagnitudeOnly] {
            let normalized = policy.apply(&image);
            assert_eq!(normalized.dim(), (16, 16));
            assert!(normalized.iter().all(|&v| v == 0.0));
        }
    }

    #[test]
    fn test_output_in_unit_interval() {
        let image = Array2::from_shape_fn((32, 32), |(r, c)| {
            (r as f64 - 15.0) * (c as f64 * 0.37).sin() * 1e3
        });
        for policy in [Normalization::ClampNegatives, Normalization::MagnitudeOnly] {
            let normalized = policy.apply(&image);
            assert!(normalized.iter().all(|&v| (0.0..=1.0).contains(&v)));
            assert_relative_eq!(max_ignoring_nan(&normalized).unwrap(), 1.0);
        }
    }

    #[test]
    fn test_idempotent() {
        let image = Array2::from_shape_fn((8, 8), |(r, c)| (r * 8 + c) as f64 - 20.0);
        for policy in [Normalization::ClampNegatives, Normalization::MagnitudeOnly] {
            let once = policy.apply(&image);
            let twice = policy.apply(&once);
            for (a, b) in once.iter().zip(twice.iter()) {
                assert_relative_eq!(a, b);
            }
        }
    }

    #[test]
    fn test_nan_handling_differs_between_policies() {
        let image = array![[f64::NAN, 2.0], [1.0, 0.0]];

        let clamped = Normalization::ClampNegatives.apply(&image);
        assert_eq!(clamped[[0, 0]], 0.0);
        assert_relative_eq!(clamped[[1, 0]], 0.5);

        let magnitude = Normalization::MagnitudeOnly.apply(&image);
        assert!(magnitude[[0, 0]].is_nan());
        assert_relative_eq!(magnitude[[0, 1]], 1.0);
        assert_relative_eq!(magnitude[[1, 0]], 0.5);
    }

    #[test]
    fn test_infinite_maximum_stays_in_unit_interval() {
        let image = array![[f64::INFINITY, 5.0], [1.0, 0.0]];

        let magnitude = Normalization::MagnitudeOnly.apply(&image);
        assert_eq!(magnitude, array![[1.0, 0.0], [0.0, 0.0]]);

        let clamped = Normalization::ClampNegatives.apply(&image);
        assert_eq!(clamped, array![[0.0, 1.0], [0.2, 0.0]]);

        let mixed = Normalization::MagnitudeOnly
            .apply(&array![[f64::NEG_INFINITY, f64::NAN], [3.0, f64::INFINITY]]);
        assert_eq!(mixed[[0, 0]], 1.0);
        assert!(mixed[[0, 1]].is_nan());
        assert_eq!(mixed[[1, 0]], 0.0);
        assert_eq!(mixed[[1, 1]], 1.0);
    }

    #[test]
    fn test_max_ignoring_nan() {
        assert_eq!(max_ignoring_nan(&array![[f64::NAN, 3.0], [7.0, 1.0]]), Some(7.0));
        assert_eq!(max_ignoring_nan(&array![[f64::NAN]]), None);
        assert_eq!(max_ignoring_nan(&Array2::<f64>::zeros((0, 0))), None);
    }
}
