//! Display-side image processing for reconstruction comparison.
//!
//! Two stages run on every artifact before it reaches a panel:
//!
//! - **normalize**: magnitude, optional negative clamping, and scaling by the
//!   image's own maximum so every source lands in \[0, 1\]
//! - **thresholding**: a closed intensity band that zeroes everything outside
//!   it, used to highlight the ischemic penumbra range
//!
//! Both stages are pure functions of their input array and never change its shape.

pub mod normalize;
pub mod thresholding;

pub use normalize::{max_ignoring_nan, Normalization};
pub use thresholding::IntensityBand;
