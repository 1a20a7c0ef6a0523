//! Test helpers for the PACT comparison viewer
//!
//! This crate provides fixture builders used by the tests of the other
//! workspace crates. Artifacts are MAT files, so the main helper here is a
//! small Level-5 MAT writer able to produce the containers the simulation and
//! reconstruction drivers emit.

pub mod mat;

pub use mat::{encode_mat, write_mat, MatVariable};

use ndarray::Array2;

/// Smooth synthetic image with a single bright disc, scaled to `peak`.
///
/// Values fall off linearly from the disc centre so that normalized output
/// spans the whole \[0, 1\] range, with a ring inside the penumbra band.
pub fn disc_image(rows: usize, cols: usize, peak: f64) -> Array2<f64> {
    let (cy, cx) = (rows as f64 / 2.0, cols as f64 / 2.0);
    let radius = (rows.min(cols) as f64 / 2.0).max(1.0);
    Array2::from_shape_fn((rows, cols), |(r, c)| {
        let d = ((r as f64 - cy).powi(2) + (c as f64 - cx).powi(2)).sqrt();
        peak * (1.0 - d / radius).max(0.0)
    })
}
