//! Loading reconstruction artifacts from disk.
//!
//! An artifact is one MAT container holding one or more named numeric arrays.
//! Loading never fails outright: [`load_artifact`] reports a [`LoadOutcome`]
//! that distinguishes an absent file from one that exists but cannot be turned
//! into an image, and [`resolve_outcome`] turns that outcome into the image
//! shown on screen plus an optional warning.

pub mod mat;
pub mod resolve;
pub mod selection;

use log::debug;
use ndarray::Array2;
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::image_proc::Normalization;

pub use mat::{read_mat_arrays, NamedArray};
pub use resolve::{resolve_outcome, LoadWarning, ResolvedArtifact};
pub use selection::SelectionPolicy;

/// Name the time-reversal driver stores its reconstruction under.
pub const TIME_REVERSAL_ARRAY: &str = "p0_recon";

/// The three per-sample sources compared by the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Reconstruction from the earlier pipeline
    Legacy,
    /// k-space time-reversal reconstruction
    TimeReversal,
    /// Simulated initial pressure distribution
    GroundTruth,
}

impl ArtifactKind {
    /// Column order of the comparison grid.
    pub const DISPLAY_ORDER: [ArtifactKind; 3] = [
        ArtifactKind::GroundTruth,
        ArtifactKind::TimeReversal,
        ArtifactKind::Legacy,
    ];

    /// Human readable name used in panel titles and log lines.
    pub fn label(&self) -> &'static str {
        match self {
            ArtifactKind::Legacy => "Legacy Recon",
            ArtifactKind::TimeReversal => "Time-Reversal",
            ArtifactKind::GroundTruth => "Ground Truth",
        }
    }

    /// Which array of the container holds the image.
    pub fn selection_policy(&self) -> SelectionPolicy {
        match self {
            ArtifactKind::TimeReversal => {
                SelectionPolicy::PreferNamedElseFirst2d(TIME_REVERSAL_ARRAY)
            }
            ArtifactKind::Legacy | ArtifactKind::GroundTruth => SelectionPolicy::FirstArray,
        }
    }

    /// Ground truth is only reduced to its magnitude; the reconstructions are
    /// also clamped at zero before their maximum is taken.
    pub fn normalization(&self) -> Normalization {
        match self {
            ArtifactKind::GroundTruth => Normalization::MagnitudeOnly,
            ArtifactKind::Legacy | ArtifactKind::TimeReversal => Normalization::ClampNegatives,
        }
    }

    /// Missing reconstructions are routine during partial pipeline runs; a
    /// missing ground truth is not.
    pub fn warns_when_missing(&self) -> bool {
        matches!(self, ArtifactKind::GroundTruth)
    }
}

/// Reasons an existing artifact file could not produce an image.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("read failed: {0}")]
    Io(#[from] io::Error),

    #[error("malformed MAT container: {0}")]
    Parse(String),

    #[error("file contains no numeric arrays")]
    NoArrays,

    #[error("no 2-D numeric array found (and no array named `{preferred}`)")]
    NoImageArray { preferred: &'static str },

    #[error("array `{name}` has shape {dims:?}, expected a non-empty 2-D array")]
    NotAnImage { name: String, dims: Vec<usize> },
}

/// Image taken from an artifact, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedImage {
    /// Name of the container variable the image came from
    pub array_name: String,
    pub image: Array2<f64>,
}

/// Result of one load attempt.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(LoadedImage),
    Missing,
    Unreadable(ArtifactError),
}

/// Attempt to read the image for `kind` from `path`.
///
/// Every failure is captured in the returned outcome; the file is read afresh
/// on every call.
pub fn load_artifact(kind: ArtifactKind, path: &Path) -> LoadOutcome {
    if !path.exists() {
        return LoadOutcome::Missing;
    }
    match read_image(kind, path) {
        Ok(image) => LoadOutcome::Loaded(image),
        Err(e) => LoadOutcome::Unreadable(e),
    }
}

fn read_image(kind: ArtifactKind, path: &Path) -> Result<LoadedImage, ArtifactError> {
    let arrays = read_mat_arrays(path)?;
    if arrays.is_empty() {
        return Err(ArtifactError::NoArrays);
    }

    let policy = kind.selection_policy();
    let selected = policy.select(&arrays).ok_or(match policy {
        SelectionPolicy::PreferNamedElseFirst2d(preferred) => {
            ArtifactError::NoImageArray { preferred }
        }
        SelectionPolicy::FirstArray => ArtifactError::NoArrays,
    })?;

    debug!(
        "{}: selected `{}` of {} array(s) in {}",
        kind.label(),
        selected.name,
        arrays.len(),
        path.display()
    );
    Ok(LoadedImage {
        array_name: selected.name.clone(),
        image: selected.to_image()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_policies() {
        assert_eq!(
            ArtifactKind::TimeReversal.selection_policy(),
            SelectionPolicy::PreferNamedElseFirst2d("p0_recon")
        );
        assert_eq!(
            ArtifactKind::Legacy.selection_policy(),
            SelectionPolicy::FirstArray
        );
        assert_eq!(
            ArtifactKind::GroundTruth.normalization(),
            Normalization::MagnitudeOnly
        );
        assert_eq!(
            ArtifactKind::TimeReversal.normalization(),
            Normalization::ClampNegatives
        );
    }

    #[test]
    fn test_only_ground_truth_warns_when_missing() {
        assert!(ArtifactKind::GroundTruth.warns_when_missing());
        assert!(!ArtifactKind::Legacy.warns_when_missing());
        assert!(!ArtifactKind::TimeReversal.warns_when_missing());
    }

    #[test]
    fn test_missing_file() {
        let outcome = load_artifact(
            ArtifactKind::Legacy,
            Path::new("/nonexistent/pa_data_0001.mat"),
        );
        assert!(matches!(outcome, LoadOutcome::Missing));
    }
}
