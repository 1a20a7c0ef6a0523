//! Turning load outcomes into displayable images.
//!
//! This is the single place that decides what a failed load looks like on
//! screen (an all-zero image of nominal shape) and whether it deserves a
//! warning. Callers log the returned [`LoadWarning`]s; nothing here logs.

use ndarray::Array2;
use std::fmt;
use std::path::PathBuf;

use super::{ArtifactKind, LoadOutcome};
use crate::image_size::PixelShape;

/// Non-fatal problem found while loading an artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub message: String,
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Normalized image for one source, with its provenance.
#[derive(Debug, Clone)]
pub struct ResolvedArtifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    /// Normalized image, or zeros of nominal shape when loading failed
    pub image: Array2<f64>,
    /// Container variable the image came from, when it loaded
    pub array_name: Option<String>,
    pub warning: Option<LoadWarning>,
}

impl ResolvedArtifact {
    pub fn is_loaded(&self) -> bool {
        self.array_name.is_some()
    }
}

/// Apply the per-source normalization, or substitute zeros and decide on a
/// warning when the load did not succeed.
pub fn resolve_outcome(
    kind: ArtifactKind,
    path: PathBuf,
    outcome: LoadOutcome,
    nominal: PixelShape,
) -> ResolvedArtifact {
    let (image, array_name, message) = match outcome {
        LoadOutcome::Loaded(loaded) => (
            kind.normalization().apply(&loaded.image),
            Some(loaded.array_name),
            None,
        ),
        LoadOutcome::Missing => {
            let message = kind
                .warns_when_missing()
                .then(|| format!("{} file not found: {}", kind.label(), path.display()));
            (nominal.zeros(), None, message)
        }
        LoadOutcome::Unreadable(e) => {
            let message = format!("{} file unreadable: {}: {}", kind.label(), path.display(), e);
            (nominal.zeros(), None, Some(message))
        }
    };

    let warning = message.map(|message| LoadWarning {
        kind,
        path: path.clone(),
        message,
    });

    ResolvedArtifact {
        kind,
        path,
        image,
        array_name,
        warning,
    }
}
