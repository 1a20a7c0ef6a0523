//! Shared components for the PACT reconstruction comparison tools.
//!
//! This crate holds everything that does not touch a window: dataset index
//! arithmetic, artifact path resolution, reading MAT containers, picking the
//! image array out of a container, and the normalization and intensity-band
//! filters applied before display.

pub mod artifact;
pub mod dataset;
pub mod image_proc;
pub mod image_size;

pub use artifact::{load_artifact, resolve_outcome, ArtifactError, ArtifactKind, LoadOutcome};
pub use dataset::{DataLayout, DatasetIndex, Direction, IndexError, DATASET_LEN};
pub use image_proc::{IntensityBand, Normalization};
pub use image_size::PixelShape;
