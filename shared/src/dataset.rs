//! Dataset indexing and artifact path resolution.
//!
//! Every simulated sample is addressed by a 1-based index. The three artifacts
//! produced for a sample (legacy reconstruction, time-reversal reconstruction and
//! ground truth) live in separate directories under a common data root, named
//! from a template with the index substituted as a 4-digit zero-padded decimal.
//!
//! Navigation is cyclic: stepping past the last sample returns to the first and
//! stepping before the first returns to the last, so [`DatasetIndex`] can never
//! leave its range.

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::artifact::ArtifactKind;

/// Number of samples produced by the simulation pipeline.
pub const DATASET_LEN: u32 = 2520;

/// Errors raised when constructing an index.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("index {index} outside dataset range [1, {len}]")]
    OutOfRange { index: u32, len: u32 },
    #[error("dataset must contain at least one sample")]
    EmptyDataset,
}

/// Navigation command issued by the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Previous,
    Next,
}

/// Validated 1-based index into a cyclic dataset of `len` samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DatasetIndex {
    value: u32,
    len: u32,
}

impl DatasetIndex {
    /// Create an index, rejecting values outside `[1, len]`.
    pub fn new(value: u32, len: u32) -> Result<Self, IndexError> {
        if len == 0 {
            return Err(IndexError::EmptyDataset);
        }
        if value == 0 || value > len {
            return Err(IndexError::OutOfRange { index: value, len });
        }
        Ok(Self { value, len })
    }

    /// First sample of a dataset with `len` samples.
    pub fn first(len: u32) -> Result<Self, IndexError> {
        Self::new(1, len)
    }

    /// The 1-based index value.
    pub fn get(&self) -> u32 {
        self.value
    }

    /// Size of the dataset this index walks over.
    pub fn dataset_len(&self) -> u32 {
        self.len
    }

    /// Following sample, wrapping from the last back to 1.
    pub fn next(self) -> Self {
        let value = if self.value >= self.len {
            1
        } else {
            self.value + 1
        };
        Self { value, ..self }
    }

    /// Preceding sample, wrapping from 1 to the last.
    pub fn prev(self) -> Self {
        let value = if self.value <= 1 {
            self.len
        } else {
            self.value - 1
        };
        Self { value, ..self }
    }

    /// Step one sample in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Previous => self.prev(),
            Direction::Next => self.next(),
        }
    }

    /// Index as it appears in file names, e.g. `0042`.
    pub fn padded(&self) -> String {
        format!("{:04}", self.value)
    }
}

impl fmt::Display for DatasetIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:04}", self.value)
    }
}

/// Relative file path containing an `{index}` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    relative: String,
}

impl PathTemplate {
    /// Placeholder replaced by the zero-padded index.
    pub const PLACEHOLDER: &'static str = "{index}";

    pub fn new(relative: impl Into<String>) -> Self {
        Self {
            relative: relative.into(),
        }
    }

    /// Template text as given.
    pub fn as_str(&self) -> &str {
        &self.relative
    }

    /// Concrete path for `index` under `root`.
    pub fn resolve(&self, root: &Path, index: DatasetIndex) -> PathBuf {
        root.join(self.relative.replace(Self::PLACEHOLDER, &index.padded()))
    }

    /// Directory the template's files live in, under `root`.
    pub fn directory(&self, root: &Path) -> PathBuf {
        let relative = Path::new(&self.relative);
        match relative.parent() {
            Some(parent) => root.join(parent),
            None => root.to_path_buf(),
        }
    }
}

/// One template per artifact source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplates {
    pub legacy: PathTemplate,
    pub time_reversal: PathTemplate,
    pub ground_truth: PathTemplate,
}

impl Default for PathTemplates {
    fn default() -> Self {
        Self {
            legacy: PathTemplate::new("data/recon/pa_data_{index}.mat"),
            time_reversal: PathTemplate::new("data/tr/tr_result_{index}.mat"),
            ground_truth: PathTemplate::new("data/ground_truth/ground_truth_{index}.mat"),
        }
    }
}

impl PathTemplates {
    pub fn for_kind(&self, kind: ArtifactKind) -> &PathTemplate {
        match kind {
            ArtifactKind::Legacy => &self.legacy,
            ArtifactKind::TimeReversal => &self.time_reversal,
            ArtifactKind::GroundTruth => &self.ground_truth,
        }
    }
}

/// Location of the artifact tree on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLayout {
    root: PathBuf,
    templates: PathTemplates,
}

impl DataLayout {
    /// Layout with the standard templates under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_templates(root, PathTemplates::default())
    }

    pub fn with_templates(root: impl Into<PathBuf>, templates: PathTemplates) -> Self {
        Self {
            root: root.into(),
            templates,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn templates(&self) -> &PathTemplates {
        &self.templates
    }

    /// File holding `kind` for sample `index`.
    pub fn artifact_path(&self, kind: ArtifactKind, index: DatasetIndex) -> PathBuf {
        self.templates.for_kind(kind).resolve(&self.root, index)
    }

    /// Artifact directories that do not exist under the root.
    pub fn missing_directories(&self) -> Vec<(ArtifactKind, PathBuf)> {
        ArtifactKind::DISPLAY_ORDER
            .iter()
            .map(|&kind| (kind, self.templates.for_kind(kind).directory(&self.root)))
            .filter(|(_, dir)| !dir.is_dir())
            .collect()
    }
}
