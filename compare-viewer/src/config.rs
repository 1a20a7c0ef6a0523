//! Viewer settings.

use std::path::Path;

use shared::dataset::PathTemplates;
use shared::{DataLayout, IntensityBand, PixelShape, DATASET_LEN};

/// Everything that shapes a rendered frame apart from the data itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    /// Number of samples; indices run from 1 to this value
    pub dataset_len: u32,
    /// Band highlighted in the second row
    pub band: IntensityBand,
    pub templates: PathTemplates,
    /// Shape of the blank image shown when an artifact cannot be loaded
    pub nominal_shape: PixelShape,
    /// Canvas size in pixels
    pub canvas_width: u32,
    pub canvas_height: u32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            dataset_len: DATASET_LEN,
            band: IntensityBand::PENUMBRA,
            templates: PathTemplates::default(),
            nominal_shape: PixelShape::NOMINAL,
            canvas_width: 1800,
            canvas_height: 1000,
        }
    }
}

impl ViewerConfig {
    /// Artifact layout under `root` using these templates.
    pub fn layout(&self, root: &Path) -> DataLayout {
        DataLayout::with_templates(root, self.templates.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{ArtifactKind, DatasetIndex};
    use std::path::PathBuf;

    #[test]
    fn test_defaults() {
        let config = ViewerConfig::default();
        assert_eq!(config.dataset_len, 2520);
        assert_eq!(config.band, IntensityBand::new(0.45, 0.75));
        assert_eq!(config.nominal_shape.to_dim(), (256, 256));
        assert_eq!((config.canvas_width, config.canvas_height), (1800, 1000));
    }

    #[test]
    fn test_layout_uses_templates() {
        let mut config = ViewerConfig::default();
        config.templates.ground_truth = shared::dataset::PathTemplate::new("gt/{index}.mat");

        let layout = config.layout(Path::new("/srv"));
        let index = DatasetIndex::new(12, config.dataset_len).unwrap();
        assert_eq!(
            layout.artifact_path(ArtifactKind::GroundTruth, index),
            PathBuf::from("/srv/gt/0012.mat")
        );
    }
}
