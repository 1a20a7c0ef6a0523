//! Building the six-panel frame for one sample.
//!
//! Every call reads the three artifacts from disk again; nothing is cached
//! between renders, so a file rewritten by the pipeline shows up the next time
//! its index is displayed.

use log::debug;
use shared::artifact::{LoadWarning, ResolvedArtifact};
use shared::{load_artifact, resolve_outcome, ArtifactKind, DataLayout, DatasetIndex, LoadOutcome};
use viz::{ComparisonFrame, Panel};

use crate::ViewerConfig;

/// Everything produced by one render, kept for the caller to inspect.
#[derive(Debug, Clone)]
pub struct RenderReport {
    pub index: DatasetIndex,
    pub frame: ComparisonFrame,
    /// Resolved artifacts in display order
    pub artifacts: [ResolvedArtifact; 3],
    pub warnings: Vec<LoadWarning>,
}

/// Load, normalize and band-filter the three artifacts of `index`.
pub fn compose_frame(
    layout: &DataLayout,
    config: &ViewerConfig,
    index: DatasetIndex,
) -> RenderReport {
    let artifacts =
        ArtifactKind::DISPLAY_ORDER.map(|kind| resolve_artifact(layout, config, kind, index));

    let raw = artifacts
        .each_ref()
        .map(|a| Panel::new(raw_title(a.kind, index), a.image.clone()));
    let banded = artifacts.each_ref().map(|a| {
        Panel::new(
            band_title(a.kind, config, index),
            config.band.apply(&a.image),
        )
    });

    let warnings = artifacts
        .iter()
        .filter_map(|a| a.warning.clone())
        .collect();

    RenderReport {
        index,
        frame: ComparisonFrame {
            caption: caption(index),
            grid: [raw, banded],
        },
        artifacts,
        warnings,
    }
}

fn resolve_artifact(
    layout: &DataLayout,
    config: &ViewerConfig,
    kind: ArtifactKind,
    index: DatasetIndex,
) -> ResolvedArtifact {
    let path = layout.artifact_path(kind, index);
    let outcome = load_artifact(kind, &path);
    if let LoadOutcome::Loaded(loaded) = &outcome {
        debug!(
            "Loaded {} from {} (array `{}`, {}x{})",
            kind.label(),
            path.display(),
            loaded.array_name,
            loaded.image.nrows(),
            loaded.image.ncols()
        );
    }
    resolve_outcome(kind, path, outcome, config.nominal_shape)
}

fn raw_title(kind: ArtifactKind, index: DatasetIndex) -> String {
    format!("{} #{}", kind.label(), index)
}

fn band_title(kind: ArtifactKind, config: &ViewerConfig, index: DatasetIndex) -> String {
    format!("{} band {} #{}", kind.label(), config.band, index)
}

fn caption(index: DatasetIndex) -> String {
    format!(
        "Sample {} / {}  (\u{2190}/\u{2192} navigate, Esc quits)",
        index,
        index.dataset_len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_tree_gives_blank_frame() {
        let temp_dir = TempDir::new().unwrap();
        let config = ViewerConfig::default();
        let layout = config.layout(temp_dir.path());
        let index = DatasetIndex::new(3, config.dataset_len).unwrap();

        let report = compose_frame(&layout, &config, index);

        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].kind, ArtifactKind::GroundTruth);
        for panel in report.frame.panels() {
            assert_eq!(panel.image.dim(), (256, 256));
            assert!(panel.image.iter().all(|&v| v == 0.0));
        }
    }

    #[test]
    fn test_titles_and_caption() {
        let temp_dir = TempDir::new().unwrap();
        let config = ViewerConfig::default();
        let layout = config.layout(temp_dir.path());
        let index = DatasetIndex::new(1, config.dataset_len).unwrap();

        let report = compose_frame(&layout, &config, index);

        assert_eq!(
            report.frame.titles(),
            vec![
                "Ground Truth #0001",
                "Time-Reversal #0001",
                "Legacy Recon #0001",
                "Ground Truth band [0.45, 0.75] #0001",
                "Time-Reversal band [0.45, 0.75] #0001",
                "Legacy Recon band [0.45, 0.75] #0001",
            ]
        );
        assert_eq!(
            report.frame.caption,
            "Sample 0001 / 2520  (\u{2190}/\u{2192} navigate, Esc quits)"
        );
    }
}
