//! Six-panel comparison viewer for PACT reconstructions.
//!
//! For one dataset index the viewer loads the ground truth, the time-reversal
//! reconstruction and the legacy reconstruction, normalizes each to \[0, 1\],
//! and shows them side by side together with their penumbra-band versions.
//! The operator steps through the dataset one sample at a time; stepping wraps
//! at both ends.
//!
//! The window itself lives behind [`DisplaySurface`] so the viewer logic can be
//! driven headless in tests. The binary supplies an SDL2 implementation.

use thiserror::Error;

pub mod compose;
pub mod config;
pub mod session;
pub mod surface;
pub mod viewer;

pub use compose::{compose_frame, RenderReport};
pub use config::ViewerConfig;
pub use session::{Phase, ViewerSession};
pub use surface::DisplaySurface;
pub use viewer::ComparisonViewer;

/// Failures that escape the viewer. Data problems never do; they are reported
/// as warnings and shown as blank panels instead.
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("invalid dataset index: {0}")]
    Index(#[from] shared::IndexError),

    #[error("display surface failed: {0}")]
    Surface(String),

    #[error("failed to draw frame: {0}")]
    Draw(#[from] viz::VizError),
}
