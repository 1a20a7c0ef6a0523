//! Rendering of reconstruction comparison frames.
//!
//! A [`ComparisonFrame`] is six titled images in a 2×3 grid: the first row holds
//! the normalized ground truth and the two reconstructions, the second row the
//! same images restricted to an intensity band. This crate turns a frame into
//! pixels with `plotters`; it knows nothing about files or windows.
//!
//! # Layout
//!
//! Each panel is drawn with its title above, pixel-index axes on the left and
//! bottom, and a colorbar for the fixed \[0, 1\] display range on the right. The
//! plot area keeps the image aspect ratio, so square reconstruction grids stay
//! square whatever the window size. Row 0 of an image is drawn at the top.
//!
//! ```rust,ignore
//! use viz::{render_to_image, ComparisonFrame};
//!
//! let frame: ComparisonFrame = build_frame();
//! let rgb = render_to_image(&frame, 1800, 1000)?;
//! rgb.save("comparison.png")?;
//! ```

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

pub mod colormap;
pub mod frame;
pub mod layout;
pub mod panels;

pub use colormap::{inferno, inferno_rgb};
pub use frame::{ComparisonFrame, Panel};
pub use panels::{draw_frame, render_to_image};

/// Errors raised while rendering a frame.
#[derive(Debug, Error)]
pub enum VizError {
    /// The plotting backend rejected a drawing operation.
    #[error("Drawing error: {0}")]
    Drawing(String),

    /// Target canvas cannot hold a frame.
    #[error("Canvas of {width}x{height} pixels is too small to draw on")]
    CanvasTooSmall { width: u32, height: u32 },
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for VizError {
    fn from(e: DrawingAreaErrorKind<E>) -> Self {
        VizError::Drawing(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, VizError>;
