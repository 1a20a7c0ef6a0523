//! Where rendered frames go.

use viz::ComparisonFrame;

use crate::ViewerError;

/// A window or other sink that can show a comparison frame.
///
/// `present` must have made the frame visible by the time it returns.
pub trait DisplaySurface {
    /// Draw and show a new frame.
    fn present(&mut self, frame: &ComparisonFrame) -> Result<(), ViewerError>;

    /// Show the last presented frame again, e.g. after the window was exposed.
    fn refresh(&mut self) -> Result<(), ViewerError>;
}
