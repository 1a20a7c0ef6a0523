//! Geometry of the comparison grid.

/// Panel rows in a comparison frame.
pub const GRID_ROWS: usize = 2;
/// Panel columns in a comparison frame.
pub const GRID_COLS: usize = 3;

/// Width reserved on the right of each panel for its colorbar.
pub const LEGEND_WIDTH: u32 = 70;
/// Height of the pixel-index labels under each image.
pub const X_LABEL_AREA: u32 = 36;
/// Width of the pixel-index labels left of each image.
pub const Y_LABEL_AREA: u32 = 50;

pub const CAPTION_FONT_SIZE: u32 = 24;
pub const TITLE_FONT_SIZE: u32 = 18;
pub const TICK_FONT_SIZE: u32 = 12;

/// Smallest canvas that leaves every panel a visible plot area.
pub const fn min_canvas_size() -> (u32, u32) {
    let panel_w = LEGEND_WIDTH + Y_LABEL_AREA + 32;
    let panel_h = 2 * TITLE_FONT_SIZE + X_LABEL_AREA + 32;
    (
        GRID_COLS as u32 * panel_w,
        2 * CAPTION_FONT_SIZE + GRID_ROWS as u32 * panel_h,
    )
}

/// Margins that shrink a drawing area to a box with a given aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EqualAspect {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

impl EqualAspect {
    /// Centre the largest `cols × rows` aspect box inside `available`
    /// `(width, height)` pixels.
    ///
    /// Degenerate inputs (an empty image or area) give zero margins.
    pub fn fit(available: (u32, u32), rows: usize, cols: usize) -> Self {
        let (width, height) = available;
        if rows == 0 || cols == 0 || width == 0 || height == 0 {
            return Self::default();
        }

        let scale = (f64::from(width) / cols as f64).min(f64::from(height) / rows as f64);
        let box_w = ((cols as f64 * scale).floor() as u32).clamp(1, width);
        let box_h = ((rows as f64 * scale).floor() as u32).clamp(1, height);

        let spare_w = width - box_w;
        let spare_h = height - box_h;
        Self {
            top: spare_h / 2,
            bottom: spare_h - spare_h / 2,
            left: spare_w / 2,
            right: spare_w - spare_w / 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inner(fit: EqualAspect, (width, height): (u32, u32)) -> (u32, u32) {
        (width - fit.left - fit.right, height - fit.top - fit.bottom)
    }

    #[test]
    fn test_square_image_in_wide_area() {
        let fit = EqualAspect::fit((300, 200), 256, 256);
        assert_eq!(inner(fit, (300, 200)), (200, 200));
        assert_eq!((fit.left, fit.right), (50, 50));
        assert_eq!((fit.top, fit.bottom), (0, 0));
    }

    #[test]
    fn test_wide_image_in_square_area() {
        let fit = EqualAspect::fit((200, 200), 100, 200);
        assert_eq!(inner(fit, (200, 200)), (200, 100));
        assert_eq!((fit.top, fit.bottom), (50, 50));
    }

    #[test]
    fn test_odd_spare_pixels() {
        let fit = EqualAspect::fit((101, 50), 10, 10);
        assert_eq!(fit.left + fit.right, 51);
        assert_eq!(inner(fit, (101, 50)), (50, 50));
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(EqualAspect::fit((0, 100), 10, 10), EqualAspect::default());
        assert_eq!(EqualAspect::fit((100, 100), 0, 10), EqualAspect::default());
    }
}
