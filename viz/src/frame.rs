//! Content of one comparison frame.

use ndarray::Array2;

use crate::layout::{GRID_COLS, GRID_ROWS};

/// One titled image of the grid. Values are expected in \[0, 1\].
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub title: String,
    pub image: Array2<f64>,
}

impl Panel {
    pub fn new(title: impl Into<String>, image: Array2<f64>) -> Self {
        Self {
            title: title.into(),
            image,
        }
    }
}

/// Six panels plus a caption for the whole figure.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonFrame {
    pub caption: String,
    pub grid: [[Panel; GRID_COLS]; GRID_ROWS],
}

impl ComparisonFrame {
    /// Panels in row-major order, top-left first.
    pub fn panels(&self) -> impl Iterator<Item = &Panel> {
        self.grid.iter().flatten()
    }

    pub fn titles(&self) -> Vec<&str> {
        self.panels().map(|p| p.title.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panels_are_row_major() {
        let panel = |t: &str| Panel::new(t, Array2::zeros((1, 1)));
        let frame = ComparisonFrame {
            caption: "c".into(),
            grid: [
                [panel("a"), panel("b"), panel("c")],
                [panel("d"), panel("e"), panel("f")],
            ],
        };
        assert_eq!(frame.titles(), vec!["a", "b", "c", "d", "e", "f"]);
    }
}
