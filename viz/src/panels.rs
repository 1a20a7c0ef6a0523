//! Drawing a [`ComparisonFrame`] with plotters.

use image::RgbImage;
use log::debug;
use ndarray::Array2;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordi32;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::time::Instant;

use crate::colormap::inferno;
use crate::frame::{ComparisonFrame, Panel};
use crate::layout::{
    min_canvas_size, EqualAspect, CAPTION_FONT_SIZE, GRID_COLS, GRID_ROWS, LEGEND_WIDTH,
    TICK_FONT_SIZE, TITLE_FONT_SIZE, X_LABEL_AREA, Y_LABEL_AREA,
};
use crate::{Result, VizError};

/// Chart whose coordinates are pixel indices of the displayed image.
pub type PixelChart<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordi32, RangedCoordi32>>;

const COLORBAR_STEPS: usize = 64;

/// Render `frame` into a new RGB image of `width × height` pixels.
pub fn render_to_image(frame: &ComparisonFrame, width: u32, height: u32) -> Result<RgbImage> {
    let (min_w, min_h) = min_canvas_size();
    if width < min_w || height < min_h {
        return Err(VizError::CanvasTooSmall { width, height });
    }

    let start = Instant::now();
    let mut buffer = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        draw_frame(&root, frame)?;
        root.present()?;
    }
    debug!("Rendered {width}x{height} frame in {:?}", start.elapsed());

    RgbImage::from_raw(width, height, buffer).ok_or(VizError::CanvasTooSmall { width, height })
}

/// Draw the caption and the 2×3 panel grid onto `root`.
pub fn draw_frame<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    frame: &ComparisonFrame,
) -> Result<()> {
    root.fill(&WHITE)?;
    let body = root.titled(
        &frame.caption,
        ("sans-serif", f64::from(CAPTION_FONT_SIZE)).into_font(),
    )?;

    let areas = body.split_evenly((GRID_ROWS, GRID_COLS));
    for (area, panel) in areas.iter().zip(frame.panels()) {
        draw_panel(area, panel)?;
    }
    Ok(())
}

/// Title, image with pixel axes, and colorbar for one panel.
pub fn draw_panel<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>, panel: &Panel) -> Result<()> {
    let body = area.titled(
        &panel.title,
        ("sans-serif", f64::from(TITLE_FONT_SIZE)).into_font(),
    )?;
    let (width, _) = body.dim_in_pixel();
    let (image_area, legend_area) =
        body.split_horizontally(width.saturating_sub(LEGEND_WIDTH) as i32);

    let (rows, cols) = panel.image.dim();
    let (avail_w, avail_h) = image_area.dim_in_pixel();
    let fit = EqualAspect::fit(
        (
            avail_w.saturating_sub(Y_LABEL_AREA),
            avail_h.saturating_sub(X_LABEL_AREA),
        ),
        rows,
        cols,
    );
    let image_area = image_area.margin(
        fit.top as i32,
        fit.bottom as i32,
        fit.left as i32,
        fit.right as i32,
    );

    let mut chart = ChartBuilder::on(&image_area)
        .x_label_area_size(X_LABEL_AREA as i32)
        .y_label_area_size(Y_LABEL_AREA as i32)
        .build_cartesian_2d(0..cols as i32, 0..rows as i32)?;

    let top_row = rows as i32;
    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("x (px)")
        .y_desc("y (px)")
        .x_labels(5)
        .y_labels(5)
        .y_label_formatter(&|y: &i32| format!("{}", top_row - y))
        .label_style(("sans-serif", f64::from(TICK_FONT_SIZE)).into_font())
        .draw()?;

    draw_heatmap(&mut chart, &panel.image)?;
    draw_legend(&legend_area)
}

/// One filled cell per image element, row 0 at the top of the chart.
pub fn draw_heatmap<DB: DrawingBackend>(
    chart: &mut PixelChart<'_, DB>,
    image: &Array2<f64>,
) -> Result<()> {
    let rows = image.nrows() as i32;
    chart.draw_series(image.indexed_iter().map(|((r, c), &value)| {
        let x = c as i32;
        let top = rows - r as i32;
        Rectangle::new([(x, top), (x + 1, top - 1)], inferno(value).filled())
    }))?;
    Ok(())
}

/// Vertical colorbar for the \[0, 1\] display range.
fn draw_legend<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>) -> Result<()> {
    let mut chart = ChartBuilder::on(area)
        .margin_top(8)
        .margin_bottom(X_LABEL_AREA as i32)
        .margin_right(12)
        .y_label_area_size(34)
        .build_cartesian_2d(0.0..1.0, 0.0..1.0)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .disable_x_axis()
        .y_labels(5)
        .y_label_formatter(&|v: &f64| format!("{v:.1}"))
        .label_style(("sans-serif", f64::from(TICK_FONT_SIZE)).into_font())
        .draw()?;

    let steps = COLORBAR_STEPS as f64;
    chart.draw_series((0..COLORBAR_STEPS).map(|i| {
        let low = i as f64 / steps;
        let high = (i + 1) as f64 / steps;
        Rectangle::new(
            [(0.0, low), (1.0, high)],
            inferno((low + high) / 2.0).filled(),
        )
    }))?;
    Ok(())
}
