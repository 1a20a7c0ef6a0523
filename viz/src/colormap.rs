//! Perceptually uniform colormap for normalized intensities.
//!
//! Piecewise-linear approximation of matplotlib's `inferno`, sampled at nine
//! evenly spaced anchors. Dark for 0, pale yellow for 1.

use plotters::style::RGBColor;

const ANCHORS: [[u8; 3]; 9] = [
    [0, 0, 4],
    [31, 12, 72],
    [85, 15, 109],
    [136, 34, 106],
    [186, 54, 85],
    [227, 89, 51],
    [249, 142, 9],
    [248, 201, 50],
    [252, 255, 164],
];

/// RGB triple for `value`, clamped to \[0, 1\]. Non-finite values map like 0.
pub fn inferno_rgb(value: f64) -> [u8; 3] {
    let v = if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    };

    let segments = (ANCHORS.len() - 1) as f64;
    let position = v * segments;
    let lower = (position.floor() as usize).min(ANCHORS.len() - 2);
    let t = position - lower as f64;

    let (a, b) = (ANCHORS[lower], ANCHORS[lower + 1]);
    let mut rgb = [0u8; 3];
    for i in 0..3 {
        let channel = f64::from(a[i]) + t * (f64::from(b[i]) - f64::from(a[i]));
        rgb[i] = channel.round() as u8;
    }
    rgb
}

/// [`inferno_rgb`] as a plotters color.
pub fn inferno(value: f64) -> RGBColor {
    let [r, g, b] = inferno_rgb(value);
    RGBColor(r, g, b)
}
