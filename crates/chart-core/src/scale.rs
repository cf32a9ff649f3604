// File: crates/chart-core/src/scale.rs
// Summary: Value (Y) and index (X) scale transforms for the plot region.

use crate::geometry::Rect;
use crate::grid::column_step;
use crate::series::Series;

/// Vertical scale anchored at the maximum: `max` maps to the top of the plot
/// region and `max - range` to the bottom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub top_px: f32,
    pub height_px: f32,
    pub vmin: f64,
    pub vmax: f64,
    /// `vmax - vmin`, or 1 when the two coincide.
    pub range: f64,
}

impl ValueScale {
    pub fn new(top_px: f32, height_px: f32, vmin: f64, vmax: f64) -> Self {
        let span = vmax - vmin;
        let range = if span == 0.0 || !span.is_finite() { 1.0 } else { span };
        Self { top_px, height_px, vmin, vmax, range }
    }

    /// Scale over the present values of `series`; all-missing input scales 0..0.
    pub fn for_series(series: &Series, plot: &Rect) -> Self {
        let (vmin, vmax) = series.extent().unwrap_or((0.0, 0.0));
        Self::new(plot.top, plot.height(), vmin, vmax)
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        self.top_px + ((self.vmax - v) / self.range) as f32 * self.height_px
    }

    /// Value shown next to horizontal grid line `i` of `intervals`.
    pub fn tick_value(&self, i: usize, intervals: usize) -> f64 {
        self.vmax - self.range / intervals.max(1) as f64 * i as f64
    }
}

/// Horizontal scale placing point `i` at `left + i * step`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndexScale {
    pub left_px: f32,
    pub step: f32,
}

impl IndexScale {
    pub fn new(plot: &Rect, count: usize) -> Self {
        Self { left_px: plot.left, step: column_step(plot.width(), count) }
    }

    #[inline]
    pub fn to_px(&self, i: usize) -> f32 {
        self.left_px + self.step * i as f32
    }
}
