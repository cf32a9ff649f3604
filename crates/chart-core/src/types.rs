// File: crates/chart-core/src/types.rs
// Summary: Shared constants (margins, scale factor, marker size, placeholder text).

/// Margin reserved on every side of the plot region, in logical units.
pub const MARGIN: f32 = 60.0;
/// Device pixels per logical unit.
pub const DEVICE_SCALE: f32 = 2.0;
/// Number of intervals between horizontal grid lines (lines = intervals + 1).
pub const GRID_INTERVALS: usize = 5;
/// Radius of a point marker, in logical units.
pub const MARKER_RADIUS: f32 = 4.0;
/// Text shown in place of a missing value.
pub const PLACEHOLDER: &str = "--";

/// Screen margins, in logical units.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Same margin on all four sides; negative input is clamped to zero.
    pub fn uniform(margin: f32) -> Self {
        let m = margin.max(0.0);
        Self::new(m, m, m, m)
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::uniform(MARGIN)
    }
}
