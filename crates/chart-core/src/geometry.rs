// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for logical-coordinate math.

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    /// Shrink a `width` x `height` area by `insets`. The result may be
    /// inverted (negative size) on surfaces smaller than the insets.
    pub fn inset(width: f32, height: f32, insets: &Insets) -> Self {
        Self::from_ltrb(insets.left, insets.top, width - insets.right, height - insets.bottom)
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
}
