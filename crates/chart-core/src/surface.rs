// File: crates/chart-core/src/surface.rs
// Summary: Abstract 2D drawing surface the renderer paints on, plus a lookup
// trait for hosts that own several named surfaces.

use std::collections::HashMap;

use crate::color::Color;
use crate::geometry::{Point, Rect};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

impl Stroke {
    pub const fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub color: Color,
    pub bold: bool,
    pub align: TextAlign,
}

impl TextStyle {
    pub const fn new(size: f32, color: Color, align: TextAlign) -> Self {
        Self { size, color, bold: false, align }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// Minimal 2D drawing capability. Coordinates are logical units; the surface
/// maps them to device pixels using the scale set by `set_device_scale`.
pub trait DrawSurface {
    /// Logical `(width, height)` of the surface.
    fn logical_size(&self) -> (f32, f32);

    /// Back the surface with `scale` device pixels per logical unit. Resets
    /// any previous content.
    fn set_device_scale(&mut self, scale: f32);

    fn clear(&mut self, color: Color);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke);

    /// Connected line through `points`. Backends with a native path type
    /// should override this for proper joins.
    fn draw_polyline(&mut self, points: &[Point], stroke: &Stroke) {
        for pair in points.windows(2) {
            self.draw_line(pair[0], pair[1], stroke);
        }
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    /// Draw `text` with its baseline at `anchor.y`; `anchor.x` is interpreted
    /// according to `style.align`.
    fn draw_text(&mut self, text: &str, anchor: Point, style: &TextStyle);
}

/// Resolves surface ids (canvas element ids on the dashboard) to surfaces.
pub trait SurfaceHost {
    fn surface_mut(&mut self, id: &str) -> Option<&mut dyn DrawSurface>;
}

impl<S: DrawSurface> SurfaceHost for HashMap<String, S> {
    fn surface_mut(&mut self, id: &str) -> Option<&mut dyn DrawSurface> {
        self.get_mut(id).map(|s| s as &mut dyn DrawSurface)
    }
}
