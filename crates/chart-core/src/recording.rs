// File: crates/chart-core/src/recording.rs
// Summary: Headless surface that records draw calls as `DrawCommand`s.
// Used for testing (verify what was painted), benchmarking the layout code
// without a raster backend, and diffing two renders.

use crate::color::Color;
use crate::geometry::{Point, Rect};
use crate::surface::{DrawSurface, Stroke, TextStyle};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    DeviceScale(f32),
    Clear(Color),
    FillRect { rect: Rect, color: Color },
    Line { from: Point, to: Point, stroke: Stroke },
    Polyline { points: Vec<Point>, stroke: Stroke },
    Circle { center: Point, radius: f32, color: Color },
    Text { text: String, anchor: Point, style: TextStyle },
}

#[derive(Clone, Debug)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    device_scale: f32,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height, device_scale: 1.0, commands: Vec::new() }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, leaving the surface empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn device_scale(&self) -> f32 {
        self.device_scale
    }

    /// Device pixel size implied by the current scale.
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            (self.width * self.device_scale).round() as u32,
            (self.height * self.device_scale).round() as u32,
        )
    }

    pub fn circles(&self) -> impl Iterator<Item = (Point, f32)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Circle { center, radius, .. } => Some((*center, *radius)),
            _ => None,
        })
    }

    pub fn polylines(&self) -> impl Iterator<Item = &[Point]> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Polyline { points, .. } => Some(points.as_slice()),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, Point)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, anchor, .. } => Some((text.as_str(), *anchor)),
            _ => None,
        })
    }

    /// Texts whose baseline sits at `y` (within half a unit).
    pub fn texts_at_baseline(&self, y: f32) -> Vec<&str> {
        self.texts()
            .filter(|(_, at)| (at.y - y).abs() < 0.5)
            .map(|(t, _)| t)
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn logical_size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn set_device_scale(&mut self, scale: f32) {
        self.device_scale = scale;
        self.commands.push(DrawCommand::DeviceScale(scale));
    }

    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        self.commands.push(DrawCommand::Line { from, to, stroke: *stroke });
    }

    fn draw_polyline(&mut self, points: &[Point], stroke: &Stroke) {
        self.commands.push(DrawCommand::Polyline { points: points.to_vec(), stroke: *stroke });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }

    fn draw_text(&mut self, text: &str, anchor: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::Text { text: text.to_string(), anchor, style: *style });
    }
}
