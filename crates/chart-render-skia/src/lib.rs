// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia CPU raster implementation of `DrawSurface`, with PNG and RGBA export.

use std::path::Path;

use balance_chart_core::{Color, DrawSurface, Point, Rect, Stroke, TextAlign, TextStyle};
use skia_safe as skia;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum SkiaError {
    #[error("failed to create {width}x{height} raster surface")]
    SurfaceAlloc { width: i32, height: i32 },
    #[error("encode PNG failed")]
    Encode,
    #[error("reading surface pixels failed")]
    ReadPixels,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SkiaError>;

/// Raster surface with a fixed logical size. The backing pixel buffer is
/// `logical size * device scale`.
pub struct SkiaSurface {
    width: f32,
    height: f32,
    scale: f32,
    surface: skia::Surface,
    regular: Option<skia::Typeface>,
    bold: Option<skia::Typeface>,
}

fn alloc(width: f32, height: f32, scale: f32) -> Result<skia::Surface> {
    let w = (width * scale).round().max(1.0) as i32;
    let h = (height * scale).round().max(1.0) as i32;
    skia::surfaces::raster_n32_premul((w, h)).ok_or(SkiaError::SurfaceAlloc { width: w, height: h })
}

#[inline]
fn sk_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

#[inline]
fn sk_point(p: Point) -> skia::Point {
    skia::Point::new(p.x, p.y)
}

impl SkiaSurface {
    /// Allocate a surface of `width` x `height` logical units at scale 1.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let (width, height) = (width as f32, height as f32);
        let mut surface = alloc(width, height, 1.0)?;
        surface.canvas().clear(skia::Color::TRANSPARENT);
        let fonts = skia::FontMgr::new();
        let regular = fonts.legacy_make_typeface(None::<&str>, skia::FontStyle::normal());
        let bold = fonts.legacy_make_typeface(None::<&str>, skia::FontStyle::bold());
        Ok(Self { width, height, scale: 1.0, surface, regular, bold })
    }

    /// Backing buffer size in device pixels.
    pub fn pixel_size(&self) -> (i32, i32) {
        (self.surface.width(), self.surface.height())
    }

    pub fn device_scale(&self) -> f32 {
        self.scale
    }

    pub fn to_png_bytes(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(SkiaError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Write the surface as PNG, creating parent directories as needed.
    pub fn save_png(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.to_png_bytes()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Unpremultiplied RGBA8 pixels: (pixels, width, height, stride).
    pub fn to_rgba8(&mut self) -> Result<(Vec<u8>, i32, i32, usize)> {
        let (w, h) = self.pixel_size();
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !self.surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(SkiaError::ReadPixels);
        }
        Ok((pixels, w, h, stride))
    }

    fn font(&self, style: &TextStyle) -> skia::Font {
        let face = if style.bold { self.bold.as_ref() } else { self.regular.as_ref() };
        let mut font = match face {
            Some(tf) => skia::Font::from_typeface(tf.clone(), style.size),
            None => skia::Font::default(),
        };
        font.set_size(style.size);
        font
    }
}

impl DrawSurface for SkiaSurface {
    fn logical_size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn set_device_scale(&mut self, scale: f32) {
        let scale = if scale.is_finite() && scale > 0.0 { scale } else { 1.0 };
        if (scale - self.scale).abs() > f32::EPSILON {
            match alloc(self.width, self.height, scale) {
                Ok(surface) => {
                    self.surface = surface;
                    self.scale = scale;
                }
                Err(e) => warn!(error = %e, scale, "keeping previous raster surface"),
            }
        }
        let canvas = self.surface.canvas();
        canvas.reset_matrix();
        canvas.clear(skia::Color::TRANSPARENT);
        canvas.scale((self.scale, self.scale));
    }

    fn clear(&mut self, color: Color) {
        self.surface.canvas().clear(sk_color(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(sk_color(color));
        let r = skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom);
        self.surface.canvas().draw_rect(r, &paint);
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        let paint = stroke_paint(stroke);
        self.surface.canvas().draw_line(sk_point(from), sk_point(to), &paint);
    }

    fn draw_polyline(&mut self, points: &[Point], stroke: &Stroke) {
        let Some((first, rest)) = points.split_first() else { return };
        let mut path = skia::Path::new();
        path.move_to(sk_point(*first));
        for p in rest {
            path.line_to(sk_point(*p));
        }
        let mut paint = stroke_paint(stroke);
        paint.set_stroke_join(skia::paint::Join::Round);
        self.surface.canvas().draw_path(&path, &paint);
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(sk_color(color));
        self.surface.canvas().draw_circle(sk_point(center), radius, &paint);
    }

    fn draw_text(&mut self, text: &str, anchor: Point, style: &TextStyle) {
        let font = self.font(style);
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(sk_color(style.color));
        let (advance, _) = font.measure_str(text, Some(&paint));
        let x = match style.align {
            TextAlign::Left => anchor.x,
            TextAlign::Center => anchor.x - advance * 0.5,
            TextAlign::Right => anchor.x - advance,
        };
        self.surface.canvas().draw_str(text, (x, anchor.y), &font, &paint);
    }
}

fn stroke_paint(stroke: &Stroke) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(stroke.width);
    paint.set_color(sk_color(stroke.color));
    paint
}
