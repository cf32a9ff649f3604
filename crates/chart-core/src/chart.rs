// File: crates/chart-core/src/chart.rs
// Summary: Chart renderer: lays out a balance series (grid, line, markers,
// labels, axes, title) onto any `DrawSurface`. Stateless per call.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::bucket::BucketMode;
use crate::color::Color;
use crate::geometry::{Point, Rect};
use crate::grid::linspace;
use crate::label::format_value;
use crate::scale::{IndexScale, ValueScale};
use crate::series::Series;
use crate::surface::{DrawSurface, Stroke, SurfaceHost, TextAlign, TextStyle};
use crate::theme::{self, Theme};
use crate::types::{Insets, DEVICE_SCALE, GRID_INTERVALS, MARGIN, MARKER_RADIUS, PLACEHOLDER};

const GRID_STROKE_WIDTH: f32 = 1.0;
const LINE_STROKE_WIDTH: f32 = 3.0;
const AXIS_STROKE_WIDTH: f32 = 2.0;
const TICK_LABEL_SIZE: f32 = 12.0;
const POINT_LABEL_SIZE: f32 = 11.0;
const TITLE_SIZE: f32 = 16.0;
const TITLE_BASELINE: f32 = 30.0;

/// Style and layout knobs. Deserializes from a partial TOML/JSON table; unset
/// keys keep their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub margin: f32,
    pub device_scale: f32,
    pub grid_intervals: usize,
    pub marker_radius: f32,
    pub placeholder: String,
    /// Preset name, see `theme::presets`.
    pub theme: String,
    /// Overrides the theme's line and marker color.
    pub accent: Option<Color>,
    /// Text can be turned off for pixel-exact snapshots across platforms.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            margin: MARGIN,
            device_scale: DEVICE_SCALE,
            grid_intervals: GRID_INTERVALS,
            marker_radius: MARKER_RADIUS,
            placeholder: PLACEHOLDER.to_string(),
            theme: "light".to_string(),
            accent: None,
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    pub fn resolved_theme(&self) -> Theme {
        let mut t = theme::find(&self.theme);
        if let Some(accent) = self.accent {
            t.line_stroke = accent;
            t.marker = accent;
        }
        t
    }
}

/// One render request: which surface, what data, how to label it.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    pub target: String,
    pub series: Series,
    pub title: String,
    pub mode: BucketMode,
}

impl ChartSpec {
    pub fn new(target: impl Into<String>, series: Series, title: impl Into<String>, mode: BucketMode) -> Self {
        Self { target: target.into(), series, title: title.into(), mode }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ChartRenderer {
    pub opts: RenderOptions,
}

impl ChartRenderer {
    pub fn new(opts: RenderOptions) -> Self {
        Self { opts }
    }

    /// Resolve `spec.target` on `host` and render there. An unknown target is
    /// skipped.
    pub fn render_spec<H: SurfaceHost + ?Sized>(&self, host: &mut H, spec: &ChartSpec) {
        match host.surface_mut(&spec.target) {
            Some(surface) => self.render(surface, &spec.series, &spec.title, spec.mode),
            None => debug!(surface = %spec.target, "chart surface not found; skipping render"),
        }
    }

    /// Draw `series` onto `surface`. An empty series leaves the surface untouched.
    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S, series: &Series, title: &str, mode: BucketMode) {
        if series.is_empty() {
            debug!(%mode, "empty series; nothing to draw");
            return;
        }

        let opts = &self.opts;
        let theme = opts.resolved_theme();

        surface.set_device_scale(opts.device_scale);
        let (width, height) = surface.logical_size();
        let plot = Rect::inset(width, height, &Insets::uniform(opts.margin));
        let ys = ValueScale::for_series(series, &plot);
        let xs = IndexScale::new(&plot, series.len());
        trace!(width, height, vmin = ys.vmin, vmax = ys.vmax, points = series.len(), "chart layout");

        surface.clear(theme.background);
        surface.fill_rect(plot, theme.plot_background);

        draw_grid(surface, opts, &theme, &plot, &ys, &xs, series.len());
        draw_series(surface, opts, &theme, &plot, &ys, &xs, series);
        if opts.draw_labels {
            draw_x_labels(surface, &theme, &plot, &xs, series, mode);
        }
        draw_axes(surface, &theme, &plot);
        if opts.draw_labels {
            let style = TextStyle::new(TITLE_SIZE, theme.title, TextAlign::Center).bold();
            surface.draw_text(title, Point::new(width / 2.0, TITLE_BASELINE), &style);
        }
    }
}

/// Render with default options.
pub fn render<S: DrawSurface + ?Sized>(surface: &mut S, series: &Series, title: &str, mode: BucketMode) {
    ChartRenderer::default().render(surface, series, title, mode);
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid<S: DrawSurface + ?Sized>(
    surface: &mut S,
    opts: &RenderOptions,
    theme: &Theme,
    plot: &Rect,
    ys: &ValueScale,
    xs: &IndexScale,
    count: usize,
) {
    let stroke = Stroke::new(theme.grid, GRID_STROKE_WIDTH);
    let tick_style = TextStyle::new(TICK_LABEL_SIZE, theme.axis_label, TextAlign::Right);
    let intervals = opts.grid_intervals.max(1);

    // horizontals, top (max) to bottom (min)
    for (i, y) in linspace(plot.top as f64, plot.bottom as f64, intervals + 1).into_iter().enumerate() {
        let y = y as f32;
        surface.draw_line(Point::new(plot.left, y), Point::new(plot.right, y), &stroke);
        if opts.draw_labels {
            let label = format_value(Some(ys.tick_value(i, intervals)), &opts.placeholder);
            surface.draw_text(&label, Point::new(plot.left - 10.0, y + 4.0), &tick_style);
        }
    }

    // one vertical per point
    for i in 0..count {
        let x = xs.to_px(i);
        surface.draw_line(Point::new(x, plot.top), Point::new(x, plot.bottom), &stroke);
    }
}

fn draw_series<S: DrawSurface + ?Sized>(
    surface: &mut S,
    opts: &RenderOptions,
    theme: &Theme,
    plot: &Rect,
    ys: &ValueScale,
    xs: &IndexScale,
    series: &Series,
) {
    // Missing values have no position; the line joins the present ones.
    if series.len() > 1 {
        let line: Vec<Point> = series
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.value.map(|v| Point::new(xs.to_px(i), ys.to_px(v))))
            .collect();
        if line.len() > 1 {
            surface.draw_polyline(&line, &Stroke::new(theme.line_stroke, LINE_STROKE_WIDTH));
        }
    }

    let label_style = TextStyle::new(POINT_LABEL_SIZE, theme.value_label, TextAlign::Center);
    for (i, p) in series.iter().enumerate() {
        let x = xs.to_px(i);
        // missing points rest on the bottom edge
        let y = p.value.map_or(plot.bottom, |v| ys.to_px(v));
        surface.fill_circle(Point::new(x, y), opts.marker_radius, theme.marker);
        if opts.draw_labels {
            let label = format_value(p.value, &opts.placeholder);
            surface.draw_text(&label, Point::new(x, y - 10.0), &label_style);
        }
    }
}

fn draw_x_labels<S: DrawSurface + ?Sized>(
    surface: &mut S,
    theme: &Theme,
    plot: &Rect,
    xs: &IndexScale,
    series: &Series,
    mode: BucketMode,
) {
    let style = TextStyle::new(POINT_LABEL_SIZE, theme.axis_label, TextAlign::Center);
    let y = plot.bottom + 20.0;
    for (i, p) in series.iter().enumerate() {
        surface.draw_text(&mode.format_label(&p.label), Point::new(xs.to_px(i), y), &style);
    }
}

fn draw_axes<S: DrawSurface + ?Sized>(surface: &mut S, theme: &Theme, plot: &Rect) {
    let stroke = Stroke::new(theme.axis_line, AXIS_STROKE_WIDTH);
    let corner = Point::new(plot.left, plot.bottom);
    surface.draw_line(Point::new(plot.left, plot.top), corner, &stroke);
    surface.draw_line(corner, Point::new(plot.right, plot.bottom), &stroke);
}
