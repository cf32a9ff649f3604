// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the series model, drawing-surface
// abstraction and the stateless chart renderer.

pub mod bucket;
pub mod chart;
pub mod chart_set;
pub mod color;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod label;
pub mod recording;
pub mod scale;
pub mod series;
pub mod surface;
pub mod theme;
pub mod types;

pub use bucket::BucketMode;
pub use chart::{render, ChartRenderer, ChartSpec, RenderOptions};
pub use chart_set::ChartSet;
pub use color::Color;
pub use error::ChartError;
pub use geometry::{Point, Rect};
pub use recording::{DrawCommand, RecordingSurface};
pub use series::Series;
pub use surface::{DrawSurface, Stroke, SurfaceHost, TextAlign, TextStyle};
pub use theme::Theme;
