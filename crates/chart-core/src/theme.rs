// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use crate::color::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub plot_background: Color,
    pub grid: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    pub value_label: Color,
    pub line_stroke: Color,
    pub marker: Color,
    pub title: Color,
}

impl Theme {
    /// Colors of the balance dashboard page.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::TRANSPARENT,
            plot_background: Color::from_rgb(0xf8, 0xf9, 0xfa),
            grid: Color::from_rgb(0xe1, 0xe5, 0xe9),
            axis_line: Color::from_rgb(0x33, 0x33, 0x33),
            axis_label: Color::from_rgb(0x66, 0x66, 0x66),
            value_label: Color::from_rgb(0x33, 0x33, 0x33),
            line_stroke: Color::from_rgb(0x66, 0x7e, 0xea),
            marker: Color::from_rgb(0x66, 0x7e, 0xea),
            title: Color::from_rgb(0x33, 0x33, 0x33),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_rgb(18, 18, 20),
            plot_background: Color::from_rgb(28, 28, 32),
            grid: Color::from_rgb(40, 40, 45),
            axis_line: Color::from_rgb(180, 180, 190),
            axis_label: Color::from_rgb(150, 150, 160),
            value_label: Color::from_rgb(235, 235, 245),
            line_stroke: Color::from_rgb(64, 160, 255),
            marker: Color::from_rgb(64, 160, 255),
            title: Color::from_rgb(235, 235, 245),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}
