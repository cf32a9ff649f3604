// File: crates/chart-core/tests/options.rs
// Purpose: Render options from partial TOML, theme presets and accent overrides.

use anyhow::Result;
use balance_chart_core::theme::{find, presets};
use balance_chart_core::{render, BucketMode, ChartRenderer, Color, DrawCommand, RecordingSurface, RenderOptions, Series};

#[test]
fn partial_toml_keeps_defaults() -> Result<()> {
    let opts: RenderOptions = toml::from_str("margin = 40.0\ntheme = \"dark\"\naccent = \"#ff8800\"\n")?;
    assert_eq!(opts.margin, 40.0);
    assert_eq!(opts.device_scale, 2.0);
    assert_eq!(opts.grid_intervals, 5);
    assert_eq!(opts.placeholder, "--");
    let theme = opts.resolved_theme();
    assert_eq!(theme.name, "dark");
    assert_eq!(theme.line_stroke, Color::from_rgb(0xff, 0x88, 0x00));
    Ok(())
}

#[test]
fn bad_color_in_config_is_rejected() {
    assert!(toml::from_str::<RenderOptions>("accent = \"#12345\"").is_err());
    assert!(Color::from_hex("#zzzzzz").is_err());
    assert_eq!(Color::from_hex("#667eea").unwrap().to_string(), "#667eea");
    assert_eq!(Color::from_hex("fff").unwrap(), Color::from_rgb(255, 255, 255));
}

#[test]
fn unknown_theme_falls_back_to_light() {
    assert_eq!(find("neon").name, "light");
    assert_eq!(find("DARK").name, "dark");
    assert_eq!(presets().len(), 2);
}

#[test]
fn light_theme_uses_dashboard_colors() {
    let mut surface = RecordingSurface::new(400.0, 300.0);
    render(&mut surface, &Series::from_pairs([("2024-01-01", Some(1.0)), ("2024-01-02", Some(2.0))]), "t", BucketMode::Daily);
    let plot_fill = surface.commands().iter().find_map(|c| match c {
        DrawCommand::FillRect { color, .. } => Some(*color),
        _ => None,
    });
    assert_eq!(plot_fill, Some(Color::from_rgb(0xf8, 0xf9, 0xfa)));
    let line_color = surface.commands().iter().find_map(|c| match c {
        DrawCommand::Polyline { stroke, .. } => Some(stroke.color),
        _ => None,
    });
    assert_eq!(line_color, Some(Color::from_rgb(0x66, 0x7e, 0xea)));
}

#[test]
fn labels_can_be_disabled() {
    let renderer = ChartRenderer::new(RenderOptions { draw_labels: false, ..RenderOptions::default() });
    let mut surface = RecordingSurface::new(400.0, 300.0);
    renderer.render(&mut surface, &Series::from_pairs([("2024-01-01", Some(1.0))]), "t", BucketMode::Daily);
    assert_eq!(surface.texts().count(), 0);
    assert_eq!(surface.circles().count(), 1);
}

#[test]
fn custom_margin_moves_plot_region() {
    let renderer = ChartRenderer::new(RenderOptions { margin: 20.0, ..RenderOptions::default() });
    let mut surface = RecordingSurface::new(400.0, 300.0);
    renderer.render(&mut surface, &Series::from_pairs([("a", Some(1.0)), ("b", Some(2.0))]), "t", BucketMode::Monthly);
    let xs: Vec<f32> = surface.circles().map(|(c, _)| c.x).collect();
    assert_eq!(xs, vec![20.0, 380.0]);
}
