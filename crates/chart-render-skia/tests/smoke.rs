// File: crates/chart-render-skia/tests/smoke.rs
// Purpose: End-to-end render on the Skia raster surface writing a PNG.

use balance_chart_core::{render, BucketMode, DrawSurface, Series};
use balance_chart_skia::SkiaSurface;

fn sample() -> Series {
    Series::from_pairs([
        ("2024-01-01", Some(52.3)),
        ("2024-01-02", Some(48.9)),
        ("2024-01-03", None),
        ("2024-01-04", Some(40.1)),
        ("2024-01-05", Some(91.0)),
    ])
}

#[test]
fn render_smoke_png() {
    let mut surface = SkiaSurface::new(400, 240).expect("surface");
    render(&mut surface, &sample(), "Daily balance trend", BucketMode::Daily);

    // backing store is twice the logical size
    assert_eq!(surface.pixel_size(), (800, 480));
    assert_eq!(surface.logical_size(), (400.0, 240.0));

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    surface.save_png(&out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = surface.to_png_bytes().expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decode png");
    assert_eq!((img.width(), img.height()), (800, 480));
}

#[test]
fn empty_series_leaves_surface_blank() {
    let mut surface = SkiaSurface::new(100, 80).expect("surface");
    render(&mut surface, &Series::new(), "nothing", BucketMode::Hourly);
    assert_eq!(surface.pixel_size(), (100, 80));
    let (px, _, _, _) = surface.to_rgba8().expect("rgba");
    assert!(px.iter().all(|&b| b == 0), "no pixel should be painted");
}
