// File: crates/chart-core/src/grid.rs
// Summary: Grid/tick layout helpers.

/// `steps` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Horizontal spacing between consecutive points across `width`.
/// A single point gets the full width so it sits on the left edge.
pub fn column_step(width: f32, count: usize) -> f32 {
    width / count.saturating_sub(1).max(1) as f32
}
