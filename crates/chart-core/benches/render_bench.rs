use balance_chart_core::{BucketMode, ChartRenderer, RecordingSurface, Series};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_series(n: usize) -> Series {
    Series::from_pairs((0..n).map(|i| {
        let label = format!("2024-01-{:02} {:02}:00:00", 1 + (i / 24) % 28, i % 24);
        // every 17th reading dropped, like gaps in the backend data
        let value = if i % 17 == 0 { None } else { Some((i as f64 * 0.01).sin() * 10.0 + 50.0) };
        (label, value)
    }))
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_recording");
    let renderer = ChartRenderer::default();
    for &n in &[24usize, 720usize, 10_000usize] {
        let series = build_series(n);
        group.bench_function(format!("hourly_{n}"), |b| {
            b.iter(|| {
                let mut surface = RecordingSurface::new(800.0, 400.0);
                renderer.render(&mut surface, black_box(&series), "Hourly balance trend", BucketMode::Hourly);
                black_box(surface.take_commands());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
