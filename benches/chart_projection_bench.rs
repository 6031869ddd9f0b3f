use careboard_rs::api::{ChartConfig, StackedBarConfig, StackedSeriesSpec};
use careboard_rs::core::{BandScale, ValueScale, Viewport, project_line_segments};
use careboard_rs::render::Color;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const TEAL: Color = Color::rgb(0.05, 0.65, 0.62);

fn bench_value_scale_round_trip(c: &mut Criterion) {
    let viewport = Viewport::new(1920, 1080);
    let scale = ValueScale::new(0.0, 10_000.0).expect("valid scale");

    c.bench_function("value_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale
                .value_to_pixel(4_321.123, viewport)
                .expect("to pixel");
            let _ = scale.pixel_to_value(px, viewport).expect("from pixel");
        })
    });
}

fn bench_line_projection_10k(c: &mut Criterion) {
    let viewport = Viewport::new(1920, 1080);
    let band = BandScale::new(10_000).expect("valid band scale");
    let scale = ValueScale::new(0.0, 2_500.0).expect("valid value scale");

    let values: Vec<f64> = (0..10_000)
        .map(|i| 100.0 + (i as f64) * 0.05 + if i % 2 == 0 { 1.0 } else { -1.0 })
        .collect();

    c.bench_function("line_projection_10k", |b| {
        b.iter(|| {
            let _ = project_line_segments(
                black_box(&values),
                black_box(band),
                black_box(scale),
                black_box(viewport),
            )
            .expect("projection should succeed");
        })
    });
}

fn bench_stacked_frame_build_52_weeks(c: &mut Criterion) {
    let categories: Vec<String> = (0..52).map(|i| format!("W{i:02}")).collect();
    let series: Vec<StackedSeriesSpec> = (0..3)
        .map(|s| {
            let values = (0..52).map(|i| ((i + s * 7) % 9) as f64).collect();
            StackedSeriesSpec::new(format!("severity-{s}"), values, TEAL)
        })
        .collect();
    let model = ChartConfig::StackedBar(StackedBarConfig::new(categories, series))
        .compile()
        .expect("compile");
    let viewport = Viewport::new(1600, 900);

    c.bench_function("stacked_frame_build_52_weeks", |b| {
        b.iter(|| {
            let _ = model
                .build_render_frame(black_box(viewport))
                .expect("frame build should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_value_scale_round_trip,
    bench_line_projection_10k,
    bench_stacked_frame_build_52_weeks
);
criterion_main!(benches);
