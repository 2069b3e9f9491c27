use barchart_rs::api::{BarChartConfig, build_render_frame, compute_layout};
use barchart_rs::core::{Density, GraphItem, HeuristicTextMeasurer, Viewport};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_config() -> BarChartConfig {
    BarChartConfig::default()
        .with_axis(100, 5)
        .with_grid_line_spacing(25.0)
        .with_bar_width(3.0)
        .with_labels(true, true)
}

fn bench_items(count: u32) -> Vec<GraphItem> {
    (0..count).map(|i| GraphItem::new(i % 97)).collect()
}

fn bench_layout_1k_bars(c: &mut Criterion) {
    let config = bench_config();
    let items = bench_items(1_000);
    let viewport = Viewport::new(1920, 1080);

    c.bench_function("layout_1k_bars", |b| {
        b.iter(|| {
            compute_layout(
                black_box(&config),
                black_box(&items),
                black_box(viewport),
                black_box(Density::ONE),
                &HeuristicTextMeasurer,
            )
            .expect("layout should succeed")
        })
    });
}

fn bench_frame_build_1k_bars(c: &mut Criterion) {
    let config = bench_config();
    let items = bench_items(1_000);
    let viewport = Viewport::new(1920, 1080);
    let layout = compute_layout(&config, &items, viewport, Density::ONE, &HeuristicTextMeasurer)
        .expect("layout should succeed");

    c.bench_function("frame_build_1k_bars", |b| {
        b.iter(|| {
            build_render_frame(black_box(&layout), black_box(&config), black_box(Density::ONE))
                .expect("frame build should succeed")
        })
    });
}

criterion_group!(benches, bench_layout_1k_bars, bench_frame_build_1k_bars);
criterion_main!(benches);
