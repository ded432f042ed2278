use gridplot::api::{PlotEngine, PlotEngineConfig};
use gridplot::core::{
    Axis, AxisLayout, DataPoint, PlotRect, PlotTransform, ScreenPoint, Viewport, ViewportState,
    project_points,
};
use gridplot::render::NullRenderer;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn wave_points(count: i64) -> Vec<DataPoint> {
    (0..count)
        .map(|x| DataPoint::new(x, (x * 37) % 101 - 50))
        .collect()
}

fn bench_transform_round_trip(c: &mut Criterion) {
    let rect = PlotRect::new(40.0, 10.0, 1880.0, 1040.0);
    let x_axis = AxisLayout::new(Axis::X, 0, 10_000, rect.width(), 100_000).expect("x layout");
    let y_axis = AxisLayout::new(Axis::Y, -50, 50, rect.height(), 100_000).expect("y layout");
    let transform = PlotTransform::new(
        rect,
        x_axis,
        y_axis,
        ViewportState {
            scale: 3.5,
            translation_x: -1_200.0,
            translation_y: 400.0,
        },
    );

    c.bench_function("transform_round_trip", |b| {
        b.iter(|| {
            let screen = transform.to_screen(black_box(DataPoint::new(4_321, 17)));
            let _ = transform.screen_to_data(screen).expect("positive units");
        })
    });
}

fn bench_point_projection_10k(c: &mut Criterion) {
    let points = wave_points(10_000);
    let rect = PlotRect::new(40.0, 10.0, 1880.0, 1040.0);
    let x_axis = AxisLayout::new(Axis::X, 0, 9_999, rect.width(), 100_000).expect("x layout");
    let y_axis = AxisLayout::new(Axis::Y, -50, 50, rect.height(), 100_000).expect("y layout");
    let transform = PlotTransform::new(rect, x_axis, y_axis, ViewportState::default());
    let mut out = Vec::with_capacity(points.len());

    c.bench_function("point_projection_10k", |b| {
        b.iter(|| {
            project_points(black_box(&points), black_box(&transform), &mut out);
        })
    });
}

fn bench_render_frame_zoomed_5k(c: &mut Criterion) {
    let config = PlotEngineConfig::new(Viewport::new(1600, 900));
    let mut engine = PlotEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_points(wave_points(5_000)).expect("points");
    let rect = engine.plot_rect();
    engine.zoom_at(
        ScreenPoint::new(rect.left + rect.width() * 0.4, rect.top + rect.height() * 0.5),
        8.0,
    );

    c.bench_function("render_frame_zoomed_5k", |b| {
        b.iter(|| {
            let _ = black_box(engine.build_render_frame());
        })
    });
}

criterion_group!(
    benches,
    bench_transform_round_trip,
    bench_point_projection_10k,
    bench_render_frame_zoomed_5k
);
criterion_main!(benches);
