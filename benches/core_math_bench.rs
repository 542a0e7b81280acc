use chart_viewport::core::{
    ChartData, Computator, ComputatorMode, ContentRect, Line, LineChartData, Padding, PointValue,
    Viewport,
};
use chart_viewport::interaction::GestureEvent;
use chart_viewport::{ChartEngine, ChartEngineConfig};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn computator() -> Computator {
    let mut computator = Computator::new(ComputatorMode::Standard);
    computator.set_content_rect(ContentRect::from_size(1920.0, 1080.0), Padding::default());
    computator.set_max_viewport(Viewport::new(0.0, 2_500.0, 10_000.0, 0.0));
    computator.set_current_viewport(Viewport::new(2_000.0, 1_800.0, 4_000.0, 600.0));
    computator
}

fn bench_pixel_round_trip(c: &mut Criterion) {
    let computator = computator();

    c.bench_function("pixel_round_trip", |b| {
        b.iter(|| {
            let x = computator.compute_raw_x(black_box(3_210.5));
            let y = computator.compute_raw_y(black_box(1_234.5));
            let _ = computator.compute_raw_value(x, y);
        })
    });
}

fn bench_zoom_pan_sequence(c: &mut Criterion) {
    c.bench_function("zoom_pan_sequence_100", |b| {
        b.iter(|| {
            let mut computator = computator();
            for step in 0..100 {
                let scale = if step % 2 == 0 { 1.1 } else { 0.93 };
                computator.zoom(black_box(960.0), black_box(540.0), scale, scale);
                computator.scroll_by_pixels(black_box(-12.0), black_box(4.0));
            }
            black_box(computator.current_viewport())
        })
    });
}

fn bench_engine_drag_10k_points(c: &mut Criterion) {
    let points = (0..10_000)
        .map(|i| {
            let x = i as f64;
            PointValue::new(x, (x * 0.01).sin() * 100.0)
        })
        .collect();
    let data = ChartData::Line(LineChartData::new(vec![Line::new(points)]));
    let config = ChartEngineConfig::new(ContentRect::from_size(1600.0, 900.0));
    let mut engine = ChartEngine::headless(data, config).expect("engine init");
    engine.set_zoom_level(5_000.0, 0.0, 8.0);

    c.bench_function("engine_drag_10k_points", |b| {
        b.iter(|| {
            engine.handle_gesture(GestureEvent::Down { x: 800.0, y: 450.0 });
            for _ in 0..20 {
                engine.handle_gesture(GestureEvent::Drag {
                    x: 800.0,
                    y: 450.0,
                    dx: black_box(-15.0),
                    dy: 0.0,
                });
            }
            engine.handle_gesture(GestureEvent::Up { x: 800.0, y: 450.0 });
            engine.reset_viewport();
        })
    });
}

criterion_group!(
    benches,
    bench_pixel_round_trip,
    bench_zoom_pan_sequence,
    bench_engine_drag_10k_points
);
criterion_main!(benches);
