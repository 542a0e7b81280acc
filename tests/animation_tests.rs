use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use approx::assert_relative_eq;
use chart_viewport::animation::{
    AnimationEvent, AnimationListener, AnimationPhase, DataAnimator, Easing, RotationAnimator,
    ViewportAnimator,
};
use chart_viewport::core::{
    ChartData, Computator, ComputatorMode, ContentRect, Line, LineChartData, Padding, PieChartData,
    PointValue, Viewport,
};
use chart_viewport::render::NullRenderer;
use chart_viewport::{ChartEngine, ChartEngineConfig};

const MS: u64 = 1_000_000;

fn recorder() -> (Rc<RefCell<Vec<AnimationEvent>>>, AnimationListener) {
    let events: Rc<RefCell<Vec<AnimationEvent>>> = Rc::default();
    let sink = Rc::clone(&events);
    (events, Box::new(move |event| sink.borrow_mut().push(event)))
}

fn pie_value(data: &ChartData, index: usize) -> f64 {
    match data {
        ChartData::Pie(pie) => pie.values[index].value.value(),
        _ => panic!("expected pie data"),
    }
}

fn pie_with_target(from: f64, to: f64) -> ChartData {
    let mut pie = PieChartData::from_values(&[from, 1.0]);
    pie.values[0].value.set_target(to);
    ChartData::Pie(pie)
}

#[test]
fn data_animation_lands_on_targets_and_completes_once() {
    let mut data = pie_with_target(0.0, 5.0);
    let mut animator = DataAnimator::default();
    let (events, listener) = recorder();
    animator.set_listener(Some(listener));

    animator.start(&mut data, Some(1_000), Duration::from_nanos(100));
    assert!(animator.advance(&mut data, 1_050));
    assert!(animator.advance(&mut data, 1_100));
    assert!(!animator.advance(&mut data, 1_200));

    assert_eq!(pie_value(&data, 0), 5.0);
    assert_eq!(pie_value(&data, 1), 1.0);
    assert_eq!(animator.phase(), AnimationPhase::Completed);
    assert_eq!(
        *events.borrow(),
        vec![AnimationEvent::Started, AnimationEvent::Completed]
    );
}

#[test]
fn cancelled_data_animation_keeps_intermediate_values() {
    let mut data = pie_with_target(0.0, 10.0);
    let mut animator = DataAnimator::default();
    let (events, listener) = recorder();
    animator.set_listener(Some(listener));

    animator.start(&mut data, Some(0), Duration::from_nanos(100));
    animator.advance(&mut data, 50);
    let midway = pie_value(&data, 0);
    assert_relative_eq!(midway, 5.0, epsilon = 1e-9);

    assert!(animator.cancel());
    assert!(!animator.advance(&mut data, 200));
    assert_eq!(pie_value(&data, 0), midway);
    assert_eq!(animator.phase(), AnimationPhase::Cancelled);
    assert_eq!(
        *events.borrow(),
        vec![AnimationEvent::Started, AnimationEvent::Cancelled]
    );
}

#[test]
fn restarted_data_animation_continues_from_displayed_values() {
    let mut data = pie_with_target(0.0, 5.0);
    let mut animator = DataAnimator::default();

    animator.start(&mut data, Some(0), Duration::from_nanos(100));
    animator.advance(&mut data, 50);
    assert_relative_eq!(pie_value(&data, 0), 2.5, epsilon = 1e-9);

    if let ChartData::Pie(pie) = &mut data {
        pie.values[0].value.set_target(10.0);
    }
    animator.start(&mut data, Some(50), Duration::from_nanos(100));
    animator.advance(&mut data, 100);
    assert_relative_eq!(pie_value(&data, 0), 6.25, epsilon = 1e-9);

    animator.advance(&mut data, 150);
    assert_eq!(pie_value(&data, 0), 10.0);
}

fn computator() -> Computator {
    let mut computator = Computator::new(ComputatorMode::Standard);
    assert!(computator.set_content_rect(ContentRect::from_size(500.0, 500.0), Padding::default()));
    assert!(computator.set_max_viewport(Viewport::new(0.0, 100.0, 20.0, 0.0)));
    computator.set_current_viewport(Viewport::new(0.0, 100.0, 10.0, 0.0));
    computator
}

#[test]
fn viewport_animation_is_clamped_on_every_tick() {
    let mut computator = computator();
    let mut animator = ViewportAnimator::default();
    animator.start(
        computator.current_viewport(),
        Viewport::new(10.0, 100.0, 20.0, 0.0),
        None,
        Duration::from_nanos(100),
        Easing::Linear,
    );

    assert!(animator.advance(&mut computator, 0));
    assert_eq!(computator.current_viewport().left, 0.0);

    assert!(computator.set_max_viewport(Viewport::new(0.0, 100.0, 12.0, 0.0)));
    animator.advance(&mut computator, 50);
    assert!(computator.max_viewport().contains(computator.current_viewport()));

    animator.advance(&mut computator, 100);
    assert_eq!(animator.phase(), AnimationPhase::Completed);
    assert!(computator.max_viewport().contains(computator.current_viewport()));
    assert_relative_eq!(computator.current_viewport().right, 12.0);
}

#[test]
fn viewport_animation_restart_starts_from_current() {
    let mut computator = computator();
    let mut animator = ViewportAnimator::default();
    let (events, listener) = recorder();
    animator.set_listener(Some(listener));

    animator.start(
        computator.current_viewport(),
        Viewport::new(10.0, 100.0, 20.0, 0.0),
        Some(0),
        Duration::from_nanos(100),
        Easing::Linear,
    );
    animator.advance(&mut computator, 50);
    assert_relative_eq!(computator.current_viewport().left, 5.0, epsilon = 1e-9);

    animator.start(
        computator.current_viewport(),
        Viewport::new(0.0, 100.0, 10.0, 0.0),
        Some(50),
        Duration::from_nanos(100),
        Easing::Linear,
    );
    animator.advance(&mut computator, 100);
    assert_relative_eq!(computator.current_viewport().left, 2.5, epsilon = 1e-9);
    animator.advance(&mut computator, 150);

    assert_eq!(computator.current_viewport(), Viewport::new(0.0, 100.0, 10.0, 0.0));
    assert_eq!(
        *events.borrow(),
        vec![
            AnimationEvent::Started,
            AnimationEvent::Started,
            AnimationEvent::Completed
        ]
    );
}

#[test]
fn rotation_takes_the_short_way_through_zero() {
    let mut rotation = 350.0;
    let mut animator = RotationAnimator::default();
    animator.start(350.0, 20.0, false, Some(0), Duration::from_nanos(200), Easing::Linear);

    for now in (0..200).step_by(10) {
        animator.advance(&mut rotation, now);
        assert!(
            rotation >= 350.0 - 1e-9 || rotation <= 20.0 + 1e-9,
            "rotation {rotation} left the short arc"
        );
        assert!((0.0..360.0).contains(&rotation));
    }

    animator.advance(&mut rotation, 200);
    assert_eq!(rotation, 20.0);
    assert_eq!(animator.phase(), AnimationPhase::Completed);
}

#[test]
fn rotation_midpoint_wraps_past_zero() {
    let mut rotation = 350.0;
    let mut animator = RotationAnimator::default();
    animator.start(350.0, 20.0, false, Some(0), Duration::from_nanos(200), Easing::Linear);

    animator.advance(&mut rotation, 100);

    assert_relative_eq!(rotation, 5.0, epsilon = 1e-9);
}

#[test]
fn multi_revolution_rotation_spins_past_full_turns() {
    let mut rotation = 0.0;
    let mut animator = RotationAnimator::default();
    animator.start(0.0, 750.0, true, Some(0), Duration::from_nanos(100), Easing::Linear);

    animator.advance(&mut rotation, 50);
    assert_relative_eq!(rotation, 15.0, epsilon = 1e-9);

    animator.advance(&mut rotation, 100);
    assert_relative_eq!(rotation, 30.0, epsilon = 1e-9);
}

#[test]
fn engine_rotation_animation_and_direct_set() {
    let mut engine = ChartEngine::headless(
        ChartData::Pie(PieChartData::from_values(&[1.0, 2.0])),
        ChartEngineConfig::new(ContentRect::from_size(300.0, 300.0)),
    )
    .expect("engine init");
    engine.set_chart_rotation(350.0, false);
    assert_eq!(engine.chart_rotation(), 350.0);

    engine.set_chart_rotation(20.0, true);
    engine.advance(0);
    engine.advance(100 * MS);
    let midway = engine.chart_rotation();
    assert!(midway >= 350.0 || midway <= 20.0);
    engine.advance(200 * MS);
    assert_eq!(engine.chart_rotation(), 20.0);

    engine.set_chart_rotation(-90.0, false);
    assert_eq!(engine.chart_rotation(), 270.0);
}

#[test]
fn engine_data_animation_refits_the_viewport() {
    let line = Line::new(vec![PointValue::new(0.0, 0.0), PointValue::new(10.0, 10.0)]);
    let mut engine = ChartEngine::headless(
        ChartData::Line(LineChartData::new(vec![line])),
        ChartEngineConfig::new(ContentRect::from_size(300.0, 300.0)),
    )
    .expect("engine init");
    let (events, listener) = recorder();
    engine.set_data_animation_listener(Some(listener));

    if let ChartData::Line(data) = engine.data_mut() {
        data.lines[0].values[1].set_target(10.0, 30.0);
    }
    engine.start_data_animation(1_000, None);
    assert_eq!(engine.data_animation_phase(), AnimationPhase::Running);
    assert!(engine.advance(1_000 + 250 * MS));
    assert!(engine.max_viewport().top > 10.0 && engine.max_viewport().top < 30.0);

    assert!(engine.advance(1_000 + 500 * MS));
    assert_eq!(engine.max_viewport(), Viewport::new(0.0, 30.0, 10.0, 0.0));
    assert_eq!(engine.current_viewport(), engine.max_viewport());
    assert!(!engine.advance(1_000 + 600 * MS));
    assert_eq!(
        *events.borrow(),
        vec![AnimationEvent::Started, AnimationEvent::Completed]
    );
}

#[test]
fn set_data_cancels_a_running_data_animation() {
    let mut engine: ChartEngine<NullRenderer> = ChartEngine::headless(
        pie_with_target(1.0, 4.0),
        ChartEngineConfig::new(ContentRect::from_size(300.0, 300.0)),
    )
    .expect("engine init");
    engine.start_data_animation(0, Some(Duration::from_millis(100)));

    engine
        .set_data(ChartData::Pie(PieChartData::from_values(&[2.0, 2.0])))
        .expect("set data");

    assert_eq!(engine.data_animation_phase(), AnimationPhase::Cancelled);
    assert!(!engine.advance(50 * MS));
    assert_eq!(pie_value(engine.data(), 0), 2.0);
}

#[test]
fn animated_move_to_lands_on_the_centered_viewport() {
    let line = Line::new(vec![PointValue::new(0.0, 0.0), PointValue::new(20.0, 100.0)]);
    let mut engine = ChartEngine::headless(
        ChartData::Line(LineChartData::new(vec![line])),
        ChartEngineConfig::new(ContentRect::from_size(300.0, 300.0)),
    )
    .expect("engine init");
    engine.set_current_viewport(Viewport::new(0.0, 100.0, 10.0, 0.0));
    let target = engine.computator().centered_viewport(15.0, 50.0);

    engine.move_to_with_animation(15.0, 50.0);
    engine.advance(0);
    engine.advance(300 * MS);

    assert_eq!(engine.viewport_animation_phase(), AnimationPhase::Completed);
    assert_eq!(engine.current_viewport(), target);
}

fn ticking_line_engine() -> ChartEngine<NullRenderer> {
    let line = Line::new(vec![PointValue::new(0.0, 0.0), PointValue::new(20.0, 100.0)]);
    ChartEngine::headless(
        ChartData::Line(LineChartData::new(vec![line])),
        ChartEngineConfig::new(ContentRect::from_size(300.0, 300.0)),
    )
    .expect("engine init")
}

#[test]
fn viewport_animation_started_between_ticks_lands_after_its_duration() {
    let mut engine = ticking_line_engine();
    engine.set_current_viewport(Viewport::new(0.0, 100.0, 10.0, 0.0));
    let target = Viewport::new(2.0, 80.0, 6.0, 20.0);
    let t0 = 1_000 * MS;

    engine.advance(t0);
    engine.set_current_viewport_with_animation_duration(target, Duration::from_millis(300));
    engine.advance(t0 + 150 * MS);
    let midway = engine.current_viewport();
    assert!(midway.left > 0.0 && midway.left < 2.0);

    engine.advance(t0 + 300 * MS);
    assert_eq!(engine.viewport_animation_phase(), AnimationPhase::Completed);
    assert_eq!(engine.current_viewport(), target);
}

#[test]
fn rotation_animation_started_between_ticks_lands_after_its_duration() {
    let mut engine = ChartEngine::headless(
        ChartData::Pie(PieChartData::from_values(&[1.0, 2.0])),
        ChartEngineConfig::new(ContentRect::from_size(300.0, 300.0)),
    )
    .expect("engine init");
    let t0 = 40 * MS;

    engine.advance(t0);
    engine.set_chart_rotation(90.0, true);
    engine.advance(t0 + 200 * MS);

    assert_eq!(engine.rotation_animation_phase(), AnimationPhase::Completed);
    assert_eq!(engine.chart_rotation(), 90.0);
}
