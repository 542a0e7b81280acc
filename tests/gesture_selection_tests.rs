use std::cell::RefCell;
use std::rc::Rc;

use chart_viewport::core::{
    ChartData, ContentRect, PieChartData, SelectedValue, SelectedValueKind, SelectionChange,
    SelectionKind, Viewport,
};
use chart_viewport::interaction::GestureEvent;
use chart_viewport::render::{RenderFrame, Renderer};
use chart_viewport::{ChartEngine, ChartEngineConfig, ChartResult};

/// Renderer reporting fixed values inside small circles around fixed pixels.
struct ScriptedRenderer {
    hits: Vec<((f64, f64), SelectedValue)>,
    radius: f64,
}

impl ScriptedRenderer {
    fn single(x: f64, y: f64, value: SelectedValue) -> Self {
        Self {
            hits: vec![((x, y), value)],
            radius: 10.0,
        }
    }
}

impl Renderer for ScriptedRenderer {
    fn compute_maximum_viewport(&self, _data: &ChartData) -> Option<Viewport> {
        Some(Viewport::new(0.0, 100.0, 100.0, 0.0))
    }

    fn hit_test(&self, _frame: &RenderFrame<'_>, x: f64, y: f64) -> Option<SelectedValue> {
        self.hits
            .iter()
            .find(|((hx, hy), _)| (x - hx).hypot(y - hy) <= self.radius)
            .map(|(_, value)| *value)
    }

    fn draw(&mut self, _frame: &RenderFrame<'_>) -> ChartResult<()> {
        Ok(())
    }
}

type Changes = Rc<RefCell<Vec<SelectionChange>>>;

fn record(engine: &mut ChartEngine<ScriptedRenderer>) -> Changes {
    let changes: Changes = Rc::default();
    let sink = Rc::clone(&changes);
    engine.set_selection_listener(Some(Box::new(move |change| sink.borrow_mut().push(change))));
    changes
}

fn slice_value() -> SelectedValue {
    SelectedValue::new(3, -1, SelectedValueKind::None)
}

fn pie_engine(selection: bool) -> ChartEngine<ScriptedRenderer> {
    let data = ChartData::Pie(PieChartData::from_values(&[10.0, 20.0, 30.0, 40.0]));
    let config =
        ChartEngineConfig::new(ContentRect::from_size(400.0, 400.0)).with_value_selection(selection);
    ChartEngine::new(ScriptedRenderer::single(120.0, 80.0, slice_value()), data, config)
        .expect("engine init")
}

fn deselections(changes: &Changes) -> usize {
    changes
        .borrow()
        .iter()
        .filter(|change| matches!(change, SelectionChange::Deselected))
        .count()
}

#[test]
fn selection_persists_until_a_tap_on_empty_space() {
    let mut engine = pie_engine(true);
    let changes = record(&mut engine);

    assert!(engine.handle_gesture(GestureEvent::Down { x: 120.0, y: 80.0 }));
    assert_eq!(engine.selected_value(), Some(slice_value()));
    {
        let changes = changes.borrow();
        assert_eq!(changes.len(), 1);
        match changes[0] {
            SelectionChange::Selected(event) => {
                assert_eq!(event.selected, slice_value());
                assert_eq!(
                    event.kind,
                    SelectionKind::Slice {
                        index: 3,
                        value: 40.0
                    }
                );
            }
            SelectionChange::Deselected => panic!("expected a selection"),
        }
    }

    engine.handle_gesture(GestureEvent::Up { x: 120.0, y: 80.0 });
    assert_eq!(engine.selected_value(), Some(slice_value()));

    engine.handle_gesture(GestureEvent::Down { x: 0.0, y: 0.0 });
    engine.handle_gesture(GestureEvent::Up { x: 0.0, y: 0.0 });
    engine.handle_gesture(GestureEvent::Tap { x: 0.0, y: 0.0 });

    assert_eq!(engine.selected_value(), None);
    assert_eq!(deselections(&changes), 1);
}

#[test]
fn tap_alone_on_empty_space_deselects_once() {
    let mut engine = pie_engine(true);
    assert!(engine.select_value(slice_value()));
    let changes = record(&mut engine);

    engine.handle_gesture(GestureEvent::Tap { x: 0.0, y: 0.0 });
    engine.handle_gesture(GestureEvent::Tap { x: 0.0, y: 0.0 });

    assert_eq!(engine.selected_value(), None);
    assert_eq!(deselections(&changes), 1);
    assert_eq!(changes.borrow().len(), 1);
}

#[test]
fn tap_on_a_value_always_reports_it() {
    let mut engine = pie_engine(true);
    let changes = record(&mut engine);

    engine.handle_gesture(GestureEvent::Down { x: 121.0, y: 81.0 });
    engine.handle_gesture(GestureEvent::Up { x: 121.0, y: 81.0 });
    engine.handle_gesture(GestureEvent::Tap { x: 121.0, y: 81.0 });
    engine.handle_gesture(GestureEvent::Down { x: 121.0, y: 81.0 });

    let changes = changes.borrow();
    assert_eq!(changes.len(), 2);
    assert!(changes
        .iter()
        .all(|change| matches!(change, SelectionChange::Selected(_))));
}

#[test]
fn touch_mode_reports_on_release_over_the_same_value() {
    let mut engine = pie_engine(false);
    let changes = record(&mut engine);

    assert!(engine.handle_gesture(GestureEvent::Down { x: 120.0, y: 80.0 }));
    assert_eq!(engine.touched_value(), Some(slice_value()));
    assert!(changes.borrow().is_empty());

    assert!(engine.handle_gesture(GestureEvent::Up { x: 122.0, y: 80.0 }));
    assert_eq!(engine.touched_value(), None);
    assert_eq!(engine.selected_value(), None);
    assert_eq!(changes.borrow().len(), 1);
}

#[test]
fn touch_mode_drag_off_the_value_cancels_the_highlight() {
    let mut engine = pie_engine(false);
    let changes = record(&mut engine);

    engine.handle_gesture(GestureEvent::Down { x: 120.0, y: 80.0 });
    assert!(engine.handle_gesture(GestureEvent::Drag {
        x: 200.0,
        y: 80.0,
        dx: 80.0,
        dy: 0.0
    }));
    assert_eq!(engine.touched_value(), None);

    engine.handle_gesture(GestureEvent::Up { x: 120.0, y: 80.0 });
    assert!(changes.borrow().is_empty());
}

#[test]
fn long_press_reports_and_selects_in_selection_mode() {
    let mut engine = pie_engine(true);
    let changes = record(&mut engine);

    assert!(!engine.handle_gesture(GestureEvent::LongPress { x: 300.0, y: 300.0 }));
    assert!(engine.handle_gesture(GestureEvent::LongPress { x: 120.0, y: 80.0 }));

    assert_eq!(engine.selected_value(), Some(slice_value()));
    assert_eq!(changes.borrow().len(), 1);
}

#[test]
fn disabled_value_touch_ignores_hits() {
    let mut engine = pie_engine(true);
    engine.set_value_touch_enabled(false);
    let changes = record(&mut engine);

    engine.handle_gesture(GestureEvent::Down { x: 120.0, y: 80.0 });
    engine.handle_gesture(GestureEvent::Tap { x: 120.0, y: 80.0 });

    assert_eq!(engine.selected_value(), None);
    assert!(changes.borrow().is_empty());
}

#[test]
fn selecting_a_missing_value_is_refused() {
    let mut engine = pie_engine(true);
    let changes = record(&mut engine);

    assert!(!engine.select_value(SelectedValue::new(9, 0, SelectedValueKind::None)));
    assert!(!engine.select_value(SelectedValue::UNSET));
    assert_eq!(engine.selected_value(), None);
    assert!(changes.borrow().is_empty());
}

#[test]
fn hits_on_values_missing_from_the_data_are_filtered() {
    let data = ChartData::Pie(PieChartData::from_values(&[1.0, 2.0]));
    let config =
        ChartEngineConfig::new(ContentRect::from_size(400.0, 400.0)).with_value_selection(true);
    let mut engine = ChartEngine::new(
        ScriptedRenderer::single(120.0, 80.0, slice_value()),
        data,
        config,
    )
    .expect("engine init");
    let changes = record(&mut engine);

    engine.handle_gesture(GestureEvent::Tap { x: 120.0, y: 80.0 });

    assert_eq!(engine.selected_value(), None);
    assert!(changes.borrow().is_empty());
}

#[test]
fn shrinking_the_data_drops_a_stale_selection() {
    let mut engine = pie_engine(true);
    assert!(engine.select_value(slice_value()));

    if let ChartData::Pie(pie) = engine.data_mut() {
        pie.values.truncate(2);
    }
    engine.notify_data_changed();
    assert_eq!(engine.selected_value(), None);

    assert!(engine.select_value(SelectedValue::new(1, -1, SelectedValueKind::None)));
    engine
        .set_data(ChartData::Pie(PieChartData::from_values(&[5.0, 5.0])))
        .expect("set data");
    assert_eq!(engine.selected_value(), None);
}

#[test]
fn clear_selection_notifies_only_when_something_was_selected() {
    let mut engine = pie_engine(true);
    let changes = record(&mut engine);

    assert!(!engine.clear_selection());
    assert!(engine.select_value(slice_value()));
    assert!(engine.clear_selection());

    assert_eq!(changes.borrow().len(), 2);
    assert_eq!(deselections(&changes), 1);
}

#[test]
fn leaving_selection_mode_drops_the_selection() {
    let mut engine = pie_engine(true);
    assert!(engine.select_value(slice_value()));
    engine.set_value_selection_enabled(false);
    assert!(!engine.is_value_selection_enabled());
    assert_eq!(engine.selected_value(), None);
}

fn two_slice_engine(selection: bool) -> ChartEngine<ScriptedRenderer> {
    let renderer = ScriptedRenderer {
        hits: vec![
            ((120.0, 80.0), SelectedValue::new(0, 0, SelectedValueKind::None)),
            ((300.0, 300.0), SelectedValue::new(3, 3, SelectedValueKind::None)),
        ],
        radius: 10.0,
    };
    let data = ChartData::Pie(PieChartData::from_values(&[1.0, 2.0]));
    let config =
        ChartEngineConfig::new(ContentRect::from_size(400.0, 400.0)).with_value_selection(selection);
    ChartEngine::new(renderer, data, config).expect("engine init")
}

#[test]
fn hits_on_missing_values_keep_the_current_selection() {
    let mut engine = two_slice_engine(true);
    let selected = SelectedValue::new(0, 0, SelectedValueKind::None);
    assert!(engine.select_value(selected));
    let changes = record(&mut engine);

    engine.handle_gesture(GestureEvent::Tap { x: 300.0, y: 300.0 });
    assert_eq!(engine.selected_value(), Some(selected));

    engine.handle_gesture(GestureEvent::Down { x: 300.0, y: 300.0 });
    engine.handle_gesture(GestureEvent::Up { x: 300.0, y: 300.0 });
    engine.handle_gesture(GestureEvent::LongPress { x: 300.0, y: 300.0 });

    assert_eq!(engine.selected_value(), Some(selected));
    assert!(changes.borrow().is_empty());
}

#[test]
fn touch_highlight_survives_passing_over_a_missing_value() {
    let mut engine = two_slice_engine(false);
    let touched = SelectedValue::new(0, 0, SelectedValueKind::None);
    let changes = record(&mut engine);

    engine.handle_gesture(GestureEvent::Down { x: 120.0, y: 80.0 });
    assert_eq!(engine.touched_value(), Some(touched));

    engine.handle_gesture(GestureEvent::Drag {
        x: 300.0,
        y: 300.0,
        dx: 2.0,
        dy: 2.0,
    });
    assert_eq!(engine.touched_value(), Some(touched));
    assert!(changes.borrow().is_empty());

    engine.handle_gesture(GestureEvent::Up { x: 120.0, y: 80.0 });
    assert_eq!(engine.touched_value(), None);
    assert_eq!(changes.borrow().len(), 1);
}
