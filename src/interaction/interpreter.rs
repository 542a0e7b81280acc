use tracing::trace;

use super::{
    AnimationRequest, ContainerScrollType, DOUBLE_TAP_ZOOM_AMOUNT, GestureConfig, GestureEvent,
    GestureOutcome, HitResult, HitTester, ROTATION_DOWNSCALE, SelectionNotice, vector_to_scalar_scroll,
};
use crate::animation::Easing;
use crate::core::{Computator, ComputatorMode, ScrollResult, SelectionState};

/// Per-sequence bookkeeping, reset on `Down`.
///
/// It outlives `Up` so a fling delivered after the release still sees
/// whether the container claimed the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct TouchSequence {
    travelled_px: f64,
    dragging: bool,
    scaling: bool,
    container_claimed: bool,
}

/// Turns gesture primitives into computator mutations, selection notices
/// and animation requests.
///
/// The interpreter never calls back into the host; the engine applies the
/// returned `GestureOutcome`.
#[derive(Debug, Clone, Default)]
pub struct GestureInterpreter {
    config: GestureConfig,
    sequence: TouchSequence,
}

impl GestureInterpreter {
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            sequence: TouchSequence::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config;
    }

    #[must_use]
    pub fn is_scaling(&self) -> bool {
        self.sequence.scaling
    }

    #[must_use]
    pub fn is_container_claimed(&self) -> bool {
        self.sequence.container_claimed
    }

    pub fn interpret(
        &mut self,
        event: GestureEvent,
        computator: &mut Computator,
        selection: &mut SelectionState,
        hits: &dyn HitTester,
    ) -> GestureOutcome {
        let mut outcome = GestureOutcome::default();
        match event {
            GestureEvent::Down { x, y } => self.on_down(x, y, computator, selection, hits, &mut outcome),
            GestureEvent::Up { x, y } => self.on_up(x, y, computator, selection, hits, &mut outcome),
            GestureEvent::Drag { x, y, dx, dy } => {
                self.on_drag(x, y, dx, dy, computator, selection, hits, &mut outcome);
            }
            GestureEvent::ScaleBegin { .. } => self.sequence.scaling = true,
            GestureEvent::ScaleUpdate {
                focus_x,
                focus_y,
                scale_x,
                scale_y,
            } => self.on_scale(focus_x, focus_y, scale_x, scale_y, computator, hits, &mut outcome),
            GestureEvent::ScaleEnd => self.sequence.scaling = false,
            GestureEvent::Fling {
                x,
                y,
                velocity_x,
                velocity_y,
            } => self.on_fling(x, y, velocity_x, velocity_y, computator, hits, &mut outcome),
            GestureEvent::Tap { x, y } => self.on_tap(x, y, computator, selection, hits, &mut outcome),
            GestureEvent::DoubleTap { x, y } => self.on_double_tap(x, y, computator, hits, &mut outcome),
            GestureEvent::LongPress { x, y } => {
                self.on_long_press(x, y, computator, selection, hits, &mut outcome);
            }
        }
        trace!(
            ?event,
            repaint = outcome.repaint,
            notices = outcome.notices.len(),
            "gesture interpreted"
        );
        outcome
    }

    fn on_down(
        &mut self,
        x: f64,
        y: f64,
        computator: &Computator,
        selection: &mut SelectionState,
        hits: &dyn HitTester,
        outcome: &mut GestureOutcome,
    ) {
        self.sequence = TouchSequence::default();
        outcome.stop_animations = true;
        if !self.config.value_touch_enabled {
            return;
        }
        let hit = match hits.hit_test(computator, x, y) {
            HitResult::Stale => return,
            hit => hit.value(),
        };
        if self.config.value_selection_enabled {
            match hit {
                Some(value) => {
                    if selection.select(value) {
                        outcome.notify(SelectionNotice::Selected(value));
                    }
                }
                None => {
                    if selection.clear().is_some() {
                        outcome.notify(SelectionNotice::Deselected);
                    }
                }
            }
        } else if selection.touched() != hit {
            selection.set_touched(hit);
            outcome.repaint = true;
        }
    }

    fn on_up(
        &mut self,
        x: f64,
        y: f64,
        computator: &Computator,
        selection: &mut SelectionState,
        hits: &dyn HitTester,
        outcome: &mut GestureOutcome,
    ) {
        let Some(touched) = selection.touched() else {
            return;
        };
        let hit = hits.hit_test(computator, x, y);
        if hit == HitResult::Stale {
            return;
        }
        selection.clear_touched();
        outcome.repaint = true;
        if hit == HitResult::Hit(touched) {
            outcome.notify(SelectionNotice::Selected(touched));
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn on_drag(
        &mut self,
        x: f64,
        y: f64,
        dx: f64,
        dy: f64,
        computator: &mut Computator,
        selection: &mut SelectionState,
        hits: &dyn HitTester,
        outcome: &mut GestureOutcome,
    ) {
        if let Some(touched) = selection.touched() {
            let hit = hits.hit_test(computator, x, y);
            if hit != HitResult::Hit(touched) && hit != HitResult::Stale {
                selection.clear_touched();
                outcome.repaint = true;
            }
        }

        if !self.sequence.dragging {
            self.sequence.travelled_px += dx.hypot(dy);
            if self.sequence.travelled_px < self.config.touch_slop_px {
                return;
            }
            self.sequence.dragging = true;
        }
        if self.sequence.container_claimed || self.sequence.scaling {
            return;
        }

        if let Some((center_x, center_y)) = hits.radial_center(computator) {
            if self.config.rotation_enabled {
                let degrees =
                    vector_to_scalar_scroll(dx, dy, x - center_x, y - center_y) / ROTATION_DOWNSCALE;
                if degrees != 0.0 {
                    outcome.rotation_delta += degrees;
                    outcome.repaint = true;
                }
            }
            return;
        }
        if !self.config.scroll_enabled {
            return;
        }

        let (value_dx, value_dy) = follow_finger(computator, dx, dy);
        let revision = computator.viewport_revision();
        let result = computator.move_viewport(value_dx, value_dy);
        if computator.viewport_revision() != revision {
            outcome.repaint = true;
        }
        self.claim_for_container(result, outcome);
    }

    fn claim_for_container(&mut self, result: ScrollResult, outcome: &mut GestureOutcome) {
        let blocked = match self.config.container_scroll {
            ContainerScrollType::None => false,
            ContainerScrollType::Horizontal => !result.can_scroll_x,
            ContainerScrollType::Vertical => !result.can_scroll_y,
        };
        if blocked {
            trace!(container = ?self.config.container_scroll, "container claimed drag");
            self.sequence.container_claimed = true;
            outcome.container_claimed = true;
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn on_scale(
        &mut self,
        focus_x: f64,
        focus_y: f64,
        scale_x: f64,
        scale_y: f64,
        computator: &mut Computator,
        hits: &dyn HitTester,
        outcome: &mut GestureOutcome,
    ) {
        if !self.config.zoom_enabled || hits.radial_center(computator).is_some() {
            return;
        }
        let (scale_x, scale_y) = if self.config.non_uniform_zoom {
            (scale_x, scale_y)
        } else {
            let uniform = (scale_x * scale_y).sqrt();
            (uniform, uniform)
        };
        let zoom_type = self.config.zoom_type;
        let scale_x = if zoom_type.zooms_x() { scale_x } else { 1.0 };
        let scale_y = if zoom_type.zooms_y() { scale_y } else { 1.0 };
        if computator.zoom(focus_x, focus_y, scale_x, scale_y) {
            outcome.repaint = true;
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn on_fling(
        &mut self,
        x: f64,
        y: f64,
        velocity_x: f64,
        velocity_y: f64,
        computator: &Computator,
        hits: &dyn HitTester,
        outcome: &mut GestureOutcome,
    ) {
        let fling = self.config.fling;
        if self.sequence.container_claimed
            || self.sequence.scaling
            || !velocity_x.is_finite()
            || !velocity_y.is_finite()
            || !fling.is_fast_enough(velocity_x, velocity_y)
        {
            return;
        }

        if let Some((center_x, center_y)) = hits.radial_center(computator) {
            if !self.config.rotation_enabled {
                return;
            }
            let angular_velocity =
                vector_to_scalar_scroll(velocity_x, velocity_y, x - center_x, y - center_y)
                    / ROTATION_DOWNSCALE;
            if angular_velocity == 0.0 {
                return;
            }
            outcome.animation = Some(AnimationRequest::Rotation {
                target: hits.rotation() + fling.distance(angular_velocity),
                duration: fling.duration(),
                multi_revolution: true,
                easing: Easing::EaseOutCubic,
            });
            return;
        }
        if !self.config.scroll_enabled {
            return;
        }

        let (value_dx, value_dy) = follow_finger(
            computator,
            fling.distance(velocity_x),
            fling.distance(velocity_y),
        );
        let target = computator.translated_viewport(value_dx, value_dy);
        if target != computator.current_viewport() {
            outcome.animation = Some(AnimationRequest::Viewport {
                target,
                duration: Some(fling.duration()),
                easing: Easing::EaseOutCubic,
            });
        }
    }

    fn on_tap(
        &mut self,
        x: f64,
        y: f64,
        computator: &Computator,
        selection: &mut SelectionState,
        hits: &dyn HitTester,
        outcome: &mut GestureOutcome,
    ) {
        if !self.config.value_touch_enabled || !self.config.value_selection_enabled {
            return;
        }
        match hits.hit_test(computator, x, y) {
            HitResult::Hit(value) => {
                selection.select(value);
                outcome.notify(SelectionNotice::Selected(value));
            }
            HitResult::Miss => {
                if selection.clear().is_some() {
                    outcome.notify(SelectionNotice::Deselected);
                }
            }
            HitResult::Stale => {}
        }
    }

    fn on_double_tap(
        &mut self,
        x: f64,
        y: f64,
        computator: &Computator,
        hits: &dyn HitTester,
        outcome: &mut GestureOutcome,
    ) {
        if !self.config.zoom_enabled || hits.radial_center(computator).is_some() {
            return;
        }
        let scale = 1.0 / (1.0 - DOUBLE_TAP_ZOOM_AMOUNT);
        let zoom_type = self.config.zoom_type;
        let scale_x = if zoom_type.zooms_x() { scale } else { 1.0 };
        let scale_y = if zoom_type.zooms_y() { scale } else { 1.0 };
        let target = computator
            .zoomed_viewport(x, y, scale_x, scale_y)
            .and_then(|viewport| computator.constrain(viewport));
        if let Some(target) = target.filter(|target| *target != computator.current_viewport()) {
            outcome.animation = Some(AnimationRequest::Viewport {
                target,
                duration: None,
                easing: Easing::AccelerateDecelerate,
            });
        }
    }

    fn on_long_press(
        &mut self,
        x: f64,
        y: f64,
        computator: &Computator,
        selection: &mut SelectionState,
        hits: &dyn HitTester,
        outcome: &mut GestureOutcome,
    ) {
        if !self.config.value_touch_enabled {
            return;
        }
        if let HitResult::Hit(value) = hits.hit_test(computator, x, y) {
            if self.config.value_selection_enabled {
                selection.select(value);
            }
            outcome.notify(SelectionNotice::Selected(value));
        }
    }
}

/// Logical delta making content follow a finger moved by `(dx, dy)` pixels.
///
/// Preview charts invert it: the highlighted area follows the finger
/// over a static full chart.
fn follow_finger(computator: &Computator, dx: f64, dy: f64) -> (f64, f64) {
    let (value_dx, value_dy) = computator.pixel_delta_to_value_delta(dx, dy);
    match computator.mode() {
        ComputatorMode::Standard => (value_dx, value_dy),
        ComputatorMode::Preview => (-value_dx, -value_dy),
    }
}
