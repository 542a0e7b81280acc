use tracing::{trace, warn};

use crate::animation::normalize_degrees;
use crate::core::{ChartData, Computator, SelectionState};
use crate::error::ChartResult;
use crate::interaction::{
    AnimationRequest, ContainerScrollType, FlingConfig, GestureConfig, GestureEvent, HitResult,
    HitTester, ZoomType,
};
use crate::render::{RenderFrame, Renderer};

use super::ChartEngine;
use super::validation::validate_fling_config;

/// Hit-testing view over the renderer for one gesture event.
///
/// Holds a copy of the selection so the interpreter can mutate the live
/// state while this tester is borrowed.
struct SceneHitTester<'a, R: Renderer> {
    renderer: &'a R,
    data: &'a ChartData,
    selection: SelectionState,
    rotation: f64,
}

impl<R: Renderer> SceneHitTester<'_, R> {
    fn frame<'f>(&'f self, computator: &'f Computator) -> RenderFrame<'f> {
        RenderFrame::new(computator, self.data, &self.selection, self.rotation)
    }
}

impl<R: Renderer> HitTester for SceneHitTester<'_, R> {
    fn hit_test(&self, computator: &Computator, x: f64, y: f64) -> HitResult {
        if !x.is_finite() || !y.is_finite() {
            return HitResult::Miss;
        }
        match self.renderer.hit_test(&self.frame(computator), x, y) {
            Some(value) if self.data.contains(value) => HitResult::Hit(value),
            Some(value) => {
                warn!(
                    first = value.first_index,
                    second = value.second_index,
                    "ignoring hit on missing value"
                );
                HitResult::Stale
            }
            None => HitResult::Miss,
        }
    }

    fn radial_center(&self, computator: &Computator) -> Option<(f64, f64)> {
        self.renderer.radial_center(&self.frame(computator))
    }

    fn rotation(&self) -> f64 {
        self.rotation
    }
}

impl<R: Renderer> ChartEngine<R> {
    /// Feeds one gesture primitive through the interpreter.
    ///
    /// Returns `true` when the host should repaint.
    pub fn handle_gesture(&mut self, event: GestureEvent) -> bool {
        let hits = SceneHitTester {
            renderer: &self.renderer,
            data: &self.data,
            selection: self.selection,
            rotation: self.rotation,
        };
        let outcome =
            self.interpreter
                .interpret(event, &mut self.computator, &mut self.selection, &hits);

        if outcome.stop_animations {
            self.viewport_animator.cancel();
            self.rotation_animator.cancel();
        }
        if outcome.rotation_delta != 0.0 {
            self.rotation = normalize_degrees(self.rotation + outcome.rotation_delta);
        }
        let animating = outcome.animation.is_some();
        if let Some(request) = outcome.animation {
            self.start_requested_animation(request);
        }
        for notice in outcome.notices.iter().copied() {
            self.dispatch_selection(notice);
        }
        let viewport_changed = self.sync_viewport();
        trace!(animating, viewport_changed, "gesture applied");
        outcome.repaint || animating || viewport_changed
    }

    fn start_requested_animation(&mut self, request: AnimationRequest) {
        match request {
            AnimationRequest::Viewport {
                target,
                duration,
                easing,
            } => self.viewport_animator.start(
                self.computator.current_viewport(),
                target,
                self.last_tick_nanos,
                duration.unwrap_or(self.behavior.durations.viewport()),
                easing,
            ),
            AnimationRequest::Rotation {
                target,
                duration,
                multi_revolution,
                easing,
            } => self.rotation_animator.start(
                self.rotation,
                target,
                multi_revolution,
                self.last_tick_nanos,
                duration,
                easing,
            ),
        }
    }

    /// Whether the surrounding container took over the current touch sequence.
    #[must_use]
    pub fn is_container_scroll_claimed(&self) -> bool {
        self.interpreter.is_container_claimed()
    }

    #[must_use]
    pub fn gesture_config(&self) -> GestureConfig {
        *self.interpreter.config()
    }

    pub(super) fn update_gesture_config(&mut self, update: impl FnOnce(&mut GestureConfig)) {
        let mut config = *self.interpreter.config();
        update(&mut config);
        self.interpreter.set_config(config);
    }

    pub fn set_zoom_enabled(&mut self, enabled: bool) {
        self.update_gesture_config(|config| config.zoom_enabled = enabled);
    }

    pub fn set_zoom_type(&mut self, zoom_type: ZoomType) {
        self.update_gesture_config(|config| config.zoom_type = zoom_type);
    }

    /// Independent X/Y pinch factors; off means pinch zoom is uniform.
    pub fn set_non_uniform_zoom(&mut self, enabled: bool) {
        self.update_gesture_config(|config| config.non_uniform_zoom = enabled);
    }

    pub fn set_scroll_enabled(&mut self, enabled: bool) {
        self.update_gesture_config(|config| config.scroll_enabled = enabled);
    }

    pub fn set_rotation_enabled(&mut self, enabled: bool) {
        self.update_gesture_config(|config| config.rotation_enabled = enabled);
    }

    pub fn set_container_scroll(&mut self, container_scroll: ContainerScrollType) {
        self.update_gesture_config(|config| config.container_scroll = container_scroll);
    }

    pub fn set_fling_config(&mut self, fling: FlingConfig) -> ChartResult<()> {
        validate_fling_config(fling)?;
        self.update_gesture_config(|config| config.fling = fling);
        Ok(())
    }
}
