use std::time::Duration;

use tracing::{trace, warn};

use crate::animation::{AnimationListener, AnimationPhase, Easing, normalize_degrees};
use crate::core::Viewport;
use crate::error::ChartResult;
use crate::render::Renderer;

use super::validation::validate_animation_durations;
use super::{AnimationDurations, ChartEngine};

impl<R: Renderer> ChartEngine<R> {
    /// Advances every running animator to `now_nanos`.
    ///
    /// Call once per frame after pending gestures and before `render`.
    /// Returns `true` when the frame needs a repaint.
    pub fn advance(&mut self, now_nanos: u64) -> bool {
        self.last_tick_nanos = Some(now_nanos);
        let mut repaint = false;
        if self.data_animator.advance(&mut self.data, now_nanos) {
            self.refit_viewports();
            repaint = true;
        }
        if self.viewport_animator.advance(&mut self.computator, now_nanos) {
            repaint = true;
        }
        if self.rotation_animator.advance(&mut self.rotation, now_nanos) {
            repaint = true;
        }
        let viewport_changed = self.sync_viewport();
        if repaint {
            trace!(now_nanos, viewport_changed, "animation tick");
        }
        repaint || viewport_changed
    }

    #[must_use]
    pub fn animation_durations(&self) -> AnimationDurations {
        self.behavior.durations
    }

    pub fn set_animation_durations(&mut self, durations: AnimationDurations) -> ChartResult<()> {
        self.behavior.durations = validate_animation_durations(durations)?;
        Ok(())
    }

    /// Animates every value from its displayed value to its target, starting
    /// at `now_nanos`. `None` uses the configured data duration.
    pub fn start_data_animation(&mut self, now_nanos: u64, duration: Option<Duration>) {
        let duration = duration.unwrap_or(self.behavior.durations.data());
        self.data_animator
            .start(&mut self.data, Some(now_nanos), duration);
    }

    pub fn cancel_data_animation(&mut self) -> bool {
        self.data_animator.cancel()
    }

    #[must_use]
    pub fn data_animation_phase(&self) -> AnimationPhase {
        self.data_animator.phase()
    }

    pub fn set_data_animation_listener(&mut self, listener: Option<AnimationListener>) {
        self.data_animator.set_listener(listener);
    }

    /// Animates the current viewport to `target` (clamped on every tick).
    ///
    /// The animation starts at the latest `advance` time, or on the first
    /// `advance` when the engine has not ticked yet.
    pub fn set_current_viewport_with_animation(&mut self, target: Viewport) {
        self.animate_viewport_to(target, self.behavior.durations.viewport());
    }

    /// Like `set_current_viewport_with_animation` with an explicit duration.
    pub fn set_current_viewport_with_animation_duration(
        &mut self,
        target: Viewport,
        duration: Duration,
    ) {
        self.animate_viewport_to(target, duration);
    }

    pub(super) fn animate_viewport_to(&mut self, target: Viewport, duration: Duration) {
        if !target.is_finite() {
            warn!(error = %target.invalid(), "ignoring viewport animation target");
            return;
        }
        self.viewport_animator.start(
            self.computator.current_viewport(),
            target,
            self.last_tick_nanos,
            duration,
            Easing::AccelerateDecelerate,
        );
    }

    pub fn cancel_viewport_animation(&mut self) -> bool {
        self.viewport_animator.cancel()
    }

    #[must_use]
    pub fn viewport_animation_phase(&self) -> AnimationPhase {
        self.viewport_animator.phase()
    }

    pub fn set_viewport_animation_listener(&mut self, listener: Option<AnimationListener>) {
        self.viewport_animator.set_listener(listener);
    }

    #[must_use]
    pub fn chart_rotation(&self) -> f64 {
        self.rotation
    }

    /// Rotates a radial chart.
    ///
    /// Animated rotation takes the shorter arc over the configured rotation
    /// duration; otherwise any running rotation animation is cancelled.
    pub fn set_chart_rotation(&mut self, degrees: f64, animated: bool) {
        if !degrees.is_finite() {
            warn!(degrees, "ignoring non-finite chart rotation");
            return;
        }
        if animated {
            self.rotation_animator.start(
                self.rotation,
                degrees,
                false,
                self.last_tick_nanos,
                self.behavior.durations.rotation(),
                Easing::AccelerateDecelerate,
            );
        } else {
            self.rotation_animator.cancel();
            self.rotation = normalize_degrees(degrees);
        }
    }

    pub fn cancel_rotation_animation(&mut self) -> bool {
        self.rotation_animator.cancel()
    }

    #[must_use]
    pub fn rotation_animation_phase(&self) -> AnimationPhase {
        self.rotation_animator.phase()
    }

    pub fn set_rotation_animation_listener(&mut self, listener: Option<AnimationListener>) {
        self.rotation_animator.set_listener(listener);
    }
}
