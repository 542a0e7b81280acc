use std::time::Duration;

use tracing::trace;

use super::timeline::emit;
use super::{AnimationEvent, AnimationListener, AnimationPhase, Easing, Timeline};
use crate::core::{Computator, Viewport};

/// Interpolates the current viewport between two snapshots.
///
/// Every tick goes through `Computator::set_current_viewport`, so bounds
/// changed mid-animation still clamp the interpolated viewport.
#[derive(Default)]
pub struct ViewportAnimator {
    timeline: Timeline,
    start: Viewport,
    target: Viewport,
    listener: Option<AnimationListener>,
}

impl ViewportAnimator {
    #[must_use]
    pub fn phase(&self) -> AnimationPhase {
        self.timeline.phase()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.timeline.is_running()
    }

    /// Target of the running (or last) animation.
    #[must_use]
    pub fn target(&self) -> Viewport {
        self.target
    }

    pub fn set_listener(&mut self, listener: Option<AnimationListener>) {
        self.listener = listener;
    }

    /// Animates from `start` (normally the current viewport) to `target`.
    pub fn start(
        &mut self,
        start: Viewport,
        target: Viewport,
        start_nanos: Option<u64>,
        duration: Duration,
        easing: Easing,
    ) {
        self.start = start;
        self.target = target;
        self.timeline.start(start_nanos, duration, easing);
        trace!(
            left = target.left,
            top = target.top,
            right = target.right,
            bottom = target.bottom,
            "viewport animation started"
        );
        emit(&mut self.listener, AnimationEvent::Started);
    }

    pub fn advance(&mut self, computator: &mut Computator, now_nanos: u64) -> bool {
        let Some((fraction, finished)) = self.timeline.progress(now_nanos) else {
            return false;
        };
        if finished {
            computator.set_current_viewport(self.target);
            trace!("viewport animation completed");
            emit(&mut self.listener, AnimationEvent::Completed);
        } else {
            computator.set_current_viewport(self.start.lerp(self.target, fraction));
        }
        true
    }

    pub fn cancel(&mut self) -> bool {
        if !self.timeline.cancel() {
            return false;
        }
        trace!("viewport animation cancelled");
        emit(&mut self.listener, AnimationEvent::Cancelled);
        true
    }
}
