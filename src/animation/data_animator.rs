use std::time::Duration;

use tracing::trace;

use super::timeline::emit;
use super::{AnimationEvent, AnimationListener, AnimationPhase, Easing, Timeline};
use crate::core::ChartData;

/// Interpolates every chart value from its displayed value to its target.
///
/// The animator holds no data; each call borrows the chart data it drives.
#[derive(Default)]
pub struct DataAnimator {
    timeline: Timeline,
    listener: Option<AnimationListener>,
}

impl DataAnimator {
    #[must_use]
    pub fn phase(&self) -> AnimationPhase {
        self.timeline.phase()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.timeline.is_running()
    }

    pub fn set_listener(&mut self, listener: Option<AnimationListener>) {
        self.listener = listener;
    }

    /// Starts (or restarts) the transition towards the values' targets.
    ///
    /// The displayed values become the new start snapshot, so restarting a
    /// running animation does not jump back to the original start.
    pub fn start(&mut self, data: &mut ChartData, start_nanos: Option<u64>, duration: Duration) {
        data.for_each_scalar_mut(|scalar| scalar.capture_start());
        self.timeline
            .start(start_nanos, duration, Easing::AccelerateDecelerate);
        trace!(duration_ms = duration.as_millis() as u64, "data animation started");
        emit(&mut self.listener, AnimationEvent::Started);
    }

    /// Writes interpolated values; returns `true` when values changed.
    pub fn advance(&mut self, data: &mut ChartData, now_nanos: u64) -> bool {
        let Some((fraction, finished)) = self.timeline.progress(now_nanos) else {
            return false;
        };
        if finished {
            data.for_each_scalar_mut(|scalar| scalar.finish());
            trace!("data animation completed");
            emit(&mut self.listener, AnimationEvent::Completed);
        } else {
            data.for_each_scalar_mut(|scalar| scalar.interpolate(fraction));
        }
        true
    }

    /// Stops a running animation, leaving values where the last tick put them.
    pub fn cancel(&mut self) -> bool {
        if !self.timeline.cancel() {
            return false;
        }
        trace!("data animation cancelled");
        emit(&mut self.listener, AnimationEvent::Cancelled);
        true
    }
}
