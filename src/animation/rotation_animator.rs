use std::time::Duration;

use tracing::trace;

use super::timeline::emit;
use super::{AnimationEvent, AnimationListener, AnimationPhase, Easing, Timeline};

/// Wraps any angle into `[0, 360)`.
#[must_use]
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Signed delta in `(-180, 180]` taking `from` to `to` the short way round.
#[must_use]
pub fn shortest_rotation_delta(from: f64, to: f64) -> f64 {
    let delta = (to - from).rem_euclid(360.0);
    if delta > 180.0 { delta - 360.0 } else { delta }
}

/// Interpolates the chart rotation angle in degrees.
#[derive(Default)]
pub struct RotationAnimator {
    timeline: Timeline,
    start: f64,
    delta: f64,
    target: f64,
    listener: Option<AnimationListener>,
}

impl RotationAnimator {
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

    /// Animates from `start` to `target`.
    ///
    /// Without `multi_revolution` the shorter arc (at most 180 degrees) is
    /// taken. With it, the raw difference is used so a fling can spin the
    /// chart several times.
    pub fn start(
        &mut self,
        start: f64,
        target: f64,
        multi_revolution: bool,
        start_nanos: Option<u64>,
        duration: Duration,
        easing: Easing,
    ) {
        self.start = start;
        self.target = target;
        self.delta = if multi_revolution {
            target - start
        } else {
            shortest_rotation_delta(start, target)
        };
        self.timeline.start(start_nanos, duration, easing);
        trace!(start, target, delta = self.delta, "rotation animation started");
        emit(&mut self.listener, AnimationEvent::Started);
    }

    /// Writes the interpolated, normalized angle into `rotation`.
    pub fn advance(&mut self, rotation: &mut f64, now_nanos: u64) -> bool {
        let Some((fraction, finished)) = self.timeline.progress(now_nanos) else {
            return false;
        };
        if finished {
            *rotation = normalize_degrees(self.target);
            trace!("rotation animation completed");
            emit(&mut self.listener, AnimationEvent::Completed);
        } else {
            *rotation = normalize_degrees(self.start + self.delta * fraction);
        }
        true
    }

    pub fn cancel(&mut self) -> bool {
        if !self.timeline.cancel() {
            return false;
        }
        trace!("rotation animation cancelled");
        emit(&mut self.listener, AnimationEvent::Cancelled);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_degrees, shortest_rotation_delta};

    #[test]
    fn shortest_delta_crosses_zero() {
        assert_eq!(shortest_rotation_delta(350.0, 20.0), 30.0);
        assert_eq!(shortest_rotation_delta(20.0, 350.0), -30.0);
        assert_eq!(shortest_rotation_delta(0.0, 180.0), 180.0);
    }

    #[test]
    fn normalize_wraps_into_range() {
        assert_eq!(normalize_degrees(365.0), 5.0);
        assert_eq!(normalize_degrees(-30.0), 330.0);
        assert_eq!(normalize_degrees(720.0), 0.0);
    }
}
