use std::time::Duration;

use super::Easing;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationPhase {
    #[default]
    Idle,
    Running,
    Completed,
    Cancelled,
}

/// Lifecycle notification delivered to animator listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationEvent {
    Started,
    Completed,
    Cancelled,
}

pub type AnimationListener = Box<dyn FnMut(AnimationEvent)>;

/// Shared clock bookkeeping for the animators.
///
/// A start time of `None` while running means the animation was started
/// outside a tick (for example from a gesture); the next `advance` stamps it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct Timeline {
    phase: AnimationPhase,
    start_nanos: Option<u64>,
    duration_nanos: u64,
    easing: Easing,
}

impl Timeline {
    pub(crate) fn phase(&self) -> AnimationPhase {
        self.phase
    }

    pub(crate) fn is_running(&self) -> bool {
        self.phase == AnimationPhase::Running
    }

    pub(crate) fn start(&mut self, start_nanos: Option<u64>, duration: Duration, easing: Easing) {
        self.phase = AnimationPhase::Running;
        self.start_nanos = start_nanos;
        self.duration_nanos = u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX);
        self.easing = easing;
    }

    /// Eased progress at `now_nanos` and whether the animation just finished.
    ///
    /// Returns `None` unless running. Reaching the end moves the phase to
    /// `Completed`, so completion is reported once.
    pub(crate) fn progress(&mut self, now_nanos: u64) -> Option<(f64, bool)> {
        if !self.is_running() {
            return None;
        }
        let start = *self.start_nanos.get_or_insert(now_nanos);
        let elapsed = now_nanos.saturating_sub(start);
        let t = if self.duration_nanos == 0 {
            1.0
        } else {
            (elapsed as f64 / self.duration_nanos as f64).min(1.0)
        };
        let finished = t >= 1.0;
        if finished {
            self.phase = AnimationPhase::Completed;
        }
        Some((self.easing.apply(t), finished))
    }

    /// Moves `Running` to `Cancelled`. Returns `false` in any other phase.
    pub(crate) fn cancel(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.phase = AnimationPhase::Cancelled;
        true
    }
}

pub(crate) fn emit(listener: &mut Option<AnimationListener>, event: AnimationEvent) {
    if let Some(listener) = listener.as_mut() {
        listener(event);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{AnimationPhase, Timeline};
    use crate::animation::Easing;

    #[test]
    fn pending_start_is_stamped_on_first_tick() {
        let mut timeline = Timeline::default();
        timeline.start(None, Duration::from_nanos(100), Easing::Linear);
        assert_eq!(timeline.progress(1_000), Some((0.0, false)));
        assert_eq!(timeline.progress(1_050), Some((0.5, false)));
        assert_eq!(timeline.progress(1_100), Some((1.0, true)));
        assert_eq!(timeline.phase(), AnimationPhase::Completed);
        assert_eq!(timeline.progress(1_200), None);
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let mut timeline = Timeline::default();
        timeline.start(Some(5), Duration::ZERO, Easing::Linear);
        assert_eq!(timeline.progress(5), Some((1.0, true)));
    }

    #[test]
    fn cancel_only_applies_while_running() {
        let mut timeline = Timeline::default();
        assert!(!timeline.cancel());
        timeline.start(Some(0), Duration::from_nanos(10), Easing::Linear);
        assert!(timeline.cancel());
        assert!(!timeline.cancel());
        assert_eq!(timeline.phase(), AnimationPhase::Cancelled);
    }
}
