use serde::{Deserialize, Serialize};

/// Displayed value of a chart entity together with its animation endpoints.
///
/// Renderers read `value()` at any time. The data animator moves `value`
/// from `origin` towards `target`; the entity owns all three numbers so no
/// synchronization with the animator is needed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AnimatedScalar {
    value: f64,
    origin: f64,
    target: f64,
}

impl AnimatedScalar {
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self {
            value,
            origin: value,
            target: value,
        }
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn target(self) -> f64 {
        self.target
    }

    /// Sets the displayed value immediately and drops any pending target.
    pub fn set(&mut self, value: f64) {
        *self = Self::new(value);
    }

    /// Schedules `target`; the displayed value changes once the data
    /// animator runs (or `finish` is called).
    pub fn set_target(&mut self, target: f64) {
        self.origin = self.value;
        self.target = target;
    }

    /// Restarts interpolation from the currently displayed value.
    pub fn capture_start(&mut self) {
        self.origin = self.value;
    }

    pub fn interpolate(&mut self, fraction: f64) {
        self.value = self.origin + (self.target - self.origin) * fraction;
    }

    /// Snaps to the target exactly.
    pub fn finish(&mut self) {
        self.value = self.target;
        self.origin = self.target;
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.value.is_finite() && self.origin.is_finite() && self.target.is_finite()
    }
}

impl From<f64> for AnimatedScalar {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}
