use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Deceleration model for fling gestures.
///
/// Velocity decays exponentially: after one second `decay_per_second` of the
/// release velocity remains.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlingConfig {
    pub decay_per_second: f64,
    /// Releases slower than this (pixels per second) do not fling.
    pub min_velocity_px_per_sec: f64,
}

impl Default for FlingConfig {
    fn default() -> Self {
        Self {
            decay_per_second: 0.05,
            min_velocity_px_per_sec: 50.0,
        }
    }
}

impl FlingConfig {
    fn decay_rate(self) -> f64 {
        -self.decay_per_second.ln()
    }

    /// Total travel in pixels for a release velocity.
    #[must_use]
    pub fn distance(self, velocity: f64) -> f64 {
        velocity / self.decay_rate()
    }

    /// Time until the remaining velocity drops to about 5% of the release
    /// velocity.
    #[must_use]
    pub fn duration(self) -> Duration {
        Duration::from_secs_f64(3.0 / self.decay_rate())
    }

    #[must_use]
    pub fn is_fast_enough(self, velocity_x: f64, velocity_y: f64) -> bool {
        velocity_x.hypot(velocity_y) >= self.min_velocity_px_per_sec
    }
}
