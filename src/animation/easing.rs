use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Monotonic easing curves mapping `[0, 1]` onto `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    /// Slow start and end, cosine shaped.
    #[default]
    AccelerateDecelerate,
    /// Fast start, used for fling deceleration.
    EaseOutCubic,
}

impl Easing {
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::AccelerateDecelerate => (((t + 1.0) * PI).cos() * 0.5) + 0.5,
            Self::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Easing;

    #[test]
    fn curves_hit_endpoints() {
        for easing in [Easing::Linear, Easing::AccelerateDecelerate, Easing::EaseOutCubic] {
            assert!(easing.apply(0.0).abs() < 1e-12);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for easing in [Easing::Linear, Easing::AccelerateDecelerate, Easing::EaseOutCubic] {
            let mut previous = easing.apply(0.0);
            for step in 1..=100 {
                let current = easing.apply(f64::from(step) / 100.0);
                assert!(current >= previous);
                previous = current;
            }
        }
    }
}
