use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Pixel-space drawing rectangle. `y` grows downwards, so `top < bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ContentRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl ContentRect {
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle anchored at the origin with the given surface size.
    #[must_use]
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn center_x(self) -> f64 {
        (self.left + self.right) * 0.5
    }

    #[must_use]
    pub fn center_y(self) -> f64 {
        (self.top + self.bottom) * 0.5
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.right.is_finite()
            && self.bottom.is_finite()
            && self.width() > 0.0
            && self.height() > 0.0
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.is_valid() {
            return Err(ChartError::InvalidContentRect {
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(self)
    }

    /// Shrinks every side by the matching padding amount.
    #[must_use]
    pub fn inset(self, padding: Padding) -> Self {
        Self::new(
            self.left + padding.left,
            self.top + padding.top,
            self.right - padding.right,
            self.bottom - padding.bottom,
        )
    }

    /// Inclusive containment test widened by `precision` pixels on every side.
    #[must_use]
    pub fn contains(self, x: f64, y: f64, precision: f64) -> bool {
        x >= self.left - precision
            && x <= self.right + precision
            && y >= self.top - precision
            && y <= self.bottom + precision
    }
}

/// Per-side pixel padding.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Padding {
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }
}

/// Logical data-space point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Scrollable surface size in pixels: the maximum viewport expressed at the
/// current zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}
