use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Rectangular region of logical data space.
///
/// `top` is usually greater than `bottom` (values grow upwards). An inverted
/// vertical axis is expressed with `top < bottom`, in which case `height()` is
/// negative. `left <= right` always holds for viewports accepted by the
/// computator.
///
/// Equality is exact-value comparison. Viewports are small `Copy` snapshots:
/// mutate by building a new value and assigning it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Viewport {
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
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    /// Signed height, negative for an inverted vertical axis.
    #[must_use]
    pub fn height(self) -> f64 {
        self.top - self.bottom
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
    pub fn is_inverted_y(self) -> bool {
        self.top < self.bottom
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.right.is_finite()
            && self.bottom.is_finite()
    }

    /// Returns `true` when either axis has zero (or, for X, negative) extent.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.width() <= 0.0 || self.height() == 0.0
    }

    /// Rejects non-finite and degenerate viewports.
    pub fn validate(self) -> ChartResult<Self> {
        if !self.is_finite() || self.is_degenerate() {
            return Err(self.invalid());
        }
        Ok(self)
    }

    pub(crate) fn invalid(self) -> ChartError {
        ChartError::InvalidViewport {
            left: self.left,
            top: self.top,
            right: self.right,
            bottom: self.bottom,
        }
    }

    /// Lower and upper bounds of the vertical axis regardless of orientation.
    #[must_use]
    pub fn y_range(self) -> (f64, f64) {
        (self.top.min(self.bottom), self.top.max(self.bottom))
    }

    /// Returns `true` when `(x, y)` lies inside or on the edge of this viewport.
    #[must_use]
    pub fn contains_point(self, x: f64, y: f64) -> bool {
        let (y_min, y_max) = self.y_range();
        x >= self.left && x <= self.right && y >= y_min && y <= y_max
    }

    /// Returns `true` when `other` lies fully inside (or equal to) this viewport.
    #[must_use]
    pub fn contains(self, other: Viewport) -> bool {
        let (y_min, y_max) = self.y_range();
        let (other_min, other_max) = other.y_range();
        other.left >= self.left
            && other.right <= self.right
            && other_min >= y_min
            && other_max <= y_max
    }

    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(
            self.left + dx,
            self.top + dy,
            self.right + dx,
            self.bottom + dy,
        )
    }

    /// Moves the viewport so its top-left corner lands on `(left, top)`.
    #[must_use]
    pub fn offset_to(self, left: f64, top: f64) -> Self {
        Self::new(
            left,
            top,
            left + self.width(),
            top - self.height(),
        )
    }

    /// Linear interpolation of every edge; `fraction` is not clamped.
    #[must_use]
    pub fn lerp(self, target: Viewport, fraction: f64) -> Self {
        Self::new(
            self.left + (target.left - self.left) * fraction,
            self.top + (target.top - self.top) * fraction,
            self.right + (target.right - self.right) * fraction,
            self.bottom + (target.bottom - self.bottom) * fraction,
        )
    }

    /// Smallest viewport enclosing both inputs. Degenerate inputs are ignored.
    #[must_use]
    pub fn union(self, other: Viewport) -> Self {
        if other.is_degenerate() {
            return self;
        }
        if self.is_degenerate() {
            return other;
        }
        Self::new(
            self.left.min(other.left),
            self.top.max(other.top),
            self.right.max(other.right),
            self.bottom.min(other.bottom),
        )
    }
}
