use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::core::{ContentRect, DataPoint, Padding, SurfaceSize, Viewport};

/// Default maximum zoom: the current viewport may shrink to 1/20 of the
/// maximum viewport on each axis.
pub const DEFAULT_MAX_ZOOM: f64 = 20.0;

/// Relative tolerance applied to minimum-span checks so that clamping is
/// idempotent under floating-point rounding.
const SPAN_TOLERANCE: f64 = 1e-9;

/// How logical coordinates map onto the content rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ComputatorMode {
    /// Pixels map through the current viewport.
    #[default]
    Standard,
    /// Pixels map through the maximum viewport; the current viewport is the
    /// highlighted preview area drawn on top of the full chart.
    Preview,
}

/// Axes affected by zoom gestures and zoom-level requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ZoomType {
    Horizontal,
    Vertical,
    #[default]
    HorizontalAndVertical,
}

impl ZoomType {
    #[must_use]
    pub fn zooms_x(self) -> bool {
        matches!(self, Self::Horizontal | Self::HorizontalAndVertical)
    }

    #[must_use]
    pub fn zooms_y(self) -> bool {
        matches!(self, Self::Vertical | Self::HorizontalAndVertical)
    }
}

/// Whether a translation could move the viewport on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScrollResult {
    pub can_scroll_x: bool,
    pub can_scroll_y: bool,
}

impl ScrollResult {
    #[must_use]
    pub fn any(self) -> bool {
        self.can_scroll_x || self.can_scroll_y
    }
}

/// Owns the logical/pixel transform and enforces pan/zoom constraints.
///
/// After every public mutation the current viewport lies inside the maximum
/// viewport and is at least as large as the effective minimum size on both
/// axes. Invalid input (non-finite values, degenerate rectangles) is logged
/// and ignored; the last known-good state is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct Computator {
    mode: ComputatorMode,
    chart_width: f64,
    chart_height: f64,
    max_content_rect: ContentRect,
    content_rect: ContentRect,
    current: Viewport,
    maximum: Viewport,
    configured_min_width: f64,
    configured_min_height: f64,
    max_zoom: f64,
    revision: u64,
}

impl Default for Computator {
    fn default() -> Self {
        Self::new(ComputatorMode::Standard)
    }
}

impl Computator {
    #[must_use]
    pub fn new(mode: ComputatorMode) -> Self {
        let unit = Viewport::new(0.0, 1.0, 1.0, 0.0);
        Self {
            mode,
            chart_width: 0.0,
            chart_height: 0.0,
            max_content_rect: ContentRect::default(),
            content_rect: ContentRect::default(),
            current: unit,
            maximum: unit,
            configured_min_width: 0.0,
            configured_min_height: 0.0,
            max_zoom: DEFAULT_MAX_ZOOM,
            revision: 0,
        }
    }

    #[must_use]
    pub fn mode(&self) -> ComputatorMode {
        self.mode
    }

    /// Applies a new surface rectangle minus padding.
    ///
    /// Returns `false` and keeps the previous rectangle when the padded area
    /// has non-positive width or height.
    pub fn set_content_rect(&mut self, rect: ContentRect, padding: Padding) -> bool {
        let content = match rect.inset(padding).validate() {
            Ok(content) => content,
            Err(err) => {
                warn!(error = %err, "ignoring content rectangle");
                return false;
            }
        };
        self.chart_width = rect.width();
        self.chart_height = rect.height();
        self.max_content_rect = content;
        self.content_rect = content;
        true
    }

    /// Shrinks the drawing area by renderer-specific internal margins.
    pub fn inset_content_rect(&mut self, margins: Padding) -> bool {
        match self.content_rect.inset(margins).validate() {
            Ok(content) => {
                self.content_rect = content;
                true
            }
            Err(err) => {
                warn!(error = %err, "ignoring content rectangle inset");
                false
            }
        }
    }

    pub fn reset_content_rect(&mut self) {
        self.content_rect = self.max_content_rect;
    }

    #[must_use]
    pub fn content_rect(&self) -> ContentRect {
        self.content_rect
    }

    #[must_use]
    pub fn chart_size(&self) -> (f64, f64) {
        (self.chart_width, self.chart_height)
    }

    #[must_use]
    pub fn current_viewport(&self) -> Viewport {
        self.current
    }

    #[must_use]
    pub fn max_viewport(&self) -> Viewport {
        self.maximum
    }

    /// Viewport used for the logical/pixel transform.
    #[must_use]
    pub fn visible_viewport(&self) -> Viewport {
        match self.mode {
            ComputatorMode::Standard => self.current,
            ComputatorMode::Preview => self.maximum,
        }
    }

    /// Monotonic counter bumped whenever the current viewport value changes.
    #[must_use]
    pub fn viewport_revision(&self) -> u64 {
        self.revision
    }

    /// Replaces the maximum viewport and refits the current viewport into it.
    ///
    /// The current viewport keeps its size and center where the new bounds
    /// allow it.
    pub fn set_max_viewport(&mut self, viewport: Viewport) -> bool {
        let viewport = match viewport.validate() {
            Ok(viewport) => viewport,
            Err(err) => {
                warn!(error = %err, "ignoring maximum viewport");
                return false;
            }
        };
        self.maximum = viewport;

        let current = self.current;
        let (left, right) = recenter_axis(current.left, current.right, viewport.left, viewport.right);
        let (top, bottom) = if viewport.is_inverted_y() {
            recenter_axis(current.top, current.bottom, viewport.top, viewport.bottom)
        } else {
            let (bottom, top) =
                recenter_axis(current.bottom, current.top, viewport.bottom, viewport.top);
            (top, bottom)
        };
        self.apply(Viewport::new(left, top, right, bottom));
        true
    }

    /// Clips `viewport` against the maximum viewport and the minimum size and
    /// stores the result. Returns the effective viewport.
    pub fn set_current_viewport(&mut self, viewport: Viewport) -> Viewport {
        self.apply(viewport);
        self.current
    }

    /// Clamped form of `viewport` without mutating state.
    ///
    /// Returns `None` for non-finite input.
    #[must_use]
    pub fn constrain(&self, viewport: Viewport) -> Option<Viewport> {
        if !viewport.is_finite() {
            return None;
        }
        let max = self.maximum;
        let min_width = self.min_viewport_width();
        let min_height = self.min_viewport_height();

        let (left, right) =
            constrain_axis(viewport.left, viewport.right, max.left, max.right, min_width);
        let (top, bottom) = if max.is_inverted_y() {
            constrain_axis(viewport.top, viewport.bottom, max.top, max.bottom, min_height)
        } else {
            let (bottom, top) =
                constrain_axis(viewport.bottom, viewport.top, max.bottom, max.top, min_height);
            (top, bottom)
        };
        Some(Viewport::new(left, top, right, bottom))
    }

    fn apply(&mut self, viewport: Viewport) -> bool {
        let Some(constrained) = self.constrain(viewport) else {
            warn!(error = %viewport.invalid(), "ignoring current viewport");
            return false;
        };
        if constrained == self.current {
            return false;
        }
        trace!(
            left = constrained.left,
            top = constrained.top,
            right = constrained.right,
            bottom = constrained.bottom,
            "current viewport changed"
        );
        self.current = constrained;
        self.revision = self.revision.wrapping_add(1);
        true
    }

    /// Effective minimum viewport width (configured minimum or max-zoom limit).
    #[must_use]
    pub fn min_viewport_width(&self) -> f64 {
        let span = self.maximum.width().abs();
        self.configured_min_width.max(span / self.max_zoom).min(span)
    }

    /// Effective minimum viewport height magnitude.
    #[must_use]
    pub fn min_viewport_height(&self) -> f64 {
        let span = self.maximum.height().abs();
        self.configured_min_height.max(span / self.max_zoom).min(span)
    }

    /// Sets the configured zoom-in limit in logical units.
    pub fn set_minimum_viewport_size(&mut self, width: f64, height: f64) {
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            warn!(width, height, "ignoring minimum viewport size");
            return;
        }
        self.configured_min_width = width;
        self.configured_min_height = height;
        self.apply(self.current);
    }

    #[must_use]
    pub fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    /// Sets the maximum zoom factor; values below 1 are raised to 1.
    pub fn set_max_zoom(&mut self, max_zoom: f64) {
        if !max_zoom.is_finite() {
            warn!(max_zoom, "ignoring non-finite maximum zoom");
            return;
        }
        self.max_zoom = max_zoom.max(1.0);
        self.apply(self.current);
    }

    /// Ratio between the maximum and current viewport on the more zoomed axis.
    #[must_use]
    pub fn zoom_level(&self) -> f64 {
        let x = self.maximum.width() / self.current.width();
        let y = self.maximum.height().abs() / self.current.height().abs();
        x.max(y)
    }

    /// Viewport translated by a logical delta, clamped per axis.
    ///
    /// Each axis is clamped independently so a pan that is valid on X but
    /// blocked on Y still moves on X.
    #[must_use]
    pub fn translated_viewport(&self, dx: f64, dy: f64) -> Viewport {
        let current = self.current;
        let max = self.maximum;
        let (left, right) = shift_axis(current.left, current.right, dx, max.left, max.right);
        let (top, bottom) = if max.is_inverted_y() {
            shift_axis(current.top, current.bottom, dy, max.top, max.bottom)
        } else {
            let (bottom, top) = shift_axis(current.bottom, current.top, dy, max.bottom, max.top);
            (top, bottom)
        };
        Viewport::new(left, top, right, bottom)
    }

    /// Whether a logical translation would move the viewport on each axis.
    #[must_use]
    pub fn scroll_capability(&self, dx: f64, dy: f64) -> ScrollResult {
        let current = self.current;
        let max = self.maximum;
        let can_scroll_y = if max.is_inverted_y() {
            can_shift(current.top, current.bottom, dy, max.top, max.bottom)
        } else {
            can_shift(current.bottom, current.top, dy, max.bottom, max.top)
        };
        ScrollResult {
            can_scroll_x: can_shift(current.left, current.right, dx, max.left, max.right),
            can_scroll_y,
        }
    }

    /// Translates the current viewport by a logical delta.
    pub fn move_viewport(&mut self, dx: f64, dy: f64) -> ScrollResult {
        if !dx.is_finite() || !dy.is_finite() {
            warn!(dx, dy, "ignoring non-finite viewport translation");
            return ScrollResult::default();
        }
        let result = self.scroll_capability(dx, dy);
        if result.any() {
            self.apply(self.translated_viewport(dx, dy));
        }
        result
    }

    /// Logical delta that makes the content follow a finger displacement of
    /// `(dx_px, dy_px)` pixels.
    #[must_use]
    pub fn pixel_delta_to_value_delta(&self, dx_px: f64, dy_px: f64) -> (f64, f64) {
        let visible = self.visible_viewport();
        let content = self.content_rect;
        let dx = -dx_px * visible.width() / content.width();
        let dy = dy_px * visible.height() / content.height();
        (dx, dy)
    }

    /// Pans so the content follows a finger displacement in pixels.
    pub fn scroll_by_pixels(&mut self, dx_px: f64, dy_px: f64) -> ScrollResult {
        let (dx, dy) = self.pixel_delta_to_value_delta(dx_px, dy_px);
        self.move_viewport(dx, dy)
    }

    /// Viewport produced by zooming around a pixel pivot, without mutating.
    ///
    /// `scale_x`/`scale_y > 1` zoom in. Returns `None` when the pivot lies
    /// outside the content rectangle, a scale is not finite and positive, or
    /// a zoom-in is requested on an axis already at its minimum size.
    #[must_use]
    pub fn zoomed_viewport(
        &self,
        pivot_px_x: f64,
        pivot_px_y: f64,
        scale_x: f64,
        scale_y: f64,
    ) -> Option<Viewport> {
        if !scale_x.is_finite() || !scale_y.is_finite() || scale_x <= 0.0 || scale_y <= 0.0 {
            return None;
        }
        let pivot = self.pixel_to_value(pivot_px_x, pivot_px_y)?;

        let current = self.current;
        let width = current.width();
        let height = current.height();
        let min_width = self.min_viewport_width();
        let min_height = self.min_viewport_height();
        let at_min_width = width <= min_width * (1.0 + SPAN_TOLERANCE);
        let at_min_height = height.abs() <= min_height * (1.0 + SPAN_TOLERANCE);
        if (scale_x > 1.0 && at_min_width) || (scale_y > 1.0 && at_min_height) {
            return None;
        }

        let new_width = (width / scale_x).max(min_width);
        let new_height = (height.abs() / scale_y).max(min_height).copysign(height);
        let width_ratio = new_width / width;
        let height_ratio = new_height / height;

        let left = pivot.x - (pivot.x - current.left) * width_ratio;
        let top = pivot.y + (current.top - pivot.y) * height_ratio;
        Some(Viewport::new(
            left,
            top,
            left + new_width,
            top - new_height,
        ))
    }

    /// Zooms around a pixel pivot so the logical point under it stays put.
    ///
    /// Returns `true` when the current viewport changed.
    pub fn zoom(&mut self, pivot_px_x: f64, pivot_px_y: f64, scale_x: f64, scale_y: f64) -> bool {
        match self.zoomed_viewport(pivot_px_x, pivot_px_y, scale_x, scale_y) {
            Some(viewport) => self.apply(viewport),
            None => {
                trace!(pivot_px_x, pivot_px_y, scale_x, scale_y, "zoom rejected");
                false
            }
        }
    }

    /// Current-size viewport centered on logical `(x, y)` and shifted inside
    /// the maximum viewport. Points outside the maximum viewport yield the
    /// current viewport.
    #[must_use]
    pub fn centered_viewport(&self, x: f64, y: f64) -> Viewport {
        let current = self.current;
        if !self.maximum.contains_point(x, y) {
            return current;
        }
        let target = current.offset(x - current.center_x(), y - current.center_y());
        self.translated_viewport(target.left - current.left, target.top - current.top)
    }

    /// Viewport of `max / level` centered on logical `(x, y)`.
    ///
    /// The level is clamped to `[1, max_zoom]`; axes excluded by `zoom_type`
    /// keep the current viewport bounds.
    #[must_use]
    pub fn zoom_level_viewport(&self, x: f64, y: f64, level: f64, zoom_type: ZoomType) -> Viewport {
        let max = self.maximum;
        let current = self.current;
        if !level.is_finite() || !max.contains_point(x, y) {
            return current;
        }
        let level = level.clamp(1.0, self.max_zoom);
        let width = max.width() / level;
        let height = max.height() / level;

        let (left, right) = if zoom_type.zooms_x() {
            recenter_axis(x - width * 0.5, x + width * 0.5, max.left, max.right)
        } else {
            (current.left, current.right)
        };
        let (top, bottom) = if !zoom_type.zooms_y() {
            (current.top, current.bottom)
        } else if max.is_inverted_y() {
            recenter_axis(y + height * 0.5, y - height * 0.5, max.top, max.bottom)
        } else {
            let (bottom, top) = recenter_axis(y - height * 0.5, y + height * 0.5, max.bottom, max.top);
            (top, bottom)
        };
        Viewport::new(left, top, right, bottom)
    }

    /// Logical X to absolute pixel X.
    #[must_use]
    pub fn compute_raw_x(&self, value_x: f64) -> f64 {
        let visible = self.visible_viewport();
        let content = self.content_rect;
        content.left + (value_x - visible.left) * content.width() / visible.width()
    }

    /// Logical Y to absolute pixel Y (pixel Y grows downwards).
    #[must_use]
    pub fn compute_raw_y(&self, value_y: f64) -> f64 {
        let visible = self.visible_viewport();
        let content = self.content_rect;
        content.bottom - (value_y - visible.bottom) * content.height() / visible.height()
    }

    /// Exact inverse of `compute_raw_x` / `compute_raw_y`, without bounds checks.
    #[must_use]
    pub fn compute_raw_value(&self, pixel_x: f64, pixel_y: f64) -> DataPoint {
        let visible = self.visible_viewport();
        let content = self.content_rect;
        DataPoint::new(
            visible.left + (pixel_x - content.left) * visible.width() / content.width(),
            visible.bottom + (content.bottom - pixel_y) * visible.height() / content.height(),
        )
    }

    /// Logical point under a pixel, or `None` outside the content rectangle.
    #[must_use]
    pub fn pixel_to_value(&self, pixel_x: f64, pixel_y: f64) -> Option<DataPoint> {
        if !pixel_x.is_finite() || !pixel_y.is_finite() {
            return None;
        }
        if !self.content_rect.contains(pixel_x, pixel_y, 0.0) {
            return None;
        }
        Some(self.compute_raw_value(pixel_x, pixel_y))
    }

    /// Logical X distance to pixels.
    #[must_use]
    pub fn compute_raw_distance_x(&self, distance: f64) -> f64 {
        distance * self.content_rect.width() / self.visible_viewport().width()
    }

    /// Logical Y distance to pixels.
    #[must_use]
    pub fn compute_raw_distance_y(&self, distance: f64) -> f64 {
        distance * self.content_rect.height() / self.visible_viewport().height().abs()
    }

    #[must_use]
    pub fn is_within_content_rect(&self, x: f64, y: f64, precision: f64) -> bool {
        self.content_rect.contains(x, y, precision)
    }

    /// Size of the whole maximum viewport in pixels at the current zoom.
    #[must_use]
    pub fn scroll_surface_size(&self) -> SurfaceSize {
        let content = self.content_rect;
        SurfaceSize {
            width: self.maximum.width() * content.width() / self.current.width(),
            height: self.maximum.height().abs() * content.height() / self.current.height().abs(),
        }
    }
}

/// Clips `[start, end]` to `[lower, upper]` and enforces `min_span`.
///
/// A span below the minimum (including a zero or reversed span) is replaced
/// by a minimum-size span around the requested center, shifted inside the
/// bounds.
fn constrain_axis(start: f64, end: f64, lower: f64, upper: f64, min_span: f64) -> (f64, f64) {
    let bound_span = upper - lower;
    let min_span = min_span.max(0.0).min(bound_span);
    let mut lo = start.max(lower);
    let mut hi = end.min(upper);
    if hi <= lo || hi - lo < min_span * (1.0 - SPAN_TOLERANCE) {
        let half = min_span * 0.5;
        let center = ((start + end) * 0.5).max(lower + half).min(upper - half);
        lo = center - half;
        hi = center + half;
    }
    (lo.max(lower), hi.min(upper))
}

/// Keeps the span of `[start, end]` (capped at the bounds span) and moves its
/// center the least distance needed to fit inside `[lower, upper]`.
fn recenter_axis(start: f64, end: f64, lower: f64, upper: f64) -> (f64, f64) {
    let span = (end - start).min(upper - lower);
    let half = span * 0.5;
    let center = ((start + end) * 0.5).max(lower + half).min(upper - half);
    ((center - half).max(lower), (center + half).min(upper))
}

fn shift_axis(start: f64, end: f64, delta: f64, lower: f64, upper: f64) -> (f64, f64) {
    let span = end - start;
    let new_start = (start + delta).min(upper - span).max(lower);
    (new_start, new_start + span)
}

fn can_shift(start: f64, end: f64, delta: f64, lower: f64, upper: f64) -> bool {
    (delta < 0.0 && start > lower) || (delta > 0.0 && end < upper)
}

#[cfg(test)]
mod tests {
    use super::{constrain_axis, recenter_axis, shift_axis};

    #[test]
    fn constrain_axis_clips_to_bounds() {
        assert_eq!(constrain_axis(-5.0, 5.0, 0.0, 10.0, 1.0), (0.0, 5.0));
    }

    #[test]
    fn constrain_axis_expands_zero_span_around_center() {
        assert_eq!(constrain_axis(4.0, 4.0, 0.0, 10.0, 2.0), (3.0, 5.0));
    }

    #[test]
    fn constrain_axis_moves_outside_request_to_nearest_edge() {
        assert_eq!(constrain_axis(20.0, 21.0, 0.0, 10.0, 2.0), (8.0, 10.0));
    }

    #[test]
    fn recenter_axis_keeps_span_when_possible() {
        assert_eq!(recenter_axis(8.0, 12.0, 0.0, 10.0), (6.0, 10.0));
        assert_eq!(recenter_axis(-5.0, 25.0, 0.0, 10.0), (0.0, 10.0));
    }

    #[test]
    fn shift_axis_stops_at_bounds() {
        assert_eq!(shift_axis(0.0, 10.0, 15.0, 0.0, 20.0), (10.0, 20.0));
        assert_eq!(shift_axis(5.0, 10.0, -8.0, 0.0, 20.0), (0.0, 5.0));
    }
}
