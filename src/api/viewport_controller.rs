use tracing::{debug, warn};

use crate::core::{ContentRect, Padding, SurfaceSize, Viewport};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::validation::validate_max_zoom;
use super::{ChartEngine, engine::ViewportListener};

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn current_viewport(&self) -> Viewport {
        self.computator.current_viewport()
    }

    #[must_use]
    pub fn max_viewport(&self) -> Viewport {
        self.computator.max_viewport()
    }

    /// Viewport the pixel transform uses (the maximum viewport for preview
    /// charts).
    #[must_use]
    pub fn visible_viewport(&self) -> Viewport {
        self.computator.visible_viewport()
    }

    /// Clamps and applies `viewport`, returning the effective viewport.
    pub fn set_current_viewport(&mut self, viewport: Viewport) -> Viewport {
        let effective = self.computator.set_current_viewport(viewport);
        self.sync_viewport();
        effective
    }

    /// Replaces the maximum viewport. Hosts normally disable viewport
    /// calculation first, or the next data change refits it.
    pub fn set_max_viewport(&mut self, viewport: Viewport) -> bool {
        let applied = self.computator.set_max_viewport(viewport);
        self.sync_viewport();
        applied
    }

    /// Sets the current viewport back to the maximum viewport.
    pub fn reset_viewport(&mut self) {
        let maximum = self.computator.max_viewport();
        self.set_current_viewport(maximum);
    }

    #[must_use]
    pub fn content_rect(&self) -> ContentRect {
        self.computator.content_rect()
    }

    /// Applies a resized drawing surface. Invalid rectangles are ignored.
    pub fn set_content_rect(&mut self, rect: ContentRect, padding: Padding) -> bool {
        if !self.computator.set_content_rect(rect, padding) {
            return false;
        }
        self.apply_content_margins();
        self.renderer.on_viewport_changed(&self.computator);
        debug!(width = rect.width(), height = rect.height(), "content rectangle resized");
        true
    }

    #[must_use]
    pub fn max_zoom(&self) -> f64 {
        self.computator.max_zoom()
    }

    pub fn set_max_zoom(&mut self, max_zoom: f64) -> ChartResult<()> {
        validate_max_zoom(max_zoom)?;
        self.computator.set_max_zoom(max_zoom);
        self.sync_viewport();
        Ok(())
    }

    /// Configured zoom-in limit in logical units.
    pub fn set_minimum_viewport_size(&mut self, width: f64, height: f64) {
        self.computator.set_minimum_viewport_size(width, height);
        self.sync_viewport();
    }

    #[must_use]
    pub fn zoom_level(&self) -> f64 {
        self.computator.zoom_level()
    }

    /// Shows `max / level` centered on logical `(x, y)`.
    pub fn set_zoom_level(&mut self, x: f64, y: f64, level: f64) {
        let target = self.zoom_level_target(x, y, level);
        self.set_current_viewport(target);
    }

    pub fn set_zoom_level_with_animation(&mut self, x: f64, y: f64, level: f64) {
        let target = self.zoom_level_target(x, y, level);
        self.animate_viewport_to(target, self.behavior.durations.viewport());
    }

    fn zoom_level_target(&self, x: f64, y: f64, level: f64) -> Viewport {
        if !level.is_finite() {
            warn!(level, "ignoring non-finite zoom level");
            return self.computator.current_viewport();
        }
        self.computator
            .zoom_level_viewport(x, y, level, self.interpreter.config().zoom_type)
    }

    /// Centers the current viewport on logical `(x, y)` keeping its size.
    pub fn move_to(&mut self, x: f64, y: f64) {
        let target = self.computator.centered_viewport(x, y);
        self.set_current_viewport(target);
    }

    pub fn move_to_with_animation(&mut self, x: f64, y: f64) {
        let target = self.computator.centered_viewport(x, y);
        self.animate_viewport_to(target, self.behavior.durations.viewport());
    }

    /// Pixel size of the whole maximum viewport at the current zoom, for
    /// hosts drawing scroll indicators.
    #[must_use]
    pub fn scroll_surface_size(&self) -> SurfaceSize {
        self.computator.scroll_surface_size()
    }

    #[must_use]
    pub fn is_viewport_notification_enabled(&self) -> bool {
        self.behavior.notify_on_viewport_change
    }

    pub fn set_viewport_notification_enabled(&mut self, enabled: bool) {
        self.behavior.notify_on_viewport_change = enabled;
    }

    pub fn set_viewport_listener(&mut self, listener: Option<ViewportListener>) {
        self.viewport_listener = listener;
    }
}
