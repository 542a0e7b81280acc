mod frame;
mod geometry;
mod null_renderer;

pub use frame::RenderFrame;
pub use geometry::{
    ChartGeometry, DEFAULT_CHART_ROTATION, PIE_VIEWPORT_SIZE, point_to_angle, slice_at_angle,
};
pub use null_renderer::NullRenderer;

use crate::core::{ChartData, Computator, Padding, SelectedValue, Viewport};
use crate::error::ChartResult;

/// Contract implemented by any chart drawing backend.
///
/// The engine owns the transform and selection state; backends answer
/// geometric questions about their chart kind and paint `RenderFrame`s.
pub trait Renderer {
    /// Logical bounds enclosing the data, or `None` when there is nothing to fit.
    fn compute_maximum_viewport(&self, data: &ChartData) -> Option<Viewport>;

    /// Pixel margins the backend needs inside the content rectangle.
    fn content_margins(&self, _data: &ChartData) -> Padding {
        Padding::default()
    }

    /// Value plotted under pixel `(x, y)`.
    fn hit_test(&self, frame: &RenderFrame<'_>, x: f64, y: f64) -> Option<SelectedValue>;

    /// Pixel center for radial charts; `None` for cartesian charts.
    fn radial_center(&self, _frame: &RenderFrame<'_>) -> Option<(f64, f64)> {
        None
    }

    fn draw(&mut self, frame: &RenderFrame<'_>) -> ChartResult<()>;

    /// Called after the current viewport changed, before the next draw.
    fn on_viewport_changed(&mut self, _computator: &Computator) {}
}
