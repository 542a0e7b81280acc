use crate::core::{ChartData, Computator, Padding, SelectedValue, Viewport};
use crate::error::ChartResult;
use crate::render::{ChartGeometry, RenderFrame, Renderer};

/// Headless renderer used by tests and engine hosts without a backend.
///
/// It paints nothing but performs real chart geometry, so viewport fitting
/// and hit-testing behave like a drawing backend would.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub geometry: ChartGeometry,
    pub draw_count: usize,
    pub last_viewport: Option<Viewport>,
    pub last_highlight: Option<SelectedValue>,
    pub viewport_changes: usize,
}

impl NullRenderer {
    #[must_use]
    pub fn with_geometry(geometry: ChartGeometry) -> Self {
        Self {
            geometry,
            ..Self::default()
        }
    }
}

impl Renderer for NullRenderer {
    fn compute_maximum_viewport(&self, data: &ChartData) -> Option<Viewport> {
        self.geometry.maximum_viewport(data)
    }

    fn content_margins(&self, data: &ChartData) -> Padding {
        self.geometry.content_margins(data)
    }

    fn hit_test(&self, frame: &RenderFrame<'_>, x: f64, y: f64) -> Option<SelectedValue> {
        self.geometry
            .hit_test(frame.computator, frame.data, frame.rotation, x, y)
    }

    fn radial_center(&self, frame: &RenderFrame<'_>) -> Option<(f64, f64)> {
        frame
            .data
            .is_radial()
            .then(|| self.geometry.pie_center(frame.computator))
    }

    fn draw(&mut self, frame: &RenderFrame<'_>) -> ChartResult<()> {
        frame.validate()?;
        self.draw_count += 1;
        self.last_viewport = Some(frame.computator.current_viewport());
        self.last_highlight = frame.selection.highlighted();
        Ok(())
    }

    fn on_viewport_changed(&mut self, _computator: &Computator) {
        self.viewport_changes += 1;
    }
}
