use crate::core::{ChartData, Computator, SelectionState};
use crate::error::ChartResult;

/// Read-only snapshot handed to renderers for drawing and hit-testing.
///
/// Built after gestures and animation ticks for a frame were applied, so a
/// draw never observes a half-updated viewport.
#[derive(Debug, Clone, Copy)]
pub struct RenderFrame<'a> {
    pub computator: &'a Computator,
    pub data: &'a ChartData,
    pub selection: &'a SelectionState,
    /// Chart rotation in degrees, `[0, 360)`. Only radial charts read it.
    pub rotation: f64,
}

impl<'a> RenderFrame<'a> {
    #[must_use]
    pub fn new(
        computator: &'a Computator,
        data: &'a ChartData,
        selection: &'a SelectionState,
        rotation: f64,
    ) -> Self {
        Self {
            computator,
            data,
            selection,
            rotation,
        }
    }

    /// Checks the transform is drawable.
    pub fn validate(&self) -> ChartResult<()> {
        self.computator.content_rect().validate()?;
        self.computator.visible_viewport().validate()?;
        Ok(())
    }
}
