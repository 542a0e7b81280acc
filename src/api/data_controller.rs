use tracing::{debug, warn};

use crate::core::{ChartData, Padding, SelectedValue, SelectedValueKind, SelectionEvent};
use crate::error::ChartResult;
use crate::render::{Renderer, slice_at_angle};

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn data(&self) -> &ChartData {
        &self.data
    }

    /// Mutable access for editing values or their animation targets.
    ///
    /// Call `notify_data_changed` after structural edits so margins,
    /// viewports and selection follow the new values.
    pub fn data_mut(&mut self) -> &mut ChartData {
        &mut self.data
    }

    /// Replaces the chart data.
    ///
    /// A running data animation is cancelled and the selection is reset.
    pub fn set_data(&mut self, data: ChartData) -> ChartResult<()> {
        data.validate()?;
        self.data_animator.cancel();
        self.data = data;
        self.selection.reset();
        self.apply_content_margins();
        self.refit_viewports();
        self.sync_viewport();
        debug!(radial = self.data.is_radial(), "chart data replaced");
        Ok(())
    }

    /// Re-derives margins and viewports after edits through `data_mut`.
    ///
    /// Selections that no longer address a value are dropped.
    pub fn notify_data_changed(&mut self) {
        let data = &self.data;
        if self.selection.retain_valid(|value| data.contains(value)) {
            warn!("selection dropped after data change");
        }
        self.apply_content_margins();
        self.refit_viewports();
        self.sync_viewport();
    }

    #[must_use]
    pub fn is_viewport_calculation_enabled(&self) -> bool {
        self.behavior.viewport_calculation_enabled
    }

    /// With calculation enabled, data changes refit the maximum viewport and
    /// reset the current viewport to it.
    pub fn set_viewport_calculation_enabled(&mut self, enabled: bool) {
        self.behavior.viewport_calculation_enabled = enabled;
        debug!(enabled, "viewport calculation toggled");
    }

    /// Slice under screen angle `angle` (degrees clockwise from 3 o'clock)
    /// at the current rotation. Always `None` for non-radial charts.
    #[must_use]
    pub fn value_for_angle(&self, angle: f64) -> Option<SelectionEvent> {
        let ChartData::Pie(pie) = &self.data else {
            return None;
        };
        let index = slice_at_angle(pie, self.rotation, angle)?;
        let index = i32::try_from(index).ok()?;
        self.data
            .selection_event(SelectedValue::new(index, index, SelectedValueKind::None))
    }

    pub(super) fn apply_content_margins(&mut self) {
        self.computator.reset_content_rect();
        let margins = self.renderer.content_margins(&self.data);
        if margins != Padding::default() {
            self.computator.inset_content_rect(margins);
        }
    }

    /// Fits the maximum viewport to the data and resets the current viewport.
    pub(super) fn refit_viewports(&mut self) -> bool {
        if !self.behavior.viewport_calculation_enabled {
            return false;
        }
        let Some(maximum) = self.renderer.compute_maximum_viewport(&self.data) else {
            return false;
        };
        if !self.computator.set_max_viewport(maximum) {
            return false;
        }
        self.computator.set_current_viewport(maximum);
        true
    }
}
