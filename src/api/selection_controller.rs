use tracing::{trace, warn};

use crate::core::{SelectedValue, SelectionChange};
use crate::interaction::SelectionNotice;
use crate::render::Renderer;

use super::{ChartEngine, engine::SelectionListener};

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn selected_value(&self) -> Option<SelectedValue> {
        self.selection.selected()
    }

    /// Value highlighted by the finger currently down (touch mode).
    #[must_use]
    pub fn touched_value(&self) -> Option<SelectedValue> {
        self.selection.touched()
    }

    #[must_use]
    pub fn is_value_selection_enabled(&self) -> bool {
        self.interpreter.config().value_selection_enabled
    }

    /// Switches between persistent selection and touch-highlight mode.
    ///
    /// Leaving selection mode drops the current selection without a callback.
    pub fn set_value_selection_enabled(&mut self, enabled: bool) {
        self.update_gesture_config(|config| config.value_selection_enabled = enabled);
        if !enabled {
            self.selection.clear();
        }
    }

    #[must_use]
    pub fn is_value_touch_enabled(&self) -> bool {
        self.interpreter.config().value_touch_enabled
    }

    pub fn set_value_touch_enabled(&mut self, enabled: bool) {
        self.update_gesture_config(|config| config.value_touch_enabled = enabled);
        if !enabled {
            self.selection.clear_touched();
        }
    }

    pub fn set_selection_listener(&mut self, listener: Option<SelectionListener>) {
        self.selection_listener = listener;
    }

    /// Selects a value programmatically and notifies the listener.
    ///
    /// Returns `false` without changing anything when the indices do not
    /// address a value of the current data.
    pub fn select_value(&mut self, value: SelectedValue) -> bool {
        if !self.data.contains(value) {
            warn!(
                first = value.first_index,
                second = value.second_index,
                "ignoring selection of missing value"
            );
            return false;
        }
        self.selection.select(value);
        self.dispatch_selection(SelectionNotice::Selected(value));
        true
    }

    /// Clears the selection; the listener hears about it only if something
    /// was selected.
    pub fn clear_selection(&mut self) -> bool {
        if self.selection.clear().is_none() {
            return false;
        }
        self.dispatch_selection(SelectionNotice::Deselected);
        true
    }

    pub(super) fn dispatch_selection(&mut self, notice: SelectionNotice) {
        let change = match notice {
            SelectionNotice::Selected(value) => match self.data.selection_event(value) {
                Some(event) => SelectionChange::Selected(event),
                None => {
                    warn!(
                        first = value.first_index,
                        second = value.second_index,
                        "dropping notification for stale selection"
                    );
                    return;
                }
            },
            SelectionNotice::Deselected => SelectionChange::Deselected,
        };
        trace!(?change, "dispatching selection change");
        if let Some(listener) = self.selection_listener.as_mut() {
            listener(change);
        }
    }
}
