use serde::{Deserialize, Serialize};

/// Disambiguates what the index pair of a `SelectedValue` addresses when a
/// chart mixes value kinds (combo charts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SelectedValueKind {
    #[default]
    None,
    Line,
    Column,
}

/// Chart-specific index tuple identifying one plotted value.
///
/// Line charts use `(line, point)`, column charts `(column, subcolumn)`.
/// Bubble and pie charts only read `first_index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedValue {
    pub first_index: i32,
    pub second_index: i32,
    pub kind: SelectedValueKind,
}

impl Default for SelectedValue {
    fn default() -> Self {
        Self::UNSET
    }
}

impl SelectedValue {
    pub const UNSET: Self = Self {
        first_index: -1,
        second_index: -1,
        kind: SelectedValueKind::None,
    };

    #[must_use]
    pub const fn new(first_index: i32, second_index: i32, kind: SelectedValueKind) -> Self {
        Self {
            first_index,
            second_index,
            kind,
        }
    }

    /// Both indices are non-negative.
    #[must_use]
    pub fn is_set(self) -> bool {
        self.first_index >= 0 && self.second_index >= 0
    }

    #[must_use]
    pub fn first(self) -> Option<usize> {
        usize::try_from(self.first_index).ok()
    }

    #[must_use]
    pub fn second(self) -> Option<usize> {
        usize::try_from(self.second_index).ok()
    }
}

/// Resolved selection delivered to the host: chart kind, indices and value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SelectionKind {
    Point {
        line_index: usize,
        point_index: usize,
        x: f64,
        y: f64,
    },
    Column {
        column_index: usize,
        subcolumn_index: usize,
        value: f64,
    },
    Bubble {
        index: usize,
        x: f64,
        y: f64,
        z: f64,
    },
    Slice {
        index: usize,
        value: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionEvent {
    pub selected: SelectedValue,
    pub kind: SelectionKind,
}

/// Payload of the selection callback.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SelectionChange {
    Selected(SelectionEvent),
    Deselected,
}

/// Selected and touch-highlighted values.
///
/// `selected` persists across gestures in value-selection mode; `touched`
/// only lives for the duration of one touch sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    selected: Option<SelectedValue>,
    touched: Option<SelectedValue>,
}

impl SelectionState {
    #[must_use]
    pub fn selected(&self) -> Option<SelectedValue> {
        self.selected
    }

    #[must_use]
    pub fn touched(&self) -> Option<SelectedValue> {
        self.touched
    }

    /// Value renderers should highlight: the touched value wins over the
    /// persistent selection.
    #[must_use]
    pub fn highlighted(&self) -> Option<SelectedValue> {
        self.touched.or(self.selected)
    }

    #[must_use]
    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }

    /// Returns `true` when the stored selection changed.
    pub fn select(&mut self, value: SelectedValue) -> bool {
        let changed = self.selected != Some(value);
        self.selected = Some(value);
        changed
    }

    /// Clears the selection and returns what was selected.
    pub fn clear(&mut self) -> Option<SelectedValue> {
        self.selected.take()
    }

    pub fn set_touched(&mut self, value: Option<SelectedValue>) {
        self.touched = value;
    }

    pub fn clear_touched(&mut self) -> Option<SelectedValue> {
        self.touched.take()
    }

    pub fn reset(&mut self) {
        self.selected = None;
        self.touched = None;
    }

    /// Drops selected/touched values rejected by `is_valid`.
    ///
    /// Returns `true` when the persistent selection was dropped.
    pub fn retain_valid(&mut self, mut is_valid: impl FnMut(SelectedValue) -> bool) -> bool {
        if self.touched.is_some_and(|value| !is_valid(value)) {
            self.touched = None;
        }
        if self.selected.is_some_and(|value| !is_valid(value)) {
            self.selected = None;
            return true;
        }
        false
    }
}
