use serde::{Deserialize, Serialize};

use crate::core::{AnimatedScalar, SelectedValue, SelectedValueKind, SelectionEvent, SelectionKind};
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_POINT_RADIUS_PX: f64 = 6.0;
pub const DEFAULT_CENTER_CIRCLE_SCALE: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointValue {
    pub x: AnimatedScalar,
    pub y: AnimatedScalar,
}

impl PointValue {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: AnimatedScalar::new(x),
            y: AnimatedScalar::new(y),
        }
    }

    pub fn set_target(&mut self, x: f64, y: f64) {
        self.x.set_target(x);
        self.y.set_target(y);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Line {
    pub values: Vec<PointValue>,
    pub has_points: bool,
    pub point_radius_px: f64,
}

impl Default for Line {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            has_points: true,
            point_radius_px: DEFAULT_POINT_RADIUS_PX,
        }
    }
}

impl Line {
    #[must_use]
    pub fn new(values: Vec<PointValue>) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_point_radius(mut self, radius_px: f64) -> Self {
        self.point_radius_px = radius_px;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineChartData {
    pub lines: Vec<Line>,
}

impl LineChartData {
    #[must_use]
    pub fn new(lines: Vec<Line>) -> Self {
        Self { lines }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SubcolumnValue {
    pub value: AnimatedScalar,
}

impl SubcolumnValue {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value: AnimatedScalar::new(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Column {
    pub values: Vec<SubcolumnValue>,
}

impl Column {
    #[must_use]
    pub fn new(values: Vec<SubcolumnValue>) -> Self {
        Self { values }
    }

    #[must_use]
    pub fn from_values(values: &[f64]) -> Self {
        Self::new(values.iter().copied().map(SubcolumnValue::new).collect())
    }
}

/// Columns sit at integer X positions `0..n`; `base_value` is the Y level
/// bars grow from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnChartData {
    pub columns: Vec<Column>,
    pub stacked: bool,
    pub base_value: f64,
}

impl ColumnChartData {
    #[must_use]
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_stacked(mut self, stacked: bool) -> Self {
        self.stacked = stacked;
        self
    }

    #[must_use]
    pub fn with_base_value(mut self, base_value: f64) -> Self {
        self.base_value = base_value;
        self
    }
}

/// Bubble at `(x, y)` whose area is proportional to `|z|`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BubbleValue {
    pub x: AnimatedScalar,
    pub y: AnimatedScalar,
    pub z: AnimatedScalar,
}

impl BubbleValue {
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x: AnimatedScalar::new(x),
            y: AnimatedScalar::new(y),
            z: AnimatedScalar::new(z),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BubbleChartData {
    pub values: Vec<BubbleValue>,
}

impl BubbleChartData {
    #[must_use]
    pub fn new(values: Vec<BubbleValue>) -> Self {
        Self { values }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SliceValue {
    pub value: AnimatedScalar,
}

impl SliceValue {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value: AnimatedScalar::new(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieChartData {
    pub values: Vec<SliceValue>,
    pub has_center_circle: bool,
    /// Center circle radius as a fraction of the pie radius.
    pub center_circle_scale: f64,
}

impl Default for PieChartData {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            has_center_circle: false,
            center_circle_scale: DEFAULT_CENTER_CIRCLE_SCALE,
        }
    }
}

impl PieChartData {
    #[must_use]
    pub fn new(values: Vec<SliceValue>) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn from_values(values: &[f64]) -> Self {
        Self::new(values.iter().copied().map(SliceValue::new).collect())
    }

    #[must_use]
    pub fn with_center_circle(mut self, scale: f64) -> Self {
        self.has_center_circle = true;
        self.center_circle_scale = scale;
        self
    }

    /// Sum of absolute slice values currently displayed.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.values.iter().map(|slice| slice.value.value().abs()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComboChartData {
    pub line: LineChartData,
    pub column: ColumnChartData,
}

/// Closed set of chart payloads consumed by renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartData {
    Line(LineChartData),
    Column(ColumnChartData),
    Bubble(BubbleChartData),
    Pie(PieChartData),
    Combo(ComboChartData),
}

impl Default for ChartData {
    fn default() -> Self {
        Self::Line(LineChartData::default())
    }
}

impl ChartData {
    #[must_use]
    pub fn is_radial(&self) -> bool {
        matches!(self, Self::Pie(_))
    }

    /// Visits every animatable scalar.
    pub fn for_each_scalar_mut(&mut self, mut visit: impl FnMut(&mut AnimatedScalar)) {
        match self {
            Self::Line(data) => line_scalars(data, &mut visit),
            Self::Column(data) => column_scalars(data, &mut visit),
            Self::Bubble(data) => {
                for bubble in &mut data.values {
                    visit(&mut bubble.x);
                    visit(&mut bubble.y);
                    visit(&mut bubble.z);
                }
            }
            Self::Pie(data) => {
                for slice in &mut data.values {
                    visit(&mut slice.value);
                }
            }
            Self::Combo(data) => {
                line_scalars(&mut data.line, &mut visit);
                column_scalars(&mut data.column, &mut visit);
            }
        }
    }

    /// Rejects non-finite values and negative pie fractions.
    pub fn validate(&self) -> ChartResult<()> {
        if !self.values_finite() {
            return Err(ChartError::InvalidData(
                "chart values must be finite".to_owned(),
            ));
        }
        match self {
            Self::Column(data) if !data.base_value.is_finite() => Err(ChartError::InvalidData(
                "column base value must be finite".to_owned(),
            )),
            Self::Combo(data) if !data.column.base_value.is_finite() => Err(
                ChartError::InvalidData("column base value must be finite".to_owned()),
            ),
            Self::Pie(data)
                if !data.center_circle_scale.is_finite()
                    || !(0.0..=1.0).contains(&data.center_circle_scale) =>
            {
                Err(ChartError::InvalidData(
                    "pie center circle scale must be in [0, 1]".to_owned(),
                ))
            }
            _ => Ok(()),
        }
    }

    /// Resolves a selection against the current values.
    ///
    /// Returns `None` when the indices no longer address a value, for
    /// example after a data swap shrank the value count.
    #[must_use]
    pub fn selection_event(&self, selected: SelectedValue) -> Option<SelectionEvent> {
        let kind = match self {
            Self::Line(data) => point_selection(data, selected)?,
            Self::Column(data) => column_selection(data, selected)?,
            Self::Bubble(data) => {
                let index = selected.first()?;
                let bubble = data.values.get(index)?;
                SelectionKind::Bubble {
                    index,
                    x: bubble.x.value(),
                    y: bubble.y.value(),
                    z: bubble.z.value(),
                }
            }
            Self::Pie(data) => {
                let index = selected.first()?;
                let slice = data.values.get(index)?;
                SelectionKind::Slice {
                    index,
                    value: slice.value.value(),
                }
            }
            Self::Combo(data) => match selected.kind {
                SelectedValueKind::Line => point_selection(&data.line, selected)?,
                SelectedValueKind::Column => column_selection(&data.column, selected)?,
                SelectedValueKind::None => return None,
            },
        };
        Some(SelectionEvent { selected, kind })
    }

    fn values_finite(&self) -> bool {
        let lines_finite = |data: &LineChartData| {
            data.lines
                .iter()
                .flat_map(|line| line.values.iter())
                .all(|point| point.x.is_finite() && point.y.is_finite())
        };
        let columns_finite = |data: &ColumnChartData| {
            data.columns
                .iter()
                .flat_map(|column| column.values.iter())
                .all(|value| value.value.is_finite())
        };
        match self {
            Self::Line(data) => lines_finite(data),
            Self::Column(data) => columns_finite(data),
            Self::Bubble(data) => data
                .values
                .iter()
                .all(|bubble| bubble.x.is_finite() && bubble.y.is_finite() && bubble.z.is_finite()),
            Self::Pie(data) => data.values.iter().all(|slice| slice.value.is_finite()),
            Self::Combo(data) => lines_finite(&data.line) && columns_finite(&data.column),
        }
    }

    #[must_use]
    pub fn contains(&self, selected: SelectedValue) -> bool {
        self.selection_event(selected).is_some()
    }
}

fn line_scalars(data: &mut LineChartData, visit: &mut impl FnMut(&mut AnimatedScalar)) {
    for point in data.lines.iter_mut().flat_map(|line| line.values.iter_mut()) {
        visit(&mut point.x);
        visit(&mut point.y);
    }
}

fn column_scalars(data: &mut ColumnChartData, visit: &mut impl FnMut(&mut AnimatedScalar)) {
    for value in data.columns.iter_mut().flat_map(|column| column.values.iter_mut()) {
        visit(&mut value.value);
    }
}

fn point_selection(data: &LineChartData, selected: SelectedValue) -> Option<SelectionKind> {
    let line_index = selected.first()?;
    let point_index = selected.second()?;
    let point = data.lines.get(line_index)?.values.get(point_index)?;
    Some(SelectionKind::Point {
        line_index,
        point_index,
        x: point.x.value(),
        y: point.y.value(),
    })
}

fn column_selection(data: &ColumnChartData, selected: SelectedValue) -> Option<SelectionKind> {
    let column_index = selected.first()?;
    let subcolumn_index = selected.second()?;
    let value = data.columns.get(column_index)?.values.get(subcolumn_index)?;
    Some(SelectionKind::Column {
        column_index,
        subcolumn_index,
        value: value.value.value(),
    })
}

#[cfg(test)]
mod tests {
    use super::{ChartData, Column, ColumnChartData, PieChartData};
    use crate::core::{SelectedValue, SelectedValueKind, SelectionKind};

    #[test]
    fn stale_column_selection_fails_lookup() {
        let data = ChartData::Column(ColumnChartData::new(vec![Column::from_values(&[1.0, 2.0])]));
        assert!(data.contains(SelectedValue::new(0, 1, SelectedValueKind::Column)));
        assert!(!data.contains(SelectedValue::new(0, 2, SelectedValueKind::Column)));
        assert!(!data.contains(SelectedValue::new(-1, 0, SelectedValueKind::Column)));
    }

    #[test]
    fn pie_selection_reads_first_index_only() {
        let data = ChartData::Pie(PieChartData::from_values(&[1.0, 2.0, 3.0, 4.0]));
        let event = data
            .selection_event(SelectedValue::new(3, -1, SelectedValueKind::None))
            .expect("slice 3 exists");
        assert_eq!(event.kind, SelectionKind::Slice { index: 3, value: 4.0 });
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let data = ChartData::Pie(PieChartData::from_values(&[1.0, f64::NAN]));
        assert!(data.validate().is_err());
    }
}
