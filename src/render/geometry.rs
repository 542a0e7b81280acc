//! Chart-kind geometry shared by renderers: maximum-viewport fitting,
//! content margins and pixel hit-testing.

use serde::{Deserialize, Serialize};

use crate::animation::normalize_degrees;
use crate::core::{
    BubbleChartData, ChartData, ColumnChartData, Computator, ContentRect, LineChartData, Padding,
    PieChartData, SelectedValue, SelectedValueKind, Viewport,
};
use crate::error::{ChartError, ChartResult};

/// Logical size of the square viewport radial charts report.
pub const PIE_VIEWPORT_SIZE: f64 = 100.0;

/// Initial rotation of radial charts, in degrees.
pub const DEFAULT_CHART_ROTATION: f64 = 45.0;

/// Pixel tuning for chart geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartGeometry {
    /// Extra radius around line points accepted as a hit.
    pub touch_tolerance_px: f64,
    /// Share of the distance between two columns covered by a column.
    pub column_fill_ratio: f64,
    pub subcolumn_spacing_px: f64,
    /// Share of the available square covered by the pie.
    pub pie_fill_ratio: f64,
    pub pie_touch_additional_px: f64,
    pub bubble_scale: f64,
    pub min_bubble_radius_px: f64,
    pub bubble_touch_additional_px: f64,
}

impl Default for ChartGeometry {
    fn default() -> Self {
        Self {
            touch_tolerance_px: 4.0,
            column_fill_ratio: 0.75,
            subcolumn_spacing_px: 1.0,
            pie_fill_ratio: 1.0,
            pie_touch_additional_px: 8.0,
            bubble_scale: 1.0,
            min_bubble_radius_px: 6.0,
            bubble_touch_additional_px: 4.0,
        }
    }
}

impl ChartGeometry {
    pub fn validate(self) -> ChartResult<Self> {
        let ratios_valid = [self.column_fill_ratio, self.pie_fill_ratio]
            .into_iter()
            .all(|ratio| ratio.is_finite() && ratio > 0.0 && ratio <= 1.0);
        if !ratios_valid {
            return Err(ChartError::InvalidData(
                "geometry fill ratios must be in (0, 1]".to_owned(),
            ));
        }
        let lengths_valid = [
            self.touch_tolerance_px,
            self.subcolumn_spacing_px,
            self.pie_touch_additional_px,
            self.min_bubble_radius_px,
            self.bubble_touch_additional_px,
        ]
        .into_iter()
        .all(|length| length.is_finite() && length >= 0.0);
        if !lengths_valid {
            return Err(ChartError::InvalidData(
                "geometry lengths must be finite and non-negative".to_owned(),
            ));
        }
        if !self.bubble_scale.is_finite() || self.bubble_scale <= 0.0 {
            return Err(ChartError::InvalidData(
                "bubble scale must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Bounds enclosing every value, or `None` when there is nothing to fit.
    ///
    /// A zero extent on either axis is widened to one logical unit so a
    /// single value still yields a usable viewport.
    #[must_use]
    pub fn maximum_viewport(&self, data: &ChartData) -> Option<Viewport> {
        let viewport = match data {
            ChartData::Line(data) => line_viewport(data)?,
            ChartData::Column(data) => column_viewport(data),
            ChartData::Bubble(data) => BubbleScale::fit(data, self.bubble_scale)?.viewport,
            ChartData::Pie(_) => Viewport::new(0.0, PIE_VIEWPORT_SIZE, PIE_VIEWPORT_SIZE, 0.0),
            ChartData::Combo(data) => match line_viewport(&data.line) {
                Some(line) => line.union(column_viewport(&data.column)),
                None => column_viewport(&data.column),
            },
        };
        Some(widen_degenerate(viewport))
    }

    /// Internal margins keeping line points fully inside the content rect.
    #[must_use]
    pub fn content_margins(&self, data: &ChartData) -> Padding {
        let lines = match data {
            ChartData::Line(data) => data,
            ChartData::Combo(data) => &data.line,
            _ => return Padding::default(),
        };
        let radius = lines
            .lines
            .iter()
            .filter(|line| line.has_points)
            .map(|line| line.point_radius_px)
            .fold(0.0_f64, f64::max);
        if radius <= 0.0 {
            return Padding::default();
        }
        Padding::uniform(radius + self.touch_tolerance_px)
    }

    /// Value under pixel `(x, y)`.
    #[must_use]
    pub fn hit_test(
        &self,
        computator: &Computator,
        data: &ChartData,
        rotation: f64,
        x: f64,
        y: f64,
    ) -> Option<SelectedValue> {
        match data {
            ChartData::Line(data) => self.hit_line(computator, data, x, y),
            ChartData::Column(data) => self.hit_column(computator, data, x, y),
            ChartData::Bubble(data) => self.hit_bubble(computator, data, x, y),
            ChartData::Pie(data) => self.hit_pie(computator, data, rotation, x, y),
            ChartData::Combo(data) => self
                .hit_line(computator, &data.line, x, y)
                .or_else(|| self.hit_column(computator, &data.column, x, y)),
        }
    }

    /// Center of the pie in pixels.
    #[must_use]
    pub fn pie_center(&self, computator: &Computator) -> (f64, f64) {
        let content = computator.content_rect();
        (content.center_x(), content.center_y())
    }

    /// Pie circle bounds: the largest centered square, shrunk by the touch
    /// allowance and the fill ratio.
    #[must_use]
    pub fn pie_oval(&self, computator: &Computator) -> ContentRect {
        let content = computator.content_rect();
        let radius = content.width().min(content.height()) * 0.5 - self.pie_touch_additional_px;
        let radius = (radius * self.pie_fill_ratio).max(0.0);
        let (cx, cy) = (content.center_x(), content.center_y());
        ContentRect::new(cx - radius, cy - radius, cx + radius, cy + radius)
    }

    fn hit_line(
        &self,
        computator: &Computator,
        data: &LineChartData,
        x: f64,
        y: f64,
    ) -> Option<SelectedValue> {
        let mut hit = None;
        for (line_index, line) in data.lines.iter().enumerate() {
            if !line.has_points {
                continue;
            }
            let radius = line.point_radius_px + self.touch_tolerance_px;
            for (point_index, point) in line.values.iter().enumerate() {
                let raw_x = computator.compute_raw_x(point.x.value());
                let raw_y = computator.compute_raw_y(point.y.value());
                if (x - raw_x).powi(2) + (y - raw_y).powi(2) <= radius * radius {
                    hit = Some(selected(line_index, point_index, SelectedValueKind::Line));
                }
            }
        }
        hit
    }

    fn column_width(&self, computator: &Computator) -> f64 {
        let width = self.column_fill_ratio * computator.content_rect().width()
            / computator.visible_viewport().width();
        width.max(2.0)
    }

    fn hit_column(
        &self,
        computator: &Computator,
        data: &ColumnChartData,
        x: f64,
        y: f64,
    ) -> Option<SelectedValue> {
        let column_width = self.column_width(computator);
        let half = column_width * 0.5;
        let base = data.base_value;
        let mut hit = None;
        for (column_index, column) in data.columns.iter().enumerate() {
            let raw_x = computator.compute_raw_x(column_index as f64);
            if x < raw_x - half || x > raw_x + half || column.values.is_empty() {
                continue;
            }
            if data.stacked {
                let mut positive = base;
                let mut negative = base;
                for (value_index, value) in column.values.iter().enumerate() {
                    let value = value.value.value();
                    let from = if value >= base { positive } else { negative };
                    if value >= base {
                        positive += value;
                    } else {
                        negative += value;
                    }
                    let raw_from = computator.compute_raw_y(from);
                    let raw_to = computator.compute_raw_y(from + value);
                    if within_span(y, raw_from, raw_to) {
                        hit = Some(selected(column_index, value_index, SelectedValueKind::Column));
                    }
                }
            } else {
                let count = column.values.len() as f64;
                let sub_width =
                    ((column_width - self.subcolumn_spacing_px * (count - 1.0)) / count).max(1.0);
                let base_y = computator.compute_raw_y(base);
                let mut left = raw_x - half;
                for (value_index, value) in column.values.iter().enumerate() {
                    if left > raw_x + half {
                        break;
                    }
                    let raw_y = computator.compute_raw_y(value.value.value());
                    if x >= left && x <= left + sub_width && within_span(y, base_y, raw_y) {
                        hit = Some(selected(column_index, value_index, SelectedValueKind::Column));
                    }
                    left += sub_width + self.subcolumn_spacing_px;
                }
            }
        }
        hit
    }

    fn hit_bubble(
        &self,
        computator: &Computator,
        data: &BubbleChartData,
        x: f64,
        y: f64,
    ) -> Option<SelectedValue> {
        let scale = BubbleScale::fit(data, self.bubble_scale)?;
        let content = computator.content_rect();
        let scaled_by_x = content.width() < content.height();
        let min_radius = self.min_bubble_radius_px + self.bubble_touch_additional_px;
        let mut hit = None;
        for (index, bubble) in data.values.iter().enumerate() {
            let radius = (bubble.z.value().abs() / std::f64::consts::PI).sqrt();
            let raw_radius = if scaled_by_x {
                computator.compute_raw_distance_x(radius * scale.scale_x)
            } else {
                computator.compute_raw_distance_y(radius * scale.scale_y)
            }
            .max(min_radius);
            let raw_x = computator.compute_raw_x(bubble.x.value());
            let raw_y = computator.compute_raw_y(bubble.y.value());
            if (x - raw_x).powi(2) + (y - raw_y).powi(2) <= raw_radius * raw_radius {
                hit = Some(selected(index, index, SelectedValueKind::None));
            }
        }
        hit
    }

    fn hit_pie(
        &self,
        computator: &Computator,
        data: &PieChartData,
        rotation: f64,
        x: f64,
        y: f64,
    ) -> Option<SelectedValue> {
        let oval = self.pie_oval(computator);
        let radius = oval.width() * 0.5;
        let distance = (x - oval.center_x()).hypot(y - oval.center_y());
        if distance > radius + self.pie_touch_additional_px {
            return None;
        }
        if data.has_center_circle && distance < radius * data.center_circle_scale {
            return None;
        }
        let angle = point_to_angle(x, y, oval.center_x(), oval.center_y());
        let index = slice_at_angle(data, rotation, angle)?;
        Some(selected(index, index, SelectedValueKind::None))
    }
}

/// Slice covering screen angle `angle` (degrees clockwise from 3 o'clock)
/// once the chart is rotated by `rotation` degrees.
#[must_use]
pub fn slice_at_angle(data: &PieChartData, rotation: f64, angle: f64) -> Option<usize> {
    let total = data.total();
    if !total.is_finite() || total <= 0.0 || !angle.is_finite() {
        return None;
    }
    let local = normalize_degrees(angle - rotation);
    let degrees_per_unit = 360.0 / total;
    let mut slice_start = 0.0;
    let mut last_visible = None;
    for (index, slice) in data.values.iter().enumerate() {
        let sweep = slice.value.value().abs() * degrees_per_unit;
        if sweep > 0.0 {
            if local < slice_start + sweep {
                return Some(index);
            }
            last_visible = Some(index);
        }
        slice_start += sweep;
    }
    // Rounding can leave the final sliver of the circle just past the sum.
    last_visible
}

/// Screen angle of `(x, y)` around the center, clockwise from 3 o'clock.
#[must_use]
pub fn point_to_angle(x: f64, y: f64, center_x: f64, center_y: f64) -> f64 {
    normalize_degrees((y - center_y).atan2(x - center_x).to_degrees())
}

fn selected(first: usize, second: usize, kind: SelectedValueKind) -> SelectedValue {
    let first = i32::try_from(first).unwrap_or(i32::MAX);
    let second = i32::try_from(second).unwrap_or(i32::MAX);
    SelectedValue::new(first, second, kind)
}

fn within_span(y: f64, a: f64, b: f64) -> bool {
    y >= a.min(b) && y <= a.max(b)
}

fn line_viewport(data: &LineChartData) -> Option<Viewport> {
    let mut points = data.lines.iter().flat_map(|line| line.values.iter());
    let first = points.next()?;
    let seed = Viewport::new(first.x.value(), first.y.value(), first.x.value(), first.y.value());
    Some(points.fold(seed, |bounds, point| {
        let (x, y) = (point.x.value(), point.y.value());
        Viewport::new(
            bounds.left.min(x),
            bounds.top.max(y),
            bounds.right.max(x),
            bounds.bottom.min(y),
        )
    }))
}

/// Columns occupy `[-0.5, n - 0.5]` horizontally; vertically the base value
/// is always included.
fn column_viewport(data: &ColumnChartData) -> Viewport {
    let base = data.base_value;
    let mut top = base;
    let mut bottom = base;
    for column in &data.columns {
        if data.stacked {
            let (mut positive, mut negative) = (base, base);
            for value in column.values.iter().map(|value| value.value.value()) {
                if value >= base {
                    positive += value;
                } else {
                    negative += value;
                }
            }
            top = top.max(positive);
            bottom = bottom.min(negative);
        } else {
            for value in column.values.iter().map(|value| value.value.value()) {
                if value >= base {
                    top = top.max(value);
                } else {
                    bottom = bottom.min(value);
                }
            }
        }
    }
    Viewport::new(-0.5, top, data.columns.len() as f64 - 0.5, bottom)
}

fn widen_degenerate(viewport: Viewport) -> Viewport {
    let mut widened = viewport;
    if widened.width() <= 0.0 {
        widened.left -= 0.5;
        widened.right += 0.5;
    }
    if widened.height() == 0.0 {
        widened.top += 0.5;
        widened.bottom -= 0.5;
    }
    widened
}

/// Bubble radius scaling derived from the data bounds.
///
/// The largest bubble gets a radius of a quarter of the data extent on each
/// axis, and the fitted viewport is grown by that radius so edge bubbles stay
/// visible.
struct BubbleScale {
    viewport: Viewport,
    scale_x: f64,
    scale_y: f64,
}

impl BubbleScale {
    fn fit(data: &BubbleChartData, bubble_scale: f64) -> Option<Self> {
        let first = data.values.first()?;
        let seed = Viewport::new(first.x.value(), first.y.value(), first.x.value(), first.y.value());
        let (bounds, max_z) = data.values.iter().fold((seed, 0.0_f64), |(bounds, max_z), bubble| {
            let (x, y) = (bubble.x.value(), bubble.y.value());
            (
                Viewport::new(
                    bounds.left.min(x),
                    bounds.top.max(y),
                    bounds.right.max(x),
                    bounds.bottom.min(y),
                ),
                max_z.max(bubble.z.value().abs()),
            )
        });
        let max_radius = (max_z / std::f64::consts::PI).sqrt();
        let axis_scale = |extent: f64| {
            let scale = extent / (max_radius * 4.0);
            if scale.is_finite() && scale > 0.0 { scale } else { 1.0 }
        };
        let scale_x = axis_scale(bounds.width()) * bubble_scale;
        let scale_y = axis_scale(bounds.height()) * bubble_scale;
        let margin_x = max_radius * scale_x;
        let margin_y = max_radius * scale_y;
        Some(Self {
            viewport: Viewport::new(
                bounds.left - margin_x,
                bounds.top + margin_y,
                bounds.right + margin_x,
                bounds.bottom - margin_y,
            ),
            scale_x,
            scale_y,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{ChartGeometry, point_to_angle, slice_at_angle};
    use crate::core::{ChartData, Column, ColumnChartData, PieChartData, Viewport};

    #[test]
    fn columns_span_half_units_and_include_base() {
        let data = ChartData::Column(
            ColumnChartData::new(vec![
                Column::from_values(&[3.0, -2.0]),
                Column::from_values(&[5.0]),
            ])
            .with_base_value(1.0),
        );
        let viewport = ChartGeometry::default().maximum_viewport(&data);
        assert_eq!(viewport, Some(Viewport::new(-0.5, 5.0, 1.5, -2.0)));
    }

    #[test]
    fn stacked_columns_sum_each_sign() {
        let data = ChartData::Column(
            ColumnChartData::new(vec![Column::from_values(&[3.0, 4.0, -1.0, -2.0])]).with_stacked(true),
        );
        let viewport = ChartGeometry::default().maximum_viewport(&data);
        assert_eq!(viewport, Some(Viewport::new(-0.5, 7.0, 0.5, -3.0)));
    }

    #[test]
    fn angles_run_clockwise_from_three_o_clock() {
        assert_eq!(point_to_angle(10.0, 0.0, 0.0, 0.0), 0.0);
        assert_eq!(point_to_angle(0.0, 10.0, 0.0, 0.0), 90.0);
        assert_eq!(point_to_angle(-10.0, 0.0, 0.0, 0.0), 180.0);
    }

    #[test]
    fn slice_lookup_respects_rotation() {
        let pie = PieChartData::from_values(&[1.0, 1.0, 2.0]);
        assert_eq!(slice_at_angle(&pie, 0.0, 45.0), Some(0));
        assert_eq!(slice_at_angle(&pie, 0.0, 100.0), Some(1));
        assert_eq!(slice_at_angle(&pie, 0.0, 200.0), Some(2));
        assert_eq!(slice_at_angle(&pie, 90.0, 100.0), Some(0));
    }
}
