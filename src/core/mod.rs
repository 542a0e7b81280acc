pub mod animated;
pub mod chart_data;
pub mod computator;
pub mod selection;
pub mod types;
pub mod viewport;

pub use animated::AnimatedScalar;
pub use chart_data::{
    BubbleChartData, BubbleValue, ChartData, Column, ColumnChartData, ComboChartData, Line,
    LineChartData, PieChartData, PointValue, SliceValue, SubcolumnValue,
};
pub use computator::{Computator, ComputatorMode, DEFAULT_MAX_ZOOM, ScrollResult, ZoomType};
pub use selection::{
    SelectedValue, SelectedValueKind, SelectionChange, SelectionEvent, SelectionKind,
    SelectionState,
};
pub use types::{ContentRect, DataPoint, Padding, SurfaceSize};
pub use viewport::Viewport;
