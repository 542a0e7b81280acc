//! Gesture interpretation: disambiguated pointer primitives in, viewport
//! mutations, selection notices and animation requests out.

mod fling;
mod interpreter;
mod radial;

use std::time::Duration;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

pub use crate::core::ZoomType;
pub use fling::FlingConfig;
pub use interpreter::GestureInterpreter;
pub use radial::{ROTATION_DOWNSCALE, vector_to_scalar_scroll};

use crate::animation::Easing;
use crate::core::{Computator, SelectedValue, Viewport};

/// Share of the viewport removed by a double-tap zoom.
pub const DOUBLE_TAP_ZOOM_AMOUNT: f64 = 0.25;

/// Disambiguated pointer primitive in content-rectangle pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GestureEvent {
    Down { x: f64, y: f64 },
    Up { x: f64, y: f64 },
    /// Pointer at `(x, y)` after moving by `(dx, dy)` pixels since the
    /// previous event.
    Drag { x: f64, y: f64, dx: f64, dy: f64 },
    ScaleBegin { focus_x: f64, focus_y: f64 },
    /// Incremental span ratio since the previous update; `> 1` spreads the
    /// fingers apart (zoom in).
    ScaleUpdate {
        focus_x: f64,
        focus_y: f64,
        scale_x: f64,
        scale_y: f64,
    },
    ScaleEnd,
    /// Release velocity of the pointer in pixels per second.
    Fling { x: f64, y: f64, velocity_x: f64, velocity_y: f64 },
    Tap { x: f64, y: f64 },
    DoubleTap { x: f64, y: f64 },
    LongPress { x: f64, y: f64 },
}

/// Scrollable container axis that takes over drags the chart cannot honour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ContainerScrollType {
    #[default]
    None,
    Horizontal,
    Vertical,
}

/// Switches and thresholds read by the interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    pub zoom_enabled: bool,
    pub scroll_enabled: bool,
    pub rotation_enabled: bool,
    pub value_touch_enabled: bool,
    pub value_selection_enabled: bool,
    pub zoom_type: ZoomType,
    pub non_uniform_zoom: bool,
    pub container_scroll: ContainerScrollType,
    pub touch_slop_px: f64,
    pub fling: FlingConfig,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            zoom_enabled: true,
            scroll_enabled: true,
            rotation_enabled: true,
            value_touch_enabled: true,
            value_selection_enabled: false,
            zoom_type: ZoomType::HorizontalAndVertical,
            non_uniform_zoom: false,
            container_scroll: ContainerScrollType::None,
            touch_slop_px: 8.0,
            fling: FlingConfig::default(),
        }
    }
}

/// Selection transition the host callback should hear about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionNotice {
    Selected(SelectedValue),
    Deselected,
}

/// Animation the interpreter wants the engine to start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationRequest {
    /// `duration: None` uses the configured viewport animation duration.
    Viewport {
        target: Viewport,
        duration: Option<Duration>,
        easing: Easing,
    },
    Rotation {
        target: f64,
        duration: Duration,
        multi_revolution: bool,
        easing: Easing,
    },
}

/// Everything one gesture event produced.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GestureOutcome {
    pub repaint: bool,
    pub notices: SmallVec<[SelectionNotice; 2]>,
    pub animation: Option<AnimationRequest>,
    /// Degrees to add to the chart rotation.
    pub rotation_delta: f64,
    /// Running viewport/rotation animations should stop (finger down).
    pub stop_animations: bool,
    /// The surrounding container took over the rest of this sequence.
    pub container_claimed: bool,
}

impl GestureOutcome {
    fn notify(&mut self, notice: SelectionNotice) {
        self.notices.push(notice);
        self.repaint = true;
    }
}

/// What a hit test found under a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitResult {
    Hit(SelectedValue),
    Miss,
    /// The renderer reported indices the current data does not contain.
    /// Selection state stays as it is.
    Stale,
}

impl HitResult {
    #[must_use]
    pub fn value(self) -> Option<SelectedValue> {
        match self {
            Self::Hit(value) => Some(value),
            Self::Miss | Self::Stale => None,
        }
    }
}

/// Answers "what is under this pixel" for the current frame.
pub trait HitTester {
    fn hit_test(&self, computator: &Computator, x: f64, y: f64) -> HitResult;

    /// Pixel center of a radial chart; `None` for cartesian charts.
    fn radial_center(&self, computator: &Computator) -> Option<(f64, f64)>;

    /// Current chart rotation in degrees.
    fn rotation(&self) -> f64;
}
