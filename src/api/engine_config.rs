use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{ComputatorMode, ContentRect, DEFAULT_MAX_ZOOM, Padding, ZoomType};
use crate::error::ChartResult;
use crate::interaction::{ContainerScrollType, FlingConfig, GestureConfig};
use crate::render::ChartGeometry;

use super::validation::validate_engine_config;

/// Default durations of the three animators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationDurations {
    pub data_ms: u64,
    pub viewport_ms: u64,
    pub rotation_ms: u64,
}

impl Default for AnimationDurations {
    fn default() -> Self {
        Self {
            data_ms: 500,
            viewport_ms: 300,
            rotation_ms: 200,
        }
    }
}

impl AnimationDurations {
    #[must_use]
    pub fn data(self) -> Duration {
        Duration::from_millis(self.data_ms)
    }

    #[must_use]
    pub fn viewport(self) -> Duration {
        Duration::from_millis(self.viewport_ms)
    }

    #[must_use]
    pub fn rotation(self) -> Duration {
        Duration::from_millis(self.rotation_ms)
    }
}

/// Public engine bootstrap configuration.
///
/// Every field except `content_rect` has a serde default, so hosts can
/// describe only what differs from the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub content_rect: ContentRect,
    #[serde(default)]
    pub padding: Padding,
    #[serde(default)]
    pub minimum_viewport_width: f64,
    #[serde(default)]
    pub minimum_viewport_height: f64,
    #[serde(default = "default_max_zoom")]
    pub max_zoom: f64,
    #[serde(default = "default_true")]
    pub viewport_calculation_enabled: bool,
    #[serde(default)]
    pub value_selection_enabled: bool,
    #[serde(default = "default_true")]
    pub value_touch_enabled: bool,
    #[serde(default = "default_true")]
    pub zoom_enabled: bool,
    #[serde(default = "default_true")]
    pub scroll_enabled: bool,
    #[serde(default = "default_true")]
    pub rotation_enabled: bool,
    #[serde(default)]
    pub zoom_type: ZoomType,
    #[serde(default)]
    pub non_uniform_zoom: bool,
    #[serde(default)]
    pub container_scroll: ContainerScrollType,
    /// Dispatch the viewport-changed callback. Off for primary charts, on
    /// for preview charts.
    #[serde(default)]
    pub notify_on_viewport_change: bool,
    #[serde(default)]
    pub computator_mode: ComputatorMode,
    #[serde(default)]
    pub animation_durations: AnimationDurations,
    #[serde(default)]
    pub fling: FlingConfig,
    #[serde(default = "default_touch_slop_px")]
    pub touch_slop_px: f64,
    #[serde(default)]
    pub geometry: ChartGeometry,
}

impl ChartEngineConfig {
    /// Creates a config for a primary chart drawn into `content_rect`.
    #[must_use]
    pub fn new(content_rect: ContentRect) -> Self {
        Self {
            content_rect,
            padding: Padding::default(),
            minimum_viewport_width: 0.0,
            minimum_viewport_height: 0.0,
            max_zoom: default_max_zoom(),
            viewport_calculation_enabled: true,
            value_selection_enabled: false,
            value_touch_enabled: true,
            zoom_enabled: true,
            scroll_enabled: true,
            rotation_enabled: true,
            zoom_type: ZoomType::default(),
            non_uniform_zoom: false,
            container_scroll: ContainerScrollType::default(),
            notify_on_viewport_change: false,
            computator_mode: ComputatorMode::Standard,
            animation_durations: AnimationDurations::default(),
            fling: FlingConfig::default(),
            touch_slop_px: default_touch_slop_px(),
            geometry: ChartGeometry::default(),
        }
    }

    /// Config for an overview chart that highlights the viewport of a
    /// primary chart and reports every viewport change.
    #[must_use]
    pub fn preview(content_rect: ContentRect) -> Self {
        Self {
            notify_on_viewport_change: true,
            computator_mode: ComputatorMode::Preview,
            ..Self::new(content_rect)
        }
    }

    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the zoom-in limit in logical units.
    #[must_use]
    pub fn with_minimum_viewport_size(mut self, width: f64, height: f64) -> Self {
        self.minimum_viewport_width = width;
        self.minimum_viewport_height = height;
        self
    }

    #[must_use]
    pub fn with_max_zoom(mut self, max_zoom: f64) -> Self {
        self.max_zoom = max_zoom;
        self
    }

    #[must_use]
    pub fn with_viewport_calculation(mut self, enabled: bool) -> Self {
        self.viewport_calculation_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_value_selection(mut self, enabled: bool) -> Self {
        self.value_selection_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_value_touch(mut self, enabled: bool) -> Self {
        self.value_touch_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_zoom(mut self, enabled: bool, zoom_type: ZoomType) -> Self {
        self.zoom_enabled = enabled;
        self.zoom_type = zoom_type;
        self
    }

    #[must_use]
    pub fn with_non_uniform_zoom(mut self, enabled: bool) -> Self {
        self.non_uniform_zoom = enabled;
        self
    }

    #[must_use]
    pub fn with_scroll(mut self, enabled: bool) -> Self {
        self.scroll_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_rotation(mut self, enabled: bool) -> Self {
        self.rotation_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_container_scroll(mut self, container_scroll: ContainerScrollType) -> Self {
        self.container_scroll = container_scroll;
        self
    }

    #[must_use]
    pub fn with_viewport_notifications(mut self, enabled: bool) -> Self {
        self.notify_on_viewport_change = enabled;
        self
    }

    #[must_use]
    pub fn with_animation_durations(mut self, durations: AnimationDurations) -> Self {
        self.animation_durations = durations;
        self
    }

    #[must_use]
    pub fn with_fling(mut self, fling: FlingConfig) -> Self {
        self.fling = fling;
        self
    }

    #[must_use]
    pub fn with_touch_slop(mut self, touch_slop_px: f64) -> Self {
        self.touch_slop_px = touch_slop_px;
        self
    }

    #[must_use]
    pub fn with_geometry(mut self, geometry: ChartGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Checks every field; `ChartEngine::new` calls this.
    pub fn validate(self) -> ChartResult<Self> {
        validate_engine_config(self)
    }

    /// Interpreter switches derived from this config.
    #[must_use]
    pub fn gesture_config(self) -> GestureConfig {
        GestureConfig {
            zoom_enabled: self.zoom_enabled,
            scroll_enabled: self.scroll_enabled,
            rotation_enabled: self.rotation_enabled,
            value_touch_enabled: self.value_touch_enabled,
            value_selection_enabled: self.value_selection_enabled,
            zoom_type: self.zoom_type,
            non_uniform_zoom: self.non_uniform_zoom,
            container_scroll: self.container_scroll,
            touch_slop_px: self.touch_slop_px,
            fling: self.fling,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_max_zoom() -> f64 {
    DEFAULT_MAX_ZOOM
}

fn default_touch_slop_px() -> f64 {
    8.0
}
