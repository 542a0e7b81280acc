use tracing::debug;

use crate::animation::{DataAnimator, RotationAnimator, ViewportAnimator};
use crate::core::{ChartData, Computator, SelectionState};
use crate::error::ChartResult;
use crate::interaction::GestureInterpreter;
use crate::render::{DEFAULT_CHART_ROTATION, NullRenderer, Renderer};

use super::{ChartEngine, ChartEngineConfig, engine::EngineBehavior};

impl<R: Renderer> ChartEngine<R> {
    /// Creates a fully initialized engine.
    ///
    /// With viewport calculation enabled the maximum and current viewports
    /// are fitted to `data` immediately.
    pub fn new(renderer: R, data: ChartData, config: ChartEngineConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        data.validate()?;

        let mut computator = Computator::new(config.computator_mode);
        computator.set_content_rect(config.content_rect, config.padding);
        computator.set_max_zoom(config.max_zoom);
        computator.set_minimum_viewport_size(
            config.minimum_viewport_width,
            config.minimum_viewport_height,
        );

        let mut engine = Self {
            renderer,
            data,
            computator,
            selection: SelectionState::default(),
            interpreter: GestureInterpreter::new(config.gesture_config()),
            data_animator: DataAnimator::default(),
            viewport_animator: ViewportAnimator::default(),
            rotation_animator: RotationAnimator::default(),
            rotation: DEFAULT_CHART_ROTATION,
            behavior: EngineBehavior {
                viewport_calculation_enabled: config.viewport_calculation_enabled,
                notify_on_viewport_change: config.notify_on_viewport_change,
                durations: config.animation_durations,
            },
            selection_listener: None,
            viewport_listener: None,
            notified_revision: 0,
            last_tick_nanos: None,
        };
        engine.apply_content_margins();
        engine.refit_viewports();
        engine.notified_revision = engine.computator.viewport_revision();
        debug!(
            mode = ?config.computator_mode,
            selection = config.value_selection_enabled,
            "chart engine created"
        );
        Ok(engine)
    }
}

impl ChartEngine<NullRenderer> {
    /// Engine backed by a `NullRenderer` using `config.geometry`.
    pub fn headless(data: ChartData, config: ChartEngineConfig) -> ChartResult<Self> {
        Self::new(NullRenderer::with_geometry(config.geometry), data, config)
    }
}
