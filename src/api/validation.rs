use crate::error::{ChartError, ChartResult};
use crate::interaction::FlingConfig;

use super::{AnimationDurations, ChartEngineConfig};

pub(super) fn validate_fling_config(config: FlingConfig) -> ChartResult<FlingConfig> {
    if !config.decay_per_second.is_finite()
        || config.decay_per_second <= 0.0
        || config.decay_per_second >= 1.0
    {
        return Err(ChartError::InvalidData(
            "fling decay_per_second must be finite and in (0, 1)".to_owned(),
        ));
    }
    if !config.min_velocity_px_per_sec.is_finite() || config.min_velocity_px_per_sec < 0.0 {
        return Err(ChartError::InvalidData(
            "fling min_velocity_px_per_sec must be finite and >= 0".to_owned(),
        ));
    }
    Ok(config)
}

pub(super) fn validate_animation_durations(
    durations: AnimationDurations,
) -> ChartResult<AnimationDurations> {
    if durations.data_ms == 0 || durations.viewport_ms == 0 || durations.rotation_ms == 0 {
        return Err(ChartError::InvalidData(
            "animation durations must be > 0 ms".to_owned(),
        ));
    }
    Ok(durations)
}

pub(super) fn validate_max_zoom(max_zoom: f64) -> ChartResult<f64> {
    if !max_zoom.is_finite() || max_zoom < 1.0 {
        return Err(ChartError::InvalidData(
            "max zoom must be finite and >= 1".to_owned(),
        ));
    }
    Ok(max_zoom)
}

pub(super) fn validate_engine_config(config: ChartEngineConfig) -> ChartResult<ChartEngineConfig> {
    config.content_rect.validate()?;
    let padding = config.padding;
    let padding_valid = [padding.left, padding.top, padding.right, padding.bottom]
        .into_iter()
        .all(|side| side.is_finite() && side >= 0.0);
    if !padding_valid {
        return Err(ChartError::InvalidData(
            "padding must be finite and >= 0".to_owned(),
        ));
    }
    config.content_rect.inset(padding).validate()?;
    let minimums_valid = [config.minimum_viewport_width, config.minimum_viewport_height]
        .into_iter()
        .all(|minimum| minimum.is_finite() && minimum >= 0.0);
    if !minimums_valid {
        return Err(ChartError::InvalidData(
            "minimum viewport size must be finite and >= 0".to_owned(),
        ));
    }
    validate_max_zoom(config.max_zoom)?;
    if !config.touch_slop_px.is_finite() || config.touch_slop_px < 0.0 {
        return Err(ChartError::InvalidData(
            "touch slop must be finite and >= 0".to_owned(),
        ));
    }
    validate_fling_config(config.fling)?;
    validate_animation_durations(config.animation_durations)?;
    config.geometry.validate()?;
    Ok(config)
}
