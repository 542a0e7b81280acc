mod animation_controller;
mod data_controller;
mod engine;
mod engine_config;
mod engine_init;
mod gesture_controller;
mod selection_controller;
mod validation;
mod viewport_controller;

pub use engine::{ChartEngine, SelectionListener, ViewportListener};
pub use engine_config::{AnimationDurations, ChartEngineConfig};
