//! chart-viewport: viewport and interaction engine for line, column,
//! bubble, pie and combo charts.
//!
//! The engine maps a logical data window onto a pixel content rectangle,
//! enforces pan/zoom limits, interprets disambiguated gestures into viewport
//! changes or value selection, and animates data values, viewports and
//! chart rotation from host clock ticks. Painting stays behind the
//! `render::Renderer` trait.

pub mod animation;
pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
