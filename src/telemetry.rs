//! Telemetry helpers for applications embedding `chart-viewport`.
//!
//! The engine only emits `tracing` events; installing a subscriber stays the
//! host's decision. Consumers can either call `init_default_tracing` or wire
//! their own subscriber and filters. Events use module-path targets:
//!
//! - `chart_viewport::interaction::interpreter`: one `trace` per gesture
//! - `chart_viewport::api::gesture_controller`: applied gesture outcomes and
//!   `warn` for hits on missing values
//! - `chart_viewport::api::animation_controller` and `chart_viewport::animation`:
//!   animation ticks and lifecycle
//! - `chart_viewport::core::computator`: viewport changes (`trace`) and rejected
//!   geometry (`warn`)
//! - `chart_viewport::api`: data replacement, resizes and viewport dispatch (`debug`)
//!
//! For example `RUST_LOG=chart_viewport::core::computator=trace` follows every
//! current-viewport change.

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when no initialization is performed (feature disabled) or if a
/// global subscriber was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_target(true)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
