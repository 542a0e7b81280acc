//! Time-based animators driven by host clock ticks.
//!
//! Every animator is an `Idle -> Running -> {Completed, Cancelled}` state
//! machine. Hosts call `advance(now_nanos)` once per frame; the return value
//! says whether the frame needs a repaint.

mod data_animator;
mod easing;
mod rotation_animator;
mod timeline;
mod viewport_animator;

pub use data_animator::DataAnimator;
pub use easing::Easing;
pub use rotation_animator::{RotationAnimator, normalize_degrees, shortest_rotation_delta};
pub use timeline::{AnimationEvent, AnimationListener, AnimationPhase};
pub use viewport_animator::ViewportAnimator;

pub(crate) use timeline::Timeline;
