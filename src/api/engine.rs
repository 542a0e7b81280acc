use tracing::debug;

use crate::animation::{DataAnimator, RotationAnimator, ViewportAnimator};
use crate::core::{ChartData, Computator, SelectionChange, SelectionState, Viewport};
use crate::error::ChartResult;
use crate::interaction::GestureInterpreter;
use crate::render::{RenderFrame, Renderer};

use super::AnimationDurations;

pub type SelectionListener = Box<dyn FnMut(SelectionChange)>;
pub type ViewportListener = Box<dyn FnMut(Viewport)>;

/// Policy switches the engine consults outside the interpreter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct EngineBehavior {
    pub(super) viewport_calculation_enabled: bool,
    pub(super) notify_on_viewport_change: bool,
    pub(super) durations: AnimationDurations,
}

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the computator, chart data, selection state, gesture
/// interpreter and animators, and calls into the renderer. All methods are
/// synchronous; a host delivers the frame's gestures first, then calls
/// `advance`, then `render`.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) data: ChartData,
    pub(super) computator: Computator,
    pub(super) selection: SelectionState,
    pub(super) interpreter: GestureInterpreter,
    pub(super) data_animator: DataAnimator,
    pub(super) viewport_animator: ViewportAnimator,
    pub(super) rotation_animator: RotationAnimator,
    pub(super) rotation: f64,
    pub(super) behavior: EngineBehavior,
    pub(super) selection_listener: Option<SelectionListener>,
    pub(super) viewport_listener: Option<ViewportListener>,
    pub(super) notified_revision: u64,
    /// Clock time of the latest `advance`; animations started between ticks
    /// begin at this time.
    pub(super) last_tick_nanos: Option<u64>,
}

impl<R: Renderer> ChartEngine<R> {
    /// Draws the current state.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = RenderFrame::new(&self.computator, &self.data, &self.selection, self.rotation);
        self.renderer.draw(&frame)
    }

    #[must_use]
    pub fn computator(&self) -> &Computator {
        &self.computator
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Reports a changed current viewport to the renderer and, when enabled,
    /// to the viewport listener. Runs after every mutation path.
    pub(super) fn sync_viewport(&mut self) -> bool {
        let revision = self.computator.viewport_revision();
        if revision == self.notified_revision {
            return false;
        }
        self.notified_revision = revision;
        self.renderer.on_viewport_changed(&self.computator);
        if self.behavior.notify_on_viewport_change {
            let viewport = self.computator.current_viewport();
            debug!(
                left = viewport.left,
                top = viewport.top,
                right = viewport.right,
                bottom = viewport.bottom,
                "dispatching viewport change"
            );
            if let Some(listener) = self.viewport_listener.as_mut() {
                listener(viewport);
            }
        }
        true
    }
}
