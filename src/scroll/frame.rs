use super::{Page, ScrollController};

/// Handle for a requested animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(pub u64);

/// Source of animation frames (`requestAnimationFrame` in a browser).
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameId;
    fn cancel_frame(&mut self, id: FrameId);
}

/// Per-frame callback loop that drives the controller's engine.
///
/// Exactly one frame is pending while the loop runs. [`dispose`](Self::dispose)
/// must be called when the owning layout goes away, otherwise the
/// scheduler keeps the loop alive.
#[derive(Debug)]
pub struct FrameLoop {
    pending: Option<FrameId>,
    disposed: bool,
}

impl FrameLoop {
    pub fn start<S: FrameScheduler>(scheduler: &mut S) -> Self {
        Self {
            pending: Some(scheduler.request_frame()),
            disposed: false,
        }
    }

    pub fn pending(&self) -> Option<FrameId> {
        self.pending
    }

    pub fn is_running(&self) -> bool {
        !self.disposed
    }

    /// Run the frame `frame` fired at `time_ms` and re-arm the next one.
    ///
    /// Returns `false` for stale frames and after disposal.
    pub fn on_frame<P: Page, S: FrameScheduler>(
        &mut self,
        frame: FrameId,
        time_ms: f64,
        controller: &mut ScrollController,
        page: &mut P,
        scheduler: &mut S,
    ) -> bool {
        if self.disposed || self.pending != Some(frame) {
            return false;
        }

        if let Some(engine) = controller.engine_mut() {
            engine.raf(time_ms, page);
        }
        self.pending = Some(scheduler.request_frame());
        true
    }

    /// Cancel the pending frame and stop scheduling.
    pub fn dispose<S: FrameScheduler>(&mut self, scheduler: &mut S) {
        if let Some(id) = self.pending.take() {
            scheduler.cancel_frame(id);
        }
        if !self.disposed {
            tracing::debug!("Frame loop disposed");
        }
        self.disposed = true;
    }
}
