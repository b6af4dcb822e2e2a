use crate::foundation::core::Viewport;
use crate::render::display_list::{DisplayList, DrawSurface};
use crate::schedule::clock::FrameTime;
use crate::schedule::scheduler::{FrameRequestId, FrameScheduler, LoopId};

/// Per-frame body of an animation loop.
pub trait FrameRenderer {
    /// Advance (if stateful) and paint one frame onto `surface`.
    fn render_frame(&mut self, surface: &mut dyn DrawSurface, time: FrameTime);

    /// React to a new surface size. Stateless renderers ignore it.
    fn resize(&mut self, _viewport: Viewport) {}
}

/// What happened when a loop's frame request fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The renderer painted the frame.
    Drawn,
    /// No surface was attached; nothing drawn, next frame requested anyway.
    Skipped,
    /// The request was stale (cancelled or superseded); the loop did not run.
    Ignored,
}

/// Self-rescheduling frame task owning one renderer and its drawing surface.
pub struct AnimationLoop<R> {
    id: LoopId,
    renderer: R,
    surface: Option<DisplayList>,
    pending: Option<FrameRequestId>,
    frames_drawn: u64,
    frames_skipped: u64,
}

impl<R: FrameRenderer> AnimationLoop<R> {
    pub fn new(id: LoopId, renderer: R, surface: Option<DisplayList>) -> Self {
        Self {
            id,
            renderer,
            surface,
            pending: None,
            frames_drawn: 0,
            frames_skipped: 0,
        }
    }

    pub fn id(&self) -> LoopId {
        self.id
    }

    /// Request the first frame. Idempotent while a request is pending.
    pub fn start(&mut self, scheduler: &mut FrameScheduler) {
        if self.pending.is_none() {
            self.pending = Some(scheduler.request(self.id));
        }
    }

    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_request(&self) -> Option<FrameRequestId> {
        self.pending
    }

    /// Frame callback for request `req`. Draws (or skips) and re-requests the next frame.
    pub fn on_frame(
        &mut self,
        req: FrameRequestId,
        scheduler: &mut FrameScheduler,
        time: FrameTime,
    ) -> FrameOutcome {
        if self.pending != Some(req) {
            return FrameOutcome::Ignored;
        }

        let outcome = match self.surface.as_mut() {
            Some(surface) => {
                self.renderer.render_frame(surface, time);
                self.frames_drawn += 1;
                FrameOutcome::Drawn
            }
            None => {
                tracing::debug!(loop_id = self.id.0, frame = time.frame.0, "no surface, frame skipped");
                self.frames_skipped += 1;
                FrameOutcome::Skipped
            }
        };
        self.pending = Some(scheduler.request(self.id));
        outcome
    }

    /// Cancel the pending request, stopping the loop. Returns whether one was pending.
    pub fn cancel(&mut self, scheduler: &mut FrameScheduler) -> bool {
        match self.pending.take() {
            Some(req) => scheduler.cancel(req),
            None => false,
        }
    }

    pub fn attach_surface(&mut self, surface: DisplayList) {
        self.renderer.resize(surface.viewport());
        self.surface = Some(surface);
    }

    pub fn detach_surface(&mut self) -> Option<DisplayList> {
        self.surface.take()
    }

    pub fn surface(&self) -> Option<&DisplayList> {
        self.surface.as_ref()
    }

    /// Re-size the attached surface (if any) and notify the renderer.
    pub fn resize(&mut self, viewport: Viewport) {
        if let Some(surface) = self.surface.as_mut() {
            surface.resize(viewport);
        }
        self.renderer.resize(viewport);
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    pub fn frames_skipped(&self) -> u64 {
        self.frames_skipped
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/anim_loop.rs"]
mod tests;
