use std::collections::BTreeMap;

/// Handle of one pending redraw request.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameRequestId(pub u64);

/// Identifies which animation loop owns a request.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct LoopId(pub u32);

/// Host redraw-request primitive: callers ask for "run me on the next frame" and may cancel.
///
/// Requests are one-shot. A loop that wants to keep animating re-requests from inside its
/// frame callback; requests made while dispatching run on the following frame.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    next_id: u64,
    pending: BTreeMap<FrameRequestId, LoopId>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `owner` for the next frame.
    pub fn request(&mut self, owner: LoopId) -> FrameRequestId {
        let id = FrameRequestId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.pending.insert(id, owner);
        id
    }

    /// Drop a pending request. Returns `false` if it already ran or was cancelled.
    pub fn cancel(&mut self, id: FrameRequestId) -> bool {
        self.pending.remove(&id).is_some()
    }

    /// Remove and return every request due on this frame, in request order.
    pub fn take_due(&mut self) -> Vec<(FrameRequestId, LoopId)> {
        std::mem::take(&mut self.pending).into_iter().collect()
    }

    pub fn is_pending(&self, id: FrameRequestId) -> bool {
        self.pending.contains_key(&id)
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Pending requests owned by `owner`.
    pub fn pending_for(&self, owner: LoopId) -> usize {
        self.pending.values().filter(|o| **o == owner).count()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/scheduler.rs"]
mod tests;
