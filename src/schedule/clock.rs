use std::time::Instant;

use crate::foundation::core::{Fps, FrameIndex};

/// Timestamp handed to a frame callback.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameTime {
    pub frame: FrameIndex,
    /// Seconds since the clock started.
    pub elapsed_secs: f64,
}

impl FrameTime {
    /// Time of `frame` on a fixed-step timeline.
    pub fn at(fps: Fps, frame: FrameIndex) -> Self {
        Self {
            frame,
            elapsed_secs: fps.frames_to_secs(frame.0),
        }
    }
}

/// Monotonic time source driving the frame cycle.
pub trait Clock {
    /// Time for the next frame. Successive calls never go backwards.
    fn tick(&mut self) -> FrameTime;
}

/// Deterministic clock advancing exactly one frame per tick; used for offline rendering.
#[derive(Clone, Copy, Debug)]
pub struct FixedStepClock {
    fps: Fps,
    next: u64,
}

impl FixedStepClock {
    pub fn new(fps: Fps) -> Self {
        Self { fps, next: 0 }
    }

    pub fn starting_at(fps: Fps, frame: FrameIndex) -> Self {
        Self { fps, next: frame.0 }
    }
}

impl Clock for FixedStepClock {
    fn tick(&mut self) -> FrameTime {
        let t = FrameTime::at(self.fps, FrameIndex(self.next));
        self.next = self.next.saturating_add(1);
        t
    }
}

/// Wall-clock time source for live hosts.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    start: Instant,
    frames: u64,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            frames: 0,
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn tick(&mut self) -> FrameTime {
        let t = FrameTime {
            frame: FrameIndex(self.frames),
            elapsed_secs: self.start.elapsed().as_secs_f64(),
        };
        self.frames = self.frames.saturating_add(1);
        t
    }
}
