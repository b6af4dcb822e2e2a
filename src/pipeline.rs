use std::path::Path;

use anyhow::Context as _;

use crate::backdrop::Backdrop;
use crate::config::BackdropConfig;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{FrameIndex, Point};
use crate::foundation::error::{BackdropError, BackdropResult};
use crate::render::backend::{FrameRGBA, RenderBackend};
use crate::scene::trail::PointerEvent;
use crate::schedule::clock::{Clock, FixedStepClock, FrameTime};

/// One scripted pointer notification, delivered just before frame `frame` is ticked.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptedPointer {
    pub frame: u64,
    pub x: f64,
    pub y: f64,
}

/// Pointer input for offline rendering.
///
/// JSON form is a plain array: `[{"frame": 0, "x": 10, "y": 20}, ...]`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct PointerScript {
    events: Vec<ScriptedPointer>,
}

impl PointerScript {
    /// Events are stably sorted by frame.
    pub fn new(mut events: Vec<ScriptedPointer>) -> Self {
        events.sort_by_key(|e| e.frame);
        Self { events }
    }

    pub fn from_json_str(s: &str) -> BackdropResult<Self> {
        let events: Vec<ScriptedPointer> = serde_json::from_str(s)?;
        Ok(Self::new(events))
    }

    pub fn from_path(path: &Path) -> BackdropResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read pointer script '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    pub fn events(&self) -> &[ScriptedPointer] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events scheduled for `frame`, in script order.
    pub fn events_at(&self, frame: u64) -> impl Iterator<Item = &ScriptedPointer> {
        let start = self.events.partition_point(|e| e.frame < frame);
        self.events[start..].iter().take_while(move |e| e.frame == frame)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames ticked on the fixed-step clock.
    pub frames_simulated: u64,
    /// Frames rasterised and handed out.
    pub frames_rendered: u64,
    /// Loop callbacks that ran without a surface.
    pub frames_skipped: u64,
}

fn feed_pointer(backdrop: &mut Backdrop, script: &PointerScript, time: FrameTime) {
    let timestamp_ms = (time.elapsed_secs * 1000.0).round() as u64;
    for e in script.events_at(time.frame.0) {
        backdrop.pointer_moved(PointerEvent {
            position: Point::new(e.x, e.y),
            timestamp_ms,
        });
    }
}

/// Simulate frames `0..=frame` and rasterise the last one.
///
/// Particles integrate once per frame, so a frame depends on every frame before it; the whole
/// history is replayed on a fixed-step clock. Same config and script give identical pixels.
#[tracing::instrument(skip(cfg, frame, script, backend), fields(frame = frame.0))]
pub fn render_frame(
    cfg: &BackdropConfig,
    frame: FrameIndex,
    script: &PointerScript,
    backend: &mut dyn RenderBackend,
) -> BackdropResult<FrameRGBA> {
    let mut backdrop = Backdrop::mount(cfg.clone())?;
    let mut clock = FixedStepClock::new(cfg.fps);
    let mut time = clock.tick();
    loop {
        feed_pointer(&mut backdrop, script, time);
        backdrop.tick(time);
        if time.frame >= frame {
            break;
        }
        time = clock.tick();
    }
    backdrop.render(backend, time)
}

/// Render frames `0..frames` into `sink`, in order.
#[tracing::instrument(skip(cfg, script, backend, sink))]
pub fn render_sequence(
    cfg: &BackdropConfig,
    frames: u64,
    script: &PointerScript,
    backend: &mut dyn RenderBackend,
    sink: &mut dyn FrameSink,
) -> BackdropResult<RenderStats> {
    if frames == 0 {
        return Err(BackdropError::validation(
            "sequence must contain at least one frame",
        ));
    }

    let mut backdrop = Backdrop::mount(cfg.clone())?;
    let mut clock = FixedStepClock::new(cfg.fps);
    let mut stats = RenderStats::default();

    sink.begin(SinkConfig {
        width: cfg.viewport.width,
        height: cfg.viewport.height,
        fps: cfg.fps,
    })?;
    for _ in 0..frames {
        let time = clock.tick();
        feed_pointer(&mut backdrop, script, time);
        let report = backdrop.tick(time);
        stats.frames_simulated += 1;
        stats.frames_skipped += u64::from(report.skipped);

        let frame = backdrop.render(backend, time)?;
        sink.push_frame(time.frame, &frame)?;
        stats.frames_rendered += 1;
    }
    sink.end()?;

    tracing::debug!(?stats, "sequence rendered");
    Ok(stats)
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
