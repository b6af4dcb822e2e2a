use super::*;
use crate::foundation::color::Rgba8;
use crate::foundation::core::{FrameIndex, Point};

#[derive(Default)]
struct Counter {
    frames: u64,
    last_size: Option<Viewport>,
}

impl FrameRenderer for Counter {
    fn render_frame(&mut self, surface: &mut dyn DrawSurface, _time: FrameTime) {
        self.frames += 1;
        surface.clear();
        surface.fill_circle(Point::new(1.0, 1.0), 1.0, Rgba8::WHITE);
    }

    fn resize(&mut self, viewport: Viewport) {
        self.last_size = Some(viewport);
    }
}

fn time(f: u64) -> FrameTime {
    FrameTime {
        frame: FrameIndex(f),
        elapsed_secs: f as f64 / 60.0,
    }
}

fn run_due<R: FrameRenderer>(
    l: &mut AnimationLoop<R>,
    s: &mut FrameScheduler,
    f: u64,
) -> Vec<FrameOutcome> {
    s.take_due()
        .into_iter()
        .map(|(req, _)| l.on_frame(req, s, time(f)))
        .collect()
}

#[test]
fn loop_reschedules_itself_every_frame() {
    let mut s = FrameScheduler::new();
    let mut l = AnimationLoop::new(
        LoopId(0),
        Counter::default(),
        Some(DisplayList::new(Viewport::new(4, 4))),
    );
    l.start(&mut s);
    l.start(&mut s);
    assert_eq!(s.pending_len(), 1);

    for f in 0..5 {
        assert_eq!(run_due(&mut l, &mut s, f), vec![FrameOutcome::Drawn]);
        assert_eq!(s.pending_len(), 1);
    }
    assert_eq!(l.renderer().frames, 5);
    assert_eq!(l.frames_drawn(), 5);
    assert_eq!(l.surface().unwrap().len(), 1);
}

#[test]
fn missing_surface_skips_but_keeps_running() {
    let mut s = FrameScheduler::new();
    let mut l = AnimationLoop::new(LoopId(3), Counter::default(), None);
    l.start(&mut s);
    assert_eq!(run_due(&mut l, &mut s, 0), vec![FrameOutcome::Skipped]);
    assert_eq!(run_due(&mut l, &mut s, 1), vec![FrameOutcome::Skipped]);
    assert!(l.is_running());
    assert_eq!(l.renderer().frames, 0);
    assert_eq!(l.frames_skipped(), 2);

    l.attach_surface(DisplayList::new(Viewport::new(8, 8)));
    assert_eq!(l.renderer().last_size, Some(Viewport::new(8, 8)));
    assert_eq!(run_due(&mut l, &mut s, 2), vec![FrameOutcome::Drawn]);
}

#[test]
fn cancel_stops_the_cycle() {
    let mut s = FrameScheduler::new();
    let mut l = AnimationLoop::new(
        LoopId(0),
        Counter::default(),
        Some(DisplayList::new(Viewport::new(4, 4))),
    );
    l.start(&mut s);
    run_due(&mut l, &mut s, 0);
    assert!(l.cancel(&mut s));
    assert!(!l.cancel(&mut s));
    assert!(!l.is_running());
    assert_eq!(s.pending_len(), 0);
    assert!(run_due(&mut l, &mut s, 1).is_empty());
    assert_eq!(l.renderer().frames, 1);
}

#[test]
fn stale_requests_are_ignored() {
    let mut s = FrameScheduler::new();
    let mut l = AnimationLoop::new(
        LoopId(0),
        Counter::default(),
        Some(DisplayList::new(Viewport::new(4, 4))),
    );
    l.start(&mut s);
    let req = l.pending_request().unwrap();
    l.cancel(&mut s);
    assert_eq!(l.on_frame(req, &mut s, time(0)), FrameOutcome::Ignored);
    assert_eq!(s.pending_len(), 0);
    assert_eq!(l.renderer().frames, 0);
}

#[test]
fn resize_reaches_surface_and_renderer() {
    let mut l = AnimationLoop::new(
        LoopId(0),
        Counter::default(),
        Some(DisplayList::new(Viewport::new(4, 4))),
    );
    l.resize(Viewport::new(10, 20));
    assert_eq!(l.surface().unwrap().viewport(), Viewport::new(10, 20));
    assert_eq!(l.renderer().last_size, Some(Viewport::new(10, 20)));
}
