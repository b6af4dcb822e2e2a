use super::*;
use crate::encode::sink::InMemorySink;
use crate::foundation::core::Viewport;
use crate::render::backend::RenderSettings;
use crate::render::cpu::CpuBackend;

fn tiny_cfg() -> BackdropConfig {
    let mut cfg = BackdropConfig::default();
    cfg.viewport = Viewport::new(48, 32);
    cfg.particles.count = 6;
    cfg.planet.radius = 8.0;
    cfg.orbs.diameter = 24.0;
    cfg
}

fn backend(cfg: &BackdropConfig) -> CpuBackend {
    CpuBackend::new(crate::backdrop::render_settings(cfg))
}

#[test]
fn pointer_script_parses_and_groups_by_frame() {
    let script = PointerScript::from_json_str(
        r#"[{"frame": 3, "x": 1, "y": 2}, {"frame": 1, "x": 5, "y": 6}, {"frame": 3, "x": 7, "y": 8}]"#,
    )
    .unwrap();
    assert_eq!(script.events().len(), 3);
    assert_eq!(script.events()[0].frame, 1);
    let at3: Vec<f64> = script.events_at(3).map(|e| e.x).collect();
    assert_eq!(at3, vec![1.0, 7.0]);
    assert_eq!(script.events_at(2).count(), 0);
}

#[test]
fn pointer_script_rejects_unknown_fields() {
    let err = PointerScript::from_json_str(r#"[{"frame": 0, "x": 1, "y": 2, "z": 3}]"#)
        .unwrap_err();
    assert!(err.to_string().starts_with("serialization error:"));
}

#[test]
fn render_frame_matches_frame_size_and_is_repeatable() {
    let cfg = tiny_cfg();
    let script = PointerScript::default();
    let a = render_frame(&cfg, FrameIndex(5), &script, &mut backend(&cfg)).unwrap();
    let b = render_frame(&cfg, FrameIndex(5), &script, &mut backend(&cfg)).unwrap();
    assert_eq!((a.width, a.height), (48, 32));
    assert_eq!(a.data.len(), 48 * 32 * 4);
    assert_eq!(a.data, b.data);
}

#[test]
fn sequence_frames_equal_individually_rendered_frames() {
    let cfg = tiny_cfg();
    let script = PointerScript::new(vec![ScriptedPointer {
        frame: 1,
        x: 20.0,
        y: 10.0,
    }]);
    let mut sink = InMemorySink::new();
    let stats = render_sequence(&cfg, 3, &script, &mut backend(&cfg), &mut sink).unwrap();
    assert_eq!(stats.frames_rendered, 3);
    assert_eq!(stats.frames_skipped, 0);
    assert!(sink.is_ended());
    assert_eq!(sink.config().unwrap().width, 48);

    let indices: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(indices, vec![0, 1, 2]);
    let single = render_frame(&cfg, FrameIndex(2), &script, &mut backend(&cfg)).unwrap();
    assert_eq!(sink.frames()[2].1.data, single.data);
}

#[test]
fn empty_sequence_is_rejected() {
    let cfg = tiny_cfg();
    let mut sink = InMemorySink::new();
    let mut be = CpuBackend::new(RenderSettings::default());
    let err = render_sequence(&cfg, 0, &PointerScript::default(), &mut be, &mut sink).unwrap_err();
    assert!(err.to_string().starts_with("validation error:"));
    assert!(sink.config().is_none());
}
