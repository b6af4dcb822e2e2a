use super::*;
use crate::render::display_list::DisplayList;

fn count(list: &DisplayList) -> (usize, usize, usize) {
    let mut circles = 0;
    let mut arcs = 0;
    let mut gradients = 0;
    for op in list.ops() {
        match op {
            DrawOp::FillCircle { .. } => circles += 1,
            DrawOp::StrokeArc { .. } => arcs += 1,
            DrawOp::RadialGradient { .. } => gradients += 1,
            DrawOp::StrokeLine { .. } => {}
        }
    }
    (circles, arcs, gradients)
}

#[test]
fn center_is_a_pure_function_of_time() {
    let cfg = PlanetConfig::default();
    let v = Viewport::new(1280, 720);
    for t in [0.0, 0.5, 13.25, 1e4] {
        assert_eq!(planet_center(&cfg, v, t), planet_center(&cfg, v, t));
    }
    let start = planet_center(&cfg, v, 0.0);
    assert!((start.x - 640.0).abs() < 1e-9);
    assert!((start.y - (360.0 + 0.15 * 720.0)).abs() < 1e-9);
}

#[test]
fn center_repeats_after_both_periods() {
    let cfg = PlanetConfig {
        period_x_secs: 4.0,
        period_y_secs: 6.0,
        ..PlanetConfig::default()
    };
    let v = Viewport::new(400, 300);
    let a = planet_center(&cfg, v, 1.3);
    let b = planet_center(&cfg, v, 13.3);
    assert!((a.x - b.x).abs() < 1e-6);
    assert!((a.y - b.y).abs() < 1e-6);
}

#[test]
fn center_stays_within_amplitude_box() {
    let cfg = PlanetConfig::default();
    let v = Viewport::new(1000, 1000);
    for i in 0..500 {
        let p = planet_center(&cfg, v, f64::from(i) * 0.37);
        assert!((p.x - 500.0).abs() <= 250.0 + 1e-9);
        assert!((p.y - 500.0).abs() <= 150.0 + 1e-9);
    }
}

#[test]
fn rotation_grows_with_spin_rate() {
    let cfg = PlanetConfig::default();
    let pose = planet_pose(&cfg, Viewport::new(10, 10), 2.0);
    assert!((pose.rotation - 2.0 * cfg.spin_rad_per_sec).abs() < 1e-12);
}

#[test]
fn op_counts_follow_config() {
    let cfg = PlanetConfig::default();
    let mut list = DisplayList::new(Viewport::new(640, 360));
    PlanetRenderer::new(&cfg).draw(&mut list, 1.5);
    let (circles, arcs, gradients) = count(&list);
    assert_eq!(circles, (cfg.markings + cfg.details + cfg.stars) as usize);
    assert_eq!(arcs, (cfg.ring_layers * cfg.ring_segments) as usize);
    assert_eq!(gradients, 2);
}

#[test]
fn redraw_replaces_previous_frame() {
    let cfg = PlanetConfig::default();
    let mut r = PlanetRenderer::new(&cfg);
    let mut list = DisplayList::new(Viewport::new(320, 200));
    r.draw(&mut list, 0.0);
    let first = list.len();
    r.render_frame(&mut list, FrameTime::at(Default::default(), crate::FrameIndex(30)));
    assert_eq!(list.len(), first);
}

#[test]
fn disabled_planet_leaves_surface_empty() {
    let cfg = PlanetConfig {
        enabled: false,
        ..PlanetConfig::default()
    };
    let mut list = DisplayList::new(Viewport::new(64, 64));
    list.fill_circle(Point::new(1.0, 1.0), 1.0, crate::Rgba8::WHITE);
    PlanetRenderer::new(&cfg).draw(&mut list, 3.0);
    assert!(list.is_empty());
}

#[test]
fn same_time_gives_same_display_list() {
    let cfg = PlanetConfig::default();
    let r = PlanetRenderer::new(&cfg);
    let mut a = DisplayList::new(Viewport::new(300, 300));
    let mut b = DisplayList::new(Viewport::new(300, 300));
    r.draw(&mut a, 7.77);
    r.draw(&mut b, 7.77);
    assert_eq!(a.ops(), b.ops());
}
