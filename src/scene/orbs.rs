use crate::config::OrbConfig;
use crate::foundation::color::Rgba8;
use crate::foundation::core::{Point, Viewport};
use crate::render::display_list::{DrawSurface, GradientStop};

/// Centre of an orb with phase `delay` at `t` seconds.
///
/// The orb's top-left corner sits at `(30 + 20 sin(t + delay))%` of the width and
/// `(20 + 20 cos(t + delay))%` of the height.
pub fn orb_center(cfg: &OrbConfig, bounds: Viewport, t: f64, delay: f64) -> Point {
    let phase = t + delay;
    let left = (30.0 + phase.sin() * 20.0) / 100.0 * bounds.width_f64();
    let top = (20.0 + phase.cos() * 20.0) / 100.0 * bounds.height_f64();
    let r = cfg.diameter * 0.5;
    Point::new(left + r, top + r)
}

fn orb_stops() -> Vec<GradientStop> {
    vec![
        GradientStop::new(0.0, Rgba8::new(147, 51, 234, 102)),
        GradientStop::new(0.3, Rgba8::new(124, 58, 237, 77)),
        GradientStop::new(0.6, Rgba8::new(168, 85, 247, 51)),
        GradientStop::new(0.8, Rgba8::new(168, 85, 247, 0)),
    ]
}

/// Paint every configured orb for time `t` on top of `surface`.
pub fn draw_orbs(cfg: &OrbConfig, t: f64, surface: &mut dyn DrawSurface) {
    if !cfg.enabled {
        return;
    }
    let bounds = surface.viewport();
    for &delay in &cfg.delays {
        surface.radial_gradient(
            orb_center(cfg, bounds, t, delay),
            cfg.diameter * 0.5,
            orb_stops(),
            cfg.opacity as f32,
        );
    }
}
