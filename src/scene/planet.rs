use std::f64::consts::TAU;

use crate::config::PlanetConfig;
use crate::foundation::core::{Point, Vec2, Viewport};
use crate::foundation::math::pulse01;
use crate::render::display_list::{DrawOp, DrawSurface, GradientStop};
use crate::schedule::anim_loop::FrameRenderer;
use crate::schedule::clock::FrameTime;

/// Glow radius as a multiple of the sphere radius.
pub const GLOW_SCALE: f64 = 1.6;

/// Where the planet is and how far it has spun at a given time.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PlanetPose {
    pub center: Point,
    pub rotation: f64,
}

/// Planet centre at `t` seconds: independent sinusoidal wander on each axis.
pub fn planet_center(cfg: &PlanetConfig, bounds: Viewport, t: f64) -> Point {
    let w = bounds.width_f64();
    let h = bounds.height_f64();
    let c = bounds.center();
    Point::new(
        c.x + cfg.amplitude_x * w * (TAU * t / cfg.period_x_secs).sin(),
        c.y + cfg.amplitude_y * h * (TAU * t / cfg.period_y_secs).cos(),
    )
}

pub fn planet_pose(cfg: &PlanetConfig, bounds: Viewport, t: f64) -> PlanetPose {
    PlanetPose {
        center: planet_center(cfg, bounds, t),
        rotation: t * cfg.spin_rad_per_sec,
    }
}

fn polar(center: Point, angle: f64, dist: f64) -> Point {
    center + Vec2::from_angle(angle) * dist
}

/// Procedural planet: every frame is re-derived from elapsed time alone.
#[derive(Clone, Debug)]
pub struct PlanetRenderer {
    cfg: PlanetConfig,
}

impl PlanetRenderer {
    pub fn new(cfg: &PlanetConfig) -> Self {
        Self { cfg: cfg.clone() }
    }

    pub fn config(&self) -> &PlanetConfig {
        &self.cfg
    }

    /// Paint the planet as it looks `t` seconds after mount.
    pub fn draw(&self, surface: &mut dyn DrawSurface, t: f64) {
        surface.clear();
        if !self.cfg.enabled {
            return;
        }
        let pose = planet_pose(&self.cfg, surface.viewport(), t);
        self.draw_sphere(surface, pose);
        self.draw_markings(surface, pose, t);
        self.draw_details(surface, pose, t);
        self.draw_rings(surface, pose, t);
        self.draw_glow(surface, pose);
        self.draw_stars(surface, pose, t);
    }

    fn draw_sphere(&self, surface: &mut dyn DrawSurface, pose: PlanetPose) {
        let c = &self.cfg;
        surface.radial_gradient(
            pose.center,
            c.radius,
            vec![
                GradientStop::new(0.0, c.core_color),
                GradientStop::new(0.55, c.body_color.fade(0.85)),
                GradientStop::new(1.0, c.body_color.with_alpha(0.0)),
            ],
            1.0,
        );
    }

    fn draw_markings(&self, surface: &mut dyn DrawSurface, pose: PlanetPose, t: f64) {
        let c = &self.cfg;
        let n = c.markings.max(1) as f64;
        for i in 0..c.markings {
            let fi = f64::from(i);
            let angle = pose.rotation + fi * TAU / n;
            let alpha = 0.12 + 0.08 * (t * 1.5 + fi).sin();
            surface.fill_circle(
                polar(pose.center, angle, c.radius * 0.45),
                c.radius * 0.18,
                c.marking_color.with_alpha(alpha),
            );
        }
    }

    fn draw_details(&self, surface: &mut dyn DrawSurface, pose: PlanetPose, t: f64) {
        let c = &self.cfg;
        let n = c.details.max(1) as f64;
        let dist = c.radius * (0.3 + 0.15 * (t * 0.6).sin());
        for i in 0..c.details {
            let fi = f64::from(i);
            let angle = -pose.rotation * 1.4 + fi * TAU / n;
            let alpha = 0.25 + 0.15 * (t * 2.0 + fi * 0.8).sin();
            surface.fill_circle(
                polar(pose.center, angle, dist),
                c.radius * 0.04,
                c.detail_color.with_alpha(alpha),
            );
        }
    }

    fn draw_rings(&self, surface: &mut dyn DrawSurface, pose: PlanetPose, t: f64) {
        let c = &self.cfg;
        if c.ring_segments == 0 {
            return;
        }
        let n = f64::from(c.ring_segments);
        let step = TAU / n;
        for layer in 0..c.ring_layers {
            let fl = f64::from(layer);
            let major = c.radius * (1.4 + 0.2 * fl);
            let radii = Vec2::new(major, major * c.ring_tilt);
            // Outer layers spin slightly faster.
            let spin = pose.rotation * (1.0 + 0.15 * fl);
            for i in 0..c.ring_segments {
                let fi = f64::from(i);
                let alpha = 0.35 * (0.3 + 0.7 * pulse01(t * 2.0 + fi * 0.45 + fl));
                surface.draw(DrawOp::StrokeArc {
                    center: pose.center,
                    radii,
                    start_angle: spin + fi * step,
                    sweep_angle: step * 0.6,
                    x_rotation: c.ring_angle,
                    width: 2.0 - 0.4 * fl.min(3.0),
                    color: c.ring_color.with_alpha(alpha),
                });
            }
        }
    }

    fn draw_glow(&self, surface: &mut dyn DrawSurface, pose: PlanetPose) {
        let c = &self.cfg;
        surface.radial_gradient(
            pose.center,
            c.radius * GLOW_SCALE,
            vec![
                GradientStop::new(0.0, c.glow_color.with_alpha(0.25)),
                GradientStop::new(0.6, c.glow_color.with_alpha(0.12)),
                GradientStop::new(1.0, c.glow_color.with_alpha(0.0)),
            ],
            1.0,
        );
    }

    fn draw_stars(&self, surface: &mut dyn DrawSurface, pose: PlanetPose, t: f64) {
        let c = &self.cfg;
        let n = c.stars.max(1) as f64;
        for i in 0..c.stars {
            let fi = f64::from(i);
            let angle = fi * TAU / n + pose.rotation * 0.15;
            let dist = c.radius * (2.3 + 0.25 * (t * 0.8 + fi).sin());
            let alpha = pulse01(t * 3.0 + fi * 1.7);
            let size = 0.8 + 0.7 * pulse01(t * 2.0 + fi);
            surface.fill_circle(
                polar(pose.center, angle, dist),
                size,
                c.star_color.with_alpha(alpha),
            );
        }
    }
}

impl FrameRenderer for PlanetRenderer {
    fn render_frame(&mut self, surface: &mut dyn DrawSurface, time: FrameTime) {
        self.draw(surface, time.elapsed_secs);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/planet.rs"]
mod tests;
