use crate::config::ParticleConfig;
use crate::foundation::color::Rgba8;
use crate::foundation::core::{Point, Vec2, Viewport};
use crate::foundation::math::{Rng64, wrap_coord};
use crate::render::display_list::DrawSurface;
use crate::schedule::anim_loop::FrameRenderer;
use crate::schedule::clock::FrameTime;

/// One drifting point of the constellation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Particle {
    pub position: Point,
    /// Displacement per frame, in px.
    pub velocity: Vec2,
    pub radius: f64,
    pub opacity: f64,
    /// Hue in degrees.
    pub hue: f64,
}

/// Opacity of the link between two particles `distance` px apart.
///
/// Linear falloff from `max_opacity` at distance 0 down to nothing at `threshold`; `None`
/// means no line is drawn.
pub fn link_opacity(distance: f64, threshold: f64, max_opacity: f64) -> Option<f64> {
    if !(distance < threshold) || threshold <= 0.0 {
        return None;
    }
    Some((1.0 - distance.max(0.0) / threshold) * max_opacity)
}

/// Fixed-size pool of drifting particles on a toroidal viewport.
#[derive(Clone, Debug)]
pub struct ParticleField {
    cfg: ParticleConfig,
    bounds: Viewport,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Populate `cfg.count` particles uniformly over `bounds`.
    pub fn seeded(cfg: &ParticleConfig, bounds: Viewport, seed: u64) -> Self {
        let mut rng = Rng64::new(seed);
        let w = bounds.width_f64();
        let h = bounds.height_f64();
        let particles = (0..cfg.count)
            .map(|_| {
                let x = rng.next_f64_01() * w;
                let y = rng.next_f64_01() * h;
                let vx = (rng.next_f64_01() - 0.5) * cfg.max_speed;
                let vy = (rng.next_f64_01() - 0.5) * cfg.max_speed;
                Particle {
                    position: Point::new(x, y),
                    velocity: Vec2::new(vx, vy),
                    radius: rng.next_f64_01() * cfg.radius_spread + cfg.min_radius,
                    opacity: rng.next_f64_01() * cfg.opacity_spread + cfg.min_opacity,
                    hue: cfg.hue_min + rng.next_f64_01() * cfg.hue_spread,
                }
            })
            .collect();
        Self {
            cfg: cfg.clone(),
            bounds,
            particles,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn bounds(&self) -> Viewport {
        self.bounds
    }

    /// Integrate every particle by one frame of velocity and wrap into bounds.
    pub fn step(&mut self) {
        let w = self.bounds.width_f64();
        let h = self.bounds.height_f64();
        for p in &mut self.particles {
            let next = p.position + p.velocity;
            p.position = Point::new(wrap_coord(next.x, w), wrap_coord(next.y, h));
        }
    }

    /// Change bounds and fold existing particles into them. The pool is not reseeded.
    pub fn set_bounds(&mut self, bounds: Viewport) {
        self.bounds = bounds;
        let w = bounds.width_f64();
        let h = bounds.height_f64();
        for p in &mut self.particles {
            p.position = Point::new(wrap_coord(p.position.x, w), wrap_coord(p.position.y, h));
        }
    }

    fn color(&self, hue: f64, alpha: f64) -> Rgba8 {
        Rgba8::hsla(hue, self.cfg.saturation, self.cfg.lightness, alpha)
    }

    /// Paint dots and proximity links for the current positions.
    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        surface.clear();
        let threshold = self.cfg.link_distance;
        for (i, p) in self.particles.iter().enumerate() {
            surface.fill_circle(p.position, p.radius, self.color(p.hue, p.opacity));

            for other in &self.particles[i + 1..] {
                let distance = p.position.distance(other.position);
                if let Some(alpha) = link_opacity(distance, threshold, self.cfg.link_max_opacity) {
                    surface.stroke_line(
                        p.position,
                        other.position,
                        self.cfg.link_width,
                        self.color(p.hue, alpha),
                    );
                }
            }
        }
    }
}

impl FrameRenderer for ParticleField {
    fn render_frame(&mut self, surface: &mut dyn DrawSurface, _time: FrameTime) {
        self.step();
        self.draw(surface);
    }

    fn resize(&mut self, viewport: Viewport) {
        if viewport != self.bounds {
            self.set_bounds(viewport);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/particles.rs"]
mod tests;
