use std::path::Path;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::foundation::color::Rgba8;
use crate::foundation::core::{Fps, Viewport};
use crate::foundation::error::{BackdropError, BackdropResult};
use crate::render::cpu::MAX_GRADIENT_RADIUS;
use crate::scene::planet::GLOW_SCALE;

/// Upper bound on the particle pool; the link pass is all-pairs.
pub const MAX_PARTICLES: usize = 2_000;

/// Environment variable overriding [`BackdropConfig::seed`].
pub const ENV_SEED: &str = "BACKDROP_SEED";
/// Environment variable overriding [`ParticleConfig::count`].
pub const ENV_PARTICLES: &str = "BACKDROP_PARTICLES";

/// Full configuration for one backdrop instance.
///
/// Every field has a default matching the portfolio page, so `{}` is a valid config file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BackdropConfig {
    /// Initial viewport; drawing surfaces are sized to it at mount.
    pub viewport: Viewport,
    /// Frame rate of the fixed-step clock used for offline rendering.
    pub fps: Fps,
    /// Seed for the particle field.
    pub seed: u64,
    /// Page background painted under every layer.
    pub background: Rgba8,
    /// Constellation layer.
    pub particles: ParticleConfig,
    /// Planet layer.
    pub planet: PlanetConfig,
    /// Pointer trail overlay.
    pub trail: TrailConfig,
    /// Floating orb overlay.
    pub orbs: OrbConfig,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            fps: Fps::default(),
            seed: 0x00B4_CDE0,
            background: Rgba8::BLACK,
            particles: ParticleConfig::default(),
            planet: PlanetConfig::default(),
            trail: TrailConfig::default(),
            orbs: OrbConfig::default(),
        }
    }
}

/// Tuning for the drifting particle constellation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParticleConfig {
    /// Fixed pool size.
    pub count: usize,
    /// Velocity components are drawn from `(r - 0.5) * max_speed` (px per frame).
    pub max_speed: f64,
    pub min_radius: f64,
    pub radius_spread: f64,
    pub min_opacity: f64,
    pub opacity_spread: f64,
    /// Hue range in degrees: `[hue_min, hue_min + hue_spread)`.
    pub hue_min: f64,
    pub hue_spread: f64,
    pub saturation: f64,
    pub lightness: f64,
    /// Pairs closer than this (px) are linked.
    pub link_distance: f64,
    /// Link opacity at zero distance.
    pub link_max_opacity: f64,
    pub link_width: f64,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 100,
            max_speed: 0.5,
            min_radius: 0.5,
            radius_spread: 2.0,
            min_opacity: 0.2,
            opacity_spread: 0.5,
            hue_min: 250.0,
            hue_spread: 60.0,
            saturation: 0.7,
            lightness: 0.6,
            link_distance: 100.0,
            link_max_opacity: 0.1,
            link_width: 0.5,
        }
    }
}

/// Tuning for the procedural planet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlanetConfig {
    pub enabled: bool,
    /// Sphere radius in px.
    pub radius: f64,
    /// Horizontal wander amplitude as a fraction of the viewport width.
    pub amplitude_x: f64,
    /// Vertical wander amplitude as a fraction of the viewport height.
    pub amplitude_y: f64,
    pub period_x_secs: f64,
    pub period_y_secs: f64,
    pub spin_rad_per_sec: f64,
    pub core_color: Rgba8,
    pub body_color: Rgba8,
    pub marking_color: Rgba8,
    pub detail_color: Rgba8,
    pub ring_color: Rgba8,
    pub glow_color: Rgba8,
    pub star_color: Rgba8,
    pub markings: u32,
    pub details: u32,
    pub ring_layers: u32,
    pub ring_segments: u32,
    /// Minor/major axis ratio of the ring ellipses.
    pub ring_tilt: f64,
    /// Rotation of the ring plane in radians.
    pub ring_angle: f64,
    pub stars: u32,
}

impl Default for PlanetConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            radius: 90.0,
            amplitude_x: 0.25,
            amplitude_y: 0.15,
            period_x_secs: 40.0,
            period_y_secs: 28.0,
            spin_rad_per_sec: 0.35,
            core_color: Rgba8::rgb(0xc4, 0xb5, 0xfd),
            body_color: Rgba8::rgb(0x7c, 0x3a, 0xed),
            marking_color: Rgba8::rgb(0x4c, 0x1d, 0x95),
            detail_color: Rgba8::rgb(0xe9, 0xd5, 0xff),
            ring_color: Rgba8::rgb(0xa7, 0x8b, 0xfa),
            glow_color: Rgba8::rgb(0x8b, 0x5c, 0xf6),
            star_color: Rgba8::WHITE,
            markings: 6,
            details: 12,
            ring_layers: 3,
            ring_segments: 48,
            ring_tilt: 0.3,
            ring_angle: -0.35,
            stars: 24,
        }
    }
}

/// Tuning for the pointer trail overlay.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrailConfig {
    /// Maximum retained pointer positions.
    pub capacity: usize,
    /// Marker diameter in px at full scale.
    pub marker_diameter: f64,
    /// Opacity of the newest marker.
    pub max_opacity: f64,
    /// Tint of the oldest retained marker.
    pub tail_color: Rgba8,
    /// Tint of the newest marker.
    pub head_color: Rgba8,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            capacity: 15,
            marker_diameter: 8.0,
            max_opacity: 0.8,
            tail_color: Rgba8::rgb(0xc0, 0x84, 0xfc),
            head_color: Rgba8::rgb(0xf4, 0x72, 0xb6),
        }
    }
}

/// Tuning for the blurred orbs floating behind the content.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OrbConfig {
    pub enabled: bool,
    /// Phase delay per orb, in seconds.
    pub delays: Vec<f64>,
    pub diameter: f64,
    pub opacity: f64,
}

impl Default for OrbConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            delays: vec![0.0, 2.0, 4.0, 6.0],
            diameter: 384.0,
            opacity: 0.2,
        }
    }
}

impl BackdropConfig {
    /// Parse a JSON config. Missing fields fall back to defaults.
    pub fn from_json_str(s: &str) -> BackdropResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read and parse a JSON config file.
    pub fn from_path(path: &Path) -> BackdropResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Apply `BACKDROP_SEED` / `BACKDROP_PARTICLES` from the process environment.
    pub fn apply_env_overrides(&mut self) -> BackdropResult<()> {
        self.apply_overrides(|k| std::env::var(k).ok())
    }

    pub(crate) fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> BackdropResult<()> {
        if let Some(v) = lookup(ENV_SEED) {
            self.seed = v.trim().parse::<u64>().map_err(|_| {
                BackdropError::validation(format!("{ENV_SEED} must be an unsigned integer"))
            })?;
        }
        if let Some(v) = lookup(ENV_PARTICLES) {
            self.particles.count = v.trim().parse::<usize>().map_err(|_| {
                BackdropError::validation(format!("{ENV_PARTICLES} must be an unsigned integer"))
            })?;
        }
        self.validate()
    }

    pub fn validate(&self) -> BackdropResult<()> {
        self.viewport.validate()?;
        self.fps.validate()?;
        self.particles.validate()?;
        self.planet.validate()?;
        self.trail.validate()?;
        self.orbs.validate()
    }
}

fn finite(name: &str, v: f64) -> BackdropResult<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(BackdropError::validation(format!("{name} must be finite")))
    }
}

fn positive(name: &str, v: f64) -> BackdropResult<()> {
    finite(name, v)?;
    if v > 0.0 {
        Ok(())
    } else {
        Err(BackdropError::validation(format!("{name} must be > 0")))
    }
}

fn non_negative(name: &str, v: f64) -> BackdropResult<()> {
    finite(name, v)?;
    if v >= 0.0 {
        Ok(())
    } else {
        Err(BackdropError::validation(format!("{name} must be >= 0")))
    }
}

fn at_most(name: &str, v: f64, max: f64) -> BackdropResult<()> {
    if v <= max {
        Ok(())
    } else {
        Err(BackdropError::validation(format!("{name} must be <= {max}")))
    }
}

fn unit(name: &str, v: f64) -> BackdropResult<()> {
    finite(name, v)?;
    if (0.0..=1.0).contains(&v) {
        Ok(())
    } else {
        Err(BackdropError::validation(format!("{name} must be in [0, 1]")))
    }
}

impl ParticleConfig {
    pub fn validate(&self) -> BackdropResult<()> {
        if self.count > MAX_PARTICLES {
            return Err(BackdropError::validation(format!(
                "particles.count must be <= {MAX_PARTICLES}"
            )));
        }
        finite("particles.max_speed", self.max_speed)?;
        positive("particles.min_radius", self.min_radius)?;
        non_negative("particles.radius_spread", self.radius_spread)?;
        unit("particles.min_opacity", self.min_opacity)?;
        unit(
            "particles.min_opacity + opacity_spread",
            self.min_opacity + self.opacity_spread,
        )?;
        finite("particles.hue_min", self.hue_min)?;
        finite("particles.hue_spread", self.hue_spread)?;
        unit("particles.saturation", self.saturation)?;
        unit("particles.lightness", self.lightness)?;
        positive("particles.link_distance", self.link_distance)?;
        unit("particles.link_max_opacity", self.link_max_opacity)?;
        positive("particles.link_width", self.link_width)
    }
}

impl PlanetConfig {
    pub fn validate(&self) -> BackdropResult<()> {
        positive("planet.radius", self.radius)?;
        at_most("planet.radius", self.radius, MAX_GRADIENT_RADIUS / GLOW_SCALE)?;
        finite("planet.amplitude_x", self.amplitude_x)?;
        finite("planet.amplitude_y", self.amplitude_y)?;
        positive("planet.period_x_secs", self.period_x_secs)?;
        positive("planet.period_y_secs", self.period_y_secs)?;
        finite("planet.spin_rad_per_sec", self.spin_rad_per_sec)?;
        unit("planet.ring_tilt", self.ring_tilt)?;
        finite("planet.ring_angle", self.ring_angle)?;
        if self.ring_layers > 0 && self.ring_segments == 0 {
            return Err(BackdropError::validation(
                "planet.ring_segments must be > 0 when rings are enabled",
            ));
        }
        Ok(())
    }
}

impl TrailConfig {
    pub fn validate(&self) -> BackdropResult<()> {
        if self.capacity == 0 {
            return Err(BackdropError::validation("trail.capacity must be > 0"));
        }
        positive("trail.marker_diameter", self.marker_diameter)?;
        unit("trail.max_opacity", self.max_opacity)
    }
}

impl OrbConfig {
    pub fn validate(&self) -> BackdropResult<()> {
        for (i, d) in self.delays.iter().enumerate() {
            finite(&format!("orbs.delays[{i}]"), *d)?;
        }
        positive("orbs.diameter", self.diameter)?;
        at_most("orbs.diameter", self.diameter, MAX_GRADIENT_RADIUS * 2.0)?;
        unit("orbs.opacity", self.opacity)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
