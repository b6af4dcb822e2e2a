//! Backdrop renders the animated background of a portfolio page as deterministic frames.
//!
//! Three independent layers make up the scene:
//!
//! - a drifting particle constellation with proximity links ([`ParticleField`])
//! - a procedural planet with rings and twinkling stars ([`PlanetRenderer`])
//! - a fading pointer trail ([`PointerTrail`]), plus soft floating orbs
//!
//! A mounted [`Backdrop`] drives the two frame loops on a cooperative [`FrameScheduler`];
//! layers record into a [`DisplayList`] which [`CpuBackend`] rasterises into [`FrameRGBA`].
//! The page's static content is available as typed records through [`ContentProvider`].
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod backdrop;
pub(crate) mod config;
pub(crate) mod content;
pub(crate) mod encode;
pub(crate) mod pipeline;
pub(crate) mod render;
pub(crate) mod scene;
pub(crate) mod schedule;

pub use crate::foundation::color::Rgba8;
pub use crate::foundation::core::{Affine, BezPath, Fps, FrameIndex, Point, Vec2, Viewport};
pub use crate::foundation::error::{BackdropError, BackdropResult};
pub use crate::foundation::math::Rng64;

pub use crate::backdrop::{Backdrop, PARTICLE_LOOP, PLANET_LOOP, TickReport, render_settings};
pub use crate::config::{
    BackdropConfig, ENV_PARTICLES, ENV_SEED, MAX_PARTICLES, OrbConfig, ParticleConfig,
    PlanetConfig, TrailConfig,
};
pub use crate::content::flip::FlipState;
pub use crate::content::gradient::{GradientSpec, NamedStop, StopRole, palette_color};
pub use crate::content::model::{
    Achievement, FocusArea, HeroStat, Profile, Project, SkillCategory,
};
pub use crate::content::{ContentProvider, PortfolioContent};
pub use crate::encode::png::{PngSequenceSink, ensure_parent_dir, unpremultiply_in_place, write_png};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::pipeline::{
    PointerScript, RenderStats, ScriptedPointer, render_frame, render_sequence,
};
pub use crate::render::backend::{
    BackendKind, FrameRGBA, RenderBackend, RenderSettings, create_backend,
};
pub use crate::render::cpu::{CpuBackend, MAX_GRADIENT_RADIUS};
pub use crate::render::display_list::{DisplayList, DrawOp, DrawSurface, GradientStop};
pub use crate::scene::orbs::{draw_orbs, orb_center};
pub use crate::scene::particles::{Particle, ParticleField, link_opacity};
pub use crate::scene::planet::{GLOW_SCALE, PlanetPose, PlanetRenderer, planet_center, planet_pose};
pub use crate::scene::trail::{PointerEvent, PointerTrail, TrailMarker, TrailPoint};
pub use crate::schedule::anim_loop::{AnimationLoop, FrameOutcome, FrameRenderer};
pub use crate::schedule::clock::{Clock, FixedStepClock, FrameTime, SystemClock};
pub use crate::schedule::scheduler::{FrameRequestId, FrameScheduler, LoopId};
