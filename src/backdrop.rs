use crate::config::BackdropConfig;
use crate::foundation::core::Viewport;
use crate::foundation::error::BackdropResult;
use crate::render::backend::{FrameRGBA, RenderBackend, RenderSettings};
use crate::render::display_list::DisplayList;
use crate::scene::orbs::draw_orbs;
use crate::scene::particles::ParticleField;
use crate::scene::planet::PlanetRenderer;
use crate::scene::trail::{PointerEvent, PointerTrail};
use crate::schedule::anim_loop::{AnimationLoop, FrameOutcome};
use crate::schedule::clock::FrameTime;
use crate::schedule::scheduler::{FrameScheduler, LoopId};

/// Loop id of the particle constellation.
pub const PARTICLE_LOOP: LoopId = LoopId(0);
/// Loop id of the planet.
pub const PLANET_LOOP: LoopId = LoopId(1);

/// Outcome counts of one [`Backdrop::tick`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub drawn: u32,
    pub skipped: u32,
    pub ignored: u32,
}

impl TickReport {
    fn record(&mut self, outcome: FrameOutcome) {
        match outcome {
            FrameOutcome::Drawn => self.drawn += 1,
            FrameOutcome::Skipped => self.skipped += 1,
            FrameOutcome::Ignored => self.ignored += 1,
        }
    }
}

/// The mounted background component.
///
/// Owns the frame scheduler, the two self-rescheduling animation loops and the pointer trail.
/// The loops and the trail share no state; [`Backdrop::compose`] only reads them.
pub struct Backdrop {
    cfg: BackdropConfig,
    scheduler: FrameScheduler,
    particles: AnimationLoop<ParticleField>,
    planet: AnimationLoop<PlanetRenderer>,
    trail: PointerTrail,
    listening: bool,
}

impl Backdrop {
    /// Validate `cfg`, size both drawing surfaces to its viewport and start both loops.
    #[tracing::instrument(skip(cfg), fields(width = cfg.viewport.width, height = cfg.viewport.height))]
    pub fn mount(cfg: BackdropConfig) -> BackdropResult<Self> {
        let mut backdrop = Self::mount_detached(cfg)?;
        let viewport = backdrop.cfg.viewport;
        backdrop.particles.attach_surface(DisplayList::new(viewport));
        backdrop.planet.attach_surface(DisplayList::new(viewport));
        Ok(backdrop)
    }

    /// Like [`Backdrop::mount`] but without drawing surfaces: both loops run and skip every
    /// frame until [`Backdrop::attach_surfaces`] is called.
    pub fn mount_detached(cfg: BackdropConfig) -> BackdropResult<Self> {
        cfg.validate()?;
        let viewport = cfg.viewport;
        let field = ParticleField::seeded(&cfg.particles, viewport, cfg.seed);
        let planet = PlanetRenderer::new(&cfg.planet);

        let mut scheduler = FrameScheduler::new();
        let mut particles = AnimationLoop::new(PARTICLE_LOOP, field, None);
        let mut planet = AnimationLoop::new(PLANET_LOOP, planet, None);
        particles.start(&mut scheduler);
        planet.start(&mut scheduler);

        tracing::debug!(
            particles = cfg.particles.count,
            seed = cfg.seed,
            "backdrop mounted"
        );
        Ok(Self {
            trail: PointerTrail::new(cfg.trail.capacity),
            cfg,
            scheduler,
            particles,
            planet,
            listening: true,
        })
    }

    /// Give both loops a fresh surface at the current viewport size.
    pub fn attach_surfaces(&mut self) {
        let viewport = self.cfg.viewport;
        self.particles.attach_surface(DisplayList::new(viewport));
        self.planet.attach_surface(DisplayList::new(viewport));
    }

    pub fn config(&self) -> &BackdropConfig {
        &self.cfg
    }

    pub fn viewport(&self) -> Viewport {
        self.cfg.viewport
    }

    /// Run every frame request that is due. Requests made while dispatching wait for the
    /// next tick.
    pub fn tick(&mut self, time: FrameTime) -> TickReport {
        let mut report = TickReport::default();
        for (req, owner) in self.scheduler.take_due() {
            tracing::trace!(loop_id = owner.0, frame = time.frame.0, "dispatch frame");
            let outcome = match owner {
                PARTICLE_LOOP => self.particles.on_frame(req, &mut self.scheduler, time),
                PLANET_LOOP => self.planet.on_frame(req, &mut self.scheduler, time),
                _ => FrameOutcome::Ignored,
            };
            report.record(outcome);
        }
        report
    }

    /// Pointer notification. Returns `false` (and records nothing) after teardown.
    pub fn pointer_moved(&mut self, event: PointerEvent) -> bool {
        if !self.listening {
            return false;
        }
        self.trail.push(event);
        true
    }

    /// Re-size both surfaces and fold existing particles into the new bounds.
    pub fn resize(&mut self, viewport: Viewport) -> BackdropResult<()> {
        viewport.validate()?;
        self.cfg.viewport = viewport;
        self.particles.resize(viewport);
        self.planet.resize(viewport);
        Ok(())
    }

    /// Cancel both frame requests and detach the pointer listener. Idempotent.
    pub fn teardown(&mut self) {
        let cancelled = usize::from(self.particles.cancel(&mut self.scheduler))
            + usize::from(self.planet.cancel(&mut self.scheduler));
        if self.listening || cancelled > 0 {
            tracing::debug!(cancelled, "backdrop torn down");
        }
        self.listening = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.listening
    }

    /// Stack every layer into one display list: planet, particles, orbs, then the trail.
    pub fn compose(&self, time: FrameTime) -> DisplayList {
        let mut out = DisplayList::new(self.cfg.viewport);
        if let Some(planet) = self.planet.surface() {
            out.extend_from(planet);
        }
        if let Some(particles) = self.particles.surface() {
            out.extend_from(particles);
        }
        draw_orbs(&self.cfg.orbs, time.elapsed_secs, &mut out);
        self.trail.draw(&self.cfg.trail, &mut out);
        out
    }

    /// Compose and rasterise the current state.
    pub fn render(
        &self,
        backend: &mut dyn RenderBackend,
        time: FrameTime,
    ) -> BackdropResult<FrameRGBA> {
        backend.render_list(&self.compose(time))
    }

    /// Backend settings clearing to the configured background.
    pub fn render_settings(&self) -> RenderSettings {
        render_settings(&self.cfg)
    }

    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    pub fn particle_loop(&self) -> &AnimationLoop<ParticleField> {
        &self.particles
    }

    pub fn planet_loop(&self) -> &AnimationLoop<PlanetRenderer> {
        &self.planet
    }

    pub fn trail(&self) -> &PointerTrail {
        &self.trail
    }
}

impl Drop for Backdrop {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Backend settings for `cfg`: clear to its background color.
pub fn render_settings(cfg: &BackdropConfig) -> RenderSettings {
    RenderSettings {
        clear_rgba: Some(cfg.background.to_array()),
    }
}

#[cfg(test)]
#[path = "../tests/unit/backdrop.rs"]
mod tests;
