//! The engine instance: all state for one mounted starfield.

use crate::config::StarfieldConfig;
use crate::error::ConfigError;
use crate::input::{PointerKind, PointerTracker};
use crate::recycle::recycle_star;
use crate::render::{render_stars, StrokeSurface};
use crate::star::{Star, StarPool};
use crate::surface::{Surface, Viewport};
use crate::velocity::Velocity;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct Starfield {
    config: StarfieldConfig,
    pool: StarPool,
    velocity: Velocity,
    surface: Surface,
    pointer: PointerTracker,
    rng: StdRng,
    frames: u64,
    recycled: u64,
}

impl Starfield {
    /// Build the pool for `viewport` and run the initial resize.
    /// The same seed reproduces the same placement, recycling and twinkle.
    pub fn new(config: StarfieldConfig, viewport: Viewport, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, viewport, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(config: StarfieldConfig, viewport: Viewport) -> Result<Self, ConfigError> {
        Self::with_rng(config, viewport, StdRng::from_entropy())
    }

    fn with_rng(
        config: StarfieldConfig,
        viewport: Viewport,
        mut rng: StdRng,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let count = config.star_count(viewport.css_width, viewport.css_height);
        let pool = StarPool::new(count, config.min_scale, &mut rng);
        log::debug!(
            "[starfield] stars={} viewport={}x{}",
            count,
            viewport.css_width,
            viewport.css_height
        );
        let mut engine = Self {
            velocity: Velocity::new(config.warp_speed),
            config,
            pool,
            surface: Surface::default(),
            pointer: PointerTracker::default(),
            rng,
            frames: 0,
            recycled: 0,
        };
        engine.resize(viewport);
        Ok(engine)
    }

    /// Recompute the surface and scatter every star over it. The pool size never changes.
    pub fn resize(&mut self, viewport: Viewport) -> Surface {
        self.surface = Surface::from_viewport(viewport);
        self.pool.place_all(&self.surface, &mut self.rng);
        log::debug!(
            "[starfield] resize {}x{} scale={}",
            self.surface.width,
            self.surface.height,
            self.surface.scale
        );
        self.surface
    }

    /// Feed a motion sample in client coordinates.
    pub fn pointer_moved(&mut self, x: f32, y: f32, kind: PointerKind) {
        if let Some(impulse) = self.pointer.track(
            Vec2::new(x, y),
            kind,
            self.surface.scale,
            self.config.pointer_divisor,
        ) {
            self.velocity.push_target(impulse);
        }
    }

    /// Pointer left the surface or the touch ended.
    pub fn pointer_released(&mut self) {
        self.pointer.release();
    }

    /// Advance one frame of physics. Returns how many stars were recycled.
    pub fn step(&mut self) -> usize {
        let Self {
            config,
            pool,
            velocity,
            surface,
            rng,
            ..
        } = self;
        velocity.advance(config.target_decay, config.smoothing);
        let drift = velocity.current;
        let warp = velocity.warp;
        let center = surface.center();
        let mut recycled = 0;
        for star in pool.iter_mut() {
            star.pos += drift * star.z;
            star.pos += (star.pos - center) * warp * star.z;
            star.z += warp;
            if surface.is_outside(star.pos, config.overflow) {
                recycle_star(star, drift, surface, config, rng);
                recycled += 1;
            }
        }
        self.frames += 1;
        self.recycled += recycled as u64;
        recycled
    }

    /// Paint the current state onto `target`.
    pub fn render<S: StrokeSurface + ?Sized>(&mut self, target: &mut S) {
        render_stars(
            target,
            self.pool.as_slice(),
            self.velocity.current,
            &self.surface,
            &self.config,
            &mut self.rng,
        );
    }

    /// One scheduled frame: step, then render.
    pub fn frame<S: StrokeSurface + ?Sized>(&mut self, target: &mut S) -> usize {
        let recycled = self.step();
        self.render(target);
        recycled
    }

    pub fn config(&self) -> &StarfieldConfig {
        &self.config
    }

    pub fn stars(&self) -> &[Star] {
        self.pool.as_slice()
    }

    pub fn stars_mut(&mut self) -> &mut [Star] {
        self.pool.as_mut_slice()
    }

    pub fn star_count(&self) -> usize {
        self.pool.len()
    }

    pub fn velocity(&self) -> &Velocity {
        &self.velocity
    }

    pub fn velocity_mut(&mut self) -> &mut Velocity {
        &mut self.velocity
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn recycled_total(&self) -> u64 {
        self.recycled
    }
}
