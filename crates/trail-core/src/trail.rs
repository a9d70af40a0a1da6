//! The per-tick motion and render loop.

use crate::config::TrailConfig;
use crate::error::Result;
use crate::input::PointerState;
use crate::particle::{Particle, ParticlePool};
use crate::scale::OrbitScale;
use crate::surface::{DrawSurface, Glow, GlowScope, Viewport};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Everything one animation instance needs between ticks.
pub struct TrailContext {
    config: TrailConfig,
    pool: ParticlePool,
    scale: OrbitScale,
    rng: StdRng,
    ticks: u64,
}

impl TrailContext {
    /// Validate `config` and build a pool resting at `origin`.
    pub fn new(config: TrailConfig, origin: Vec2, seed: u64) -> Result<Self> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);
        let pool = ParticlePool::new(config.quantity, origin, config.base_radius, &mut rng);
        Self::with_pool(config, pool, rng)
    }

    /// Pool resting at the centre of `viewport`, which is where the pointer starts.
    pub fn centred(config: TrailConfig, viewport: Viewport, seed: u64) -> Result<Self> {
        Self::new(config, viewport.centre(), seed)
    }

    /// Wrap an existing pool after validating `config`.
    pub fn with_pool(config: TrailConfig, pool: ParticlePool, rng: StdRng) -> Result<Self> {
        config.validate()?;
        let scale = OrbitScale::new(config.min_scale, config.max_scale, config.scale_ease_rate);
        Ok(Self {
            config,
            pool,
            scale,
            rng,
            ticks: 0,
        })
    }

    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    pub fn particles(&self) -> &ParticlePool {
        &self.pool
    }

    pub fn orbit_scale(&self) -> &OrbitScale {
        &self.scale
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Rebuild the pool at `origin` and return the scale to rest.
    pub fn reset(&mut self, origin: Vec2) {
        self.pool = ParticlePool::new(
            self.config.quantity,
            origin,
            self.config.base_radius,
            &mut self.rng,
        );
        self.scale = OrbitScale::new(
            self.config.min_scale,
            self.config.max_scale,
            self.config.scale_ease_rate,
        );
        self.ticks = 0;
    }

    /// Advance every particle by one tick and draw the result onto `surface`.
    ///
    /// `pointer` is a snapshot taken by the caller; `viewport` is read fresh
    /// each tick so resizes apply immediately.
    pub fn step<S: DrawSurface + ?Sized>(
        &mut self,
        pointer: PointerState,
        viewport: Viewport,
        surface: &mut S,
    ) {
        let scale = self.scale.update(pointer.down);

        // Darken instead of clearing so earlier strokes fade into trails.
        surface.fill_rect(viewport.rect(), &self.config.fade);

        let size_rate = self.config.size_ease_rate;
        let blur_factor = self.config.glow_blur_factor;
        for (i, p) in self.pool.iter_mut().enumerate() {
            let prev = p.advance(i, pointer.position, scale, size_rate, viewport, &mut self.rng);
            draw_particle(surface, p, prev, blur_factor);
        }

        self.ticks += 1;
        log::trace!(
            "[tick] n={} scale={:.4} pointer=({:.1},{:.1}) down={}",
            self.ticks,
            scale,
            pointer.position.x,
            pointer.position.y,
            pointer.down
        );
    }
}

/// Segment from the previous position plus a dot at the new one, both glowing.
pub fn draw_particle<S: DrawSurface + ?Sized>(
    surface: &mut S,
    p: &Particle,
    prev: Vec2,
    blur_factor: f32,
) {
    surface.begin_path();
    let glow = Glow {
        blur: p.size * blur_factor,
        color: p.color,
    };
    let mut s = GlowScope::new(surface, glow);
    s.stroke_line(prev, p.position, &p.color, p.size);
    s.fill_circle(p.position, p.size * 0.5, &p.color);
}
