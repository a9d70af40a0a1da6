//! Particle records and the fixed-size pool that owns them.

use crate::color::Color;
use crate::constants::*;
use crate::surface::Viewport;
use glam::Vec2;
use rand::Rng;
use std::ops::Index;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub size: f32,
    pub target_size: f32,
    pub position: Vec2,
    /// Orbit phase accumulators for x and y.
    pub phase: Vec2,
    /// Smoothed copy of the pointer the orbit is centred on.
    pub follow: Vec2,
    pub speed: f32,
    pub orbit_radius: f32,
    pub color: Color,
}

impl Particle {
    /// Fresh particle resting at `origin` with randomised speed, radius and colour.
    pub fn spawn<R: Rng + ?Sized>(origin: Vec2, base_radius: f32, rng: &mut R) -> Self {
        let half = base_radius * 0.5;
        // gen_range panics on an empty range, which a zero radius would give
        let orbit_radius = if half < base_radius {
            rng.gen_range(half..base_radius)
        } else {
            half
        };
        Self {
            size: INITIAL_SIZE,
            target_size: INITIAL_SIZE,
            position: origin,
            phase: Vec2::ZERO,
            follow: origin,
            speed: rng.gen_range(SPEED_MIN..SPEED_MAX),
            orbit_radius,
            color: Color::random_light(rng),
        }
    }

    /// Motion half of a tick for the particle at `index`: phase, follow point,
    /// orbit position, viewport clamp and size easing. Returns the previous
    /// position so the caller can draw the connecting segment.
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        index: usize,
        pointer: Vec2,
        scale: f32,
        size_ease_rate: f32,
        viewport: Viewport,
        rng: &mut R,
    ) -> Vec2 {
        let prev = self.position;

        self.phase += Vec2::splat(self.speed);
        self.follow += (pointer - self.follow) * self.speed;

        let i = index as f32;
        let reach = self.orbit_radius * scale;
        let offset = Vec2::new((i + self.phase.x).cos(), (i + self.phase.y).sin()) * reach;
        self.position = viewport.clamp(self.follow + offset);

        self.ease_size(size_ease_rate, rng);
        prev
    }

    /// Ease `size` toward `target_size`; once both round to the same integer,
    /// roll a new target. Returns `true` if a new target was rolled.
    pub fn ease_size<R: Rng + ?Sized>(&mut self, rate: f32, rng: &mut R) -> bool {
        self.size += (self.target_size - self.size) * rate;
        if self.size.round() == self.target_size.round() {
            self.target_size = rng.gen_range(SIZE_MIN..SIZE_MAX);
            return true;
        }
        false
    }
}

/// Fixed set of particles, built once and mutated in place every tick.
#[derive(Clone, Debug, Default)]
pub struct ParticlePool {
    particles: Vec<Particle>,
}

impl ParticlePool {
    pub fn new<R: Rng + ?Sized>(
        count: usize,
        origin: Vec2,
        base_radius: f32,
        rng: &mut R,
    ) -> Self {
        let particles = (0..count)
            .map(|_| Particle::spawn(origin, base_radius, rng))
            .collect::<Vec<_>>();
        log::info!(
            "[pool] {} particles at ({:.1},{:.1}) radius={:.1}",
            particles.len(),
            origin.x,
            origin.y,
            base_radius
        );
        Self { particles }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Particle> {
        self.particles.iter_mut()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }
}

impl Index<usize> for ParticlePool {
    type Output = Particle;
    fn index(&self, i: usize) -> &Particle {
        &self.particles[i]
    }
}

impl<'a> IntoIterator for &'a ParticlePool {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Pool of `count` particles at `origin` using the stock base radius.
pub fn create_pool<R: Rng + ?Sized>(count: usize, origin: Vec2, rng: &mut R) -> ParticlePool {
    ParticlePool::new(count, origin, BASE_RADIUS, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn spawn_ranges() {
        let mut rng = StdRng::seed_from_u64(1);
        let origin = Vec2::new(12.0, 34.0);
        for _ in 0..200 {
            let p = Particle::spawn(origin, BASE_RADIUS, &mut rng);
            assert!((SPEED_MIN..SPEED_MAX).contains(&p.speed));
            assert!(p.orbit_radius >= 35.0 && p.orbit_radius < 70.0);
            assert_eq!(p.position, origin);
            assert_eq!(p.follow, origin);
            assert_eq!(p.phase, Vec2::ZERO);
            assert_eq!(p.size, 1.0);
            assert_eq!(p.target_size, 1.0);
        }
    }

    #[test]
    fn pool_indexing_matches_iteration() {
        let mut rng = StdRng::seed_from_u64(4);
        let pool = create_pool(5, Vec2::new(1.0, 2.0), &mut rng);
        for (i, p) in pool.iter().enumerate() {
            assert_eq!(&pool[i], p);
        }
    }

    #[test]
    fn zero_radius_spawns_without_orbit() {
        let mut rng = StdRng::seed_from_u64(8);
        let p = Particle::spawn(Vec2::ZERO, 0.0, &mut rng);
        assert_eq!(p.orbit_radius, 0.0);
    }

    #[test]
    fn empty_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        let pool = create_pool(0, Vec2::ZERO, &mut rng);
        assert!(pool.is_empty());
        assert_eq!(pool.iter().count(), 0);
    }

    #[test]
    fn ease_size_rerolls_on_round_match() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut p = Particle::spawn(Vec2::ZERO, BASE_RADIUS, &mut rng);
        // size 1 and target 1 already round equal
        assert!(p.ease_size(SIZE_EASE_RATE, &mut rng));
        assert!((SIZE_MIN..SIZE_MAX).contains(&p.target_size));
    }
}
