//! Explosion particles

use glam::Vec2;
use rand::Rng;

use crate::consts::*;

/// A single decaying spark from a burst
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub angle: f32,
    pub speed: f32,
    /// 1.0 at spawn, only ever decreases
    pub alpha: f32,
    pub decay: f32,
}

impl Particle {
    pub fn new<R: Rng>(pos: Vec2, rng: &mut R) -> Self {
        Self {
            pos,
            angle: rng.random_range(0.0..std::f32::consts::TAU),
            speed: rng.random_range(PARTICLE_MIN_SPEED..PARTICLE_MAX_SPEED),
            alpha: 1.0,
            decay: rng.random_range(PARTICLE_MIN_DECAY..PARTICLE_MAX_DECAY),
        }
    }

    /// Advance one frame. Returns false once fully faded.
    pub fn update(&mut self) -> bool {
        self.pos += crate::direction(self.angle) * self.speed + Vec2::new(0.0, PARTICLE_GRAVITY);
        self.alpha -= self.decay;
        self.alpha > 0.0
    }
}

/// Spawn `count` particles at `pos`
pub fn spawn_burst<R: Rng>(particles: &mut Vec<Particle>, pos: Vec2, count: usize, rng: &mut R) {
    particles.reserve(count);
    for _ in 0..count {
        particles.push(Particle::new(pos, rng));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_burst_size_and_initial_state() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut particles = Vec::new();
        spawn_burst(&mut particles, Vec2::new(50.0, 60.0), BURST_SIZE, &mut rng);

        assert_eq!(particles.len(), 75);
        for p in &particles {
            assert_eq!(p.pos, Vec2::new(50.0, 60.0));
            assert_eq!(p.alpha, 1.0);
            assert!((0.0..std::f32::consts::TAU).contains(&p.angle));
            assert!((1.0..3.0).contains(&p.speed));
            assert!((0.002..0.005).contains(&p.decay));
        }
    }

    #[test]
    fn test_gravity_drift() {
        // Heading straight right: only gravity moves y
        let mut p = Particle {
            pos: Vec2::ZERO,
            angle: 0.0,
            speed: 2.0,
            alpha: 1.0,
            decay: 0.004,
        };
        assert!(p.update());
        assert!((p.pos.x - 2.0).abs() < 1e-5);
        assert!((p.pos.y - PARTICLE_GRAVITY).abs() < 1e-5);
        assert!((p.alpha - 0.996).abs() < 1e-6);
    }

    #[test]
    fn test_particle_dies_when_faded() {
        let mut p = Particle {
            pos: Vec2::ZERO,
            angle: 1.0,
            speed: 1.0,
            alpha: 0.003,
            decay: 0.004,
        };
        assert!(!p.update());
        assert!(p.alpha <= 0.0);
    }

    proptest! {
        #[test]
        fn prop_alpha_never_increases(seed in any::<u64>()) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut p = Particle::new(Vec2::ZERO, &mut rng);
            let mut last = p.alpha;
            let mut frames = 0;
            while p.update() {
                prop_assert!(p.alpha < last);
                last = p.alpha;
                frames += 1;
            }
            // Slowest decay (0.002) fades out in about 500 frames
            prop_assert!(frames <= 510);
        }
    }
}
