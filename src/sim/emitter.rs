//! Ambient emitters for the idle phase
//!
//! Each emitter rises slowly from below the bottom edge, bursts at the top,
//! waits for a reset, and rises again from a new spot. Emitters are reused
//! in place; the collection never grows or shrinks.

use glam::Vec2;
use rand::Rng;

use crate::consts::*;

/// Outcome of an emitter update
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rise {
    Rising,
    /// Crossed the top edge this frame; burst at this point
    Burst(Vec2),
    /// Already exploded, waiting for its reset
    Waiting,
}

/// A slow-rising ambient firework
#[derive(Debug, Clone)]
pub struct AmbientEmitter {
    pub pos: Vec2,
    pub speed: f32,
    pub radius: f32,
    pub alpha: f32,
    pub exploded: bool,
}

impl AmbientEmitter {
    /// New emitter well below the bottom edge at a random column
    pub fn new<R: Rng>(width: f32, height: f32, min_speed: f32, max_speed: f32, rng: &mut R) -> Self {
        Self {
            pos: Vec2::new(random_column(width, rng), height + EMITTER_SPAWN_DEPTH),
            speed: rng.random_range(min_speed..max_speed),
            radius: EMITTER_RADIUS,
            alpha: EMITTER_ALPHA,
            exploded: false,
        }
    }

    /// Advance one frame
    pub fn update(&mut self) -> Rise {
        if self.exploded {
            return Rise::Waiting;
        }

        self.pos.y -= self.speed;
        if self.pos.y < -self.radius {
            self.exploded = true;
            return Rise::Burst(Vec2::new(self.pos.x, 0.0));
        }
        Rise::Rising
    }

    /// Start rising again just below the bottom edge
    pub fn reset<R: Rng>(&mut self, width: f32, height: f32, min_speed: f32, max_speed: f32, rng: &mut R) {
        self.pos = Vec2::new(random_column(width, rng), height + EMITTER_RESET_DEPTH);
        self.speed = rng.random_range(min_speed..max_speed);
        self.exploded = false;
    }
}

fn random_column<R: Rng>(width: f32, rng: &mut R) -> f32 {
    rng.random::<f32>() * width
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_new_emitter_starts_below_surface() {
        let mut rng = Pcg32::seed_from_u64(7);
        let e = AmbientEmitter::new(200.0, 200.0, EMITTER_MIN_SPEED, EMITTER_MAX_SPEED, &mut rng);
        assert!(!e.exploded);
        assert_eq!(e.pos.y, 400.0);
        assert!((0.0..=200.0).contains(&e.pos.x));
        assert!((0.8..1.6).contains(&e.speed));
    }

    #[test]
    fn test_cycle_rising_exploded_rising() {
        let mut rng = Pcg32::seed_from_u64(8);
        let mut e = AmbientEmitter::new(200.0, 200.0, EMITTER_MIN_SPEED, EMITTER_MAX_SPEED, &mut rng);

        for _ in 0..3 {
            let mut burst = None;
            // 412 units at >= 0.8 per frame
            for _ in 0..600 {
                match e.update() {
                    Rise::Rising => {}
                    Rise::Burst(at) => {
                        burst = Some(at);
                        break;
                    }
                    Rise::Waiting => panic!("waiting before burst"),
                }
            }
            let at = burst.expect("emitter never reached the top");
            assert_eq!(at.y, 0.0);
            assert!(e.exploded);
            assert_eq!(e.update(), Rise::Waiting);

            e.reset(200.0, 200.0, EMITTER_MIN_SPEED, EMITTER_MAX_RESET_SPEED, &mut rng);
            assert!(!e.exploded);
            assert!(e.pos.y > 200.0);
            assert!((0.8..0.9).contains(&e.speed));
        }
    }

    #[test]
    fn test_position_frozen_while_exploded() {
        let mut rng = Pcg32::seed_from_u64(9);
        let mut e = AmbientEmitter::new(100.0, 0.0, 1.0, 1.5, &mut rng);
        e.pos.y = -1.0;
        assert!(matches!(e.update(), Rise::Burst(_)));
        let frozen = e.pos;
        e.update();
        assert_eq!(e.pos, frozen);
    }
}
