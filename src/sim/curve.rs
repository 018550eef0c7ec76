//! Heart curve sampling and the per-point pulse rings
//!
//! The heart is the classic parametric curve
//! - x(t) = 16 sin³(t)
//! - y(t) = -(13 cos t - 5 cos 2t - 2 cos 3t - cos 4t)
//!
//! sampled at a fixed angular step over one full turn. Y is negated so the
//! heart points down in screen space (y grows downward).

use glam::Vec2;
use rand::Rng;

use crate::consts::*;

/// Heart curve point in curve units (before scale/translate)
#[inline]
pub fn heart_point(t: f32) -> Vec2 {
    let s = t.sin();
    let x = 16.0 * s * s * s;
    let y = -(13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos());
    Vec2::new(x, y)
}

/// Decorative ring oscillation attached to one curve point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulseState {
    pub radius: f32,
    pub max_radius: f32,
    /// Not clamped; drawing clamps to [0, 1]
    pub alpha: f32,
    pub growing: bool,
}

impl PulseState {
    /// Randomized starting pulse
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            radius: rng.random_range(
                PULSE_MIN_RADIUS..PULSE_MIN_RADIUS + PULSE_START_RADIUS_SPREAD,
            ),
            max_radius: rng.random_range(
                PULSE_MAX_RADIUS_BASE..PULSE_MAX_RADIUS_BASE + PULSE_MAX_RADIUS_SPREAD,
            ),
            alpha: rng.random_range(PULSE_ALPHA_BASE..1.0),
            growing: rng.random_bool(0.5),
        }
    }

    /// Advance one frame: grow and fade up to `max_radius`, then shrink and
    /// brighten back to the minimum radius. Radius stays in [min, max].
    pub fn step(&mut self) {
        if self.growing {
            self.radius = (self.radius + PULSE_RADIUS_STEP).min(self.max_radius);
            self.alpha -= PULSE_ALPHA_STEP;
            if self.radius >= self.max_radius {
                self.growing = false;
            }
        } else {
            self.radius = (self.radius - PULSE_RADIUS_STEP).max(PULSE_MIN_RADIUS);
            self.alpha += PULSE_ALPHA_STEP;
            if self.radius <= PULSE_MIN_RADIUS {
                self.growing = true;
            }
        }
    }

    /// Alpha usable for drawing
    #[inline]
    pub fn draw_alpha(&self) -> f32 {
        self.alpha.clamp(0.0, 1.0)
    }
}

/// Sampled heart outline with one pulse per point (same index)
#[derive(Debug, Clone, Default)]
pub struct HeartCurve {
    points: Vec<Vec2>,
    pulses: Vec<PulseState>,
}

impl HeartCurve {
    /// Sample the heart around `center` at `scale` surface units per curve unit
    pub fn generate<R: Rng>(center: Vec2, scale: f32, step: f32, rng: &mut R) -> Self {
        let count = crate::curve_sample_count(step);
        let mut points = Vec::with_capacity(count);
        let mut pulses = Vec::with_capacity(count);

        for i in 0..count {
            let t = i as f32 * step;
            points.push(center + heart_point(t) * scale);
            pulses.push(PulseState::random(rng));
        }

        log::info!("Sampled {} heart points around ({}, {})", count, center.x, center.y);
        Self { points, pulses }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn pulses(&self) -> &[PulseState] {
        &self.pulses
    }

    pub fn point(&self, index: usize) -> Option<Vec2> {
        self.points.get(index).copied()
    }

    /// Every `PULSE_STRIDE`th point with its pulse
    pub fn decorated(&self) -> impl Iterator<Item = (Vec2, &PulseState)> {
        self.points
            .iter()
            .zip(&self.pulses)
            .step_by(PULSE_STRIDE)
            .map(|(p, pulse)| (*p, pulse))
    }

    /// Advance the pulses that are drawn (every `PULSE_STRIDE`th)
    pub fn step_pulses(&mut self) {
        for pulse in self.pulses.iter_mut().step_by(PULSE_STRIDE) {
            pulse.step();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn sample(seed: u64) -> HeartCurve {
        let mut rng = Pcg32::seed_from_u64(seed);
        HeartCurve::generate(Vec2::new(100.0, 100.0), CURVE_SCALE, CURVE_STEP, &mut rng)
    }

    #[test]
    fn test_point_and_pulse_counts_match() {
        let curve = sample(1);
        assert_eq!(curve.len(), 126);
        assert_eq!(curve.pulses().len(), curve.len());
    }

    #[test]
    fn test_geometry_is_deterministic() {
        let a = sample(1);
        let b = sample(2);
        assert_eq!(a.points(), b.points());
        // Only the pulse randomness differs
        assert_ne!(a.pulses(), b.pulses());
    }

    #[test]
    fn test_first_point_is_heart_notch() {
        // t = 0: x = 0, y = -(13 - 5 - 2 - 1) = -5
        let curve = sample(3);
        let first = curve.point(0).unwrap();
        assert!((first.x - 100.0).abs() < 1e-4);
        assert!((first.y - (100.0 - 5.0 * CURVE_SCALE)).abs() < 1e-3);
    }

    #[test]
    fn test_heart_is_symmetric() {
        // x(-t) = -x(t), y(-t) = y(t)
        for i in 1..20 {
            let t = i as f32 * 0.15;
            let a = heart_point(t);
            let b = heart_point(-t);
            assert!((a.x + b.x).abs() < 1e-4);
            assert!((a.y - b.y).abs() < 1e-4);
        }
    }

    #[test]
    fn test_pulse_initial_ranges() {
        let curve = sample(4);
        for pulse in curve.pulses() {
            assert!((10.0..15.0).contains(&pulse.radius));
            assert!((25.0..35.0).contains(&pulse.max_radius));
            assert!((0.5..1.0).contains(&pulse.alpha));
        }
    }

    #[test]
    fn test_decorated_uses_stride() {
        let curve = sample(5);
        let decorated: Vec<_> = curve.decorated().collect();
        assert_eq!(decorated.len(), 13);
        assert_eq!(decorated[1].0, curve.points()[10]);
    }

    #[test]
    fn test_pulse_reverses_at_bounds() {
        let mut pulse = PulseState {
            radius: 29.9,
            max_radius: 30.0,
            alpha: 0.5,
            growing: true,
        };
        pulse.step();
        assert_eq!(pulse.radius, 30.0);
        assert!(!pulse.growing);
        pulse.step();
        assert!(pulse.radius < 30.0);
        assert!(pulse.alpha > 0.49);
    }

    proptest! {
        #[test]
        fn prop_pulse_radius_stays_bounded(seed in any::<u64>(), frames in 1usize..2000) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut pulse = PulseState::random(&mut rng);
            let mut flips = 0;
            let mut was_growing = pulse.growing;
            for _ in 0..frames {
                pulse.step();
                prop_assert!(pulse.radius >= PULSE_MIN_RADIUS);
                prop_assert!(pulse.radius <= pulse.max_radius);
                if pulse.growing != was_growing {
                    flips += 1;
                    was_growing = pulse.growing;
                }
            }
            // A full sweep is at most (35 - 10) / 0.2 = 125 frames
            if frames > 300 {
                prop_assert!(flips >= 2);
            }
        }
    }
}
