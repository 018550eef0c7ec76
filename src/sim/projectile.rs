//! Projectiles flying from the launch origin to a heart point

use glam::Vec2;

/// Outcome of a projectile update
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Flight {
    Traveling,
    /// Reached its target this frame; carries the target point
    Arrived(Vec2),
}

/// A projectile in straight-line flight
#[derive(Debug, Clone)]
pub struct Projectile {
    pub pos: Vec2,
    pub target: Vec2,
    /// Launch angle, fixed at construction
    pub angle: f32,
    pub speed: f32,
    pub traveled: f32,
    /// Straight-line origin -> target distance
    pub distance: f32,
}

impl Projectile {
    pub fn new(origin: Vec2, target: Vec2, speed: f32) -> Self {
        let delta = target - origin;
        Self {
            pos: origin,
            target,
            angle: delta.y.atan2(delta.x),
            speed,
            traveled: 0.0,
            distance: delta.length(),
        }
    }

    /// Advance one frame along the launch angle
    pub fn update(&mut self) -> Flight {
        let step = crate::direction(self.angle) * self.speed;
        self.pos += step;
        self.traveled += step.length();

        if self.traveled >= self.distance {
            Flight::Arrived(self.target)
        } else {
            Flight::Traveling
        }
    }
}
