//! Outline trace: the heart drawn so far
//!
//! Append-only; one point per projectile arrival, in arrival order.

use glam::Vec2;

#[derive(Debug, Clone, Default)]
pub struct OutlineTrace {
    points: Vec<Vec2>,
}

impl OutlineTrace {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    pub fn append(&mut self, point: Vec2) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A polyline needs at least two points
    pub fn is_drawable(&self) -> bool {
        self.points.len() > 1
    }
}
