//! In-memory surface that records draw calls
//!
//! Used by the native headless runner and by tests to inspect what a frame
//! would have drawn.

use glam::Vec2;

use super::{Color, Font, Surface};

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillSurface {
        color: Color,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    StrokeCircle {
        center: Vec2,
        radius: f32,
        color: Color,
        line_width: f32,
    },
    StrokePolyline {
        points: Vec<Vec2>,
        color: Color,
        line_width: f32,
    },
    FillText {
        text: String,
        anchor: Vec2,
        font: Font,
        color: Color,
    },
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Forget recorded commands (call between frames)
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn disc_count(&self) -> usize {
        self.count(|c| matches!(c, DrawCommand::FillCircle { .. }))
    }

    pub fn ring_count(&self) -> usize {
        self.count(|c| matches!(c, DrawCommand::StrokeCircle { .. }))
    }

    pub fn polyline_count(&self) -> usize {
        self.count(|c| matches!(c, DrawCommand::StrokePolyline { .. }))
    }

    /// Text of every `FillText`, in draw order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|&c| pred(c)).count()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn fill_surface(&mut self, color: Color) {
        self.commands.push(DrawCommand::FillSurface { color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands
            .push(DrawCommand::FillCircle { center, radius, color });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color, line_width: f32) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            color,
            line_width,
        });
    }

    fn stroke_polyline(&mut self, points: &[Vec2], color: Color, line_width: f32) {
        self.commands.push(DrawCommand::StrokePolyline {
            points: points.to_vec(),
            color,
            line_width,
        });
    }

    fn fill_text(&mut self, text: &str, anchor: Vec2, font: &Font, color: Color) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            anchor,
            font: font.clone(),
            color,
        });
    }
}
