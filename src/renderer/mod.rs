//! Drawing module
//!
//! The simulation is drawn through the `Surface` trait: a fixed-size 2D
//! raster with fill/stroke primitives. On the web this is a canvas 2D
//! context; tests and the native runner use `RecordingSurface`.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;
mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};
pub use scene::{draw_backdrop, draw_entities, draw_scene};

use glam::Vec2;

/// RGBA color, components 0-1
pub type Color = [f32; 4];

/// Colors for show elements
pub mod colors {
    use super::Color;

    /// Light purple (#cc66ff) used by everything but the caption
    pub const ACCENT: Color = [0.8, 0.4, 1.0, 1.0];
    pub const CAPTION: Color = [1.0, 1.0, 1.0, 1.0];
    pub const BACKGROUND: Color = [0.0, 0.0, 0.0, 1.0];
}

/// Replace a color's alpha (clamped to 0-1)
#[inline]
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    [color[0], color[1], color[2], alpha.clamp(0.0, 1.0)]
}

/// Font for caption text
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub size_px: f32,
    pub bold: bool,
    pub family: &'static str,
}

impl Font {
    pub const fn bold(size_px: f32) -> Self {
        Self {
            size_px,
            bold: true,
            family: "'Segoe UI', sans-serif",
        }
    }

    /// CSS font shorthand, e.g. `bold 40px 'Segoe UI', sans-serif`
    pub fn css(&self) -> String {
        let weight = if self.bold { "bold " } else { "" };
        format!("{}{}px {}", weight, self.size_px, self.family)
    }
}

/// A fixed-size 2D drawing target
pub trait Surface {
    /// Surface size in pixels
    fn size(&self) -> (f32, f32);

    /// Fill the whole surface (alpha-blended over what is there)
    fn fill_surface(&mut self, color: Color);

    /// Filled disc
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Stroked circle outline
    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color, line_width: f32);

    /// Connected line segments through `points` in order
    fn stroke_polyline(&mut self, points: &[Vec2], color: Color, line_width: f32);

    /// Single line of text horizontally centered on `anchor`
    fn fill_text(&mut self, text: &str, anchor: Vec2, font: &Font, color: Color);
}

/// CSS `rgba()` for a color
pub fn css_rgba(color: Color) -> String {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgba({}, {}, {}, {})",
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        color[3].clamp(0.0, 1.0)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_is_cc66ff() {
        assert_eq!(css_rgba(colors::ACCENT), "rgba(204, 102, 255, 1)");
        assert_eq!(css_rgba(with_alpha(colors::ACCENT, 0.5)), "rgba(204, 102, 255, 0.5)");
    }

    #[test]
    fn test_with_alpha_clamps() {
        assert_eq!(with_alpha(colors::ACCENT, -0.2)[3], 0.0);
        assert_eq!(with_alpha(colors::ACCENT, 1.7)[3], 1.0);
    }

    #[test]
    fn test_font_css() {
        assert_eq!(Font::bold(40.0).css(), "bold 40px 'Segoe UI', sans-serif");
    }
}
