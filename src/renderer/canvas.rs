//! Canvas 2D surface for the browser

use glam::Vec2;
use web_sys::CanvasRenderingContext2d;

use super::{Color, Font, Surface, css_rgba};

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f32,
    height: f32,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d, width: u32, height: u32) -> Self {
        Self {
            ctx,
            width: width as f32,
            height: height as f32,
        }
    }

    fn circle_path(&self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        // Only fails for a negative radius
        if let Err(e) = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius.max(0.0) as f64,
            0.0,
            std::f64::consts::TAU,
        ) {
            log::warn!("arc failed: {:?}", e);
        }
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn fill_surface(&mut self, color: Color) {
        self.ctx.set_fill_style_str(&css_rgba(color));
        self.ctx
            .fill_rect(0.0, 0.0, self.width as f64, self.height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.circle_path(center, radius);
        self.ctx.set_fill_style_str(&css_rgba(color));
        self.ctx.fill();
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color, line_width: f32) {
        self.ctx.save();
        self.ctx.set_stroke_style_str(&css_rgba(color));
        self.ctx.set_line_width(line_width as f64);
        self.circle_path(center, radius);
        self.ctx.stroke();
        self.ctx.restore();
    }

    fn stroke_polyline(&mut self, points: &[Vec2], color: Color, line_width: f32) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(&css_rgba(color));
        self.ctx.set_line_width(line_width as f64);
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.stroke();
    }

    fn fill_text(&mut self, text: &str, anchor: Vec2, font: &Font, color: Color) {
        self.ctx.save();
        self.ctx.set_global_alpha(color[3] as f64);
        self.ctx
            .set_fill_style_str(&css_rgba([color[0], color[1], color[2], 1.0]));
        self.ctx.set_font(&font.css());
        self.ctx.set_text_align("center");
        if let Err(e) = self.ctx.fill_text(text, anchor.x as f64, anchor.y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
        self.ctx.restore();
    }
}
