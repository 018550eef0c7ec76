//! Scene drawing
//!
//! Draw order per frame:
//! trail fade, outline, projectiles, particles, emitters, pulse rings, caption.

use glam::Vec2;

use super::{Font, Surface, colors, with_alpha};
use crate::consts::*;
use crate::sim::ShowState;

/// Caption line offsets below surface center
const TITLE_OFFSET: f32 = 10.0;
const SUBTITLE_OFFSET: f32 = 60.0;
const TITLE_FONT: Font = Font::bold(40.0);
const SUBTITLE_FONT: Font = Font::bold(30.0);

/// Draw the current show state onto `surface`
pub fn draw_scene<S: Surface + ?Sized>(state: &ShowState, surface: &mut S) {
    draw_backdrop(state, surface);
    draw_entities(state, surface);
}

/// Trail fade and the outline traced so far
pub fn draw_backdrop<S: Surface + ?Sized>(state: &ShowState, surface: &mut S) {
    // Translucent black instead of a clear leaves fading trails
    surface.fill_surface(with_alpha(colors::BACKGROUND, TRAIL_FADE_ALPHA));

    if state.outline.is_drawable() {
        surface.stroke_polyline(state.outline.points(), colors::ACCENT, OUTLINE_LINE_WIDTH);
    }
}

/// Live entities, pulse rings and the caption
pub fn draw_entities<S: Surface + ?Sized>(state: &ShowState, surface: &mut S) {
    for projectile in &state.projectiles {
        surface.fill_circle(projectile.pos, PROJECTILE_RADIUS, colors::ACCENT);
    }

    for particle in &state.particles {
        surface.fill_circle(
            particle.pos,
            PARTICLE_RADIUS,
            with_alpha(colors::ACCENT, particle.alpha),
        );
    }

    // Exploded emitters show only through their burst
    for emitter in state.emitters.iter().filter(|e| !e.exploded) {
        surface.fill_circle(emitter.pos, emitter.radius, with_alpha(colors::ACCENT, emitter.alpha));
    }

    if state.engine.show_outline_decoration {
        for (point, pulse) in state.curve.decorated() {
            surface.stroke_circle(
                point,
                pulse.radius,
                with_alpha(colors::ACCENT, pulse.draw_alpha()),
                PULSE_LINE_WIDTH,
            );
        }
    }

    if state.engine.show_caption {
        draw_caption(state, surface);
    }
}

fn draw_caption<S: Surface + ?Sized>(state: &ShowState, surface: &mut S) {
    let (w, h) = surface.size();
    let center = Vec2::new(w / 2.0, h / 2.0);
    let color = with_alpha(colors::CAPTION, state.engine.caption_alpha);

    surface.fill_text(
        &state.settings.caption_title,
        center + Vec2::new(0.0, TITLE_OFFSET),
        &TITLE_FONT,
        color,
    );
    surface.fill_text(
        &state.settings.caption_subtitle,
        center + Vec2::new(0.0, SUBTITLE_OFFSET),
        &SUBTITLE_FONT,
        color,
    );
}
