//! Heart Fireworks - fireworks that draw a heart, then idle
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (curve, projectiles, particles, emitters, timers)
//! - `renderer`: Drawing surface abstraction and scene drawing
//! - `settings`: Data-driven tunables

pub mod renderer;
pub mod settings;
pub mod sim;

pub use renderer::{Surface, draw_backdrop, draw_entities, draw_scene};
pub use settings::{Settings, SettingsError};
pub use sim::{ShowError, ShowState, tick};

use glam::Vec2;

/// Animation constants
pub mod consts {
    /// Angular step between sampled heart points (radians)
    pub const CURVE_STEP: f32 = 0.05;
    /// Surface units per curve unit
    pub const CURVE_SCALE: f32 = 20.0;

    /// Pulse rings: initial radius range, max radius range, initial alpha range
    pub const PULSE_MIN_RADIUS: f32 = 10.0;
    pub const PULSE_START_RADIUS_SPREAD: f32 = 5.0;
    pub const PULSE_MAX_RADIUS_BASE: f32 = 25.0;
    pub const PULSE_MAX_RADIUS_SPREAD: f32 = 10.0;
    pub const PULSE_ALPHA_BASE: f32 = 0.5;
    /// Per-frame radius change and opposing alpha change
    pub const PULSE_RADIUS_STEP: f32 = 0.2;
    pub const PULSE_ALPHA_STEP: f32 = 0.005;
    /// Only every Nth curve point gets a ring
    pub const PULSE_STRIDE: usize = 10;

    /// Particles per explosion
    pub const BURST_SIZE: usize = 75;
    pub const PARTICLE_MIN_SPEED: f32 = 1.0;
    pub const PARTICLE_MAX_SPEED: f32 = 3.0;
    pub const PARTICLE_MIN_DECAY: f32 = 0.002;
    pub const PARTICLE_MAX_DECAY: f32 = 0.005;
    /// Constant downward drift added each frame
    pub const PARTICLE_GRAVITY: f32 = 0.2;
    pub const PARTICLE_RADIUS: f32 = 2.0;

    /// Projectile travel per frame
    pub const PROJECTILE_SPEED: f32 = 4.0;
    pub const PROJECTILE_RADIUS: f32 = 2.0;

    /// Ambient emitters
    pub const EMITTER_COUNT: usize = 10;
    pub const EMITTER_RADIUS: f32 = 2.0;
    pub const EMITTER_ALPHA: f32 = 0.6;
    /// Spawn depth below the bottom edge on creation / on reset
    pub const EMITTER_SPAWN_DEPTH: f32 = 200.0;
    pub const EMITTER_RESET_DEPTH: f32 = 10.0;
    pub const EMITTER_MIN_SPEED: f32 = 0.8;
    pub const EMITTER_MAX_SPEED: f32 = 1.6;
    pub const EMITTER_MAX_RESET_SPEED: f32 = 0.9;
    /// Pause between an emitter bursting and rising again
    pub const EMITTER_RESET_DELAY_MS: f64 = 500.0;

    /// Launch sequencer timing
    pub const LAUNCH_START_DELAY_MS: f64 = 1000.0;
    pub const LAUNCH_INTERVAL_MS: f64 = 100.0;
    pub const IDLE_DELAY_MS: f64 = 1000.0;

    /// Caption fade-in per frame
    pub const CAPTION_FADE_STEP: f32 = 0.01;
    /// Translucent black laid over the previous frame
    pub const TRAIL_FADE_ALPHA: f32 = 0.1;
    pub const OUTLINE_LINE_WIDTH: f32 = 2.0;
    pub const PULSE_LINE_WIDTH: f32 = 1.0;

    /// Upper limits accepted from settings
    pub const MAX_CURVE_POINTS: usize = 4096;
    pub const MAX_BURST_SIZE: usize = 1000;
    pub const MAX_EMITTER_COUNT: usize = 200;

    /// Nominal frame length used by the headless runner
    pub const FRAME_MS: f64 = 1000.0 / 60.0;
}

/// Number of points sampled for one full turn at `step` radians
#[inline]
pub fn curve_sample_count(step: f32) -> usize {
    (std::f32::consts::TAU / step).ceil() as usize
}

/// Unit direction for an angle
#[inline]
pub fn direction(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Run one full frame with updates and draws interleaved.
///
/// The outline is drawn before this frame's arrivals extend it, and pulse
/// rings are drawn at their current radius before stepping.
pub fn frame<S: Surface + ?Sized>(state: &mut ShowState, now_ms: f64, surface: &mut S) {
    sim::begin_frame(state, now_ms);
    draw_backdrop(state, surface);
    sim::update_entities(state);
    draw_entities(state, surface);
    sim::advance_pulses(state);
}
