//! Show state and core simulation types
//!
//! `ShowState` owns every live collection, the RNG and the timeline.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use thiserror::Error;

use super::curve::HeartCurve;
use super::emitter::AmbientEmitter;
use super::outline::OutlineTrace;
use super::particle::Particle;
use super::projectile::Projectile;
use super::schedule::{Scheduler, Task};
use crate::settings::{Settings, SettingsError};

#[derive(Debug, Error)]
pub enum ShowError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("surface must have positive size, got {width}x{height}")]
    InvalidSurface { width: f32, height: f32 },
    #[error("curve cannot change once launches have started ({launched} launched)")]
    RunInProgress { launched: usize },
}

/// Show-wide flags, flipped by the launch sequence and the caption fade
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EngineState {
    /// Pulse rings along the heart
    pub show_outline_decoration: bool,
    pub show_caption: bool,
    /// Caption fade-in, 0-1
    pub caption_alpha: f32,
}

/// Complete show state
#[derive(Debug, Clone)]
pub struct ShowState {
    pub width: f32,
    pub height: f32,
    /// Seed the RNG was created from
    pub seed: u64,
    pub settings: Settings,
    pub engine: EngineState,
    pub curve: HeartCurve,
    pub outline: OutlineTrace,
    pub projectiles: Vec<Projectile>,
    pub particles: Vec<Particle>,
    pub emitters: Vec<AmbientEmitter>,
    pub scheduler: Scheduler,
    /// Last frame timestamp (ms)
    pub clock_ms: f64,
    /// Frames ticked so far
    pub frame: u64,
    pub(crate) rng: Pcg32,
    /// Curve points targeted so far
    launched: usize,
}

impl ShowState {
    /// Create a show for a `width` x `height` surface with the given RNG seed.
    /// The launch sequence is queued relative to clock zero.
    pub fn new(width: f32, height: f32, seed: u64, settings: Settings) -> Result<Self, ShowError> {
        check_surface(width, height)?;
        settings.validate()?;

        let mut rng = Pcg32::seed_from_u64(seed);
        let curve = HeartCurve::generate(
            Vec2::new(width / 2.0, height / 2.0),
            settings.curve_scale,
            settings.curve_step,
            &mut rng,
        );

        let mut scheduler = Scheduler::new();
        scheduler.schedule(settings.launch_start_delay_ms, Task::StartLaunches);

        log::info!("Show created: {}x{}, seed {}", width, height, seed);

        Ok(Self {
            width,
            height,
            seed,
            engine: EngineState::default(),
            outline: OutlineTrace::with_capacity(curve.len()),
            curve,
            projectiles: Vec::new(),
            particles: Vec::new(),
            emitters: Vec::new(),
            scheduler,
            clock_ms: 0.0,
            frame: 0,
            rng,
            launched: 0,
            settings,
        })
    }

    /// Resample the curve for a new surface size. Only allowed before the
    /// first launch; mid-run resizes are not supported.
    pub fn regenerate_curve(&mut self, width: f32, height: f32) -> Result<(), ShowError> {
        check_surface(width, height)?;
        if self.launched > 0 {
            return Err(ShowError::RunInProgress {
                launched: self.launched,
            });
        }

        self.width = width;
        self.height = height;
        self.curve = HeartCurve::generate(
            self.center(),
            self.settings.curve_scale,
            self.settings.curve_step,
            &mut self.rng,
        );
        Ok(())
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Projectiles leave from the bottom center
    pub fn launch_origin(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height)
    }

    /// Curve points targeted so far
    pub fn launched_count(&self) -> usize {
        self.launched
    }

    /// Whether the idle decoration phase has begun
    pub fn is_idle(&self) -> bool {
        self.engine.show_outline_decoration
    }

    /// Launch the next projectile. Returns false once every point was targeted.
    pub(crate) fn launch_next(&mut self) -> bool {
        let Some(target) = self.curve.point(self.launched) else {
            return false;
        };
        let projectile = Projectile::new(self.launch_origin(), target, self.settings.projectile_speed);
        self.projectiles.push(projectile);
        self.launched += 1;
        true
    }

    /// Flip into the idle phase and create the ambient emitters (once)
    pub(crate) fn begin_idle(&mut self) {
        if self.is_idle() {
            return;
        }
        self.engine.show_outline_decoration = true;
        self.engine.show_caption = true;

        let (w, h) = (self.width, self.height);
        let (min, max) = (self.settings.emitter_min_speed, self.settings.emitter_max_speed);
        for _ in 0..self.settings.emitter_count {
            self.emitters.push(AmbientEmitter::new(w, h, min, max, &mut self.rng));
        }
        log::info!(
            "Heart complete after {} launches; idle phase with {} emitters",
            self.launched,
            self.emitters.len()
        );
    }

    pub(crate) fn reset_emitter(&mut self, index: usize) {
        let (w, h) = (self.width, self.height);
        let (min, max) = (
            self.settings.emitter_min_speed,
            self.settings.emitter_max_reset_speed,
        );
        if let Some(emitter) = self.emitters.get_mut(index) {
            emitter.reset(w, h, min, max, &mut self.rng);
            log::debug!("Emitter {} reset at x={:.1}", index, emitter.pos.x);
        }
    }
}

fn check_surface(width: f32, height: f32) -> Result<(), ShowError> {
    if width > 0.0 && height > 0.0 {
        Ok(())
    } else {
        Err(ShowError::InvalidSurface { width, height })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_show_is_quiet() {
        let state = ShowState::new(200.0, 200.0, 1, Settings::default()).unwrap();
        assert_eq!(state.engine, EngineState::default());
        assert_eq!(state.curve.len(), 126);
        assert!(state.outline.is_empty());
        assert!(state.projectiles.is_empty());
        assert!(state.emitters.is_empty());
        assert!(state.scheduler.contains(Task::StartLaunches));
    }

    #[test]
    fn test_rejects_empty_surface() {
        let err = ShowState::new(0.0, 200.0, 1, Settings::default()).unwrap_err();
        assert!(matches!(
            err,
            ShowError::InvalidSurface {
                width: 0.0,
                height: 200.0
            }
        ));
    }

    #[test]
    fn test_rejects_unbounded_settings() {
        let settings = Settings {
            curve_step: 1e-9,
            ..Settings::default()
        };
        let err = ShowState::new(200.0, 200.0, 1, settings).unwrap_err();
        assert!(matches!(
            err,
            ShowError::Settings(SettingsError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_regenerate_before_launch() {
        let mut state = ShowState::new(200.0, 200.0, 1, Settings::default()).unwrap();
        state.regenerate_curve(400.0, 300.0).unwrap();
        assert_eq!(state.launch_origin(), Vec2::new(200.0, 300.0));
        assert_eq!(state.curve.len(), 126);
        // t = 0 point sits 5 curve units above center
        assert_eq!(state.curve.point(0), Some(Vec2::new(200.0, 150.0 - 100.0)));
    }

    #[test]
    fn test_regenerate_rejected_mid_run() {
        let mut state = ShowState::new(200.0, 200.0, 1, Settings::default()).unwrap();
        assert!(state.launch_next());
        assert!(matches!(
            state.regenerate_curve(300.0, 300.0),
            Err(ShowError::RunInProgress { launched: 1 })
        ));
    }

    #[test]
    fn test_launch_exhausts_curve() {
        let mut state = ShowState::new(200.0, 200.0, 1, Settings::default()).unwrap();
        while state.launch_next() {}
        assert_eq!(state.launched_count(), state.curve.len());
        assert_eq!(state.projectiles.len(), state.curve.len());
    }

    #[test]
    fn test_begin_idle_happens_once() {
        let mut state = ShowState::new(200.0, 200.0, 1, Settings::default()).unwrap();
        state.begin_idle();
        state.begin_idle();
        assert!(state.engine.show_outline_decoration);
        assert!(state.engine.show_caption);
        assert_eq!(state.emitters.len(), 10);
    }
}
