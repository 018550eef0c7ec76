//! Show settings
//!
//! Every tunable of the animation, with defaults matching the built-in show.
//! On the web the canvas may carry a `data-settings` JSON attribute.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Rejected settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{field} is {value}, above the limit of {max}")]
    TooLarge {
        field: &'static str,
        value: usize,
        max: usize,
    },
    #[error("{field} range is empty ({min} >= {max})")]
    EmptyRange {
        field: &'static str,
        min: f32,
        max: f32,
    },
}

/// Show settings/tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed; `None` lets the platform pick one (wall clock)
    pub seed: Option<u64>,

    // === Curve ===
    /// Surface units per curve unit
    pub curve_scale: f32,
    /// Angular sampling step (radians)
    pub curve_step: f32,

    // === Entities ===
    pub burst_size: usize,
    pub projectile_speed: f32,
    pub emitter_count: usize,
    pub emitter_min_speed: f32,
    pub emitter_max_speed: f32,
    pub emitter_max_reset_speed: f32,

    // === Timeline (milliseconds) ===
    pub launch_start_delay_ms: f64,
    pub launch_interval_ms: f64,
    pub idle_delay_ms: f64,
    pub emitter_reset_delay_ms: f64,

    // === Caption ===
    pub caption_title: String,
    pub caption_subtitle: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,

            curve_scale: CURVE_SCALE,
            curve_step: CURVE_STEP,

            burst_size: BURST_SIZE,
            projectile_speed: PROJECTILE_SPEED,
            emitter_count: EMITTER_COUNT,
            emitter_min_speed: EMITTER_MIN_SPEED,
            emitter_max_speed: EMITTER_MAX_SPEED,
            emitter_max_reset_speed: EMITTER_MAX_RESET_SPEED,

            launch_start_delay_ms: LAUNCH_START_DELAY_MS,
            launch_interval_ms: LAUNCH_INTERVAL_MS,
            idle_delay_ms: IDLE_DELAY_MS,
            emitter_reset_delay_ms: EMITTER_RESET_DELAY_MS,

            caption_title: "Bonne Anniversaire".to_string(),
            caption_subtitle: "Je t’aime mon ti cœur".to_string(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON (missing fields take defaults) and validate them
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Parse settings, falling back to defaults on any error
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => {
                log::info!("Loaded settings");
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings: {}", e);
                Self::default()
            }
        }
    }

    /// Check that every value produces a well-formed show
    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = [
            ("curve_scale", self.curve_scale as f64),
            ("curve_step", self.curve_step as f64),
            ("projectile_speed", self.projectile_speed as f64),
            ("launch_interval_ms", self.launch_interval_ms),
            ("emitter_reset_delay_ms", self.emitter_reset_delay_ms),
        ];
        for (field, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(SettingsError::NotPositive { field, value });
            }
        }

        let non_negative = [
            ("launch_start_delay_ms", self.launch_start_delay_ms),
            ("idle_delay_ms", self.idle_delay_ms),
        ];
        for (field, value) in non_negative {
            if value.is_nan() || value < 0.0 {
                return Err(SettingsError::NotPositive { field, value });
            }
        }

        if self.burst_size == 0 {
            return Err(SettingsError::NotPositive {
                field: "burst_size",
                value: 0.0,
            });
        }

        let capped = [
            ("curve_points", self.curve_points(), MAX_CURVE_POINTS),
            ("burst_size", self.burst_size, MAX_BURST_SIZE),
            ("emitter_count", self.emitter_count, MAX_EMITTER_COUNT),
        ];
        for (field, value, max) in capped {
            if value > max {
                return Err(SettingsError::TooLarge { field, value, max });
            }
        }

        if self.emitter_min_speed >= self.emitter_max_speed {
            return Err(SettingsError::EmptyRange {
                field: "emitter_speed",
                min: self.emitter_min_speed,
                max: self.emitter_max_speed,
            });
        }
        if self.emitter_min_speed >= self.emitter_max_reset_speed {
            return Err(SettingsError::EmptyRange {
                field: "emitter_reset_speed",
                min: self.emitter_min_speed,
                max: self.emitter_max_reset_speed,
            });
        }

        Ok(())
    }

    /// Number of curve points this configuration samples
    pub fn curve_points(&self) -> usize {
        crate::curve_sample_count(self.curve_step)
    }
}
