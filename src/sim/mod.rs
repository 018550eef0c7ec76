//! Frame-stepped simulation module
//!
//! All animation logic lives here:
//! - Fixed per-frame steps (speeds are units per frame)
//! - Seeded RNG only
//! - Timers as deferred tasks on the frame clock
//! - No rendering or platform dependencies

pub mod curve;
pub mod emitter;
pub mod outline;
pub mod particle;
pub mod projectile;
pub mod schedule;
pub mod state;
pub mod tick;

pub use curve::{HeartCurve, PulseState, heart_point};
pub use emitter::{AmbientEmitter, Rise};
pub use outline::OutlineTrace;
pub use particle::{Particle, spawn_burst};
pub use projectile::{Flight, Projectile};
pub use schedule::{Scheduler, Task};
pub use state::{EngineState, ShowError, ShowState};
pub use tick::{advance_pulses, begin_frame, tick, update_entities};
