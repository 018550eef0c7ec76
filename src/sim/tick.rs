//! Per-frame simulation step
//!
//! A frame runs in three phases so drawing can sit between them:
//! 1. `begin_frame`: advance the clock and apply every due deferred task
//! 2. `update_entities`: projectiles (arrival bursts join the particle
//!    pass), particles, emitters, then the caption fade
//! 3. `advance_pulses`: step the pulse rings once they have been drawn
//!
//! `tick` runs all three back to back for headless stepping.

use glam::Vec2;

use super::emitter::Rise;
use super::particle::spawn_burst;
use super::projectile::Flight;
use super::schedule::Task;
use super::state::ShowState;
use crate::consts::*;

/// Advance the show to `now_ms` by one frame
pub fn tick(state: &mut ShowState, now_ms: f64) {
    begin_frame(state, now_ms);
    update_entities(state);
    advance_pulses(state);
}

/// Move the clock to `now_ms` and apply due tasks
pub fn begin_frame(state: &mut ShowState, now_ms: f64) {
    state.clock_ms = state.clock_ms.max(now_ms);
    state.frame += 1;

    run_due_tasks(state);
}

/// Update every live entity in draw order, compacting out the dead ones
pub fn update_entities(state: &mut ShowState) {
    let burst_size = state.settings.burst_size;

    // Projectiles: arrivals trace the outline and burst before particles move
    let mut arrivals: Vec<Vec2> = Vec::new();
    let outline = &mut state.outline;
    state.projectiles.retain_mut(|projectile| match projectile.update() {
        Flight::Traveling => true,
        Flight::Arrived(target) => {
            outline.append(target);
            arrivals.push(target);
            false
        }
    });
    for at in arrivals {
        spawn_burst(&mut state.particles, at, burst_size, &mut state.rng);
    }

    state.particles.retain_mut(|particle| particle.update());

    // Emitters are reset in place after a delay, never removed.
    // Their bursts come after the particle pass and first move next frame.
    let reset_delay = state.settings.emitter_reset_delay_ms;
    let mut explosions: Vec<Vec2> = Vec::new();
    for (index, emitter) in state.emitters.iter_mut().enumerate() {
        if let Rise::Burst(at) = emitter.update() {
            explosions.push(at);
            state
                .scheduler
                .schedule(state.clock_ms + reset_delay, Task::ResetEmitter(index));
        }
    }
    for at in explosions {
        spawn_burst(&mut state.particles, at, burst_size, &mut state.rng);
    }

    if state.engine.show_caption {
        state.engine.caption_alpha = (state.engine.caption_alpha + CAPTION_FADE_STEP).min(1.0);
    }
}

/// Step every decorated pulse ring (idle phase only)
pub fn advance_pulses(state: &mut ShowState) {
    if state.engine.show_outline_decoration {
        state.curve.step_pulses();
    }
}

/// Drain the timeline. Follow-up tasks are timed from their parent's due
/// time, so a late frame catches up without drifting the cadence.
fn run_due_tasks(state: &mut ShowState) {
    while let Some((due_ms, task)) = state.scheduler.pop_due(state.clock_ms) {
        match task {
            Task::StartLaunches => {
                log::info!("Launching toward {} heart points", state.curve.len());
                state
                    .scheduler
                    .schedule(due_ms + state.settings.launch_interval_ms, Task::Launch(0));
            }
            Task::Launch(index) => {
                if state.launch_next() {
                    debug_assert_eq!(state.launched_count(), index + 1);
                    state.scheduler.schedule(
                        due_ms + state.settings.launch_interval_ms,
                        Task::Launch(index + 1),
                    );
                } else {
                    state
                        .scheduler
                        .schedule(due_ms + state.settings.idle_delay_ms, Task::BeginIdle);
                }
            }
            Task::BeginIdle => state.begin_idle(),
            Task::ResetEmitter(index) => state.reset_emitter(index),
        }
    }
}
