//! Deferred tasks keyed to the frame clock
//!
//! Stands in for `setTimeout`/`setInterval`: tasks are queued with a due
//! time and applied at the start of the next frame whose clock has reached
//! it, so they never interleave with an entity update pass.

/// Work the timeline can defer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Begin the launch cadence
    StartLaunches,
    /// Launch toward curve point `index` (past the end: sequence finished)
    Launch(usize),
    /// Enter the idle decoration phase
    BeginIdle,
    /// Put ambient emitter `index` back at the bottom
    ResetEmitter(usize),
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    due_ms: f64,
    seq: u64,
    task: Task,
}

/// Pending tasks ordered by (due time, insertion order)
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    pending: Vec<Pending>,
    next_seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `task` to run once the clock reaches `due_ms`
    pub fn schedule(&mut self, due_ms: f64, task: Task) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Pending { due_ms, seq, task });
    }

    /// Remove and return the earliest task due at `now_ms`, with its due time
    pub fn pop_due(&mut self, now_ms: f64) -> Option<(f64, Task)> {
        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due_ms <= now_ms)
            .min_by(|(_, a), (_, b)| {
                a.due_ms
                    .partial_cmp(&b.due_ms)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then(a.seq.cmp(&b.seq))
            })
            .map(|(i, _)| i)?;

        let pending = self.pending.swap_remove(idx);
        Some((pending.due_ms, pending.task))
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Whether any pending task matches
    pub fn contains(&self, task: Task) -> bool {
        self.pending.iter().any(|p| p.task == task)
    }
}
