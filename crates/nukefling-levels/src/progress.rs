//! Per-level progress tracking: shot budget, level timer, time-sliced
//! liveness polling, and completion scoring.
//!
//! One instance per play session, owned by whoever owns the frame tick.
//! Every transition is guarded by the state machine, so duplicate
//! completion or game-over triggers collapse into no-ops.

use nukefling_core::constants::{
    LIVENESS_POLL_INTERVAL_SECS, MIN_SCORING_SECS, SHOT_BONUS_STEP, TIME_BONUS_NUMERATOR,
};
use nukefling_core::enums::LevelState;
use nukefling_core::events::ProgressEvent;
use nukefling_core::state::ScoreResult;

/// Compute the score for a completed level.
///
/// `time_multiplier = max(1, 100 / elapsed)`, `shot_multiplier = 1 + 0.5 ×
/// shots_left`. Elapsed time is floored at `MIN_SCORING_SECS` so an
/// instant finish yields a very large multiplier, never a division by zero.
pub fn compute_score(
    base_score: u32,
    max_shots: u32,
    shots_used: u32,
    elapsed_secs: f32,
) -> ScoreResult {
    let clamped_secs = elapsed_secs.max(MIN_SCORING_SECS);
    let time_multiplier = (TIME_BONUS_NUMERATOR / clamped_secs).max(1.0);
    let shots_left = max_shots.saturating_sub(shots_used);
    let shot_multiplier = 1.0 + SHOT_BONUS_STEP * shots_left as f32;
    let final_score = (base_score as f32 * time_multiplier * shot_multiplier).round() as u32;
    ScoreResult {
        final_score,
        time_multiplier,
        shot_multiplier,
        shots_used,
        elapsed_secs,
    }
}

/// The level-completion state machine.
///
/// Owns the shot and time counters for the active level, polls the supplied
/// liveness probe at a fixed cadence, and emits [`ProgressEvent`]s into an
/// internal buffer that the owner drains each frame.
#[derive(Debug)]
pub struct LevelProgress {
    shots_used: u32,
    max_shots: u32,
    elapsed_secs: f32,
    base_score: u32,
    state: LevelState,
    poll_accum_secs: f32,
    score: Option<ScoreResult>,
    events: Vec<ProgressEvent>,
}

impl LevelProgress {
    pub fn new(max_shots: u32, base_score: u32) -> Self {
        Self {
            shots_used: 0,
            max_shots,
            elapsed_secs: 0.0,
            base_score,
            state: LevelState::Running,
            poll_accum_secs: 0.0,
            score: None,
            events: Vec::new(),
        }
    }

    /// Continue a session whose shot count was persisted across a restart.
    pub fn resume(max_shots: u32, base_score: u32, shots_used: u32) -> Self {
        let mut progress = Self::new(max_shots, base_score);
        progress.shots_used = shots_used.min(max_shots);
        progress
    }

    pub fn state(&self) -> LevelState {
        self.state
    }

    pub fn shots_used(&self) -> u32 {
        self.shots_used
    }

    pub fn max_shots(&self) -> u32 {
        self.max_shots
    }

    pub fn shots_remaining(&self) -> u32 {
        self.max_shots.saturating_sub(self.shots_used)
    }

    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed_secs
    }

    /// The final score, present once the level has completed.
    pub fn score(&self) -> Option<ScoreResult> {
        self.score
    }

    /// Consume one shot from the budget. No-op outside `Running`.
    /// Exhausting the budget transitions to `GameOver` exactly once.
    pub fn record_shot(&mut self) {
        if self.state != LevelState::Running {
            return;
        }
        self.shots_used += 1;
        self.events.push(ProgressEvent::ShotRecorded {
            used: self.shots_used,
            max: self.max_shots,
        });
        if self.shots_used >= self.max_shots {
            self.state = LevelState::GameOver;
            self.events.push(ProgressEvent::BudgetExhausted {
                used: self.shots_used,
            });
        }
    }

    /// Advance the level timer and, at the poll cadence, ask the supplied
    /// probe how many opponents remain. The probe is the scan-all-opponents
    /// query, so it runs every `LIVENESS_POLL_INTERVAL_SECS` of accumulated
    /// frame time rather than every tick.
    pub fn tick(&mut self, dt: f32, liveness: impl FnOnce() -> usize) {
        if self.state != LevelState::Running {
            return;
        }
        self.elapsed_secs += dt;
        self.poll_accum_secs += dt;
        if self.poll_accum_secs >= LIVENESS_POLL_INTERVAL_SECS {
            self.poll_accum_secs = 0.0;
            let remaining = liveness();
            self.on_liveness_check(remaining as u32);
        }
    }

    /// Result of a liveness poll. Zero remaining opponents completes the
    /// level: the score is computed once and `LevelComplete` is emitted.
    /// Any later call is a state-guarded no-op.
    pub fn on_liveness_check(&mut self, remaining: u32) {
        if self.state != LevelState::Running || remaining > 0 {
            return;
        }
        let score = compute_score(
            self.base_score,
            self.max_shots,
            self.shots_used,
            self.elapsed_secs,
        );
        self.score = Some(score);
        self.state = LevelState::AwaitingCompletion;
        self.events.push(ProgressEvent::LevelComplete { score });
    }

    /// Host acknowledgement of the completion screen (the continue input).
    pub fn confirm_advance(&mut self) {
        if self.state == LevelState::AwaitingCompletion {
            self.state = LevelState::Completed;
        }
    }

    /// Start a fresh attempt. The shot budget always resets; the timer
    /// resets only when entering a genuinely new level, never on a
    /// same-level reload.
    pub fn reset(&mut self, is_new_level: bool) {
        self.shots_used = 0;
        if is_new_level {
            self.elapsed_secs = 0.0;
        }
        self.state = LevelState::Running;
        self.poll_accum_secs = 0.0;
        self.score = None;
        self.events.clear();
    }

    /// Take the events raised since the last drain.
    pub fn drain_events(&mut self) -> Vec<ProgressEvent> {
        std::mem::take(&mut self.events)
    }
}
