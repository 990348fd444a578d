//! Events emitted by the simulation and the progress tracker.
//!
//! Both buffers are drained by their owner each frame; nothing subscribes.

use serde::{Deserialize, Serialize};

use crate::enums::SpentReason;
use crate::state::ScoreResult;

/// Audio cues for the host sound system. The host maps each cue to an
/// effect index before handing it to the audio sink.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// Player started pulling the sling.
    SlingTension,
    /// Nuke released.
    NukeLaunch,
    /// An opponent was removed.
    OpponentDeath { x: f32, y: f32 },
    /// A fragile block shattered.
    BlockBreak { x: f32, y: f32 },
}

/// Events emitted by the level progress tracker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ProgressEvent {
    /// A shot was consumed from the budget.
    ShotRecorded { used: u32, max: u32 },
    /// All opponents removed; the score is final.
    LevelComplete { score: ScoreResult },
    /// The shot budget ran out.
    BudgetExhausted { used: u32 },
}

/// Discrete events drained from the engine each tick, alongside the snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// The launched nuke finished its flight; the host reloads the level.
    NukeSpent { reason: SpentReason },
    OpponentKilled { x: f32, y: f32 },
    BlockBroken { x: f32, y: f32 },
    Progress { event: ProgressEvent },
}
