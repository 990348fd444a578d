//! Game state snapshot: the complete visible state produced each tick for
//! whatever frontend is attached.

use serde::{Deserialize, Serialize};

use crate::enums::{BlockKind, LevelState, NukePhase};
use crate::events::AudioEvent;
use crate::types::SimTime;

/// Score for a completed level. Immutable once computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub final_score: u32,
    pub time_multiplier: f32,
    pub shot_multiplier: f32,
    pub shots_used: u32,
    pub elapsed_secs: f32,
}

/// HUD counters.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct HudView {
    pub shots_used: u32,
    pub max_shots: u32,
    pub shots_remaining: u32,
    pub elapsed_secs: f32,
}

/// The projectile as the frontend sees it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NukeView {
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
    pub speed: f32,
    pub phase: NukePhase,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OpponentView {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BlockView {
    pub x: f32,
    pub y: f32,
    pub half_width: f32,
    pub half_height: f32,
    pub kind: BlockKind,
    /// Contact with this block kills opponents.
    pub deadly: bool,
}

/// Complete visible state after one tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub level_state: LevelState,
    pub hud: HudView,
    pub nuke: Option<NukeView>,
    pub opponents: Vec<OpponentView>,
    pub blocks: Vec<BlockView>,
    /// Audio cues raised this tick, drained into the snapshot.
    pub audio_events: Vec<AudioEvent>,
    /// Present once the level has been completed.
    pub score: Option<ScoreResult>,
}
