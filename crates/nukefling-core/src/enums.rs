//! Enumeration types used throughout the game.

use serde::{Deserialize, Serialize};

/// Top-level host phase, owned by the director.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Playing,
    GameOver,
}

/// Level-completion state machine.
///
/// Transitions are one-way within a level: `Running` is re-entered only via
/// `LevelProgress::reset`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelState {
    /// Shots and the timer are live; the liveness poll is active.
    #[default]
    Running,
    /// All opponents removed; score computed, waiting for the continue input.
    AwaitingCompletion,
    /// Continue acknowledged; the host is free to load the next level.
    Completed,
    /// Shot budget exhausted.
    GameOver,
}

/// Lifecycle of the player's projectile within one shot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NukePhase {
    /// Sitting on the sling, not yet touched.
    #[default]
    Held,
    /// Being pulled back by the player.
    Dragging,
    /// Launched, under gravity.
    InFlight,
    /// Shot resolved (out of bounds or at rest); frozen until reload.
    Spent,
}

/// Travel axis for mover blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveAxis {
    #[default]
    Horizontal,
    Vertical,
}

/// Block archetype, as authored in level layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockKind {
    /// Static solid surface.
    Platform,
    /// Despawns on nuke contact.
    Fragile,
    /// Anchors the nuke on contact.
    Sticky,
    /// Kinematic ping-pong block, immune to impacts.
    Mover,
}

/// Why a launched nuke stopped counting as "in play".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpentReason {
    /// Left the playable bounds.
    OutOfBounds,
    /// Spent long enough at or below the rest speed.
    CameToRest,
}
