//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{BlockKind, MoveAxis, NukePhase};

/// World-space placement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Transform {
    pub pos: Vec2,
    /// Facing in radians; launched nukes face along their velocity.
    pub rotation: f32,
}

impl Transform {
    pub fn at(pos: Vec2) -> Self {
        Self { pos, rotation: 0.0 }
    }
}

/// Linear velocity (world units / s).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Velocity(pub Vec2);

/// The player's projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Nuke {
    pub phase: NukePhase,
    /// Sling anchor the nuke is pulled back from and launched toward.
    pub anchor: Vec2,
    /// Accumulated seconds spent at or below the rest speed since launch.
    pub rest_secs: f32,
}

impl Nuke {
    pub fn held_at(anchor: Vec2) -> Self {
        Self {
            phase: NukePhase::Held,
            anchor,
            rest_secs: 0.0,
        }
    }
}

/// Circular collision footprint (nuke, opponents).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CircleCollider {
    pub radius: f32,
}

/// Axis-aligned rectangular collision footprint (blocks, platforms).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Solid {
    pub half_extents: Vec2,
}

/// Records which archetype a block was authored as, for snapshot views.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Block {
    pub kind: BlockKind,
}

/// Marks an entity as an opponent the player must remove.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Opponent;

/// Contact with this entity kills opponents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Obstacle;

/// Block that despawns on nuke contact.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Fragile;

/// Block that anchors the nuke on contact.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Sticky;

/// Kinematic ping-pong movement between `origin` and `origin + axis * travel`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Mover {
    pub axis: MoveAxis,
    pub travel: f32,
    pub speed: f32,
    pub origin: Vec2,
    pub toward_target: bool,
}

/// The nuke is glued to a sticky block; integration skips it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Stuck;

/// Marked for removal by the cleanup system at the end of the tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Dead;
