//! Player commands fed to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// Player actions the simulation understands. Everything else (continue,
/// restart, menu navigation) is host-level and never reaches the engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Pull the held nuke toward a world position. The sling clamps the
    /// displacement to the maximum drag distance.
    DragTo { x: f32, y: f32 },
    /// Let go: launch with an impulse proportional to the drag displacement.
    Release,
}
