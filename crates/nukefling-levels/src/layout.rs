//! Authored level layouts: where the sling, the opponents, and the blocks
//! sit when a level is (re)loaded.

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use nukefling_core::enums::{BlockKind, MoveAxis};

/// Movement parameters for a `BlockKind::Mover` block.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MoverParams {
    pub axis: MoveAxis,
    pub travel: f32,
    pub speed: f32,
}

/// One block in a layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockSpawn {
    pub kind: BlockKind,
    pub pos: Vec2,
    pub half_extents: Vec2,
    /// Contact with this block kills opponents.
    #[serde(default)]
    pub deadly: bool,
    #[serde(default)]
    pub mover: Option<MoverParams>,
}

impl BlockSpawn {
    pub fn platform(pos: Vec2, half_extents: Vec2) -> Self {
        Self {
            kind: BlockKind::Platform,
            pos,
            half_extents,
            deadly: false,
            mover: None,
        }
    }

    pub fn fragile(pos: Vec2, half_extents: Vec2) -> Self {
        Self {
            kind: BlockKind::Fragile,
            pos,
            half_extents,
            deadly: false,
            mover: None,
        }
    }

    pub fn sticky(pos: Vec2, half_extents: Vec2) -> Self {
        Self {
            kind: BlockKind::Sticky,
            pos,
            half_extents,
            deadly: false,
            mover: None,
        }
    }

    pub fn mover(pos: Vec2, half_extents: Vec2, params: MoverParams, deadly: bool) -> Self {
        Self {
            kind: BlockKind::Mover,
            pos,
            half_extents,
            deadly,
            mover: Some(params),
        }
    }
}

/// Spawn table for one level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelLayout {
    pub name: String,
    pub sling_anchor: Vec2,
    pub opponents: Vec<Vec2>,
    pub blocks: Vec<BlockSpawn>,
}

impl LevelLayout {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse level layout: {e}"))
    }

    pub fn load_from_file(path: &Path) -> Result<Self, String> {
        let json = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read level layout file: {e}"))?;
        Self::from_json(&json)
    }
}

/// The shipped layouts. Ground sits at y = -11; opponent camps huddle on
/// the right side of the world, the sling on the left. A reload respawns
/// the whole level, so every camp is packed tight enough for one good
/// shot to sweep it.
pub fn builtin_layouts() -> Vec<LevelLayout> {
    let ground = BlockSpawn::platform(Vec2::new(-5.0, -12.0), Vec2::new(25.0, 1.0));

    vec![
        LevelLayout {
            name: "Level1".to_string(),
            sling_anchor: Vec2::new(-20.0, -6.0),
            opponents: vec![Vec2::new(8.0, -10.4), Vec2::new(8.8, -10.4)],
            blocks: vec![
                ground.clone(),
                BlockSpawn::fragile(Vec2::new(10.0, -9.5), Vec2::new(0.4, 1.5)),
            ],
        },
        LevelLayout {
            name: "Level2".to_string(),
            sling_anchor: Vec2::new(-20.0, -6.0),
            opponents: vec![Vec2::new(10.0, -10.4), Vec2::new(10.6, -10.4)],
            blocks: vec![
                ground.clone(),
                BlockSpawn::sticky(Vec2::new(5.0, -10.2), Vec2::new(1.0, 0.8)),
                BlockSpawn::fragile(Vec2::new(12.0, -9.8), Vec2::new(0.4, 1.2)),
            ],
        },
        LevelLayout {
            name: "Level3".to_string(),
            sling_anchor: Vec2::new(-20.0, -6.0),
            opponents: vec![
                Vec2::new(12.0, -10.4),
                Vec2::new(12.6, -10.4),
                Vec2::new(13.2, -10.4),
            ],
            blocks: vec![
                ground,
                BlockSpawn::mover(
                    Vec2::new(8.0, -7.0),
                    Vec2::new(1.5, 0.5),
                    MoverParams {
                        axis: MoveAxis::Vertical,
                        travel: 4.0,
                        speed: 2.0,
                    },
                    true,
                ),
            ],
        },
    ]
}

/// Look up a shipped layout by scene name.
pub fn builtin(name: &str) -> Option<LevelLayout> {
    builtin_layouts().into_iter().find(|l| l.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_layouts_cover_the_default_sequence() {
        for level in &crate::sequence::default_sequence().levels {
            let layout = builtin(&level.name).expect("missing builtin layout");
            assert!(!layout.opponents.is_empty());
            assert!(!layout.blocks.is_empty());
        }
    }

    #[test]
    fn mover_blocks_carry_their_params() {
        let layout = builtin("Level3").unwrap();
        let mover = layout
            .blocks
            .iter()
            .find(|b| b.kind == BlockKind::Mover)
            .unwrap();
        assert!(mover.deadly);
        assert!(mover.mover.is_some());
    }

    #[test]
    fn layout_roundtrips_through_json() {
        let layout = builtin("Level2").unwrap();
        let json = serde_json::to_string(&layout).unwrap();
        let back = LevelLayout::from_json(&json).unwrap();
        assert_eq!(back.name, "Level2");
        assert_eq!(back.opponents.len(), layout.opponents.len());
        assert_eq!(back.blocks.len(), layout.blocks.len());
    }

    #[test]
    fn malformed_layout_reports_an_error() {
        let err = LevelLayout::from_json("{not json").unwrap_err();
        assert!(err.contains("parse"));
    }
}
