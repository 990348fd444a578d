//! Entity spawn factories for setting up a level world.

use glam::Vec2;
use hecs::World;

use nukefling_core::components::*;
use nukefling_core::constants::{NUKE_RADIUS, OPPONENT_RADIUS};
use nukefling_core::enums::BlockKind;
use nukefling_levels::layout::{BlockSpawn, LevelLayout};

/// Spawn everything a layout describes and return the nuke entity.
pub fn spawn_level(world: &mut World, layout: &LevelLayout) -> hecs::Entity {
    for pos in &layout.opponents {
        spawn_opponent(world, *pos);
    }
    for block in &layout.blocks {
        spawn_block(world, block);
    }
    spawn_nuke(world, layout.sling_anchor)
}

/// Spawn the player's nuke held at the sling anchor.
pub fn spawn_nuke(world: &mut World, anchor: Vec2) -> hecs::Entity {
    world.spawn((
        Transform::at(anchor),
        Velocity::default(),
        Nuke::held_at(anchor),
        CircleCollider {
            radius: NUKE_RADIUS,
        },
    ))
}

pub fn spawn_opponent(world: &mut World, pos: Vec2) -> hecs::Entity {
    world.spawn((
        Transform::at(pos),
        Opponent,
        CircleCollider {
            radius: OPPONENT_RADIUS,
        },
    ))
}

/// Spawn a block. The archetype markers drive the contact systems; the
/// `Block` component records the authored kind for snapshots.
pub fn spawn_block(world: &mut World, spawn: &BlockSpawn) -> hecs::Entity {
    let entity = world.spawn((
        Transform::at(spawn.pos),
        Solid {
            half_extents: spawn.half_extents,
        },
        Block { kind: spawn.kind },
    ));

    match spawn.kind {
        BlockKind::Platform => {}
        BlockKind::Fragile => {
            let _ = world.insert_one(entity, Fragile);
        }
        BlockKind::Sticky => {
            let _ = world.insert_one(entity, Sticky);
        }
        BlockKind::Mover => {
            let params = spawn.mover.unwrap_or(nukefling_levels::layout::MoverParams {
                axis: Default::default(),
                travel: 0.0,
                speed: 0.0,
            });
            let _ = world.insert_one(
                entity,
                Mover {
                    axis: params.axis,
                    travel: params.travel,
                    speed: params.speed,
                    origin: spawn.pos,
                    toward_target: true,
                },
            );
        }
    }

    if spawn.deadly {
        let _ = world.insert_one(entity, Obstacle);
    }

    entity
}
