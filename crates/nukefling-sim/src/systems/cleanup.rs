//! Cleanup system: removes dead entities and opponents that left the world.

use hecs::{Entity, World};

use nukefling_core::components::{Dead, Opponent, Transform};
use nukefling_core::constants::{WORLD_MAX_X, WORLD_MIN_X, WORLD_MIN_Y};

/// Despawn everything marked `Dead`, plus opponents that fell or were
/// pushed out of the world. Uses a pre-allocated buffer to avoid per-tick
/// allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, _dead) in world.query_mut::<&Dead>() {
        despawn_buffer.push(entity);
    }

    for (entity, (transform, _opponent)) in world.query_mut::<(&Transform, &Opponent)>() {
        let pos = transform.pos;
        if pos.y <= WORLD_MIN_Y || pos.x <= WORLD_MIN_X || pos.x >= WORLD_MAX_X {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
