//! Kinematic mover blocks: ping-pong travel between the spawn point and
//! `origin + axis * travel`, immune to impacts.

use glam::Vec2;
use hecs::{Entity, World};

use nukefling_core::components::{Mover, Transform};
use nukefling_core::enums::MoveAxis;

const ARRIVAL_EPSILON: f32 = 0.01;

pub fn run(world: &mut World, dt: f32) {
    for (_entity, (transform, mover)) in world.query_mut::<(&mut Transform, &mut Mover)>() {
        let dir = match mover.axis {
            MoveAxis::Horizontal => Vec2::X,
            MoveAxis::Vertical => Vec2::Y,
        };
        let target = if mover.toward_target {
            mover.origin + dir * mover.travel
        } else {
            mover.origin
        };

        transform.pos = move_towards(transform.pos, target, mover.speed * dt);
        if transform.pos.distance(target) < ARRIVAL_EPSILON {
            mover.toward_target = !mover.toward_target;
        }
    }
}

/// Keep a stuck nuke glued to its anchor block as the block moves.
pub fn carry_stuck(world: &mut World, stuck_to: Option<(Entity, Vec2)>, nuke: Entity) {
    let Some((block, offset)) = stuck_to else {
        return;
    };
    let block_pos = {
        let Ok(transform) = world.get::<&Transform>(block) else {
            return;
        };
        transform.pos
    };
    if let Ok(transform) = world.query_one_mut::<&mut Transform>(nuke) {
        transform.pos = block_pos + offset;
    }
}

fn move_towards(from: Vec2, to: Vec2, max_step: f32) -> Vec2 {
    let delta = to - from;
    let dist = delta.length();
    if dist <= max_step || dist < 1e-6 {
        to
    } else {
        from + delta / dist * max_step
    }
}
