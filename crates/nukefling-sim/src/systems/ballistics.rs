//! Gravity and kinematic integration for the launched nuke.

use hecs::World;

use nukefling_core::components::{Nuke, Stuck, Transform, Velocity};
use nukefling_core::constants::GRAVITY;
use nukefling_core::enums::NukePhase;

/// Integrate the launched nuke: semi-implicit Euler under gravity.
/// Held, spent, and stuck nukes are left alone.
pub fn run(world: &mut World, dt: f32) {
    for (_entity, (transform, velocity, state, stuck)) in
        world.query_mut::<(&mut Transform, &mut Velocity, &Nuke, Option<&Stuck>)>()
    {
        if state.phase != NukePhase::InFlight || stuck.is_some() {
            continue;
        }
        velocity.0.y -= GRAVITY * dt;
        transform.pos += velocity.0 * dt;
        if velocity.0.length_squared() > 1e-6 {
            transform.rotation = velocity.0.y.atan2(velocity.0.x);
        }
    }
}
