//! Spent-shot detection: decide when a launched nuke's flight is over.

use hecs::{Entity, World};

use nukefling_core::components::{Nuke, Transform, Velocity};
use nukefling_core::constants::{
    REST_SPEED, SPENT_REST_SECS, WORLD_MAX_X, WORLD_MAX_Y, WORLD_MIN_X, WORLD_MIN_Y,
};
use nukefling_core::enums::{NukePhase, SpentReason};

/// A launched nuke is spent when it leaves the playable bounds, or once it
/// has accumulated enough time at or below the rest speed. The rest clock
/// never rewinds within one flight: brief jolts do not buy the shot more
/// time.
pub fn run(world: &mut World, nuke: Entity, dt: f32) -> Option<SpentReason> {
    let Ok((transform, velocity, state)) =
        world.query_one_mut::<(&Transform, &Velocity, &mut Nuke)>(nuke)
    else {
        return None;
    };
    if state.phase != NukePhase::InFlight {
        return None;
    }

    let pos = transform.pos;
    if pos.x <= WORLD_MIN_X || pos.x >= WORLD_MAX_X || pos.y <= WORLD_MIN_Y || pos.y >= WORLD_MAX_Y
    {
        state.phase = NukePhase::Spent;
        return Some(SpentReason::OutOfBounds);
    }

    if velocity.0.length() <= REST_SPEED {
        state.rest_secs += dt;
        if state.rest_secs >= SPENT_REST_SECS {
            state.phase = NukePhase::Spent;
            return Some(SpentReason::CameToRest);
        }
    }

    None
}
