//! Sling input: dragging the held nuke and releasing it.

use glam::Vec2;
use hecs::{Entity, World};

use nukefling_core::components::{Nuke, Transform, Velocity};
use nukefling_core::constants::{LAUNCH_FORCE_SCALE, MAX_DRAG_DISTANCE};
use nukefling_core::enums::NukePhase;
use nukefling_core::events::AudioEvent;

/// Pull the held nuke toward `target`, clamping the displacement to the
/// maximum drag radius. The first pull raises the tension cue.
pub fn drag_to(world: &mut World, nuke: Entity, target: Vec2) -> Option<AudioEvent> {
    let Ok((transform, state)) = world.query_one_mut::<(&mut Transform, &mut Nuke)>(nuke) else {
        return None;
    };
    if !matches!(state.phase, NukePhase::Held | NukePhase::Dragging) {
        return None;
    }

    let offset = target - state.anchor;
    let clamped = if offset.length() > MAX_DRAG_DISTANCE {
        offset.normalize() * MAX_DRAG_DISTANCE
    } else {
        offset
    };
    transform.pos = state.anchor + clamped;

    if state.phase == NukePhase::Held {
        state.phase = NukePhase::Dragging;
        return Some(AudioEvent::SlingTension);
    }
    None
}

/// Let go: launch speed is proportional to how far back the nuke was
/// pulled, aimed back through the anchor. Gravity takes over from here.
pub fn release(world: &mut World, nuke: Entity) -> Option<AudioEvent> {
    let Ok((transform, velocity, state)) =
        world.query_one_mut::<(&Transform, &mut Velocity, &mut Nuke)>(nuke)
    else {
        return None;
    };
    if state.phase != NukePhase::Dragging {
        return None;
    }

    let pull = state.anchor - transform.pos;
    velocity.0 = pull * LAUNCH_FORCE_SCALE;
    state.phase = NukePhase::InFlight;
    Some(AudioEvent::NukeLaunch)
}
