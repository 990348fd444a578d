//! Snapshot building: project the world into the serializable view sent to
//! the frontend each tick.

use hecs::World;

use nukefling_core::components::{
    Block, CircleCollider, Dead, Nuke, Obstacle, Opponent, Solid, Transform, Velocity,
};
use nukefling_core::events::AudioEvent;
use nukefling_core::state::{BlockView, GameStateSnapshot, HudView, NukeView, OpponentView};
use nukefling_core::types::SimTime;
use nukefling_levels::LevelProgress;

pub fn build(
    world: &World,
    time: SimTime,
    progress: &LevelProgress,
    audio_events: Vec<AudioEvent>,
) -> GameStateSnapshot {
    let mut nuke = None;
    for (_entity, (transform, velocity, state, _collider)) in world
        .query::<(&Transform, &Velocity, &Nuke, &CircleCollider)>()
        .iter()
    {
        nuke = Some(NukeView {
            x: transform.pos.x,
            y: transform.pos.y,
            rotation: transform.rotation,
            speed: velocity.0.length(),
            phase: state.phase,
        });
    }

    let opponents = world
        .query::<(&Transform, &Opponent)>()
        .without::<&Dead>()
        .iter()
        .map(|(_e, (t, _o))| OpponentView {
            x: t.pos.x,
            y: t.pos.y,
        })
        .collect();

    let blocks = world
        .query::<(&Transform, &Solid, &Block, Option<&Obstacle>)>()
        .without::<&Dead>()
        .iter()
        .map(|(_e, (t, s, b, obstacle))| BlockView {
            x: t.pos.x,
            y: t.pos.y,
            half_width: s.half_extents.x,
            half_height: s.half_extents.y,
            kind: b.kind,
            deadly: obstacle.is_some(),
        })
        .collect();

    GameStateSnapshot {
        time,
        level_state: progress.state(),
        hud: HudView {
            shots_used: progress.shots_used(),
            max_shots: progress.max_shots(),
            shots_remaining: progress.shots_remaining(),
            elapsed_secs: progress.elapsed_secs(),
        },
        nuke,
        opponents,
        blocks,
        audio_events,
        score: progress.score(),
    }
}
