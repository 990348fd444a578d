//! Contact resolution for one tick: the nuke against opponents and blocks,
//! and opponents against deadly obstacles.
//!
//! Outcomes are returned to the engine rather than applied here, so the
//! engine stays the single place that marks entities dead and raises
//! events. Only the surface bounce mutates the world directly.

use glam::Vec2;
use hecs::{Entity, World};

use nukefling_core::components::{
    CircleCollider, Dead, Fragile, Nuke, Obstacle, Opponent, Solid, Sticky, Stuck, Transform,
    Velocity,
};
use nukefling_core::constants::{SURFACE_FRICTION, SURFACE_RESTITUTION};
use nukefling_core::enums::NukePhase;

/// What the contact pass found this tick.
#[derive(Debug, Default)]
pub struct ContactOutcome {
    /// Opponents hit by the nuke or a deadly obstacle, with their position.
    pub killed_opponents: Vec<(Entity, Vec2)>,
    /// Fragile blocks the nuke shattered, with their position.
    pub broken_blocks: Vec<(Entity, Vec2)>,
    /// Sticky block the nuke latched onto, with the nuke's offset from it.
    pub stuck: Option<(Entity, Vec2)>,
}

pub fn run(world: &mut World, nuke: Entity) -> ContactOutcome {
    let mut outcome = ContactOutcome::default();

    kill_opponents_on_obstacles(world, &mut outcome);

    // The nuke only interacts while flying free.
    let Some((nuke_pos, nuke_radius)) = flying_nuke(world, nuke) else {
        return outcome;
    };

    // Nuke vs opponents (circle-circle). Opponent-opponent contacts are
    // ignored by construction: only the nuke is tested here.
    for (entity, (transform, collider, _opponent)) in world
        .query::<(&Transform, &CircleCollider, &Opponent)>()
        .without::<&Dead>()
        .iter()
    {
        let reach = collider.radius + nuke_radius;
        if transform.pos.distance_squared(nuke_pos) < reach * reach {
            outcome.killed_opponents.push((entity, transform.pos));
        }
    }

    // Nuke vs blocks (circle-rect). Fragile shatters, sticky anchors,
    // anything else bounces.
    let mut bounce: Option<(Vec2, f32)> = None;
    for (entity, (transform, solid, fragile, sticky)) in world
        .query::<(&Transform, &Solid, Option<&Fragile>, Option<&Sticky>)>()
        .without::<&Dead>()
        .iter()
    {
        let Some((normal, penetration)) =
            circle_rect_overlap(nuke_pos, nuke_radius, transform.pos, solid.half_extents)
        else {
            continue;
        };

        if fragile.is_some() {
            outcome.broken_blocks.push((entity, transform.pos));
        } else if sticky.is_some() {
            outcome.stuck = Some((entity, nuke_pos - transform.pos));
        } else if bounce.is_none_or(|(_, p)| penetration > p) {
            bounce = Some((normal, penetration));
        }
    }

    if outcome.stuck.is_none() {
        if let Some((normal, penetration)) = bounce {
            apply_bounce(world, nuke, normal, penetration);
        }
    }

    outcome
}

/// Opponents die on contact with anything marked as an obstacle.
fn kill_opponents_on_obstacles(world: &World, outcome: &mut ContactOutcome) {
    let obstacles: Vec<(Vec2, Vec2)> = world
        .query::<(&Transform, &Solid, &Obstacle)>()
        .without::<&Dead>()
        .iter()
        .map(|(_e, (t, s, _o))| (t.pos, s.half_extents))
        .collect();
    if obstacles.is_empty() {
        return;
    }

    for (entity, (transform, collider, _opponent)) in world
        .query::<(&Transform, &CircleCollider, &Opponent)>()
        .without::<&Dead>()
        .iter()
    {
        let hit = obstacles.iter().any(|(pos, half)| {
            circle_rect_overlap(transform.pos, collider.radius, *pos, *half).is_some()
        });
        if hit {
            outcome.killed_opponents.push((entity, transform.pos));
        }
    }
}

fn flying_nuke(world: &World, nuke: Entity) -> Option<(Vec2, f32)> {
    if world.satisfies::<&Stuck>(nuke).unwrap_or(false) {
        return None;
    }
    let mut query = world
        .query_one::<(&Transform, &CircleCollider, &Nuke)>(nuke)
        .ok()?;
    let (transform, collider, state) = query.get()?;
    if state.phase != NukePhase::InFlight {
        return None;
    }
    Some((transform.pos, collider.radius))
}

fn apply_bounce(world: &mut World, nuke: Entity, normal: Vec2, penetration: f32) {
    let Ok((transform, velocity)) =
        world.query_one_mut::<(&mut Transform, &mut Velocity)>(nuke)
    else {
        return;
    };
    transform.pos += normal * penetration;

    let along_normal = velocity.0.dot(normal);
    if along_normal < 0.0 {
        let v_normal = normal * along_normal;
        let v_tangent = velocity.0 - v_normal;
        velocity.0 = v_tangent * SURFACE_FRICTION - v_normal * SURFACE_RESTITUTION;
    }
}

/// Circle-vs-AABB overlap test. Returns the outward contact normal and the
/// penetration depth when the shapes intersect.
fn circle_rect_overlap(
    center: Vec2,
    radius: f32,
    rect_pos: Vec2,
    half: Vec2,
) -> Option<(Vec2, f32)> {
    let delta = center - rect_pos;
    let clamped = delta.clamp(-half, half);
    let closest = rect_pos + clamped;
    let to_center = center - closest;
    let dist = to_center.length();

    if dist >= radius {
        return None;
    }
    if dist > 1e-5 {
        return Some((to_center / dist, radius - dist));
    }

    // Center inside the rectangle: push out along the shallower axis.
    let depth_x = half.x - delta.x.abs();
    let depth_y = half.y - delta.y.abs();
    if depth_x < depth_y {
        let sign = if delta.x >= 0.0 { 1.0 } else { -1.0 };
        Some((Vec2::X * sign, depth_x + radius))
    } else {
        let sign = if delta.y >= 0.0 { 1.0 } else { -1.0 };
        Some((Vec2::Y * sign, depth_y + radius))
    }
}
