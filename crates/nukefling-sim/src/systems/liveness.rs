//! The liveness query: how many opponents are still in play.

use hecs::World;

use nukefling_core::components::{Dead, Opponent};

/// Count live opponents. This is the scan-everything query the progress
/// tracker deliberately runs behind its poll interval instead of per tick.
pub fn count_opponents(world: &World) -> usize {
    world
        .query::<&Opponent>()
        .without::<&Dead>()
        .iter()
        .count()
}
