//! Simulation engine for NUKEFLING.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate, and produces
//! GameStateSnapshots for whatever frontend is attached. Completely headless,
//! enabling deterministic testing.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};

#[cfg(test)]
mod tests;
