//! Fundamental simulation types.

use serde::{Deserialize, Serialize};

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f32,
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f32 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
