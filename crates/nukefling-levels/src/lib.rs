//! Level progression for NUKEFLING.
//!
//! The level sequence (which scene follows which, and what music it plays),
//! the authored spawn layouts, and the per-level progress tracker that owns
//! the shot budget, the timer, and completion scoring.

pub mod layout;
pub mod progress;
pub mod sequence;

pub use layout::LevelLayout;
pub use progress::LevelProgress;
pub use sequence::LevelSequence;
