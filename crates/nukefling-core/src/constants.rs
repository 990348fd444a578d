//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- World bounds (playable region; leaving it spends the shot) ---

pub const WORLD_MIN_X: f32 = -30.0;
pub const WORLD_MAX_X: f32 = 20.0;
pub const WORLD_MIN_Y: f32 = -20.0;
pub const WORLD_MAX_Y: f32 = 20.0;

// --- Ballistics ---

/// Downward acceleration on launched bodies (world units / s²).
pub const GRAVITY: f32 = 9.81;

/// Velocity retained along the contact normal after a surface bounce.
pub const SURFACE_RESTITUTION: f32 = 0.35;

/// Velocity retained along the contact tangent after a surface bounce.
pub const SURFACE_FRICTION: f32 = 0.8;

// --- Sling ---

/// Maximum distance the nuke can be dragged from the sling anchor.
pub const MAX_DRAG_DISTANCE: f32 = 3.0;

/// Launch speed per world unit of drag displacement.
pub const LAUNCH_FORCE_SCALE: f32 = 8.0;

/// Speed at or below which a launched nuke counts as resting.
pub const REST_SPEED: f32 = 0.1;

/// Accumulated resting seconds before a launched nuke is spent.
pub const SPENT_REST_SECS: f32 = 2.0;

/// Collision radius of the nuke.
pub const NUKE_RADIUS: f32 = 0.5;

/// Collision radius of an opponent.
pub const OPPONENT_RADIUS: f32 = 0.5;

// --- Level progress ---

/// Interval between liveness polls (seconds of accumulated frame time).
/// The "any opponents left" scan is not free, so it is time-sliced rather
/// than run every tick.
pub const LIVENESS_POLL_INTERVAL_SECS: f32 = 0.5;

/// Default shot budget per level.
pub const DEFAULT_MAX_SHOTS: u32 = 3;

// --- Scoring ---

/// Base score a completed level starts from before multipliers.
pub const DEFAULT_BASE_SCORE: u32 = 10_000;

/// Numerator of the time multiplier: `max(1, 100 / elapsed)`.
pub const TIME_BONUS_NUMERATOR: f32 = 100.0;

/// Shot multiplier gained per unused shot.
pub const SHOT_BONUS_STEP: f32 = 0.5;

/// Floor applied to elapsed time at scoring. Keeps the time multiplier
/// very large rather than infinite when a level ends near-instantly.
pub const MIN_SCORING_SECS: f32 = 0.01;

// --- Host flow ---

/// Seconds the game-over screen ignores input before allowing a restart.
pub const GAME_OVER_INPUT_DELAY_SECS: f32 = 3.0;

/// Music track used when a scene has no entry in the level sequence.
pub const DEFAULT_BGM_INDEX: usize = 0;
