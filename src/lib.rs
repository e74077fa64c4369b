//! Robo Runner - an endless runner with a built-in autopilot
//!
//! Core modules:
//! - `sim`: Deterministic simulation (runner physics, obstacles, collision, autopilot)
//! - `settings`: Player preferences and playfield configuration
//! - `highscores`: Persisted best score

pub mod highscores;
pub mod settings;
pub mod sim;

pub use highscores::BestScore;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions when no canvas size is supplied
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 400.0;
    /// Gap between the ground line and the bottom of the playfield
    pub const GROUND_MARGIN: f32 = 10.0;

    /// Runner placement - x never changes, the world scrolls instead
    pub const RUNNER_X: f32 = 50.0;
    /// Standing/jumping hitbox
    pub const RUNNER_WIDTH: f32 = 60.0;
    pub const RUNNER_HEIGHT: f32 = 60.0;
    /// Ducking hitbox (wider and much lower)
    pub const DUCK_WIDTH: f32 = 70.0;
    pub const DUCK_HEIGHT: f32 = 30.0;

    /// Vertical physics, pixels per tick (y grows downward)
    pub const JUMP_IMPULSE: f32 = -17.0;
    pub const GRAVITY: f32 = 1.0;

    /// Scroll speed starts here and creeps up every tick, uncapped
    pub const BASE_SPEED: f32 = 8.0;
    pub const SPEED_STEP: f32 = 0.0005;
    /// Score gained per tick (display floors it)
    pub const SCORE_STEP: f32 = 0.05;

    /// Spawn gap roll: BASE + r * (RANGE - speed), clamped to MIN ticks
    pub const SPAWN_GAP_BASE: f32 = 60.0;
    pub const SPAWN_GAP_RANGE: f32 = 120.0;
    /// The only fairness guarantee the spawner makes
    pub const SPAWN_GAP_MIN: f32 = 40.0;

    /// Small spikes come in rows of 1-3 units
    pub const SMALL_SPIKE_UNIT_WIDTH: f32 = 20.0;
    pub const SMALL_SPIKE_HEIGHT: f32 = 40.0;
    pub const LARGE_SPIKE_WIDTH: f32 = 30.0;
    pub const LARGE_SPIKE_HEIGHT: f32 = 50.0;
    pub const FLYER_WIDTH: f32 = 40.0;
    pub const FLYER_HEIGHT: f32 = 30.0;
    /// A flyer's top edge sits this far above the ground line
    pub const FLYER_OFFSETS: [f32; 3] = [25.0, 75.0, 110.0];

    /// Autopilot reaction window: speed * REACTION_FACTOR + target width / 2
    pub const REACTION_FACTOR: f32 = 15.0;
    /// Window for threats hidden behind a high flyer, slightly wider
    /// than the reaction window
    pub const LOOKAHEAD_FACTOR: f32 = 16.0;
    /// Flyer band cutoffs: top edge relative to the ground line, negative up
    pub const FLYER_JUMP_CUTOFF: f32 = -40.0;
    pub const FLYER_DUCK_CUTOFF: f32 = -90.0;
    pub const FLYER_MASK_CUTOFF: f32 = -70.0;
}
