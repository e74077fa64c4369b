//! Game state and run lifecycle
//!
//! One `GameState` is one run. Restarting reconstructs the whole state
//! rather than patching fields, so nothing stale can leak between runs.

use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::obstacle::{Obstacle, ObstacleKind, ObstacleStream};
use super::runner::{Runner, Stance};
use crate::consts::*;

/// Playfield dimensions. The ground line sits a fixed margin above the
/// bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub width: f32,
    pub height: f32,
}

impl Default for World {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
        }
    }
}

impl World {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// y of the ground line the runner and ground obstacles stand on
    #[inline]
    pub fn floor_y(&self) -> f32 {
        self.height - GROUND_MARGIN
    }
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first start
    Ready,
    /// Active run
    Running,
    /// Run ended on a collision
    GameOver,
}

/// Complete simulation state for one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Raw score; the display floors it
    pub score: f32,
    /// Current scroll speed in pixels per tick
    pub speed: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    /// While true the built-in controller plays and player input is ignored
    pub autopilot: bool,
    /// The runner
    pub runner: Runner,
    /// Obstacle spawner and live set
    pub obstacles: ObstacleStream,
    /// Playfield geometry
    pub world: World,
    /// The obstacle that ended the run, once in GameOver
    pub collided: Option<Obstacle>,
}

impl GameState {
    /// Create a fresh state in the Ready phase
    pub fn new(seed: u64, world: World) -> Self {
        Self {
            seed,
            score: 0.0,
            speed: BASE_SPEED,
            time_ticks: 0,
            phase: GamePhase::Ready,
            autopilot: false,
            runner: Runner::new(world.floor_y()),
            obstacles: ObstacleStream::new(seed, world),
            world,
            collided: None,
        }
    }

    /// Begin the run
    pub fn start(&mut self) {
        if self.phase == GamePhase::Ready {
            self.phase = GamePhase::Running;
        }
    }

    /// Discard the current run and start a new one with the given seed.
    /// Keeps the playfield and the autopilot toggle.
    pub fn restart(&mut self, seed: u64) {
        let autopilot = self.autopilot;
        let world = self.world;
        *self = Self::new(seed, world);
        self.autopilot = autopilot;
        self.phase = GamePhase::Running;
    }

    /// Abandon the run and return to the ready screen with fresh state
    pub fn quit(&mut self) {
        let autopilot = self.autopilot;
        let world = self.world;
        *self = Self::new(self.seed, world);
        self.autopilot = autopilot;
    }

    /// Turn the autopilot on or off
    pub fn set_autopilot(&mut self, enabled: bool) {
        self.autopilot = enabled;
    }

    /// Flip the autopilot
    pub fn toggle_autopilot(&mut self) {
        self.autopilot = !self.autopilot;
    }

    /// Score as shown to the player
    pub fn display_score(&self) -> u64 {
        self.score as u64
    }

    /// True once the run has ended
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Final stats, available once the run is over
    pub fn summary(&self) -> Option<RunSummary> {
        if self.phase != GamePhase::GameOver {
            return None;
        }
        Some(RunSummary {
            score: self.display_score(),
            ticks: self.time_ticks,
            seed: self.seed,
            hit: self.collided.map(|o| o.kind),
        })
    }

    /// Read-only view of the current frame for renderers and UIs
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            score: self.display_score(),
            speed: self.speed,
            autopilot: self.autopilot,
            runner: self.runner.hitbox(),
            stance: self.runner.stance,
            obstacles: self.obstacles.obstacles().to_vec(),
            floor_y: self.world.floor_y(),
            world: self.world,
        }
    }
}

/// Final stats for a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub score: u64,
    pub ticks: u64,
    pub seed: u64,
    /// What ended the run
    pub hit: Option<ObstacleKind>,
}

/// Read-only view of one frame, for rendering and UI. Everything a drawing
/// layer needs, nothing it can mutate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u64,
    pub speed: f32,
    pub autopilot: bool,
    /// Runner hitbox as currently posed
    pub runner: Aabb,
    pub stance: Stance,
    pub obstacles: Vec<Obstacle>,
    /// Ground line y
    pub floor_y: f32,
    pub world: World,
}
