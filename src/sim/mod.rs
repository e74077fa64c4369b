//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, fixed increments
//! - Seeded RNG only
//! - Stable update order (score/speed, control, runner, obstacles, collision)
//! - No rendering or platform dependencies

pub mod aabb;
pub mod autopilot;
pub mod collision;
pub mod obstacle;
pub mod runner;
pub mod state;
pub mod tick;

pub use aabb::Aabb;
pub use autopilot::{Decision, decide};
pub use collision::first_collision;
pub use obstacle::{Obstacle, ObstacleKind, ObstacleStream};
pub use runner::{Runner, Stance};
pub use state::{GamePhase, GameState, RunSummary, Snapshot, World};
pub use tick::{TickInput, tick};
