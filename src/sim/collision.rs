//! Collision detection between the runner and obstacles
//!
//! Plain AABB overlap, checked once per tick against every live obstacle.
//! The check runs whether a player or the autopilot is in control.

use super::obstacle::Obstacle;
use super::runner::Runner;

/// Scan for the first obstacle overlapping the runner's current hitbox.
/// Touching edges do not count.
pub fn first_collision<'a>(runner: &Runner, obstacles: &'a [Obstacle]) -> Option<&'a Obstacle> {
    let hitbox = runner.hitbox();
    obstacles.iter().find(|o| hitbox.overlaps(&o.hitbox()))
}
