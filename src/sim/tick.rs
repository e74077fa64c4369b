//! Fixed-order simulation tick
//!
//! One call is exactly one frame. Score and speed use fixed per-tick
//! increments on purpose: the game's feel is tuned in ticks, not seconds,
//! so there is no delta-time parameter anywhere. Drivers that want
//! wall-clock pacing schedule their own calls.

use super::autopilot;
use super::collision::first_collision;
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Jump request (edge, not level)
    pub jump: bool,
    /// Duck level change: Some sets it, None leaves it alone
    pub duck: Option<bool>,
}

/// Advance the game state by one frame.
///
/// The update order is fixed and load-bearing: score/speed advance, then
/// control (autopilot or player input), then runner physics, then obstacle
/// scroll, then the collision check. Reordering changes behavior.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase != GamePhase::Running {
        return;
    }

    state.time_ticks += 1;
    state.score += SCORE_STEP;
    state.speed += SPEED_STEP;

    if state.autopilot {
        let decision = autopilot::decide(&state.runner, state.obstacles.obstacles(), state.speed);
        decision.apply(&mut state.runner);
    } else {
        // Duck level first, so a release and a jump can share a tick
        if let Some(duck) = input.duck {
            state.runner.set_duck(duck);
        }
        if input.jump {
            state.runner.jump();
        }
    }

    state.runner.update();
    state.obstacles.update(state.speed);

    if let Some(hit) = first_collision(&state.runner, state.obstacles.obstacles()).copied() {
        state.collided = Some(hit);
        state.phase = GamePhase::GameOver;
    }
}
