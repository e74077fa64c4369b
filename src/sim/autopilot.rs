//! Heuristic autopilot that plays the runner
//!
//! Watches the nearest threat ahead and reacts inside a speed-scaled
//! window: jump over ground spikes and near-ground flyers, duck under
//! mid-height flyers, ignore high flyers. A high flyer can hide whatever
//! spawned right behind it, so the controller peeks one obstacle past it
//! when the follow-up is close.

use super::obstacle::{Obstacle, ObstacleKind};
use super::runner::Runner;
use crate::consts::*;

/// Controls for one tick. `duck` is a level, `jump` an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Decision {
    pub duck: bool,
    pub jump: bool,
}

impl Decision {
    /// Route the decision into the runner. The duck level goes first so a
    /// duck release and a jump can land in the same tick.
    pub fn apply(&self, runner: &mut Runner) {
        runner.set_duck(self.duck);
        if self.jump {
            runner.jump();
        }
    }
}

/// Decide this tick's controls from what is visible ahead.
pub fn decide(runner: &Runner, obstacles: &[Obstacle], speed: f32) -> Decision {
    // Nearest first. The stream keeps obstacles x-ordered in practice, but
    // the decision must not depend on that.
    let mut sorted: Vec<&Obstacle> = obstacles.iter().collect();
    sorted.sort_by(|a, b| {
        a.pos
            .x
            .partial_cmp(&b.pos.x)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    // Lead obstacle: the first one not yet fully behind the runner
    let lead_idx = match sorted.iter().position(|o| o.right() > runner.left()) {
        Some(idx) => idx,
        None => return Decision::default(),
    };

    let mut target = sorted[lead_idx];

    // A high flyer is harmless on its own but can mask the next obstacle.
    // Retarget to that one when it is inside the lookahead window.
    if target.kind == ObstacleKind::Flyer && flyer_rel(target, runner) < FLYER_MASK_CUTOFF {
        if let Some(behind) = sorted.get(lead_idx + 1) {
            let gap = behind.left() - runner.right();
            if gap < speed * LOOKAHEAD_FACTOR + behind.width * 0.5 {
                target = behind;
            }
        }
    }

    let distance = target.left() - runner.right();
    let reaction = speed * REACTION_FACTOR + target.width * 0.5;

    if distance > 0.0 && distance < reaction {
        match target.kind {
            ObstacleKind::Flyer => {
                let rel = flyer_rel(target, runner);
                if rel >= FLYER_JUMP_CUTOFF {
                    Decision {
                        duck: false,
                        jump: true,
                    }
                } else if rel >= FLYER_DUCK_CUTOFF {
                    Decision {
                        duck: true,
                        jump: false,
                    }
                } else {
                    Decision::default()
                }
            }
            ObstacleKind::SmallSpikes | ObstacleKind::LargeSpikes => Decision {
                duck: false,
                jump: true,
            },
        }
    } else {
        // Nothing due yet: release the duck rather than hold it
        Decision::default()
    }
}

/// Flyer top edge relative to the ground line, negative is up
#[inline]
fn flyer_rel(obstacle: &Obstacle, runner: &Runner) -> f32 {
    obstacle.top() - runner.floor_y()
}
