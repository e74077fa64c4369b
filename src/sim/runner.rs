//! The runner and its stance state machine
//!
//! The runner never moves horizontally - the world scrolls past it. All it
//! can do is jump (fixed impulse, constant gravity) or duck (swap to a wide
//! low hitbox). Stances are mutually exclusive by construction.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use crate::consts::*;

/// What the runner is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Stance {
    #[default]
    Running,
    /// Airborne under gravity; lands back into Running
    Jumping,
    /// Low profile on the ground
    Ducking,
}

/// The player-controlled (or autopilot-controlled) runner
#[derive(Debug, Clone)]
pub struct Runner {
    /// Top-left corner of the hitbox
    pub pos: Vec2,
    /// Vertical velocity in pixels per tick, positive is down
    pub vel_y: f32,
    pub stance: Stance,
    /// Ground line the runner stands on, fixed for the run
    floor_y: f32,
}

impl Runner {
    /// Create a runner standing on the given ground line
    pub fn new(floor_y: f32) -> Self {
        Self {
            pos: Vec2::new(RUNNER_X, floor_y - RUNNER_HEIGHT),
            vel_y: 0.0,
            stance: Stance::Running,
            floor_y,
        }
    }

    /// Ground line y
    #[inline]
    pub fn floor_y(&self) -> f32 {
        self.floor_y
    }

    /// Top y of the standing hitbox when grounded
    #[inline]
    fn ground_top(&self) -> f32 {
        self.floor_y - RUNNER_HEIGHT
    }

    /// Current hitbox width (wider while ducking)
    #[inline]
    pub fn width(&self) -> f32 {
        match self.stance {
            Stance::Ducking => DUCK_WIDTH,
            _ => RUNNER_WIDTH,
        }
    }

    /// Current hitbox height (much lower while ducking)
    #[inline]
    pub fn height(&self) -> f32 {
        match self.stance {
            Stance::Ducking => DUCK_HEIGHT,
            _ => RUNNER_HEIGHT,
        }
    }

    /// Left edge x
    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    /// Right edge x
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.width()
    }

    /// Hitbox as currently posed
    pub fn hitbox(&self) -> Aabb {
        Aabb::new(self.pos.x, self.pos.y, self.width(), self.height())
    }

    /// Start a jump. Only possible from a standing run; ignored mid-air
    /// and while ducking.
    pub fn jump(&mut self) {
        if self.stance == Stance::Running {
            self.stance = Stance::Jumping;
            self.vel_y = JUMP_IMPULSE;
        }
    }

    /// Enter or leave the duck. Ignored while airborne.
    pub fn set_duck(&mut self, duck: bool) {
        if self.stance == Stance::Jumping {
            return;
        }
        if duck {
            self.stance = Stance::Ducking;
            self.pos.y = self.floor_y - DUCK_HEIGHT;
        } else if self.stance == Stance::Ducking {
            self.stance = Stance::Running;
            self.pos.y = self.ground_top();
        }
    }

    /// Advance one tick of vertical physics. Grounded stances hold still;
    /// a jump integrates gravity and snaps back to the ground on reaching
    /// or passing it.
    pub fn update(&mut self) {
        if self.stance == Stance::Jumping {
            self.vel_y += GRAVITY;
            self.pos.y += self.vel_y;
            if self.pos.y >= self.ground_top() {
                self.pos.y = self.ground_top();
                self.vel_y = 0.0;
                self.stance = Stance::Running;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const FLOOR: f32 = 390.0;

    #[test]
    fn test_new_runner_stands_on_ground() {
        let runner = Runner::new(FLOOR);
        assert_eq!(runner.stance, Stance::Running);
        assert_eq!(runner.pos.x, RUNNER_X);
        assert_eq!(runner.pos.y, FLOOR - RUNNER_HEIGHT);
        assert_eq!(runner.vel_y, 0.0);
        assert_eq!(runner.hitbox().bottom(), FLOOR);
    }

    #[test]
    fn test_jump_from_running() {
        let mut runner = Runner::new(FLOOR);
        runner.jump();
        assert_eq!(runner.stance, Stance::Jumping);
        assert_eq!(runner.vel_y, JUMP_IMPULSE);
    }

    #[test]
    fn test_jump_ignored_while_airborne() {
        let mut runner = Runner::new(FLOOR);
        runner.jump();
        runner.update();
        let vel_before = runner.vel_y;
        runner.jump();
        assert_eq!(runner.vel_y, vel_before);
    }

    #[test]
    fn test_jump_ignored_while_ducking() {
        let mut runner = Runner::new(FLOOR);
        runner.set_duck(true);
        runner.jump();
        assert_eq!(runner.stance, Stance::Ducking);
    }

    #[test]
    fn test_duck_ignored_while_airborne() {
        let mut runner = Runner::new(FLOOR);
        runner.jump();
        runner.set_duck(true);
        assert_eq!(runner.stance, Stance::Jumping);
        // Hitbox stays the standing one
        assert_eq!(runner.width(), RUNNER_WIDTH);
        assert_eq!(runner.height(), RUNNER_HEIGHT);
    }

    #[test]
    fn test_duck_swaps_hitbox() {
        let mut runner = Runner::new(FLOOR);
        runner.set_duck(true);
        assert_eq!(runner.stance, Stance::Ducking);
        let hitbox = runner.hitbox();
        assert_eq!(hitbox.width, DUCK_WIDTH);
        assert_eq!(hitbox.height, DUCK_HEIGHT);
        // Bottom edge stays on the ground
        assert_eq!(hitbox.bottom(), FLOOR);

        runner.set_duck(false);
        assert_eq!(runner.stance, Stance::Running);
        assert_eq!(runner.hitbox().height, RUNNER_HEIGHT);
        assert_eq!(runner.hitbox().bottom(), FLOOR);
    }

    #[test]
    fn test_duck_release_while_running_is_noop() {
        let mut runner = Runner::new(FLOOR);
        runner.set_duck(false);
        assert_eq!(runner.stance, Stance::Running);
        assert_eq!(runner.pos.y, FLOOR - RUNNER_HEIGHT);
    }

    #[test]
    fn test_jump_arc_lands_back_on_ground() {
        let mut runner = Runner::new(FLOOR);
        runner.jump();

        let mut airborne_ticks = 0;
        while runner.stance == Stance::Jumping {
            runner.update();
            airborne_ticks += 1;
            assert!(airborne_ticks < 100, "runner never landed");
        }

        // Impulse -17 with gravity 1 lands exactly on tick 33
        assert_eq!(airborne_ticks, 33);
        assert_eq!(runner.stance, Stance::Running);
        assert_eq!(runner.pos.y, FLOOR - RUNNER_HEIGHT);
        assert_eq!(runner.vel_y, 0.0);
    }

    #[test]
    fn test_jump_never_sinks_below_ground() {
        let mut runner = Runner::new(FLOOR);
        runner.jump();
        for _ in 0..100 {
            runner.update();
            assert!(runner.hitbox().bottom() <= FLOOR);
        }
    }

    proptest! {
        // Drive the runner with arbitrary command sequences: the stance
        // must stay a single legal pose and the hitbox must match it.
        #[test]
        fn test_stances_stay_exclusive(cmds in prop::collection::vec(0u8..4, 0..200)) {
            let mut runner = Runner::new(FLOOR);
            for cmd in cmds {
                match cmd {
                    0 => runner.jump(),
                    1 => runner.set_duck(true),
                    2 => runner.set_duck(false),
                    _ => runner.update(),
                }

                match runner.stance {
                    Stance::Running => {
                        prop_assert_eq!(runner.hitbox().bottom(), FLOOR);
                        prop_assert_eq!(runner.vel_y, 0.0);
                        prop_assert_eq!(runner.height(), RUNNER_HEIGHT);
                    }
                    Stance::Ducking => {
                        prop_assert_eq!(runner.hitbox().bottom(), FLOOR);
                        prop_assert_eq!(runner.width(), DUCK_WIDTH);
                        prop_assert_eq!(runner.height(), DUCK_HEIGHT);
                    }
                    Stance::Jumping => {
                        // Never ducked mid-air
                        prop_assert_eq!(runner.width(), RUNNER_WIDTH);
                        prop_assert!(runner.hitbox().bottom() <= FLOOR);
                    }
                }
            }
        }
    }
}
