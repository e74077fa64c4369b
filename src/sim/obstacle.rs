//! Obstacle spawning, scrolling, and retirement
//!
//! Obstacles enter at the right edge of the playfield, scroll left at the
//! current game speed, and are dropped once fully off screen. Spawn timing
//! and obstacle choice come from a seeded RNG so runs are reproducible.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::state::World;
use crate::consts::*;

/// Obstacle archetypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Row of 1-3 short ground spikes
    SmallSpikes,
    /// One tall ground spike
    LargeSpikes,
    /// Airborne obstacle at one of three heights
    Flyer,
}

/// A single obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub kind: ObstacleKind,
}

impl Obstacle {
    /// Left edge x
    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    /// Right edge x
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    /// Top edge y
    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    /// Hitbox for collision checks
    pub fn hitbox(&self) -> Aabb {
        Aabb::new(self.pos.x, self.pos.y, self.width, self.height)
    }
}

/// Owns the live obstacle set and the spawn schedule
#[derive(Debug, Clone)]
pub struct ObstacleStream {
    obstacles: Vec<Obstacle>,
    /// Ticks until the next spawn. Starts at zero so the first obstacle
    /// appears on the very first update.
    spawn_timer: f32,
    rng: Pcg32,
    world: World,
}

impl ObstacleStream {
    /// Create an empty stream seeded for reproducible spawns
    pub fn new(seed: u64, world: World) -> Self {
        Self {
            obstacles: Vec::new(),
            spawn_timer: 0.0,
            rng: Pcg32::seed_from_u64(seed),
            world,
        }
    }

    /// Live obstacles, oldest first. Uniform scroll speed keeps this
    /// x-ordered as well.
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Advance one tick: spawn when the timer runs out, scroll everything
    /// left by `speed`, drop what has left the screen.
    pub fn update(&mut self, speed: f32) {
        self.spawn_timer -= 1.0;
        if self.spawn_timer <= 0.0 {
            self.spawn();
            self.spawn_timer = roll_spawn_gap(&mut self.rng, speed);
        }

        for obstacle in &mut self.obstacles {
            obstacle.pos.x -= speed;
        }
        self.obstacles.retain(|o| o.right() >= 0.0);
    }

    /// Roll one obstacle at the right edge: 20% flyer, 30% large spikes,
    /// 50% small spikes.
    fn spawn(&mut self) {
        let x = self.world.width;
        let floor = self.world.floor_y();

        let roll: f32 = self.rng.random();
        let obstacle = if roll > 0.8 {
            let offset = FLYER_OFFSETS[self.rng.random_range(0..FLYER_OFFSETS.len())];
            Obstacle {
                pos: Vec2::new(x, floor - offset),
                width: FLYER_WIDTH,
                height: FLYER_HEIGHT,
                kind: ObstacleKind::Flyer,
            }
        } else if roll > 0.5 {
            Obstacle {
                pos: Vec2::new(x, floor - LARGE_SPIKE_HEIGHT),
                width: LARGE_SPIKE_WIDTH,
                height: LARGE_SPIKE_HEIGHT,
                kind: ObstacleKind::LargeSpikes,
            }
        } else {
            let units = self.rng.random_range(1..=3);
            Obstacle {
                pos: Vec2::new(x, floor - SMALL_SPIKE_HEIGHT),
                width: SMALL_SPIKE_UNIT_WIDTH * units as f32,
                height: SMALL_SPIKE_HEIGHT,
                kind: ObstacleKind::SmallSpikes,
            }
        };
        self.obstacles.push(obstacle);
    }
}

/// Roll the gap until the next spawn. Shrinks as speed grows, but never
/// below the minimum reaction window.
fn roll_spawn_gap(rng: &mut Pcg32, speed: f32) -> f32 {
    let gap = SPAWN_GAP_BASE + rng.random::<f32>() * (SPAWN_GAP_RANGE - speed);
    gap.max(SPAWN_GAP_MIN)
}
