//! Axis-aligned box geometry for hitboxes
//!
//! Screen convention throughout: boxes are anchored at their top-left
//! corner and y grows downward, so a box's "top" is its smallest y.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            width,
            height,
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
        self.pos.x + self.width
    }

    /// Top edge y (smallest y)
    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    /// Bottom edge y
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height
    }

    /// Overlap test with strict inequalities on every edge: boxes that
    /// merely touch do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}
