//! Axis-aligned bounding box collision
//!
//! Every hit-box in the game is an upright rectangle, so overlap is a pair of
//! interval tests. Touching edges do not count as a hit.

use glam::Vec2;

use super::state::{Obstacle, Player};

/// Axis-aligned rectangle: top-left corner plus size (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub const fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict overlap test (shared edges are a miss)
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x && a_max.x > other.min.x && self.min.y < b_max.y && a_max.y > other.min.y
    }
}

/// Index of the first obstacle (in spawn order) overlapping the player
pub fn first_hit(player: &Player, obstacles: &[Obstacle]) -> Option<usize> {
    let hitbox = player.hitbox();
    obstacles.iter().position(|obs| hitbox.overlaps(&obs.hitbox()))
}
