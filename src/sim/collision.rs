//! Collision geometry for axis-aligned boxes
//!
//! Bricks, gems and the skater are all treated as boxes centered on their
//! position. Rotation of the skater is cosmetic for contact purposes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box given by center and half extents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub center: Vec2,
    pub half: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self {
            center,
            half: size / 2.0,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.half.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.half.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y - self.half.y
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y + self.half.y
    }

    /// Signed horizontal overlap (negative = separated by that distance)
    #[inline]
    pub fn overlap_x(&self, other: &Aabb) -> f32 {
        self.half.x + other.half.x - (self.center.x - other.center.x).abs()
    }

    /// Signed vertical overlap (negative = separated by that distance)
    #[inline]
    pub fn overlap_y(&self, other: &Aabb) -> f32 {
        self.half.y + other.half.y - (self.center.y - other.center.y).abs()
    }

    /// True if the boxes overlap or touch within `slop`
    pub fn touches(&self, other: &Aabb, slop: f32) -> bool {
        self.overlap_x(other) >= -slop && self.overlap_y(other) >= -slop
    }
}

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether the boxes touch
    pub hit: bool,
    /// Surface normal of the solid box, pointing toward the moving box
    pub normal: Vec2,
    /// Penetration depth along the normal (zero or negative when just touching)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }

    /// Contact came from above (the moving box rests on the solid)
    pub fn is_top(&self) -> bool {
        self.hit && self.normal.y > 0.5
    }
}

/// Check a moving box against a solid box
///
/// The separation axis is the one with the smaller overlap, so a box that
/// sinks a little into a floor is pushed up while a box that runs into a
/// wall is pushed sideways.
pub fn box_box_collision(moving: &Aabb, solid: &Aabb, slop: f32) -> CollisionResult {
    let overlap_x = moving.overlap_x(solid);
    let overlap_y = moving.overlap_y(solid);
    if overlap_x < -slop || overlap_y < -slop {
        return CollisionResult::miss();
    }

    let delta = moving.center - solid.center;
    if overlap_y <= overlap_x {
        let dir = if delta.y >= 0.0 { 1.0 } else { -1.0 };
        CollisionResult {
            hit: true,
            normal: Vec2::new(0.0, dir),
            penetration: overlap_y,
        }
    } else {
        let dir = if delta.x >= 0.0 { 1.0 } else { -1.0 };
        CollisionResult {
            hit: true,
            normal: Vec2::new(dir, 0.0),
            penetration: overlap_x,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brick() -> Aabb {
        Aabb::new(Vec2::new(100.0, 32.0), Vec2::new(128.0, 64.0))
    }

    #[test]
    fn test_edges() {
        let b = brick();
        assert_eq!(b.left(), 36.0);
        assert_eq!(b.right(), 164.0);
        assert_eq!(b.bottom(), 0.0);
        assert_eq!(b.top(), 64.0);
    }

    #[test]
    fn test_sinking_box_is_pushed_up() {
        // Skater bottom 3 points below the brick top
        let skater = Aabb::new(Vec2::new(100.0, 101.0), Vec2::new(50.0, 80.0));
        let result = box_box_collision(&skater, &brick(), 0.5);
        assert!(result.is_top());
        assert!((result.penetration - 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_resting_box_still_touches() {
        let skater = Aabb::new(Vec2::new(100.0, 104.0), Vec2::new(50.0, 80.0));
        let result = box_box_collision(&skater, &brick(), 0.5);
        assert!(result.is_top());
        assert!(result.penetration.abs() < 1e-4);
    }

    #[test]
    fn test_running_into_wall_is_pushed_sideways() {
        // Skater overlapping the brick's left side by 4 points, low enough
        // that vertical overlap is large
        let skater = Aabb::new(Vec2::new(15.0, 40.0), Vec2::new(50.0, 80.0));
        let result = box_box_collision(&skater, &brick(), 0.5);
        assert!(result.hit);
        assert_eq!(result.normal, Vec2::new(-1.0, 0.0));
        assert!((result.penetration - 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_separated_boxes_miss() {
        let skater = Aabb::new(Vec2::new(100.0, 110.0), Vec2::new(50.0, 80.0));
        assert!(!box_box_collision(&skater, &brick(), 0.5).hit);
        assert!(!skater.touches(&brick(), 0.5));
    }
}
