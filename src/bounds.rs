//! Axis-aligned bounding boxes and the overlap predicate.

use glam::Vec2;

/// Axis-aligned bounding box in screen coordinates (y grows downward, so
/// `top < bottom` numerically).
///
/// Boxes are derived from an entity's current position and size on every
/// check and never stored across frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Aabb {
    /// Build a box from a center position and a full size.
    #[inline]
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            left: center.x - half.x,
            right: center.x + half.x,
            top: center.y - half.y,
            bottom: center.y + half.y,
        }
    }

    /// Test whether two boxes overlap.
    ///
    /// All four comparisons are strict: boxes that merely share an edge do
    /// NOT overlap. Resolution relies on this so that a box clamped flush
    /// against another is left alone on the next pass.
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.top < other.bottom
            && self.bottom > other.top
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_center() {
        let aabb = Aabb::from_center(Vec2::new(5.0, -3.0), Vec2::new(2.0, 8.0));
        assert_eq!(aabb.left, 4.0);
        assert_eq!(aabb.right, 6.0);
        assert_eq!(aabb.top, -7.0);
        assert_eq!(aabb.bottom, 1.0);
    }

    #[test]
    fn test_overlap() {
        let a = Aabb::from_center(Vec2::new(0.0, 0.0), Vec2::new(2.0, 2.0));
        let b = Aabb::from_center(Vec2::new(1.5, 0.5), Vec2::new(2.0, 2.0));
        let c = Aabb::from_center(Vec2::new(5.0, 0.0), Vec2::new(2.0, 2.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&a));
    }

    #[test]
    fn test_edge_touching_is_not_overlap() {
        // Right edge of a is exactly the left edge of b.
        let a = Aabb::from_center(Vec2::new(0.0, 0.0), Vec2::new(2.0, 2.0));
        let b = Aabb::from_center(Vec2::new(2.0, 0.0), Vec2::new(2.0, 2.0));
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));

        // Corner contact only.
        let c = Aabb::from_center(Vec2::new(2.0, 2.0), Vec2::new(2.0, 2.0));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_containment_is_overlap() {
        let outer = Aabb::from_center(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let inner = Aabb::from_center(Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0));
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }
}
