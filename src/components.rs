//! Collision components for ECS entities.

use glam::Vec2;

use crate::bounds::Aabb;

/// 2D body component.
///
/// `position` is the center of the entity; y grows downward (screen
/// coordinates). The resolver reads position/size/velocity and writes
/// position and velocity in place. Entities are spawned and despawned by the
/// host, never by the resolver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: Vec2,
    pub size: Vec2,
    pub velocity: Vec2,
}

impl Body {
    /// Create a body at rest with the given center position and size.
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            size,
            velocity: Vec2::ZERO,
        }
    }

    /// Half extents (half width, half height).
    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.size * 0.5
    }

    /// Bounding box at the body's current position. Derived fresh on every
    /// call, never cached.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.position, self.size)
    }
}

/// Classification tag component.
///
/// Entities sharing an equal `Kind` form a group that a
/// [`Side::Group`](crate::pair::Side::Group) selector expands to at
/// resolution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Kind(pub u32);
