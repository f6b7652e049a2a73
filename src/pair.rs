//! Registered collision pairs and per-tick group expansion.

use glam::Vec2;

use crate::components::Kind;

/// Axis constraint applied to a pushable displacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushDirection {
    /// Pushes may only move the target along X.
    XAxis,
    /// Pushes may only move the target along Y.
    YAxis,
    /// Pushes act on whichever axis the penetration resolver picked.
    Omnidirectional,
}

impl PushDirection {
    /// Mask a displacement to the allowed axis. Only one component is ever
    /// non-zero to begin with, so a mismatched constraint yields zero.
    #[inline]
    pub fn mask(self, displacement: Vec2) -> Vec2 {
        match self {
            PushDirection::XAxis => Vec2::new(displacement.x, 0.0),
            PushDirection::YAxis => Vec2::new(0.0, displacement.y),
            PushDirection::Omnidirectional => displacement,
        }
    }
}

/// One side of a registered pair: a concrete entity or a kind selector.
#[derive(Debug, Clone, Copy)]
pub enum Side {
    Single(hecs::Entity),
    Group(Kind),
}

impl Side {
    /// Expand to the concrete entities this side currently selects.
    ///
    /// Called fresh every tick: group membership changes as the host spawns
    /// and despawns entities, and a stale list must never be reused. A
    /// selector matching nothing expands to an empty set, which makes the
    /// pass a no-op for that tick.
    pub fn expand(&self, world: &hecs::World) -> Vec<hecs::Entity> {
        match self {
            Side::Single(entity) => {
                if world.contains(*entity) {
                    vec![*entity]
                } else {
                    Vec::new()
                }
            }
            Side::Group(kind) => world
                .query::<&Kind>()
                .iter()
                .filter(|(_, k)| **k == *kind)
                .map(|(entity, _)| entity)
                .collect(),
        }
    }
}

/// Resolution policy of a registered pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// Side A is stopped and clamped; side B is immovable.
    Solid,
    /// Side B is displaced along the constrained axis; a blocked push
    /// degrades to [`Response::Solid`] for that resolution.
    Pushable(PushDirection),
}

/// An immutable registered pairing. Built once per entry-point call and
/// owned by its per-tick handler for the life of the scheduler.
#[derive(Debug, Clone, Copy)]
pub struct CollisionPair {
    pub side_a: Side,
    pub side_b: Side,
    pub response: Response,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Body;

    #[test]
    fn test_mask() {
        let push = Vec2::new(0.0, -3.0);
        assert_eq!(PushDirection::XAxis.mask(push), Vec2::ZERO);
        assert_eq!(PushDirection::YAxis.mask(push), push);
        assert_eq!(PushDirection::Omnidirectional.mask(push), push);
    }

    #[test]
    fn test_expand_single() {
        let mut world = hecs::World::new();
        let e = world.spawn((Body::new(Vec2::ZERO, Vec2::ONE),));
        assert_eq!(Side::Single(e).expand(&world), vec![e]);

        world.despawn(e).unwrap();
        assert!(Side::Single(e).expand(&world).is_empty());
    }

    #[test]
    fn test_expand_group_is_fresh_each_tick() {
        let mut world = hecs::World::new();
        let crates = Kind(7);
        let a = world.spawn((Body::new(Vec2::ZERO, Vec2::ONE), crates));
        world.spawn((Body::new(Vec2::ONE, Vec2::ONE), Kind(8)));

        let side = Side::Group(crates);
        assert_eq!(side.expand(&world), vec![a]);

        // Membership changes between ticks are picked up.
        let b = world.spawn((Body::new(Vec2::ONE, Vec2::ONE), crates));
        let expanded = side.expand(&world);
        assert_eq!(expanded.len(), 2);
        assert!(expanded.contains(&a));
        assert!(expanded.contains(&b));

        world.despawn(a).unwrap();
        assert_eq!(side.expand(&world), vec![b]);
    }
}
