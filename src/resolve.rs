//! The pairwise overlap-resolution pass.

use glam::Vec2;

use crate::components::Body;
use crate::pair::{CollisionPair, Response};
use crate::penetration::separation;
use crate::world::WorldContext;

/// Run one resolution pass for a registered pair.
///
/// Both sides are expanded fresh, then every cross pairing is scanned in
/// group-iteration order: side A is the outer loop, side B the inner. For a
/// given mover the inner loop stops at the first overlapping partner, so at
/// most one resolution happens per mover per tick and simultaneous overlaps
/// are resolved against whichever partner the iteration reaches first. That
/// ordering is contractual; callers must not expect fairness across several
/// simultaneous colliders.
///
/// Self-pairings and entities without a [`Body`] are skipped. The pass never
/// fails: every degenerate input degrades to doing nothing.
pub fn resolve_pair(world: &mut hecs::World, ctx: &WorldContext, pair: &CollisionPair) {
    let movers = pair.side_a.expand(world);
    let others = pair.side_b.expand(world);

    for &a in &movers {
        for &b in &others {
            if a == b {
                continue;
            }

            let body_a = match copy_body(world, a) {
                Some(body) => body,
                None => continue,
            };
            let body_b = match copy_body(world, b) {
                Some(body) => body,
                None => continue,
            };

            if !body_a.aabb().overlaps(&body_b.aabb()) {
                continue;
            }

            let mtv = separation(
                &body_a.aabb(),
                &body_b.aabb(),
                body_a.position,
                body_b.position,
            );

            match pair.response {
                Response::Solid => apply_solid(world, ctx, a, mtv),
                Response::Pushable(direction) => {
                    let push = direction.mask(-mtv);
                    let candidate = body_b.position + push;
                    if ctx.is_on_wall_tile(candidate)
                        || ctx.is_out_of_bounds(candidate, body_b.half_extents())
                    {
                        // An unpushable target behaves as a wall.
                        apply_solid(world, ctx, a, mtv);
                    } else if let Ok(mut body) = world.get::<&mut Body>(b) {
                        body.position = candidate;
                    }
                }
            }

            // One resolved partner per mover per tick.
            break;
        }
    }
}

/// Stop the mover: step it out of the overlap, keep it inside the playable
/// area, and kill its velocity on both axes.
fn apply_solid(world: &mut hecs::World, ctx: &WorldContext, mover: hecs::Entity, mtv: Vec2) {
    if let Ok(mut body) = world.get::<&mut Body>(mover) {
        let half = body.half_extents();
        body.position = ctx.clamp_to_bounds(body.position + mtv, half);
        body.velocity = Vec2::ZERO;
    }
}

fn copy_body(world: &hecs::World, entity: hecs::Entity) -> Option<Body> {
    world.get::<&Body>(entity).ok().map(|body| *body)
}
