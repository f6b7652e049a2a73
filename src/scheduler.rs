//! Per-tick scheduling and the public registration entry points.

use crate::pair::{CollisionPair, PushDirection, Response, Side};
use crate::resolve::resolve_pair;
use crate::world::WorldContext;

type TickHandler = Box<dyn FnMut(&mut hecs::World, &WorldContext)>;

/// Owns the per-tick handlers installed by the registration entry points.
///
/// The host drives this by calling [`run_tick`](UpdateScheduler::run_tick)
/// once per frame. Handlers run synchronously in registration order, so a
/// later-registered pair observes positions already mutated by earlier ones
/// within the same tick. There is no unregistration; a handler lives as long
/// as the scheduler.
#[derive(Default)]
pub struct UpdateScheduler {
    handlers: Vec<TickHandler>,
}

impl UpdateScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a handler to run on every tick.
    pub fn on_every_update<F>(&mut self, handler: F)
    where
        F: FnMut(&mut hecs::World, &WorldContext) + 'static,
    {
        self.handlers.push(Box::new(handler));
    }

    /// Run all installed handlers once, in registration order.
    pub fn run_tick(&mut self, world: &mut hecs::World, ctx: &WorldContext) {
        for handler in &mut self.handlers {
            handler(world, ctx);
        }
    }

    /// Number of installed handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}

/// Register a solid pairing: side A is stopped when it collides with side B,
/// which acts as a wall.
pub fn declare_solid_collision(scheduler: &mut UpdateScheduler, side_a: Side, side_b: Side) {
    declare(scheduler, side_a, side_b, Response::Solid);
}

/// Register a pushable pairing: side A displaces side B along the allowed
/// axis, and a blocked push stops side A instead.
pub fn declare_pushable_collision(
    scheduler: &mut UpdateScheduler,
    side_a: Side,
    side_b: Side,
    direction: PushDirection,
) {
    declare(scheduler, side_a, side_b, Response::Pushable(direction));
}

fn declare(scheduler: &mut UpdateScheduler, side_a: Side, side_b: Side, response: Response) {
    let pair = CollisionPair {
        side_a,
        side_b,
        response,
    };
    tracing::debug!(?pair, "registered collision pair");
    scheduler.on_every_update(move |world, ctx| resolve_pair(world, ctx, &pair));
}
