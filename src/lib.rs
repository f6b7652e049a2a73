//! Shunt 2D collision resolver
//!
//! Per-frame axis-aligned collision resolution for 2D games built on hecs.
//!
//! # Architecture
//!
//! Each registered pair runs a small pipeline once per tick:
//!
//! 1. Expand both sides into concrete entities (single entity or kind group)
//! 2. Derive bounding boxes from current positions (**bounds**)
//! 3. Strict-inequality AABB overlap test (**bounds**)
//! 4. Pick the minimum-penetration axis and direction (**penetration**)
//! 5. Apply the pair's response — stop the mover, or push the other entity
//!    subject to its axis constraint and the world's walls and bounds
//!    (**resolve**, **world**)
//!
//! Pairs are registered through [`declare_solid_collision`] and
//! [`declare_pushable_collision`], which install one handler each on an
//! [`UpdateScheduler`] the host drives once per frame. Everything is
//! single-threaded and synchronous; handlers run in registration order and
//! later pairs observe positions already mutated by earlier ones.

pub mod bounds;
pub mod components;
pub mod pair;
pub mod penetration;
pub mod resolve;
pub mod scheduler;
pub mod world;

// Re-export commonly used types
pub use bounds::Aabb;
pub use components::{Body, Kind};
pub use pair::{CollisionPair, PushDirection, Response, Side};
pub use penetration::separation;
pub use resolve::resolve_pair;
pub use scheduler::{declare_pushable_collision, declare_solid_collision, UpdateScheduler};
pub use world::{TileMap, WorldContext, WorldError};

// Re-export glam for convenience
pub use glam;
