//! Physics-free bounce simulation: one moving cube, a list of static cubes
//! and a boundary box.
//!
//! Each [`CollisionWorld::tick`] integrates the moving cube, reflects its
//! velocity on the face of least penetration for every static cube it
//! overlaps, then keeps it inside the boundary one axis at a time.

/// Collision notifications returned from a tick.
pub mod event;
/// The collision world and its boxes.
pub mod world;

pub use event::CollisionEvent;
pub use world::{CollisionWorld, MovingBox, StaticBox};
