//! Shared geometry: bounding boxes, axes and the axis-angle rotation
//! primitive used by the camera.

/// Axis-aligned bounding boxes and overlap queries.
pub mod aabb;
/// Axis-angle rotation helpers.
pub mod rotation;

pub use aabb::{Aabb, Axis};
pub use rotation::{rotate_about_axis, safe_normalize};
