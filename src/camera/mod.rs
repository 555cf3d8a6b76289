//! Camera system for the cube scene.
//!
//! Provides an orbit camera driven by incremental pan, orbit, dolly and zoom
//! steps, plus the projection and uniform types a renderer consumes.

/// Projection modes and the GPU camera uniform.
pub mod core;
/// Orbit camera with eye/center/up state.
pub mod orbit;

pub use self::core::{CameraUniform, Projection, ProjectionMode};
pub use orbit::{OrbitCamera, ZOOM_MAX, ZOOM_MIN};
