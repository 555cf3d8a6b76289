//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press, a mouse
//! drag or a programmatic call, is represented as a `SceneCommand`.
//! Consumers construct commands and pass them to
//! [`SceneEngine::execute`](super::SceneEngine::execute).

/// A single camera step or view toggle.
///
/// ```ignore
/// engine.execute(SceneCommand::OrbitLeft { degrees: 3.0 });
/// engine.execute(SceneCommand::ToggleProjection);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneCommand {
    /// Translate eye and center along `up × forward`.
    PanLeft {
        /// Distance in world units.
        distance: f32,
    },
    /// Translate eye and center along the up vector.
    PanUp {
        /// Distance in world units.
        distance: f32,
    },
    /// Orbit horizontally about the up vector.
    OrbitLeft {
        /// Angle in degrees.
        degrees: f32,
    },
    /// Orbit vertically and re-derive the up vector.
    OrbitUp {
        /// Angle in degrees.
        degrees: f32,
    },
    /// Move the whole rig along the view direction.
    DollyForward {
        /// Distance in world units.
        distance: f32,
    },
    /// Decrease the zoom factor by `delta` (clamped).
    ZoomNear {
        /// Zoom change.
        delta: f32,
    },
    /// Switch between perspective and orthographic projection.
    ToggleProjection,
}
