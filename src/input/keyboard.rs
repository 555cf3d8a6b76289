use serde::{Deserialize, Serialize};

use crate::engine::SceneCommand;
use crate::options::CameraOptions;

/// Camera and view actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// pan_up = "KeyW"
/// toggle_projection = "KeyT"
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Truck the camera left.
    PanLeft,
    /// Truck the camera right.
    PanRight,
    /// Pedestal the camera up.
    PanUp,
    /// Pedestal the camera down.
    PanDown,
    /// Dolly the whole rig forward.
    DollyForward,
    /// Dolly the whole rig backward.
    DollyBackward,
    /// Decrease the zoom factor (move the render eye closer).
    ZoomIn,
    /// Increase the zoom factor.
    ZoomOut,
    /// Switch between perspective and orthographic projection.
    ToggleProjection,
}

impl KeyAction {
    /// The command this action issues, with step sizes from `camera`.
    #[must_use]
    pub fn to_command(self, camera: &CameraOptions) -> SceneCommand {
        let step = camera.translate_step;
        match self {
            // Negative step: the rig moves along -(up × forward).
            Self::PanLeft => SceneCommand::PanLeft { distance: -step },
            Self::PanRight => SceneCommand::PanLeft { distance: step },
            Self::PanUp => SceneCommand::PanUp { distance: step },
            Self::PanDown => SceneCommand::PanUp { distance: -step },
            Self::DollyForward => SceneCommand::DollyForward { distance: step },
            Self::DollyBackward => {
                SceneCommand::DollyForward { distance: -step }
            }
            Self::ZoomIn => SceneCommand::ZoomNear {
                delta: camera.zoom_step,
            },
            Self::ZoomOut => SceneCommand::ZoomNear {
                delta: -camera.zoom_step,
            },
            Self::ToggleProjection => SceneCommand::ToggleProjection,
        }
    }
}
