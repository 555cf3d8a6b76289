use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::{Projection, ProjectionMode};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and input step parameters.
pub struct CameraOptions {
    /// Initial projection mode.
    #[schemars(title = "Projection")]
    pub projection: ProjectionMode,
    /// Vertical field of view in degrees (perspective).
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Half-height of the orthographic view volume.
    #[schemars(title = "Ortho Extent", range(min = 0.5, max = 10.0), extend("step" = 0.1))]
    pub ortho_half_extent: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Rendered eye distance multiplier applied at startup.
    #[schemars(title = "Distance Ratio", range(min = 0.5, max = 20.0), extend("step" = 0.5))]
    pub distance_ratio: f32,
    /// Distance moved per pan or dolly key press.
    #[schemars(title = "Translate Step", range(min = 0.01, max = 2.0), extend("step" = 0.01))]
    pub translate_step: f32,
    /// Degrees orbited per drag step.
    #[schemars(title = "Orbit Step", range(min = 0.5, max = 15.0), extend("step" = 0.5))]
    pub orbit_step: f32,
    /// Zoom change per key press or scroll notch.
    #[schemars(title = "Zoom Step", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub zoom_step: f32,
    /// Pixels the cursor must travel on an axis before an orbit step fires.
    #[schemars(title = "Drag Threshold", range(min = 1.0, max = 20.0), extend("step" = 1.0))]
    pub drag_threshold: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            projection: ProjectionMode::Perspective,
            fovy: 90.0,
            ortho_half_extent: 2.0,
            znear: 0.01,
            zfar: 50.0,
            distance_ratio: 4.0,
            translate_step: 0.2,
            orbit_step: 3.0,
            zoom_step: 0.1,
            drag_threshold: 3.0,
        }
    }
}

impl CameraOptions {
    /// Projection built from these options with the given aspect ratio.
    #[must_use]
    pub fn projection(&self, aspect: f32) -> Projection {
        Projection {
            mode: self.projection,
            aspect,
            fovy: self.fovy,
            ortho_half_extent: self.ortho_half_extent,
            znear: self.znear,
            zfar: self.zfar,
        }
    }
}
