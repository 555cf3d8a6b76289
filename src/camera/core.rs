use glam::Mat4;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::orbit::OrbitCamera;

/// Projection selected by the viewer; the camera only supplies the view.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionMode {
    /// Perspective projection.
    #[default]
    Perspective,
    /// Orthographic projection.
    Orthographic,
}

impl ProjectionMode {
    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Perspective => Self::Orthographic,
            Self::Orthographic => Self::Perspective,
        }
    }
}

/// Projection parameters for both modes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Active mode.
    pub mode: ProjectionMode,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees (perspective only).
    pub fovy: f32,
    /// Half-height of the orthographic view volume.
    pub ortho_half_extent: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            mode: ProjectionMode::Perspective,
            aspect: 1.0,
            fovy: 90.0,
            ortho_half_extent: 2.0,
            znear: 0.01,
            zfar: 50.0,
        }
    }
}

impl Projection {
    /// Build the projection matrix for the active mode.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        // perspective_rh/orthographic_rh use the [0,1] depth range
        // (wgpu/Vulkan convention)
        match self.mode {
            ProjectionMode::Perspective => Mat4::perspective_rh(
                self.fovy.to_radians(),
                self.aspect,
                self.znear,
                self.zfar,
            ),
            ProjectionMode::Orthographic => {
                let h = self.ortho_half_extent;
                let w = h * self.aspect;
                Mat4::orthographic_rh(-w, w, -h, h, self.znear, self.zfar)
            }
        }
    }

    /// Update the aspect ratio from a viewport size. Zero sizes are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the camera matrices a renderer needs.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Projection times the translation-free view, for the skybox.
    pub skybox_view_proj: [[f32; 4]; 4],
    /// Render-eye position in world space.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity matrices.
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            skybox_view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 1.0,
        }
    }

    /// Update uniform fields from the camera and projection.
    pub fn update(&mut self, camera: &OrbitCamera, projection: &Projection) {
        let proj = projection.matrix();
        self.view_proj = (proj * camera.view_matrix()).to_cols_array_2d();
        self.skybox_view_proj =
            (proj * camera.skybox_view_matrix()).to_cols_array_2d();
        self.position = camera.render_eye().to_array();
        self.aspect = projection.aspect;
    }
}
