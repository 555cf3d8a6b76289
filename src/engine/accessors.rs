use glam::Mat4;

use super::SceneEngine;
use crate::camera::{CameraUniform, OrbitCamera, Projection};
use crate::collision::CollisionWorld;
use crate::options::Options;
use crate::scene::{cube_instances, CubeInstance, SceneConfig};

impl SceneEngine {
    /// The orbit camera.
    #[must_use]
    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    /// The collision world.
    #[must_use]
    pub fn world(&self) -> &CollisionWorld {
        &self.world
    }

    /// Scene description the world was built from.
    #[must_use]
    pub fn scene(&self) -> &SceneConfig {
        &self.scene
    }

    /// Active projection.
    #[must_use]
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Camera uniform as of the last update, command or resize.
    #[must_use]
    pub fn camera_uniform(&self) -> &CameraUniform {
        &self.uniform
    }

    /// Camera view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.camera.view_matrix()
    }

    /// Projection matrix for the active mode.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection.matrix()
    }

    /// Projection times view.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Render data for every cube at its current position.
    #[must_use]
    pub fn cube_instances(&self) -> Vec<CubeInstance> {
        cube_instances(&self.scene, &self.world)
    }

    /// Message from the most recent collision, if any.
    #[must_use]
    pub fn last_collision(&self) -> Option<&str> {
        self.last_collision.as_deref()
    }

    /// Number of collisions since construction.
    #[must_use]
    pub fn collision_count(&self) -> u64 {
        self.collision_count
    }
}
