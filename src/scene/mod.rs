//! Scene description and per-cube render data.
//!
//! The JSON [`SceneConfig`] is the only input: it builds the
//! [`CollisionWorld`](crate::collision::CollisionWorld) and supplies the
//! render-only fields (rotation, color) the collision core ignores.

/// JSON scene description.
pub mod config;

use glam::{Mat4, Quat, Vec3};

pub use config::{BoundaryConfig, CubeConfig, MovingCubeConfig, SceneConfig};

use crate::collision::CollisionWorld;

/// What a renderer needs to draw one cube.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeInstance {
    /// Model matrix for a unit cube centered on the origin.
    pub model: Mat4,
    /// Linear RGB color.
    pub color: [f32; 3],
}

/// Build instances for every cube: static cubes first, in config order,
/// then the moving cube at its simulated position.
#[must_use]
pub fn cube_instances(
    config: &SceneConfig,
    world: &CollisionWorld,
) -> Vec<CubeInstance> {
    let mut instances: Vec<CubeInstance> = config
        .cubes
        .iter()
        .map(|cube| CubeInstance {
            model: cube.model_matrix(),
            color: cube.color,
        })
        .collect();

    let moving = world.moving();
    instances.push(CubeInstance {
        model: Mat4::from_scale_rotation_translation(
            Vec3::splat(moving.size),
            Quat::IDENTITY,
            moving.position,
        ),
        color: config.moving_cube.color,
    });
    instances
}
