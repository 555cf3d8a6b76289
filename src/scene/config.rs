use std::path::Path;

use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::collision::{CollisionWorld, MovingBox, StaticBox};
use crate::error::SceneError;
use crate::geometry::Aabb;

/// One static cube as described in the scene file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CubeConfig {
    /// Optional label; defaults to `cube <n>` (1-based) when empty.
    pub name: Option<String>,
    /// Edge length.
    pub size: f32,
    /// Center position.
    pub position: [f32; 3],
    /// Euler rotation in degrees (X, then Y, then Z). Render only.
    pub rotation: [f32; 3],
    /// Linear RGB color. Render only.
    pub color: [f32; 3],
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            name: None,
            size: 1.0,
            position: [0.0; 3],
            rotation: [0.0; 3],
            color: [1.0; 3],
        }
    }
}

impl CubeConfig {
    /// Display name for the cube at `index`.
    #[must_use]
    pub fn display_name(&self, index: usize) -> String {
        match &self.name {
            Some(name) if !name.is_empty() => name.clone(),
            _ => format!("cube {}", index + 1),
        }
    }

    /// Model matrix: translate, rotate, then scale to `size`.
    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        let [rx, ry, rz] = self.rotation;
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            rx.to_radians(),
            ry.to_radians(),
            rz.to_radians(),
        );
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.size),
            rotation,
            Vec3::from_array(self.position),
        )
    }
}

/// Initial state of the moving cube.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MovingCubeConfig {
    /// Initial velocity in units per second.
    pub velocity: [f32; 3],
    /// Initial center position.
    pub position: [f32; 3],
    /// Edge length.
    pub size: f32,
    /// Linear RGB color. Render only.
    pub color: [f32; 3],
}

impl Default for MovingCubeConfig {
    fn default() -> Self {
        Self {
            velocity: [1.0, 0.6, 0.4],
            position: [0.0; 3],
            size: 1.0,
            color: [1.0, 0.5, 0.2],
        }
    }
}

/// World extents the moving cube bounces inside.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BoundaryConfig {
    /// Lower corner.
    pub min: [f32; 3],
    /// Upper corner.
    pub max: [f32; 3],
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        Self {
            min: [-5.0; 3],
            max: [5.0; 3],
        }
    }
}

/// Scene description loaded from JSON. Missing fields use defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// Static cubes in collision evaluation order.
    pub cubes: Vec<CubeConfig>,
    /// The moving cube.
    pub moving_cube: MovingCubeConfig,
    /// World extents.
    pub boundary: BoundaryConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            cubes: vec![
                CubeConfig {
                    position: [-3.0, 0.0, 0.0],
                    color: [0.2, 0.6, 1.0],
                    ..CubeConfig::default()
                },
                CubeConfig {
                    position: [2.0, 0.0, 0.0],
                    color: [0.3, 0.9, 0.4],
                    ..CubeConfig::default()
                },
            ],
            moving_cube: MovingCubeConfig::default(),
            boundary: BoundaryConfig::default(),
        }
    }
}

impl SceneConfig {
    /// Parse a scene description from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        serde_json::from_str(json)
            .map_err(|e| SceneError::ConfigParse(e.to_string()))
    }

    /// Load a scene description from a JSON file.
    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load a scene description, falling back to defaults on any failure.
    ///
    /// Failures are logged, never propagated.
    #[must_use]
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => {
                log::info!(
                    "Loaded scene from {} ({} static cubes)",
                    path.display(),
                    config.cubes.len()
                );
                config
            }
            Err(e) => {
                log::warn!(
                    "Failed to load scene from {}: {e}; using defaults",
                    path.display()
                );
                Self::default()
            }
        }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SceneError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SceneError::ConfigParse(e.to_string()))
    }

    /// Build the collision world this scene describes.
    #[must_use]
    pub fn build_world(&self) -> CollisionWorld {
        let moving = MovingBox {
            position: Vec3::from_array(self.moving_cube.position),
            velocity: Vec3::from_array(self.moving_cube.velocity),
            size: self.moving_cube.size,
        };
        let boundary = Aabb::new(
            Vec3::from_array(self.boundary.min),
            Vec3::from_array(self.boundary.max),
        );

        let mut world = CollisionWorld::new(moving, boundary);
        for (i, cube) in self.cubes.iter().enumerate() {
            world.add_static(StaticBox::new(
                cube.display_name(i),
                Vec3::from_array(cube.position),
                cube.size,
            ));
        }
        world
    }
}
