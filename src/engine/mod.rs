//! Per-frame scene driver: owns the camera and collision world, applies
//! commands from input between frames, and advances the simulation once
//! per frame.

mod accessors;
pub mod command;
mod input;

pub use command::SceneCommand;

use crate::camera::{CameraUniform, OrbitCamera, Projection};
use crate::collision::{CollisionEvent, CollisionWorld};
use crate::input::InputProcessor;
use crate::options::Options;
use crate::scene::SceneConfig;
use crate::util::frame_timing::FrameTiming;

/// Target FPS limit
const TARGET_FPS: u32 = 240;

/// Frame driver for the cube scene.
///
/// Owns the orbit camera, the collision world and the projection, and is
/// the single place that advances simulation time.
///
/// # Frame loop
///
/// Each frame, call [`update`](Self::update) with the elapsed seconds, then
/// read [`camera_uniform`](Self::camera_uniform) or
/// [`view_projection`](Self::view_projection) and
/// [`cube_instances`](Self::cube_instances) to draw. Call
/// [`resize`](Self::resize) when the viewport changes.
///
/// # Input
///
/// Raw events go through [`handle_input`](Self::handle_input) and
/// [`handle_key_press`](Self::handle_key_press); both translate into
/// [`SceneCommand`]s applied with [`execute`](Self::execute) between frames.
pub struct SceneEngine {
    /// Orbit camera.
    camera: OrbitCamera,
    /// Moving cube, static cubes and boundary.
    world: CollisionWorld,
    /// Scene description the world was built from.
    scene: SceneConfig,
    /// Active projection.
    projection: Projection,
    /// Camera uniform refreshed every update.
    uniform: CameraUniform,
    /// Runtime camera and keybinding options.
    options: Options,
    /// Raw event to command translation.
    input: InputProcessor,
    /// Message from the most recent collision, if any.
    last_collision: Option<String>,
    /// Total collisions since construction.
    collision_count: u64,
    /// Per-frame timing and FPS tracking.
    pub frame_timing: FrameTiming,
}

impl SceneEngine {
    /// Build an engine from a scene description and viewer options.
    #[must_use]
    pub fn new(scene: SceneConfig, options: Options) -> Self {
        let mut camera = OrbitCamera::default();
        camera.set_initial_distance_ratio(options.camera.distance_ratio);

        let projection = options.camera.projection(1.0);
        let world = scene.build_world();
        let input = InputProcessor::new(
            options.camera.clone(),
            options.keybindings.clone(),
        );

        let mut uniform = CameraUniform::new();
        uniform.update(&camera, &projection);

        log::info!(
            "Scene ready: {} static cubes, boundary {:?}..{:?}",
            world.statics().len(),
            world.boundary().min,
            world.boundary().max
        );

        Self {
            camera,
            world,
            scene,
            projection,
            uniform,
            options,
            input,
            last_collision: None,
            collision_count: 0,
            frame_timing: FrameTiming::new(TARGET_FPS),
        }
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// Call once per frame. Returns the collisions detected in this step;
    /// the most recent message is also kept for
    /// [`last_collision`](Self::last_collision).
    pub fn update(&mut self, dt: f32) -> Vec<CollisionEvent> {
        let events = self.world.tick(dt);
        if let Some(last) = events.last() {
            log::info!("{}", last.message);
            self.last_collision = Some(last.message.clone());
            self.collision_count += events.len() as u64;
        }
        self.uniform.update(&self.camera, &self.projection);
        events
    }

    /// Update the projection aspect ratio for a new viewport size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.projection.resize(width, height);
        self.uniform.update(&self.camera, &self.projection);
    }

    /// Replace the runtime options.
    ///
    /// Step sizes, keybindings and projection parameters apply immediately;
    /// the camera's distance ratio is only read at construction.
    pub fn set_options(&mut self, options: Options) {
        let aspect = self.projection.aspect;
        self.projection = options.camera.projection(aspect);
        self.input.reconfigure(
            options.camera.clone(),
            options.keybindings.clone(),
        );
        self.options = options;
        self.uniform.update(&self.camera, &self.projection);
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::ProjectionMode;
    use crate::input::{InputEvent, MouseButton};

    fn engine() -> SceneEngine {
        SceneEngine::new(SceneConfig::default(), Options::default())
    }

    #[test]
    fn construction_applies_distance_ratio() {
        let e = engine();
        assert_eq!(e.camera().distance_ratio(), 4.0);
        assert_eq!(e.camera_uniform().position, [0.0, 0.0, -4.0]);
        assert_eq!(e.projection().mode, ProjectionMode::Perspective);
    }

    #[test]
    fn update_reports_and_remembers_collisions() {
        let scene = SceneConfig::from_json(
            r#"{
                "cubes": [{ "position": [2.0, 0.0, 0.0], "name": "target" }],
                "moving_cube": { "velocity": [1.0, 0.0, 0.0] }
            }"#,
        )
        .unwrap();
        let mut e = SceneEngine::new(scene, Options::default());
        assert!(e.last_collision().is_none());

        let events = e.update(1.0);
        assert_eq!(events.len(), 1);
        assert_eq!(e.last_collision(), Some("Collision with target"));
        assert_eq!(e.collision_count(), 1);
        assert!(e.world().moving().velocity.x < 0.0);

        // Quiet frames keep the last message.
        let _ = e.update(0.01);
        assert_eq!(e.last_collision(), Some("Collision with target"));
    }

    #[test]
    fn keys_drive_the_camera() {
        let mut e = engine();
        assert!(e.handle_key_press("KeyW"));
        assert!((e.camera().center() - Vec3::new(0.0, 0.2, 0.0)).length() < 1e-6);

        assert!(e.handle_key_press("KeyZ"));
        assert!((e.camera().zoom() - 0.9).abs() < 1e-6);

        assert!(!e.handle_key_press("KeyQ"));
    }

    #[test]
    fn toggle_projection_changes_matrix() {
        let mut e = engine();
        let before = e.projection_matrix();
        assert!(e.handle_key_press("KeyT"));
        assert_eq!(e.projection().mode, ProjectionMode::Orthographic);
        assert_ne!(e.projection_matrix(), before);
        e.execute(SceneCommand::ToggleProjection);
        assert_eq!(e.projection_matrix(), before);
    }

    #[test]
    fn drag_orbits_camera() {
        let mut e = engine();
        let eye = e.camera().eye();
        assert!(!e.handle_input(InputEvent::CursorMoved { x: 10.0, y: 10.0 }));
        assert!(!e.handle_input(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        }));
        assert!(e.handle_input(InputEvent::CursorMoved { x: 20.0, y: 10.0 }));
        assert_ne!(e.camera().eye(), eye);
        assert_eq!(e.camera().center(), Vec3::ZERO);
    }

    #[test]
    fn set_options_keeps_aspect() {
        let mut e = engine();
        e.resize(1600, 800);
        let mut options = Options::default();
        options.camera.projection = ProjectionMode::Orthographic;
        options.camera.zoom_step = 0.5;
        e.set_options(options);
        assert_eq!(e.projection().aspect, 2.0);
        assert_eq!(e.projection().mode, ProjectionMode::Orthographic);
        assert!(e.handle_key_press("KeyZ"));
        assert!((e.camera().zoom() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn instances_cover_every_cube() {
        let e = engine();
        assert_eq!(e.cube_instances().len(), 3);
    }
}
