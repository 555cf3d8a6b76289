//! Converts raw platform events into scene commands.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking,
//! the drag step filter, which button is held) plus the key-binding map.
//! It is the only thing that sits between raw window events and
//! [`SceneEngine::execute`](crate::engine::SceneEngine::execute).

use super::event::{InputEvent, MouseButton};
use super::mouse::DragStepFilter;
use crate::engine::SceneCommand;
use crate::options::{CameraOptions, KeybindingOptions};

/// Converts raw window events into [`SceneCommand`]s.
///
/// Pointer drags orbit the camera in fixed steps: each axis fires once the
/// cursor has travelled the drag threshold since that axis last fired.
/// Dragging right orbits left by a negative step and dragging down orbits
/// up by a negative step, so the scene follows the cursor.
///
/// # Usage
///
/// ```ignore
/// for cmd in processor.handle_event(event) {
///     engine.execute(cmd);
/// }
///
/// if let Some(cmd) = processor.handle_key_press("KeyW") {
///     engine.execute(cmd);
/// }
/// ```
pub struct InputProcessor {
    drag: DragStepFilter,
    /// Last known cursor position in physical pixels.
    cursor: (f32, f32),
    /// Set while the primary button is held.
    drag_button: Option<MouseButton>,
    camera: CameraOptions,
    key_bindings: KeybindingOptions,
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new(CameraOptions::default(), KeybindingOptions::default())
    }
}

impl InputProcessor {
    /// Create a processor with the given step sizes and key bindings.
    #[must_use]
    pub fn new(camera: CameraOptions, key_bindings: KeybindingOptions) -> Self {
        Self {
            drag: DragStepFilter::new(camera.drag_threshold),
            cursor: (0.0, 0.0),
            drag_button: None,
            camera,
            key_bindings,
        }
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn cursor(&self) -> (f32, f32) {
        self.cursor
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn dragging(&self) -> bool {
        self.drag_button.is_some()
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Replace step sizes and bindings, e.g. after loading a preset.
    pub fn reconfigure(
        &mut self,
        camera: CameraOptions,
        key_bindings: KeybindingOptions,
    ) {
        self.drag.set_threshold(camera.drag_threshold);
        self.camera = camera;
        self.key_bindings = key_bindings;
    }

    /// Look up a key press and return the corresponding command, if bound.
    ///
    /// Key strings use the `winit::keyboard::KeyCode` debug format:
    /// `"KeyW"`, `"KeyT"`, etc.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<SceneCommand> {
        self.key_bindings
            .lookup(key)
            .map(|action| action.to_command(&self.camera))
    }

    /// Process a raw input event and return the commands it produces.
    ///
    /// A single cursor move can orbit on both axes, so up to two commands
    /// come back.
    pub fn handle_event(&mut self, event: InputEvent) -> Vec<SceneCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed);
                Vec::new()
            }
            InputEvent::Scroll { delta } => self.handle_scroll(delta),
        }
    }

    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Vec<SceneCommand> {
        self.cursor = (x, y);
        if self.drag_button.is_none() {
            return Vec::new();
        }

        let steps = self.drag.sample(x, y);
        let degrees = self.camera.orbit_step;
        let mut commands = Vec::with_capacity(2);
        if steps.x != 0 {
            commands.push(SceneCommand::OrbitLeft {
                degrees: -f32::from(steps.x) * degrees,
            });
        }
        if steps.y != 0 {
            commands.push(SceneCommand::OrbitUp {
                degrees: -f32::from(steps.y) * degrees,
            });
        }
        commands
    }

    fn handle_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        if pressed {
            if button == MouseButton::Left && self.drag_button.is_none() {
                self.drag_button = Some(button);
                self.drag.reset(self.cursor.0, self.cursor.1);
            }
        } else if self.drag_button == Some(button) {
            self.drag_button = None;
        }
    }

    fn handle_scroll(&self, delta: f32) -> Vec<SceneCommand> {
        let step = self.camera.zoom_step;
        if delta > 0.0 {
            vec![SceneCommand::ZoomNear { delta: step }]
        } else if delta < 0.0 {
            vec![SceneCommand::ZoomNear { delta: -step }]
        } else {
            Vec::new()
        }
    }
}
