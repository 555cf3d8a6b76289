use super::{SceneCommand, SceneEngine};
use crate::input::InputEvent;

impl SceneEngine {
    /// Apply a single command to the camera or view state.
    pub fn execute(&mut self, command: SceneCommand) {
        log::trace!("execute {command:?}");
        match command {
            SceneCommand::PanLeft { distance } => self.camera.pan_left(distance),
            SceneCommand::PanUp { distance } => self.camera.pan_up(distance),
            SceneCommand::OrbitLeft { degrees } => {
                self.camera.orbit_left(degrees);
            }
            SceneCommand::OrbitUp { degrees } => self.camera.orbit_up(degrees),
            SceneCommand::DollyForward { distance } => {
                self.camera.dolly_forward(distance);
            }
            SceneCommand::ZoomNear { delta } => self.camera.zoom_near(delta),
            SceneCommand::ToggleProjection => {
                self.projection.mode = self.projection.mode.toggled();
                log::debug!("projection: {:?}", self.projection.mode);
            }
        }
        self.uniform.update(&self.camera, &self.projection);
    }

    /// Feed a raw input event. Returns `true` if it produced any command.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        let commands = self.input.handle_event(event);
        let consumed = !commands.is_empty();
        for command in commands {
            self.execute(command);
        }
        consumed
    }

    /// Feed a key press (`winit::keyboard::KeyCode` debug string).
    /// Returns `true` if the key is bound.
    pub fn handle_key_press(&mut self, key: &str) -> bool {
        match self.input.handle_key_press(key) {
            Some(command) => {
                self.execute(command);
                true
            }
            None => false,
        }
    }
}
