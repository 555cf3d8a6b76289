//! Input handling: event types, key actions, the drag step filter, and the
//! input processor that converts raw window events into scene commands.

/// Platform-agnostic input events.
pub mod event;
/// Bindable key actions.
pub mod keyboard;
/// Drag step filter for pointer orbiting.
pub(crate) mod mouse;
/// Converts raw events into scene commands.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use keyboard::KeyAction;
pub use processor::InputProcessor;
