//! Standalone window backed by winit.
//!
//! The window drives a [`SceneEngine`]: input events become camera
//! commands, every redraw advances the simulation by the frame delta, and
//! the title bar shows the latest collision message and frame rate. Drawing
//! is left to whatever renderer consumes the engine's matrices.
//!
//! ```no_run
//! # use orbit_cubes::Viewer;
//! Viewer::builder()
//!     .with_scene_path("assets/scene.json")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::{path::PathBuf, sync::Arc, time::Duration};

use web_time::Instant;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use crate::{
    error::SceneError, options::Options, InputEvent, MouseButton,
    SceneConfig, SceneEngine,
};

/// How often the window title is refreshed.
const TITLE_REFRESH: Duration = Duration::from_millis(250);

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    scene_path: Option<PathBuf>,
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with sensible defaults (title "Orbit Cubes", default
    /// scene, default options).
    fn new() -> Self {
        Self {
            scene_path: None,
            options: None,
            title: "Orbit Cubes".into(),
        }
    }

    /// Load the scene description from a JSON file.
    ///
    /// A missing or malformed file is logged and the default scene is used.
    #[must_use]
    pub fn with_scene_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.scene_path = Some(path.into());
        self
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            scene_path: self.scene_path,
            options: self.options,
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that runs the cube scene.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    scene_path: Option<PathBuf>,
    options: Option<Options>,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    pub fn run(self) -> Result<(), SceneError> {
        let event_loop =
            EventLoop::new().map_err(|e| SceneError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let scene = self
            .scene_path
            .as_deref()
            .map_or_else(SceneConfig::default, SceneConfig::load_or_default);
        let engine = SceneEngine::new(scene, self.options.unwrap_or_default());

        let mut app = ViewerApp {
            window: None,
            engine,
            title: self.title,
            last_title_refresh: Instant::now(),
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| SceneError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: SceneEngine,
    title: String,
    last_title_refresh: Instant,
}

impl ViewerApp {
    fn refresh_title(&mut self, now: Instant) {
        if now.duration_since(self.last_title_refresh) < TITLE_REFRESH {
            return;
        }
        self.last_title_refresh = now;
        let Some(window) = &self.window else {
            return;
        };
        let fps = self.engine.frame_timing.fps();
        let title = match self.engine.last_collision() {
            Some(msg) => format!("{} | {msg} | {fps:.0} fps", self.title),
            None => format!("{} | {fps:.0} fps", self.title),
        };
        window.set_title(&title);
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        // Square viewport, matching the default 1:1 projection aspect.
        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(700, 700));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let inner = window.inner_size();
        self.engine.resize(inner.width, inner.height);

        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        if self.window.is_none() {
            return;
        }

        match event {
            WindowEvent::Resized(size) => {
                self.engine.resize(size.width, size.height);
            }

            WindowEvent::RedrawRequested => {
                if self.engine.frame_timing.should_render() {
                    let dt = self.engine.frame_timing.end_frame();
                    for event in self.engine.update(dt) {
                        log::debug!(
                            "struck #{} ({}) on {:?}",
                            event.index,
                            event.name,
                            event.axis
                        );
                    }
                    self.refresh_title(Instant::now());
                }
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            WindowEvent::MouseInput { button, state, .. } => {
                let _ = self.engine.handle_input(InputEvent::MouseButton {
                    button: MouseButton::from(button),
                    pressed: state == ElementState::Pressed,
                });
            }

            WindowEvent::CursorMoved { position, .. } => {
                #[allow(clippy::cast_possible_truncation)]
                let _ = self.engine.handle_input(InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
            }

            WindowEvent::MouseWheel { delta, .. } => {
                #[allow(clippy::cast_possible_truncation)]
                let scroll_delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                let _ = self.engine.handle_input(InputEvent::Scroll {
                    delta: scroll_delta,
                });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };

                let key_str = format!("{code:?}");
                if !self.engine.handle_key_press(&key_str) {
                    log::trace!("unbound key {key_str}");
                }
            }

            _ => {}
        }
    }
}
