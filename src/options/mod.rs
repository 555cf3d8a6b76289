//! Viewer options with TOML preset support.
//!
//! Camera projection, input step sizes and keybindings live here. Options
//! serialize to/from TOML so a preset file can override any subset.

mod camera;
mod keybindings;

use std::path::Path;

pub use camera::CameraOptions;
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::SceneError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection and input step parameters.
    pub camera: CameraOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, SceneError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| SceneError::OptionsParse(e.to_string()))?;
        opts.keybindings.fill_missing_defaults();
        Ok(opts)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path).map_err(SceneError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), SceneError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SceneError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(SceneError::Io)?;
        }
        std::fs::write(path, content).map_err(SceneError::Io)
    }
}
