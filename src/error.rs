//! Crate-level error types.

use std::fmt;

/// Errors produced by the orbit-cubes crate.
///
/// The camera and collision cores never fail; these cover loading and
/// saving configuration and running the viewer.
#[derive(Debug)]
pub enum SceneError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// JSON scene description parsing failure.
    ConfigParse(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(msg) => write!(f, "scene config error: {msg}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SceneError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
