// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Orbit camera and AABB collision core for a small cube scene viewer.
//!
//! A handful of static cubes sit inside a bounding box while one moving
//! cube bounces between them and the walls. The camera orbits, pans, dollies
//! and zooms around a look-at center.
//!
//! # Key entry points
//!
//! - [`SceneEngine`] - owns the camera and collision world and advances
//!   them once per frame
//! - [`OrbitCamera`] - eye/center/up camera with orbit, pan, dolly and zoom
//! - [`CollisionWorld`] - moving box versus static boxes and the boundary
//! - [`SceneConfig`] - JSON scene description
//! - [`Options`] - TOML camera and keybinding options
//!
//! # Architecture
//!
//! Raw window events go through [`input::InputProcessor`], which turns them
//! into [`SceneCommand`]s. The engine applies commands to the camera between
//! frames and calls [`CollisionWorld::tick`] once per frame. The optional
//! `viewer` feature wraps all of this in a winit window.

pub mod camera;
pub mod collision;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod input;
pub mod options;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use camera::{OrbitCamera, Projection, ProjectionMode};
pub use collision::{CollisionEvent, CollisionWorld};
pub use engine::{SceneCommand, SceneEngine};
pub use error::SceneError;
pub use input::{InputEvent, MouseButton};
pub use options::Options;
pub use scene::SceneConfig;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
