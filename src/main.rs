//! Window binary: loads an optional scene and options file, then runs the
//! viewer.

use std::path::Path;

use orbit_cubes::{Options, Viewer};

const USAGE: &str = "Usage: orbit-cubes [scene.json] [options.toml]";

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let scene_arg = args.next();
    let options_arg = args.next();

    if scene_arg.as_deref().is_some_and(|a| a == "-h" || a == "--help") {
        log::info!("{USAGE}");
        return;
    }

    let options = match options_arg.as_deref() {
        Some(path) => Options::load(Path::new(path)).unwrap_or_else(|e| {
            log::warn!("Failed to load options from {path}: {e}, using defaults");
            Options::default()
        }),
        None => Options::default(),
    };

    let mut builder = Viewer::builder().with_options(options);
    if let Some(path) = scene_arg {
        builder = builder.with_scene_path(path);
    } else {
        log::info!("No scene file given, using the built-in scene");
    }

    if let Err(e) = builder.build().run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
