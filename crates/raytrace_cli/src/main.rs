use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

mod cli;
mod config;
mod logger;

use cli::Args;
use config::{SceneKind, Settings};
use logger::init_logger;
use raytrace_renderer::{
    gradient, render_parallel, render_seeded, save_image, scene, ImageBuffer,
};

fn main() -> Result<()> {
    let args = Args::parse();

    init_logger(args.log_level.into());
    info!("raytrace {}", env!("CARGO_PKG_VERSION"));

    let settings = load_settings(&args)?;
    debug!("Settings: {:?}", settings);

    let image = render_image(&settings);

    // The gradient is a calibration pattern and is written linear
    let gamma = settings.scene != SceneKind::Gradient;
    save_image(&image, &args.output, gamma)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    Ok(())
}

/// Defaults, then the config file if any, then command line flags.
fn load_settings(args: &Args) -> Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Settings::default(),
    };
    settings.apply_args(args);
    settings.validate()?;
    Ok(settings)
}

fn render_image(settings: &Settings) -> ImageBuffer {
    let world = match settings.scene {
        SceneKind::Gradient => return gradient(settings.width, settings.height),
        SceneKind::Random => {
            let mut rng = StdRng::seed_from_u64(settings.seed);
            scene::random_scene(&mut rng)
        }
        SceneKind::Showcase => scene::showcase(),
        SceneKind::SingleSphere => scene::single_sphere(),
    };
    info!("Scene {:?} with {} objects", settings.scene, world.len());

    let camera = settings.camera();
    let config = settings.render_config();

    if settings.parallel {
        render_parallel(&camera, &world, &config, settings.seed)
    } else {
        render_seeded(&camera, &world, &config, settings.seed)
    }
}
