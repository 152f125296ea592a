use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use lumen_core::{load_scene, SceneDescription};
use lumen_renderer::{build_world, writer_for_path, Camera};

mod cli;

use cli::{Args, Builtin};

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    log::info!("Starting lumen {}", env!("CARGO_PKG_VERSION"));

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("Random seed: {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut scene = match &args.scene {
        Some(path) => load_scene(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => match args.builtin {
            Builtin::ThreeSpheres => SceneDescription::three_spheres(),
            Builtin::RandomSpheres => SceneDescription::random_spheres(&mut rng),
        },
    };
    apply_overrides(&mut scene, &args);

    let world = build_world(&scene).context("Failed to build world")?;
    let mut camera = Camera::from_settings(&scene.camera);

    let mut writer = writer_for_path(&args.output)
        .with_context(|| format!("Failed to open {}", args.output.display()))?;
    camera
        .render(&world, writer.as_mut(), &mut rng)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    log::info!("Wrote {}", args.output.display());
    Ok(())
}

/// Command line settings win over the scene's camera settings.
fn apply_overrides(scene: &mut SceneDescription, args: &Args) {
    let camera = &mut scene.camera;
    if let Some(width) = args.width {
        camera.image_width = width;
    }
    if let Some(samples) = args.samples {
        camera.samples_per_pixel = samples;
    }
    if let Some(max_depth) = args.max_depth {
        camera.max_depth = max_depth;
    }
}
