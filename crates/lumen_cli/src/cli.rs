use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels selectable on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Scenes that ship with the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Builtin {
    /// Ground plus diffuse, hollow glass and fuzzy metal spheres
    ThreeSpheres,
    /// Hundreds of random small spheres around three large ones
    RandomSpheres,
}

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(name = "lumen", version)]
#[command(about = "Offline path tracer lit by a sky gradient")]
pub struct Args {
    /// JSON scene file to render
    #[arg(short, long, conflicts_with = "builtin")]
    pub scene: Option<PathBuf>,

    /// Built-in scene, used when no scene file is given
    #[arg(short, long, value_enum, default_value = "random-spheres")]
    pub builtin: Builtin,

    /// Output image (.png writes PNG, anything else plain-text PPM)
    #[arg(short, long, default_value = "image.ppm")]
    pub output: PathBuf,

    /// Override the image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Override the number of samples per pixel
    #[arg(long)]
    pub samples: Option<u32>,

    /// Override the maximum number of ray bounces
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Seed for the random number generator (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}
