//! lumo: render a scene file (or the built-in demo) to a PNG.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;

use lumo_core::{load_scene_file, Scene, SceneDescription};
use lumo_renderer::{render, RenderConfig, ScreenCamera, DEFAULT_MAX_DEPTH, MAX_DIMENSION};

mod demo;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "lumo")]
#[command(version)]
#[command(about = "Recursive ray tracer with shadows and mirror reflections")]
struct Cli {
    /// TOML scene file; renders the built-in demo when omitted
    #[arg(short, long)]
    scene: Option<PathBuf>,

    /// Output PNG path
    #[arg(short, long, default_value = "render.png")]
    output: PathBuf,

    /// Image width (overrides the scene file)
    #[arg(long)]
    width: Option<u32>,

    /// Image height (overrides the scene file)
    #[arg(long)]
    height: Option<u32>,

    /// Maximum reflection bounces (overrides the scene file)
    #[arg(long)]
    max_depth: Option<u32>,

    /// Seed for fan palette colors (overrides the scene file)
    #[arg(long)]
    seed: Option<u64>,

    /// Logging level
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Resolve the scene and render settings from the CLI and optional file.
fn prepare(cli: &Cli) -> Result<(Scene, ScreenCamera, RenderConfig)> {
    let description = match &cli.scene {
        Some(path) => load_scene_file(path)
            .with_context(|| format!("Failed to load scene file {}", path.display()))?,
        None => SceneDescription::default(),
    };

    let file = description.render;
    let config = RenderConfig {
        width: cli.width.or(file.width).unwrap_or(400),
        height: cli.height.or(file.height).unwrap_or(300),
        max_depth: cli.max_depth.or(file.max_depth).unwrap_or(DEFAULT_MAX_DEPTH),
    };
    anyhow::ensure!(
        config.width > 0 && config.height > 0,
        "Image size must be non-zero, got {}x{}",
        config.width,
        config.height
    );
    anyhow::ensure!(
        config.width <= MAX_DIMENSION && config.height <= MAX_DIMENSION,
        "Image size {}x{} exceeds the {}x{} limit",
        config.width,
        config.height,
        MAX_DIMENSION,
        MAX_DIMENSION
    );

    let mut rng = make_rng(cli.seed.or(file.seed));
    let scene = match &cli.scene {
        Some(_) => description.build(&mut rng).context("Failed to build scene")?,
        None => {
            log::info!("No scene file given, rendering the built-in demo");
            demo::demo_scene(&mut rng).context("Failed to build demo scene")?
        }
    };

    let eye = description.eye().unwrap_or(ScreenCamera::DEFAULT_EYE);
    let camera = ScreenCamera::for_aspect(eye, config.width, config.height);

    Ok((scene, camera, config))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(cli.log_level.into())
        .init();

    log::info!("Starting lumo");

    let (scene, camera, config) = prepare(&cli)?;
    let image = render(&scene, &camera, &config).context("Render failed")?;

    image
        .save_png(&cli.output)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;
    log::info!("Saved {}", cli.output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["lumo"]);
        assert!(cli.scene.is_none());
        assert_eq!(cli.output, PathBuf::from("render.png"));

        let (scene, camera, config) = prepare(&Cli::parse_from(["lumo", "--seed", "3"])).unwrap();
        assert_eq!(scene.primitive_count(), 4);
        assert_eq!(camera.eye, ScreenCamera::DEFAULT_EYE);
        assert_eq!((config.width, config.height), (400, 300));
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_cli_overrides_file() {
        let scene_path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../scenes/fan_checkerboard.toml");
        let cli = Cli::parse_from([
            "lumo",
            "--scene",
            scene_path,
            "--width",
            "32",
            "--max-depth",
            "2",
            "--seed",
            "11",
        ]);

        let (scene, _camera, config) = prepare(&cli).unwrap();
        assert_eq!(config.width, 32);
        assert_eq!(config.height, 300);
        assert_eq!(config.max_depth, 2);
        assert_eq!(scene.lights().len(), 3);
    }

    #[test]
    fn test_missing_scene_file() {
        let cli = Cli::parse_from(["lumo", "--scene", "/nonexistent/scene.toml"]);
        assert!(prepare(&cli).is_err());
    }

    #[test]
    fn test_zero_size_rejected() {
        let cli = Cli::parse_from(["lumo", "--width", "0"]);
        assert!(prepare(&cli).is_err());
    }

    #[test]
    fn test_oversized_image_rejected() {
        let cli = Cli::parse_from(["lumo", "--width", "70000", "--height", "70000"]);
        assert!(prepare(&cli).is_err());

        let cli = Cli::parse_from(["lumo", "--width", "16384", "--height", "8", "--seed", "1"]);
        assert!(prepare(&cli).is_ok());
    }
}
