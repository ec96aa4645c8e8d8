use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use terrain_generator::export;
use terrain_generator::gradient::ColorGradient;
use terrain_generator::{generate_terrain, HeightStats, TerrainConfig, TerrainPreset};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum GradientChoice {
    Terrain,
    Grayscale,
    Desert,
    Alpine,
}

impl GradientChoice {
    fn gradient(self) -> ColorGradient {
        match self {
            Self::Terrain => ColorGradient::terrain(),
            Self::Grayscale => ColorGradient::grayscale(),
            Self::Desert => ColorGradient::desert(),
            Self::Alpine => ColorGradient::alpine(),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "terrain_generator")]
#[command(about = "Generate a smoothed Perlin-noise heightmap")]
struct Args {
    /// JSON configuration file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start from a named parameter set instead of the defaults
    #[arg(short, long, value_enum)]
    preset: Option<TerrainPreset>,

    /// Cells along x [default: 512]
    #[arg(short = 'W', long)]
    width: Option<usize>,

    /// Cells along y [default: 512]
    #[arg(short = 'L', long)]
    length: Option<usize>,

    /// Noise scale; larger values give smoother terrain [default: 50]
    #[arg(long)]
    noise_scale: Option<f64>,

    /// Random seed [default: 0]
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of smoothing passes [default: 5]
    #[arg(short, long)]
    iterations: Option<usize>,

    /// Cells above this height grow on every pass [default: 0.5]
    #[arg(short, long)]
    threshold: Option<f32>,

    /// Height of a cell at 1.0 in the raw export [default: 100]
    #[arg(long)]
    max_height: Option<f32>,

    /// Grayscale heightmap image
    #[arg(short, long, default_value = "heightmap.png")]
    output: PathBuf,

    /// Colour texture built from the gradient
    #[arg(long)]
    color_output: Option<PathBuf>,

    /// Colour ramp for the texture
    #[arg(long, value_enum, default_value_t = GradientChoice::Terrain)]
    gradient: GradientChoice,

    /// Denormalized little-endian f32 heights
    #[arg(long)]
    raw_output: Option<PathBuf>,

    /// Generate and report statistics only
    #[arg(long)]
    no_export: bool,
}

impl Args {
    fn resolve_config(&self) -> anyhow::Result<TerrainConfig> {
        let mut config = match (&self.config, self.preset) {
            (Some(path), _) => TerrainConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            (None, Some(preset)) => TerrainConfig::from_preset(preset),
            (None, None) => TerrainConfig::default(),
        };

        if let Some(width) = self.width {
            config.generation.width = width;
        }
        if let Some(length) = self.length {
            config.generation.length = length;
        }
        if let Some(noise_scale) = self.noise_scale {
            config.generation.noise_scale = noise_scale;
        }
        if let Some(seed) = self.seed {
            config.generation.seed = seed;
        }
        if let Some(iterations) = self.iterations {
            config.smoothing.iterations = iterations;
        }
        if let Some(threshold) = self.threshold {
            config.smoothing.threshold = threshold;
        }
        if let Some(max_height) = self.max_height {
            config.max_height = max_height;
        }
        Ok(config)
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    let config = args.resolve_config()?;
    let generation = &config.generation;
    let smoothing = &config.smoothing;

    info!("Generating terrain with seed: {}", generation.seed);
    info!(
        "Grid: {}x{}, noise scale {}, {} smoothing passes at threshold {}",
        generation.width, generation.length, generation.noise_scale,
        smoothing.iterations, smoothing.threshold
    );

    let heights = generate_terrain(generation, smoothing).context("generating terrain")?;
    HeightStats::of(&heights, smoothing.threshold).log("Heightmap");

    if args.no_export {
        return Ok(());
    }

    export::export_grayscale(&heights, &args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;
    info!("Saved {}", args.output.display());

    if let Some(path) = &args.color_output {
        export::export_colored(&heights, &args.gradient.gradient(), path)
            .with_context(|| format!("writing {}", path.display()))?;
        info!("Saved {}", path.display());
    }

    if let Some(path) = &args.raw_output {
        export::export_raw(&heights, config.max_height, path)
            .with_context(|| format!("writing {}", path.display()))?;
        info!("Saved {} (max height {})", path.display(), config.max_height);
    }

    Ok(())
}
