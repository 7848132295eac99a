//! Bloom CLI
//!
//! Inspect travel plans and configs, and simulate gestures headlessly.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bloom_core::{SeededRandom, Size};
use bloom_reactions::{BloomConfig, Fountain};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod simulate;

#[derive(Parser)]
#[command(name = "bloom")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Floating reaction icons: plans, configs and simulations", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one travel plan as JSON
    Plan {
        #[command(flatten)]
        setup: Setup,

        /// Print the travel path as SVG path data instead
        #[arg(long)]
        svg: bool,
    },

    /// Print the effective configuration as TOML
    Config {
        /// Config file to load instead of a preset
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Built-in preset
        #[arg(short, long, value_enum, default_value = "hearts")]
        preset: Preset,
    },

    /// Simulate taps and a long press, then print a JSON summary
    Simulate {
        #[command(flatten)]
        setup: Setup,

        /// Number of taps
        #[arg(long, default_value = "1")]
        taps: u32,

        /// Long-press hold time after the press is recognized (0 to skip)
        #[arg(long, default_value = "350")]
        hold_ms: f32,

        /// Frame rate of the simulated frame loop
        #[arg(long, default_value = "60")]
        fps: u32,
    },
}

/// Container and randomness shared by `plan` and `simulate`
#[derive(clap::Args)]
struct Setup {
    /// Config file to load instead of a preset
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Built-in preset
    #[arg(short, long, value_enum, default_value = "hearts")]
    preset: Preset,

    /// Container width in points
    #[arg(long, default_value = "390")]
    width: f32,

    /// Container height in points
    #[arg(long, default_value = "844")]
    height: f32,

    /// Seed for reproducible output (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Preset {
    Hearts,
    Reactions,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Plan { setup, svg } => cmd_plan(&setup, svg),
        Commands::Config { config, preset } => cmd_config(config.as_deref(), preset),
        Commands::Simulate {
            setup,
            taps,
            hold_ms,
            fps,
        } => cmd_simulate(&setup, taps, hold_ms, fps),
    }
}

fn load_config(path: Option<&Path>, preset: Preset) -> Result<BloomConfig> {
    match path {
        Some(path) => BloomConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(match preset {
            Preset::Hearts => BloomConfig::hearts(),
            Preset::Reactions => BloomConfig::reactions(),
        }),
    }
}

fn fountain(setup: &Setup) -> Result<Fountain> {
    let bounds = Size::new(setup.width, setup.height);
    if !bounds.is_positive() {
        anyhow::bail!(
            "Container size must be positive, got {}x{}",
            setup.width,
            setup.height
        );
    }

    let config = load_config(setup.config.as_deref(), setup.preset)?;
    Fountain::new(bounds, &config).context("Invalid configuration")
}

fn random(seed: Option<u64>) -> SeededRandom {
    match seed {
        Some(seed) => SeededRandom::new(seed),
        None => SeededRandom::from_entropy(),
    }
}

fn cmd_plan(setup: &Setup, svg: bool) -> Result<()> {
    let fountain = fountain(setup)?;
    let stage = fountain.stage();
    let origin = fountain.fountain_point();

    let mut rng = random(setup.seed);
    let plan = stage
        .animator()
        .plan(&mut rng, origin, stage.icon_size(), stage.bounds());

    info!(
        "Plan from ({}, {}) lasting {:.2}s",
        origin.x,
        origin.y,
        plan.timing.total_secs()
    );

    let motion = plan.path.motion(plan.timing.total_ms());
    debug!(bounds = ?motion.tight_bounds(), "Travel path bounds");

    if svg {
        println!("{}", motion.to_svg_path_data());
    } else {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    }
    Ok(())
}

fn cmd_config(path: Option<&Path>, preset: Preset) -> Result<()> {
    let config = load_config(path, preset)?;
    print!("{}", config.to_toml()?);
    Ok(())
}

fn cmd_simulate(setup: &Setup, taps: u32, hold_ms: f32, fps: u32) -> Result<()> {
    if fps == 0 {
        anyhow::bail!("Frame rate must be at least 1");
    }

    let mut fountain = fountain(setup)?.with_random(random(setup.seed));
    info!(
        "Simulating {} tap(s) and a {}ms long press at {} fps",
        taps, hold_ms, fps
    );

    let summary = simulate::run(
        &mut fountain,
        simulate::Script {
            taps,
            hold_ms: hold_ms.max(0.0),
            fps,
        },
    );

    info!(
        "Spawned {} icon(s), {} detached after {:.2}s",
        summary.spawned,
        summary.removed,
        summary.simulated_ms / 1000.0
    );
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
