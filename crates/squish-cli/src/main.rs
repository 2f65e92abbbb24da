//! Squish CLI: simulation, benchmarking, and debugging.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "squish")]
#[command(version, about = "Squish: deformable slime surface simulation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scripted scenario on a surface.
    Simulate {
        /// Path to surface config (TOML). Defaults are used when omitted.
        #[arg(short, long)]
        config: Option<String>,

        /// Which scenario to script (poke, swipe, multi_touch).
        #[arg(short, long, default_value = "poke")]
        scenario: String,

        /// Override the scenario's frame count.
        #[arg(short, long)]
        frames: Option<u32>,

        /// Write every frame to this JSON file.
        #[arg(short, long)]
        export: Option<String>,

        /// Write a state snapshot of the last frame to this file.
        #[arg(long)]
        snapshot: Option<String>,

        /// Scatter decorations over this share of the vertices.
        #[arg(long)]
        decorations: Option<f32>,
    },

    /// Run benchmark suite.
    Benchmark {
        /// Which scenario to run (poke, swipe, multi_touch, all).
        #[arg(short, long, default_value = "all")]
        scenario: String,

        /// Output CSV file path.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Inspect a state snapshot file.
    Inspect {
        /// Path to snapshot file.
        path: String,
    },

    /// Validate a surface config.
    Validate {
        /// Path to config file (TOML).
        path: String,

        /// Viewport width used to check the grid size.
        #[arg(long, default_value_t = 16.0)]
        width: f32,

        /// Viewport height used to check the grid size.
        #[arg(long, default_value_t = 9.0)]
        height: f32,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate {
            config,
            scenario,
            frames,
            export,
            snapshot,
            decorations,
        } => commands::simulate(commands::SimulateArgs {
            config: config.as_deref(),
            scenario: &scenario,
            frames,
            export: export.as_deref(),
            snapshot: snapshot.as_deref(),
            decorations,
        }),
        Commands::Benchmark { scenario, output } => {
            commands::benchmark(&scenario, output.as_deref())
        }
        Commands::Inspect { path } => commands::inspect(&path),
        Commands::Validate { path, width, height } => commands::validate(&path, width, height),
    };

    if let Err(e) = result {
        tracing::error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
