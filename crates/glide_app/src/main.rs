//! `glide` - run scripted smooth-scroll scenarios without a window

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use glide_app::{run_loaded_scenario, HeadlessRunConfig, HeadlessScenario};
use glide_scroll::ScrollConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "glide")]
#[command(version, about = "Headless tester for Glide smooth scrolling")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scenario against the Scroll Tester window
    Run {
        /// Scenario JSON file
        scenario: PathBuf,
        /// Scroll tuning (TOML); defaults are used for missing keys
        #[arg(long)]
        config: Option<PathBuf>,
        /// Simulated frame rate
        #[arg(long, default_value_t = 60.0)]
        fps: f32,
        /// Also write the JSON report to this relative path
        #[arg(long)]
        report: Option<PathBuf>,
        /// Log velocity, overscroll and offset for every frame
        #[arg(long)]
        trace: bool,
    },
    /// Print a scroll configuration as TOML
    Config {
        #[arg(long, value_enum, default_value_t = Preset::Default)]
        preset: Preset,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Preset {
    Default,
    NoBounce,
    Snappy,
    Floaty,
}

impl Preset {
    fn config(self) -> ScrollConfig {
        match self {
            Preset::Default => ScrollConfig::default(),
            Preset::NoBounce => ScrollConfig::no_bounce(),
            Preset::Snappy => ScrollConfig::snappy(),
            Preset::Floaty => ScrollConfig::floaty(),
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Run {
            scenario,
            config,
            fps,
            report,
            trace,
        } => {
            let loaded = HeadlessScenario::from_path(&scenario)?;
            let scroll_config = match config {
                Some(path) => ScrollConfig::from_path(&path)?,
                None => ScrollConfig::default(),
            };
            let run_cfg = HeadlessRunConfig {
                fps,
                trace,
                ..Default::default()
            };

            let outcome = run_loaded_scenario(&loaded, scroll_config, run_cfg)
                .with_context(|| format!("scenario {} could not run", scenario.display()))?;

            if let Some(path) = report {
                outcome.report().write_to_path(&path)?;
            }
            outcome.report().write_to_writer(&mut std::io::stdout().lock())?;

            Ok(if outcome.is_failed() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
        Commands::Config { preset } => {
            print!("{}", preset.config().to_toml_string()?);
            Ok(ExitCode::SUCCESS)
        }
    }
}
