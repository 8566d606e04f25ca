//! Gravity Sim entry point
//!
//! Headless runner: builds the configured system, drives the tick loop for a
//! fixed number of frames and logs the aggregate statistics.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec2;

use gravity_sim::display::{StatsText, Vertex, build_frame, tessellate};
use gravity_sim::settings::{HistoryPreset, Settings};
use gravity_sim::sim::{Integrator, SimState, TickInput, tick};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON settings file; defaults are used when omitted
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Override the dataset seed
    #[arg(long)]
    seed: Option<u64>,

    /// Number of frames to run
    #[arg(short, long, default_value_t = 1000)]
    ticks: u64,

    /// Log statistics every N frames
    #[arg(long, default_value_t = 100)]
    log_every: u64,

    /// Use semi-implicit Euler instead of the predictor-corrector
    #[arg(long)]
    euler: bool,

    /// Trail length preset: short, medium or long
    #[arg(long, value_parser = parse_history_preset)]
    history: Option<HistoryPreset>,

    /// Write the effective settings to this file and exit
    #[arg(long)]
    write_settings: Option<PathBuf>,
}

fn parse_history_preset(s: &str) -> std::result::Result<HistoryPreset, String> {
    HistoryPreset::from_str(s).ok_or_else(|| format!("unknown history preset '{s}'"))
}

fn load_settings(args: &Args) -> Result<Settings> {
    let mut settings = match &args.settings {
        Some(path) => Settings::load(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    if let Some(seed) = args.seed {
        settings.seed = seed;
    }
    if args.euler {
        settings.integrator = Integrator::SemiImplicitEuler;
    }
    if let Some(preset) = args.history {
        log::info!("Using {} history preset", preset.as_str());
        settings.apply_preset(preset);
    }
    settings.validate().context("invalid settings")?;
    Ok(settings)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let settings = load_settings(&args)?;

    if let Some(path) = &args.write_settings {
        settings
            .save(path)
            .with_context(|| format!("failed to write settings to {}", path.display()))?;
        return Ok(());
    }

    log::info!("Gravity Sim (headless) starting...");
    let mut state = SimState::new(&settings);
    let initial = state.stats();
    let input = TickInput::default();
    let every = args.log_every.max(1);

    for frame in 1..=args.ticks {
        tick(&mut state, &input);

        if frame % every == 0 {
            let stats = state.stats();
            let drawn = build_frame(
                &state.particles,
                &stats,
                &state.display,
                &state.viewport,
                Vec2::new(1000.0, 1000.0),
            );
            let vertices = tessellate(&drawn);
            log::info!(
                "tick {:>6}: E={:.6} vertices={} ({} bytes)",
                state.time_ticks,
                stats.total_energy(),
                vertices.len(),
                vertices.len() * Vertex::STRIDE
            );
            for (target, text) in drawn.stats.targets() {
                log::debug!("[{target}] {text}");
            }
        }
    }

    let last = state.stats();
    for (_, text) in StatsText::new(&last).targets() {
        println!("{text}");
    }
    let drift = (last.total_energy() - initial.total_energy()) / initial.total_energy().abs();
    println!(
        "{} particles, {} ticks, momentum drift {:.3e}, relative energy drift {:.3e}",
        state.particles.len(),
        state.time_ticks,
        (last.momentum - initial.momentum).length(),
        drift
    );
    Ok(())
}
