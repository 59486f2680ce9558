use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use cannon_app::autoplay::AutoGunner;
use cannon_app::game_loop::{self, LoopConfig};
use cannon_app::state::new_latest_snapshot;
use cannon_app::AppError;
use cannon_core::settings::GameSettings;
use cannon_sim::SimConfig;

/// Run a cannon session with a scripted gunner.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML settings file. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of ticks to run.
    #[arg(long, default_value_t = 1800)]
    ticks: u64,
    /// Seed for the gunner's aim.
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Pace the loop to the tick rate instead of running flat out.
    #[arg(long)]
    realtime: bool,
    /// Ticks between shots. Zero disables the gunner.
    #[arg(long, default_value_t = 45)]
    shot_interval: u64,
    /// Write the final snapshot as JSON.
    #[arg(long)]
    snapshot_out: Option<PathBuf>,
}

fn main() -> ExitCode {
    cannon_app::logging::init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "cannon failed");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let settings = match &args.config {
        Some(path) => GameSettings::load(path)?,
        None => GameSettings::default(),
    };
    info!(
        title = %settings.title,
        version = %settings.version,
        tick_rate = settings.tick_rate,
        ticks = args.ticks,
        seed = args.seed,
        "starting"
    );

    let gunner = AutoGunner::new(args.seed, args.shot_interval, settings.height);
    let config = LoopConfig {
        sim: SimConfig {
            settings,
            ..SimConfig::default()
        },
        start_immediately: true,
        paced: args.realtime,
        max_ticks: Some(args.ticks),
        gunner: Some(gunner),
    };

    let latest = new_latest_snapshot();
    let (cmd_tx, handle) = game_loop::spawn_game_loop(config, latest)?;
    let summary = handle.join().map_err(|_| AppError::LoopPanicked)?;
    drop(cmd_tx);

    let Some(last) = summary.last_snapshot else {
        info!(ticks = summary.ticks_run, "no ticks run");
        return Ok(());
    };
    info!(
        ticks = summary.ticks_run,
        score = %last.score.text,
        shots = last.stats.shots_fired,
        hits = last.stats.hits,
        expired = last.stats.expired,
        "session finished"
    );

    if let Some(path) = args.snapshot_out {
        let json = serde_json::to_string_pretty(&last)?;
        std::fs::write(&path, json).map_err(|source| AppError::WriteSnapshot {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "snapshot written");
    }
    Ok(())
}
