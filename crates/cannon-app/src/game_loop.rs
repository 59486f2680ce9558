//! Game loop thread: runs the simulation engine at the configured tick rate
//! and publishes snapshots.
//!
//! The engine is built and validated on the caller's thread, then moved into
//! the loop thread. Commands arrive over an `mpsc` channel; the latest
//! snapshot is stored in shared state for polling.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use cannon_core::commands::PlayerCommand;
use cannon_core::events::GameEvent;
use cannon_core::settings::SettingsError;
use cannon_core::state::GameStateSnapshot;
use cannon_sim::engine::{SimConfig, SimulationEngine};

use crate::autoplay::AutoGunner;
use crate::error::AppError;
use crate::state::{GameLoopCommand, LatestSnapshot};

/// Nominal duration of one tick at 1x speed.
pub fn tick_duration(tick_rate: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / u64::from(tick_rate.max(1)))
}

pub struct LoopConfig {
    pub sim: SimConfig,
    /// Queue `StartGame` before the first tick, skipping the menu.
    pub start_immediately: bool,
    /// Sleep between ticks to hold the tick rate. Unpaced runs as fast as
    /// possible.
    pub paced: bool,
    /// Stop after this many loop iterations, stalled or not. `None` runs
    /// until shutdown.
    pub max_ticks: Option<u64>,
    pub gunner: Option<AutoGunner>,
}

/// What the loop reports when it stops.
#[derive(Debug, Default)]
pub struct LoopSummary {
    pub ticks_run: u64,
    pub last_snapshot: Option<GameStateSnapshot>,
}

/// The engine plus whatever drives it each tick.
pub struct GameLoop {
    engine: SimulationEngine,
    gunner: Option<AutoGunner>,
    ticks_run: u64,
}

impl GameLoop {
    pub fn new(
        sim: SimConfig,
        start_immediately: bool,
        gunner: Option<AutoGunner>,
    ) -> Result<Self, SettingsError> {
        let mut engine = SimulationEngine::new(sim)?;
        if start_immediately {
            engine.queue_command(PlayerCommand::StartGame);
        }
        Ok(Self {
            engine,
            gunner,
            ticks_run: 0,
        })
    }

    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.engine.queue_command(command);
    }

    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }

    pub fn ticks_run(&self) -> u64 {
        self.ticks_run
    }

    /// Queue scripted input, then advance the engine one tick.
    pub fn step(&mut self) -> GameStateSnapshot {
        if let Some(gunner) = self.gunner.as_mut() {
            let tick = self.engine.time().tick;
            self.engine.queue_commands(gunner.commands_for(tick));
        }
        let snapshot = self.engine.tick();
        self.ticks_run += 1;
        log_events(&snapshot);
        snapshot
    }
}

fn log_events(snapshot: &GameStateSnapshot) {
    for event in &snapshot.events {
        if let GameEvent::ScoreChanged { value } = event {
            debug!(tick = snapshot.time.tick, score = value, "score changed");
        }
    }
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and a handle yielding the loop summary.
/// Invalid settings are reported before any thread is started.
pub fn spawn_game_loop(
    config: LoopConfig,
    latest_snapshot: LatestSnapshot,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<LoopSummary>), AppError> {
    let game = GameLoop::new(config.sim, config.start_immediately, config.gunner)?;
    let pacing = Pacing {
        paced: config.paced,
        max_ticks: config.max_ticks,
    };
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("cannon-game-loop".into())
        .spawn(move || run_game_loop(game, pacing, cmd_rx, &latest_snapshot))
        .map_err(AppError::Spawn)?;

    Ok((cmd_tx, handle))
}

struct Pacing {
    paced: bool,
    max_ticks: Option<u64>,
}

/// The game loop. Runs until shutdown, channel disconnect, or `max_ticks`.
fn run_game_loop(
    mut game: GameLoop,
    config: Pacing,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &LatestSnapshot,
) -> LoopSummary {
    let nominal = tick_duration(game.engine().settings().tick_rate);
    let show_fps = game.engine().settings().show_fps;
    let mut summary = LoopSummary::default();

    let mut next_tick_time = Instant::now();
    let mut fps_window_start = Instant::now();
    let mut fps_ticks = 0u32;

    loop {
        if config.max_ticks.is_some_and(|max| game.ticks_run() >= max) {
            break;
        }

        // 1. Drain all pending commands
        let mut shutdown = false;
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => game.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    shutdown = true;
                    break;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }
        if shutdown {
            break;
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let snapshot = game.step();

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot.clone());
        }
        summary.last_snapshot = Some(snapshot);

        if show_fps {
            fps_ticks += 1;
            let elapsed = fps_window_start.elapsed();
            if elapsed >= Duration::from_secs(1) {
                info!(tps = f64::from(fps_ticks) / elapsed.as_secs_f64(), "tick rate");
                fps_ticks = 0;
                fps_window_start = Instant::now();
            }
        }

        if !config.paced {
            continue;
        }

        // 4. Sleep until next tick, adjusting for time_scale. A stalled
        // engine still polls commands at the nominal rate.
        let time_scale = game.engine().time_scale();
        let effective_tick_duration = if time_scale > 0.0 {
            nominal.div_f64(time_scale)
        } else {
            nominal
        };

        next_tick_time += effective_tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > effective_tick_duration * 2 {
            // Too far behind, reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }

    summary.ticks_run = game.ticks_run();
    info!(ticks = summary.ticks_run, "game loop stopped");
    summary
}
