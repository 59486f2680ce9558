//! State shared between the driver thread and the game loop thread.

use std::sync::{Arc, Mutex};

use cannon_core::commands::PlayerCommand;
use cannon_core::state::GameStateSnapshot;

/// Commands sent from the driver to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot for synchronous polling. Updated by the game loop
/// thread after each tick; `None` before the first tick.
pub type LatestSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;

pub fn new_latest_snapshot() -> LatestSnapshot {
    Arc::new(Mutex::new(None))
}

/// Clone the latest snapshot, if one has been published.
/// A poisoned lock reads as no snapshot.
pub fn read_latest(latest: &LatestSnapshot) -> Option<GameStateSnapshot> {
    latest.lock().ok().and_then(|lock| lock.clone())
}
