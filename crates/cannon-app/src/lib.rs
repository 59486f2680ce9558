//! Cannon application.
//!
//! Wires the simulation to a game-loop thread, a command channel,
//! logging and a scripted auto-gunner for headless sessions.

pub mod autoplay;
pub mod error;
pub mod game_loop;
pub mod logging;
pub mod state;

pub use cannon_core as core;
pub use error::AppError;
