//! Simulation engine for Cannon.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameStateSnapshots for a driver.

pub mod engine;
pub mod input;
pub mod session;
pub mod systems;
pub mod world_setup;

pub use cannon_core as core;
pub use engine::{SimConfig, SimulationEngine};
