//! Core types and definitions for the Cannon game.
//!
//! This crate defines the vocabulary shared across the other crates:
//! components, commands, input events, state snapshots, events, settings
//! and constants. It has no dependency on the ECS or any runtime.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod settings;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
