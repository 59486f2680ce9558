//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions that take `&mut World` (or `&World` for read-only).
//! State lives in components, except for the collision contact set and the
//! session, which the engine owns.

pub mod cleanup;
pub mod collision;
pub mod expiry;
pub mod fire;
pub mod lift;
pub mod movement;
pub mod scoring;
pub mod snapshot;
