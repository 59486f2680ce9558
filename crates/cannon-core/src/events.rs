//! Events emitted by the simulation for UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::{Direction, RemovalReason};
use crate::types::{Position, Velocity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A fresh session began with a zero score.
    SessionStarted,
    /// The lift changed travel direction.
    LiftReversed { direction: Direction },
    ProjectileFired { position: Position, velocity: Velocity },
    ProjectileRemoved { reason: RemovalReason },
    /// Score counter changed to `value`.
    ScoreChanged { value: u64 },
}
