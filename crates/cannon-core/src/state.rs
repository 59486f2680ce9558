//! Game state snapshot: the complete visible state published after each tick.

use serde::{Deserialize, Serialize};

use crate::components::Hitbox;
use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Position, SimTime, Velocity};

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub score: ScoreView,
    pub stats: StatsView,
    pub lift: Option<LiftView>,
    pub projectiles: Vec<ProjectileView>,
    /// Static scenery: bounds and basket pieces.
    pub bodies: Vec<BodyView>,
    pub events: Vec<GameEvent>,
}

/// Score counter bound to a text label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreView {
    pub value: u64,
    pub text: String,
}

impl ScoreView {
    pub fn new(value: u64) -> Self {
        Self {
            value,
            text: format_score(value),
        }
    }
}

/// Label text for a score value.
pub fn format_score(value: u64) -> String {
    format!("Score: [{value}]")
}

/// Shot bookkeeping for the current session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsView {
    pub shots_fired: u32,
    pub hits: u32,
    pub expired: u32,
}

/// The cannon and its lift state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiftView {
    pub position: Position,
    pub direction: Direction,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    /// Entity id bits, stable for the projectile's lifetime.
    pub id: u64,
    pub position: Position,
    pub velocity: Velocity,
    /// Seconds since spawn.
    pub age_secs: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyView {
    pub category: Category,
    pub position: Position,
    pub size: Hitbox,
    pub collidable: bool,
}
