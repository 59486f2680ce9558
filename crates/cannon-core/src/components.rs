//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic.
//! Game logic lives in systems, not components.
//! `Position`, `Velocity` (types.rs) and `Category` (enums.rs) are used as
//! components too.

use serde::{Deserialize, Serialize};

use crate::enums::{Direction, ProjectileState};
use crate::types::Position;

/// Axis-aligned collision/visual rectangle anchored at the entity position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hitbox {
    pub width: f64,
    pub height: f64,
}

impl Hitbox {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn square(size: f64) -> Self {
        Self::new(size, size)
    }

    /// Strict overlap test between this box at `a` and `other` at `b`.
    /// Boxes that only share an edge do not overlap.
    pub fn overlaps(&self, a: &Position, other: &Hitbox, b: &Position) -> bool {
        a.x < b.x + other.width
            && b.x < a.x + self.width
            && a.y < b.y + other.height
            && b.y < a.y + self.height
    }
}

/// Marks an entity as taking part in overlap detection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Collidable;

/// Vertical oscillator driving a lift.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Oscillator {
    /// Seconds between direction flips.
    pub period_secs: f64,
    pub direction: Direction,
    /// Accumulated seconds since the last flip (or since attachment).
    pub since_flip_secs: f64,
    /// Vertical distance travelled per tick.
    pub step: f64,
}

/// Marks the entity projectiles are fired from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Launcher {
    /// Spawn offset from the launcher position.
    pub muzzle_offset: Position,
}

/// Transient projectile state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    /// Tick at which the projectile was spawned.
    pub spawn_tick: u64,
    /// Ticks until automatic expiry.
    pub lifetime_ticks: u64,
    pub state: ProjectileState,
}
