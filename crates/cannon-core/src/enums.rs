//! Enumeration types used throughout the game.

use serde::{Deserialize, Serialize};

/// Entity category. Collision handlers are registered per category pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// The player's launcher riding the lift.
    Cannon,
    /// A fired projectile.
    Bullet,
    /// Basket walls and the scoring line between them.
    Basket,
    /// Screen edge slabs.
    Bounds,
}

/// Vertical travel direction of a lift.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Toward negative y.
    #[default]
    Up,
    /// Toward positive y.
    Down,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Sign of the y translation for this direction.
    pub fn sign(self) -> f64 {
        match self {
            Direction::Up => -1.0,
            Direction::Down => 1.0,
        }
    }
}

/// Projectile lifecycle. `Spawned` is the only live state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileState {
    #[default]
    Spawned,
    /// Hit a target; queued for removal.
    Collided,
    /// Lifetime elapsed; queued for removal.
    Expired,
}

/// Why a projectile left the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemovalReason {
    Collided,
    Expired,
}

/// Pointer buttons understood by the input service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Primary,
    Secondary,
    Middle,
}

/// Named user actions bound to input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Shoot,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Active,
    Paused,
}
