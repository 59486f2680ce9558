//! Player commands sent from a driver to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::MouseButton;

/// Raw input forwarded to the input service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputEvent {
    /// Pointer moved to world coordinates `(x, y)`.
    PointerMoved { x: f64, y: f64 },
    ButtonPressed { button: MouseButton },
    ButtonReleased { button: MouseButton },
}

/// All possible player actions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Session ---
    /// Leave the main menu and start a session.
    StartGame,
    /// Discard the current session and start a fresh one.
    ResetSession,
    Pause,
    Resume,
    /// Set time scale (1.0 = normal, 2.0 = double, 0.0 = stalled).
    /// Clamped to at most 4.0; values below 0.001 stall.
    SetTimeScale { scale: f64 },

    // --- Input ---
    Input { event: InputEvent },
}
