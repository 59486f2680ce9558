//! Input service: pointer tracking and button-to-action bindings.
//!
//! An action begins on the press that transitions a button from released to
//! held. Repeated presses while held are ignored until a release arrives.

use std::collections::{HashMap, HashSet};

use cannon_core::commands::InputEvent;
use cannon_core::enums::{Action, MouseButton};
use cannon_core::types::Position;

#[derive(Debug, Default)]
pub struct InputService {
    bindings: HashMap<MouseButton, Action>,
    held: HashSet<MouseButton>,
    pointer: Position,
}

impl InputService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `button` to `action`, replacing any previous binding.
    pub fn bind(&mut self, button: MouseButton, action: Action) {
        self.bindings.insert(button, action);
    }

    /// Last known pointer position in world coordinates.
    pub fn pointer(&self) -> Position {
        self.pointer
    }

    pub fn is_held(&self, button: MouseButton) -> bool {
        self.held.contains(&button)
    }

    /// Apply a raw input event. Returns the action begun by it, if any.
    pub fn handle(&mut self, event: InputEvent) -> Option<Action> {
        match event {
            InputEvent::PointerMoved { x, y } => {
                self.pointer = Position::new(x, y);
                None
            }
            InputEvent::ButtonPressed { button } => {
                if self.held.insert(button) {
                    self.bindings.get(&button).copied()
                } else {
                    None
                }
            }
            InputEvent::ButtonReleased { button } => {
                self.held.remove(&button);
                None
            }
        }
    }
}
