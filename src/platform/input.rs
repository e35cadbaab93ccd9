//! Held-key tracking
//!
//! The window delivers key presses and releases as events; the simulation
//! wants to know which movement keys are down right now.

use winit::event::ElementState;
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::sim::TickInput;

/// Movement actions the game recognises
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveLeft,
    MoveRight,
}

/// Map a physical key to a game action
pub fn map_key(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::ArrowLeft => Some(Action::MoveLeft),
        KeyCode::ArrowRight => Some(Action::MoveRight),
        _ => None,
    }
}

/// Which movement keys are currently held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardState {
    left_held: bool,
    right_held: bool,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key event. OS key repeat re-sends `Pressed`, which is harmless.
    pub fn on_key(&mut self, key: PhysicalKey, state: ElementState) {
        let PhysicalKey::Code(code) = key else {
            return;
        };
        let Some(action) = map_key(code) else {
            return;
        };

        let held = state == ElementState::Pressed;
        match action {
            Action::MoveLeft => self.left_held = held,
            Action::MoveRight => self.right_held = held,
        }
    }

    /// Forget held keys, e.g. when the window loses focus and releases
    /// will not be delivered
    pub fn release_all(&mut self) {
        *self = Self::default();
    }

    /// Snapshot for the next tick
    pub fn snapshot(&self) -> TickInput {
        TickInput {
            left: self.left_held,
            right: self.right_held,
        }
    }
}
