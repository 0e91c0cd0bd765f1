//! Platform abstraction layer
//!
//! Turns raw key names (as reported by `KeyboardEvent.key`) into the
//! key-state flags the simulation consumes.

use crate::sim::{KeyState, TickInput};

/// Held keys for both paddles plus a one-shot confirm
#[derive(Debug, Clone, Default)]
pub struct Keyboard {
    pub left: KeyState,
    pub right: KeyState,
    confirm: bool,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press. Returns true if the key is bound.
    pub fn key_down(&mut self, key: &str) -> bool {
        self.set(key, true)
    }

    /// Handle a key release. Returns true if the key is bound.
    pub fn key_up(&mut self, key: &str) -> bool {
        self.set(key, false)
    }

    fn set(&mut self, key: &str, pressed: bool) -> bool {
        match key {
            "w" | "W" => self.left.up = pressed,
            "s" | "S" => self.left.down = pressed,
            "ArrowUp" => self.right.up = pressed,
            "ArrowDown" => self.right.down = pressed,
            // Only the press counts; releases are ignored
            "Enter" => {
                if pressed {
                    self.confirm = true;
                }
            }
            _ => return false,
        }
        true
    }

    /// Snapshot for the next tick, consuming any pending confirm
    pub fn take_input(&mut self) -> TickInput {
        TickInput {
            left: self.left,
            right: self.right,
            confirm: std::mem::take(&mut self.confirm),
        }
    }
}
