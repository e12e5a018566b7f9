//! Held-key tracking
//!
//! Raw key identifiers (as reported by `KeyboardEvent.key`) go in, logical
//! controls come out. Key-repeat events are harmless since press is idempotent.

use std::collections::HashSet;

/// Logical player controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Left,
    Right,
    Jump,
}

impl Control {
    /// Raw keys bound to this control
    pub fn keys(&self) -> &'static [&'static str] {
        match self {
            Control::Left => &["ArrowLeft", "a"],
            Control::Right => &["ArrowRight", "d"],
            Control::Jump => &["ArrowUp", "w"],
        }
    }
}

/// Set of currently held keys
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<String>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a key as held
    pub fn press(&mut self, key: &str) {
        if !self.held.contains(key) {
            self.held.insert(key.to_owned());
        }
    }

    /// Mark a key as released (no-op if it wasn't held)
    pub fn release(&mut self, key: &str) {
        self.held.remove(key);
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.held.contains(key)
    }

    /// True if any key bound to `control` is held
    pub fn is_held(&self, control: Control) -> bool {
        control.keys().iter().any(|k| self.is_active(k))
    }

    /// Drop every held key (focus loss never delivers the matching keyups)
    pub fn clear(&mut self) {
        self.held.clear();
    }

    /// Build an input state with the given keys held (handy for scripted runs)
    pub fn holding(keys: &[&str]) -> Self {
        let mut input = Self::new();
        for key in keys {
            input.press(key);
        }
        input
    }
}
