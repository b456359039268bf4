//! Keyboard input handling

use game_core::Key;
use std::collections::HashSet;

/// Map a `KeyboardEvent.code` to a game key
pub fn key_from_code(code: &str) -> Option<Key> {
    match code {
        "KeyW" => Some(Key::W),
        "KeyS" => Some(Key::S),
        "ArrowUp" => Some(Key::ArrowUp),
        "ArrowDown" => Some(Key::ArrowDown),
        "Space" => Some(Key::Space),
        "Enter" | "NumpadEnter" => Some(Key::Enter),
        "KeyF" => Some(Key::F),
        "KeyR" => Some(Key::R),
        _ => None,
    }
}

/// Held keys plus presses seen since the last tick
#[derive(Debug, Default)]
pub struct KeyboardState {
    held: HashSet<Key>,
    just_pressed: HashSet<Key>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key down event. Returns true if the game uses this key.
    pub fn key_down(&mut self, code: &str, repeat: bool) -> bool {
        let Some(key) = key_from_code(code) else {
            return false;
        };
        // Auto-repeat must not count as a fresh press
        if !repeat && self.held.insert(key) {
            self.just_pressed.insert(key);
        }
        true
    }

    /// Handle key up event
    pub fn key_up(&mut self, code: &str) -> bool {
        match key_from_code(code) {
            Some(key) => {
                self.held.remove(&key);
                true
            }
            None => false,
        }
    }

    /// Window lost focus: no key-up events will arrive
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    pub fn held(&self) -> &HashSet<Key> {
        &self.held
    }

    /// Presses since the previous call
    pub fn take_just_pressed(&mut self) -> HashSet<Key> {
        std::mem::take(&mut self.just_pressed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(key_from_code("KeyW"), Some(Key::W));
        assert_eq!(key_from_code("ArrowDown"), Some(Key::ArrowDown));
        assert_eq!(key_from_code("NumpadEnter"), Some(Key::Enter));
        assert_eq!(key_from_code("KeyQ"), None);
    }

    #[test]
    fn test_press_is_reported_once() {
        let mut keys = KeyboardState::new();
        assert!(keys.key_down("KeyR", false));
        assert!(keys.take_just_pressed().contains(&Key::R));
        assert!(keys.take_just_pressed().is_empty());
        assert!(keys.held().contains(&Key::R));
    }

    #[test]
    fn test_auto_repeat_is_not_a_press() {
        let mut keys = KeyboardState::new();
        keys.key_down("KeyF", false);
        keys.take_just_pressed();
        keys.key_down("KeyF", true);
        assert!(keys.take_just_pressed().is_empty());
    }

    #[test]
    fn test_tap_between_ticks_still_counts() {
        let mut keys = KeyboardState::new();
        keys.key_down("KeyR", false);
        keys.key_up("KeyR");
        assert!(keys.held().is_empty());
        assert!(keys.take_just_pressed().contains(&Key::R));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let mut keys = KeyboardState::new();
        assert!(!keys.key_down("KeyZ", false));
        assert!(!keys.key_up("KeyZ"));
        assert!(keys.held().is_empty());
    }

    #[test]
    fn test_release_all() {
        let mut keys = KeyboardState::new();
        keys.key_down("KeyW", false);
        keys.key_down("ArrowUp", false);
        keys.release_all();
        assert!(keys.held().is_empty());
    }
}
