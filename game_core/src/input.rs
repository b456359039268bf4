//! Device state and its mapping to player controls
//!
//! The front-end fills an [`InputSnapshot`] once per tick from whatever devices
//! it can see. [`Controls::from_snapshot`] turns that into per-paddle intents,
//! which the input system applies to the world.

use std::collections::HashSet;

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    S,
    ArrowUp,
    ArrowDown,
    Space,
    Enter,
    F,
    R,
}

/// Buttons in the standard gamepad layout
pub const GAMEPAD_BUTTONS: usize = 17;
/// Face buttons that serve the ball
pub const SERVE_BUTTONS: [usize; 3] = [0, 1, 2];
/// Select / back button, restarts the match
pub const SELECT_BUTTON: usize = 8;

/// One gamepad slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GamepadState {
    pub connected: bool,
    pub left_stick_y: f32, // -1 = up, 1 = down
    pub buttons: [bool; GAMEPAD_BUTTONS],
    pub just_pressed: [bool; GAMEPAD_BUTTONS],
}

impl Default for GamepadState {
    fn default() -> Self {
        Self {
            connected: false,
            left_stick_y: 0.0,
            buttons: [false; GAMEPAD_BUTTONS],
            just_pressed: [false; GAMEPAD_BUTTONS],
        }
    }
}

impl GamepadState {
    /// Record a fresh poll, deriving press edges from the previous one
    pub fn update(&mut self, left_stick_y: f32, buttons: [bool; GAMEPAD_BUTTONS]) {
        for (i, pressed) in buttons.iter().enumerate() {
            self.just_pressed[i] = *pressed && !self.buttons[i];
        }
        self.buttons = buttons;
        self.left_stick_y = left_stick_y;
        self.connected = true;
    }

    /// Gamepad went away: forget everything so a reconnect starts clean
    pub fn disconnect(&mut self) {
        *self = Self::default();
    }

    pub fn pressed(&self, button: usize) -> bool {
        self.connected && self.buttons.get(button).copied().unwrap_or(false)
    }

    pub fn was_just_pressed(&self, button: usize) -> bool {
        self.connected && self.just_pressed.get(button).copied().unwrap_or(false)
    }

    /// Stick pushed up past the dead zone
    pub fn stick_up(&self, dead_zone: f32) -> bool {
        self.connected && self.left_stick_y < -dead_zone
    }

    /// Stick pushed down past the dead zone
    pub fn stick_down(&self, dead_zone: f32) -> bool {
        self.connected && self.left_stick_y > dead_zone
    }
}

/// Raw device state for one tick
#[derive(Debug, Clone, Default)]
pub struct InputSnapshot {
    pub held: HashSet<Key>,
    pub just_pressed: HashSet<Key>,
    pub mouse_left: bool,
    pub gamepads: [GamepadState; 2],
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn was_just_pressed(&self, key: Key) -> bool {
        self.just_pressed.contains(&key)
    }
}

/// Vertical intent for one paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleControl {
    pub up: bool,
    pub down: bool,
}

/// Player intents for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub left: PaddleControl,
    pub right: PaddleControl,
    pub serve: bool,
    pub toggle_fullscreen: bool,
    pub reset_match: bool,
}

impl Controls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(input: &InputSnapshot, dead_zone: f32) -> Self {
        let [pad0, pad1] = &input.gamepads;

        let left = PaddleControl {
            up: input.is_held(Key::W) || pad0.stick_up(dead_zone),
            down: input.is_held(Key::S) || pad0.stick_down(dead_zone),
        };
        let right = PaddleControl {
            up: input.is_held(Key::ArrowUp) || pad1.stick_up(dead_zone),
            down: input.is_held(Key::ArrowDown) || pad1.stick_down(dead_zone),
        };

        let serve = input.is_held(Key::Space)
            || input.is_held(Key::Enter)
            || input.mouse_left
            || SERVE_BUTTONS
                .iter()
                .any(|&b| pad0.pressed(b) || pad1.pressed(b));

        let reset_match = input.was_just_pressed(Key::R)
            || pad0.was_just_pressed(SELECT_BUTTON)
            || pad1.was_just_pressed(SELECT_BUTTON);

        Self {
            left,
            right,
            serve,
            toggle_fullscreen: input.was_just_pressed(Key::F),
            reset_match,
        }
    }

    pub fn paddle(&self, side: crate::Side) -> PaddleControl {
        match side {
            crate::Side::Left => self.left,
            crate::Side::Right => self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Params;

    fn snapshot_with_held(keys: &[Key]) -> InputSnapshot {
        let mut input = InputSnapshot::new();
        input.held.extend(keys.iter().copied());
        input
    }

    #[test]
    fn test_keyboard_paddle_mapping() {
        let input = snapshot_with_held(&[Key::W, Key::ArrowDown]);
        let controls = Controls::from_snapshot(&input, Params::DEAD_ZONE);
        assert_eq!(controls.left, PaddleControl { up: true, down: false });
        assert_eq!(controls.right, PaddleControl { up: false, down: true });
        assert!(!controls.serve);
    }

    #[test]
    fn test_stick_inside_dead_zone_is_ignored() {
        let mut input = InputSnapshot::new();
        input.gamepads[0].update(-0.29, [false; GAMEPAD_BUTTONS]);
        input.gamepads[1].update(0.3, [false; GAMEPAD_BUTTONS]);
        let controls = Controls::from_snapshot(&input, Params::DEAD_ZONE);
        assert_eq!(controls.left, PaddleControl::default());
        assert_eq!(controls.right, PaddleControl::default());
    }

    #[test]
    fn test_stick_outside_dead_zone_moves_paddle() {
        let mut input = InputSnapshot::new();
        input.gamepads[0].update(-0.8, [false; GAMEPAD_BUTTONS]);
        input.gamepads[1].update(0.5, [false; GAMEPAD_BUTTONS]);
        let controls = Controls::from_snapshot(&input, Params::DEAD_ZONE);
        assert!(controls.left.up);
        assert!(controls.right.down);
    }

    #[test]
    fn test_serve_sources() {
        for key in [Key::Space, Key::Enter] {
            let controls = Controls::from_snapshot(&snapshot_with_held(&[key]), 0.3);
            assert!(controls.serve, "{:?} should serve", key);
        }

        let mut input = InputSnapshot::new();
        input.mouse_left = true;
        assert!(Controls::from_snapshot(&input, 0.3).serve);

        for button in SERVE_BUTTONS {
            let mut buttons = [false; GAMEPAD_BUTTONS];
            buttons[button] = true;
            let mut input = InputSnapshot::new();
            input.gamepads[1].update(0.0, buttons);
            assert!(
                Controls::from_snapshot(&input, 0.3).serve,
                "button {} should serve",
                button
            );
        }
    }

    #[test]
    fn test_reset_and_fullscreen_are_edge_triggered() {
        // Held but not just pressed: nothing fires
        let input = snapshot_with_held(&[Key::R, Key::F]);
        let controls = Controls::from_snapshot(&input, 0.3);
        assert!(!controls.reset_match);
        assert!(!controls.toggle_fullscreen);

        let mut input = InputSnapshot::new();
        input.just_pressed.insert(Key::R);
        input.just_pressed.insert(Key::F);
        let controls = Controls::from_snapshot(&input, 0.3);
        assert!(controls.reset_match);
        assert!(controls.toggle_fullscreen);
    }

    #[test]
    fn test_gamepad_select_fires_once_while_held() {
        let mut buttons = [false; GAMEPAD_BUTTONS];
        buttons[SELECT_BUTTON] = true;

        let mut input = InputSnapshot::new();
        input.gamepads[0].update(0.0, buttons);
        assert!(Controls::from_snapshot(&input, 0.3).reset_match);

        input.gamepads[0].update(0.0, buttons);
        assert!(!Controls::from_snapshot(&input, 0.3).reset_match);
    }

    #[test]
    fn test_disconnected_gamepad_is_inert() {
        let mut buttons = [false; GAMEPAD_BUTTONS];
        buttons[0] = true;
        let mut input = InputSnapshot::new();
        input.gamepads[0].update(-1.0, buttons);
        input.gamepads[0].disconnect();
        let controls = Controls::from_snapshot(&input, 0.3);
        assert_eq!(controls, Controls::new());
    }
}
