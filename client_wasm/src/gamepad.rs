//! Gamepad polling through `navigator.getGamepads()`

use game_core::{GamepadState, GAMEPAD_BUTTONS};
use wasm_bindgen::JsCast;
use web_sys::{Gamepad, GamepadButton};

/// Vertical axis of the left stick in the standard mapping
const LEFT_STICK_Y: u32 = 1;

/// Refresh both player slots. A missing or disconnected pad releases everything.
pub fn poll(pads: &mut [GamepadState; 2]) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let list = match window.navigator().get_gamepads() {
        Ok(list) => list,
        Err(e) => {
            log::debug!("getGamepads failed: {:?}", e);
            return;
        }
    };

    for (slot, state) in pads.iter_mut().enumerate() {
        match list.get(slot as u32).dyn_into::<Gamepad>() {
            Ok(pad) if pad.connected() => {
                let (axis, buttons) = read(&pad);
                if !state.connected {
                    log::info!("Gamepad {} connected: {}", slot, pad.id());
                }
                state.update(axis, buttons);
            }
            _ => {
                if state.connected {
                    log::info!("Gamepad {} disconnected", slot);
                }
                state.disconnect();
            }
        }
    }
}

fn read(pad: &Gamepad) -> (f32, [bool; GAMEPAD_BUTTONS]) {
    let axis = pad
        .axes()
        .get(LEFT_STICK_Y)
        .as_f64()
        .unwrap_or(0.0) as f32;

    let mut buttons = [false; GAMEPAD_BUTTONS];
    for (i, value) in pad.buttons().iter().take(GAMEPAD_BUTTONS).enumerate() {
        if let Ok(button) = value.dyn_into::<GamepadButton>() {
            buttons[i] = button.pressed();
        }
    }
    (axis, buttons)
}
