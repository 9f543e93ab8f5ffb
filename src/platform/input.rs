//! Keyboard polling

use macroquad::input::{KeyCode, is_key_down, is_key_pressed};

use crate::sim::{PaddleInput, TickInput};

/// Snapshot the keyboard for this frame
///
/// W/S drive the left paddle and the arrow keys the right one; either pair
/// moves the menu cursor. Enter confirms, P toggles pause.
pub fn poll(aspect: f32) -> TickInput {
    TickInput {
        left: PaddleInput {
            up: is_key_down(KeyCode::W),
            down: is_key_down(KeyCode::S),
        },
        right: PaddleInput {
            up: is_key_down(KeyCode::Up),
            down: is_key_down(KeyCode::Down),
        },
        menu_up: is_key_pressed(KeyCode::Up) || is_key_pressed(KeyCode::W),
        menu_down: is_key_pressed(KeyCode::Down) || is_key_pressed(KeyCode::S),
        confirm: is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter),
        pause: is_key_pressed(KeyCode::P),
        aspect,
    }
}
