//! Platform layer (macroquad)
//!
//! The only code that touches the windowing library:
//! - Window configuration
//! - Keyboard polling into a `TickInput`
//! - Submitting draw lists and measuring text

pub mod canvas;
pub mod input;

use macroquad::window::Conf;

use crate::Settings;
use crate::renderer::Viewport;

/// Window configuration from settings
pub fn window_conf(settings: &Settings) -> Conf {
    Conf {
        window_title: settings.window_title.clone(),
        window_width: i32::try_from(settings.window_width).unwrap_or(i32::MAX),
        window_height: i32::try_from(settings.window_height).unwrap_or(i32::MAX),
        window_resizable: settings.resizable,
        ..Default::default()
    }
}

/// Current window size in pixels
pub fn viewport() -> Viewport {
    Viewport::new(
        macroquad::window::screen_width(),
        macroquad::window::screen_height(),
    )
}

/// Seconds since the previous frame
pub fn frame_time() -> f32 {
    macroquad::time::get_frame_time()
}

pub fn fps() -> i32 {
    macroquad::time::get_fps()
}
