//! Pong - two-player arcade game
//!
//! Core modules:
//! - `sim`: Simulation (paddles, ball physics, scoring, menu state machine)
//! - `renderer`: Read-only projection of the game state into draw commands
//! - `platform`: Window, keyboard and drawing backend (macroquad)
//! - `settings`: JSON settings with defaults

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Game configuration constants
///
/// Sizes and speeds are in normalized playfield units: the playfield spans
/// `[0, 1]` on both axes, horizontal values are fractions of the screen width
/// and vertical values fractions of the screen height.
pub mod consts {
    /// Paddle width (3% of screen width)
    pub const PADDLE_WIDTH: f32 = 0.03;
    /// Paddle height (20% of screen height)
    pub const PADDLE_HEIGHT: f32 = 0.20;
    /// Paddle speed in playfield heights per second
    pub const PADDLE_SPEED: f32 = 1.0;

    /// Ball edge length as a fraction of screen width
    pub const BALL_SIZE: f32 = 0.03;

    pub const PLAYFIELD_WIDTH: f32 = 1.0;
    pub const PLAYFIELD_HEIGHT: f32 = 1.0;

    /// Velocity caps (playfield units per second)
    pub const MAX_X_VELOCITY: f32 = 2.0;
    pub const MAX_Y_VELOCITY: f32 = 2.0;

    /// Per-collision velocity jitter, in percent
    pub const JITTER_PERCENT_MIN: i32 = 95;
    pub const JITTER_PERCENT_MAX: i32 = 110;

    /// Serve velocity ranges, in hundredths
    pub const SERVE_VX_MIN: i32 = 20;
    pub const SERVE_VX_MAX: i32 = 40;
    pub const SERVE_VY_MAX: i32 = 40;

    /// Default window size; also the aspect ratio assumed before the first frame
    pub const DEFAULT_WINDOW_WIDTH: u32 = 800;
    pub const DEFAULT_WINDOW_HEIGHT: u32 = 400;
    pub const DEFAULT_ASPECT: f32 = DEFAULT_WINDOW_WIDTH as f32 / DEFAULT_WINDOW_HEIGHT as f32;

    /// HUD font size in pixels
    pub const FONT_SIZE: u16 = 16;
}

/// Width-over-height ratio of the screen, falling back to the default for a
/// collapsed window
#[inline]
pub fn aspect_ratio(width: f32, height: f32) -> f32 {
    if height > 0.0 && width > 0.0 {
        width / height
    } else {
        consts::DEFAULT_ASPECT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_ratio() {
        assert!((aspect_ratio(800.0, 400.0) - 2.0).abs() < 1e-6);
        assert!((aspect_ratio(1000.0, 1000.0) - 1.0).abs() < 1e-6);
        // Minimized window
        assert_eq!(aspect_ratio(800.0, 0.0), consts::DEFAULT_ASPECT);
    }
}
