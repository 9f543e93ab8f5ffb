//! Draw commands for 2D rendering

use crate::sim::Rect;

/// RGBA color, components in `[0, 1]`
pub type Color = [f32; 4];

/// A single draw call in pixel coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Filled rectangle
    Rect { rect: Rect, color: Color },
    /// Text with its top-left corner at `(x, y)`
    Text {
        text: String,
        x: f32,
        y: f32,
        size: u16,
        color: Color,
    },
}

impl DrawCmd {
    pub fn rect(rect: Rect, color: Color) -> Self {
        DrawCmd::Rect { rect, color }
    }

    pub fn text(text: impl Into<String>, x: f32, y: f32, size: u16, color: Color) -> Self {
        DrawCmd::Text {
            text: text.into(),
            x,
            y,
            size,
            color,
        }
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = [0.0, 0.0, 0.0, 1.0];
    pub const PADDLE: Color = [0.96, 0.96, 0.96, 1.0];
    pub const BALL: Color = [0.96, 0.96, 0.96, 1.0];
    pub const HUD_TEXT: Color = [0.96, 0.96, 0.96, 1.0];
    pub const PAUSE_TEXT: Color = [1.0, 1.0, 1.0, 1.0];
    pub const PANEL: Color = [0.1, 0.1, 0.14, 0.92];
    pub const PANEL_BORDER: Color = [0.5, 0.5, 0.6, 1.0];
    pub const MENU_TEXT: Color = [0.85, 0.85, 0.9, 1.0];
    pub const HIGHLIGHT: Color = [0.96, 0.96, 0.96, 1.0];
    pub const HIGHLIGHT_TEXT: Color = [0.05, 0.05, 0.08, 1.0];
}
