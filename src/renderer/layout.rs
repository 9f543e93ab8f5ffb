//! Projection from normalized playfield units to pixels

use crate::consts::BALL_SIZE;
use crate::sim::{Ball, Paddle, Rect};

/// Screen size in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        crate::aspect_ratio(self.width, self.height)
    }
}

/// Paddle rectangle in pixels
pub fn paddle_rect(paddle: &Paddle, viewport: &Viewport) -> Rect {
    Rect::new(
        paddle.pos.x * viewport.width,
        paddle.pos.y * viewport.height,
        paddle.size.x * viewport.width,
        paddle.size.y * viewport.height,
    )
}

/// Ball rectangle in pixels; square, sized off the screen width
pub fn ball_rect(ball: &Ball, viewport: &Viewport) -> Rect {
    let size = BALL_SIZE * viewport.width;
    Rect::new(
        ball.pos.x * viewport.width,
        ball.pos.y * viewport.height,
        size,
        size,
    )
}

/// Rectangle of `width` x `height` centred in the viewport
pub fn centered(viewport: &Viewport, width: f32, height: f32) -> Rect {
    Rect::new(
        (viewport.width - width) / 2.0,
        (viewport.height - height) / 2.0,
        width,
        height,
    )
}
