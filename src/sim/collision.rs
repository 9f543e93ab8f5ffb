//! Collision detection and response for axis-aligned rectangles
//!
//! Every frame the moved ball is tested against an ordered list of
//! surfaces; the first overlap wins. Paddles come before walls and the left
//! paddle before the right one.

use glam::Vec2;

use super::state::{Ball, Paddle, Side};
use crate::consts::*;

/// Slack for edge contact so a ball placed flush by float arithmetic does not
/// register as overlapping
pub const CONTACT_EPSILON: f32 = 1e-5;

/// Axis-aligned rectangle, `x`/`y` at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Strict overlap; rectangles sharing only an edge do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right() - CONTACT_EPSILON
            && other.x < self.right() - CONTACT_EPSILON
            && self.y < other.bottom() - CONTACT_EPSILON
            && other.y < self.bottom() - CONTACT_EPSILON
    }
}

/// A surface the ball bounced off this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Paddle(Side),
    TopWall,
    BottomWall,
}

/// Test order for a frame
pub const CANDIDATES: [Collision; 4] = [
    Collision::Paddle(Side::Left),
    Collision::Paddle(Side::Right),
    Collision::TopWall,
    Collision::BottomWall,
];

impl Collision {
    fn test(self, ball: &Ball, left: &Paddle, right: &Paddle, aspect: f32) -> bool {
        match self {
            Collision::Paddle(Side::Left) => ball.rect(aspect).overlaps(&left.rect()),
            Collision::Paddle(Side::Right) => ball.rect(aspect).overlaps(&right.rect()),
            Collision::TopWall => ball.pos.y < 0.0,
            Collision::BottomWall => {
                ball.pos.y + Ball::height(aspect) > PLAYFIELD_HEIGHT + CONTACT_EPSILON
            }
        }
    }
}

/// First surface the ball overlaps, if any
pub fn find_collision(
    ball: &Ball,
    left: &Paddle,
    right: &Paddle,
    aspect: f32,
) -> Option<Collision> {
    CANDIDATES
        .into_iter()
        .find(|candidate| candidate.test(ball, left, right, aspect))
}

/// Move the ball flush against the surface it hit and point the
/// perpendicular velocity back out of it. Paddle hits also get spin.
pub fn resolve(ball: &mut Ball, hit: Collision, left: &Paddle, right: &Paddle, aspect: f32) {
    match hit {
        Collision::Paddle(Side::Left) => {
            ball.pos.x = left.pos.x + left.size.x;
            keep_between_walls(ball, aspect);
            ball.vel.x = ball.vel.x.abs();
            ball.vel.y += paddle_spin(ball, left, aspect);
        }
        Collision::Paddle(Side::Right) => {
            ball.pos.x = right.pos.x - BALL_SIZE;
            keep_between_walls(ball, aspect);
            ball.vel.x = -ball.vel.x.abs();
            ball.vel.y += paddle_spin(ball, right, aspect);
        }
        Collision::TopWall => {
            ball.pos.y = 0.0;
            ball.vel.y = ball.vel.y.abs();
        }
        Collision::BottomWall => {
            ball.pos.y = PLAYFIELD_HEIGHT - Ball::height(aspect);
            ball.vel.y = -ball.vel.y.abs();
        }
    }
}

/// A paddle hit wins over a wall hit in the same frame, but the ball still
/// may not stay past the top or bottom wall
fn keep_between_walls(ball: &mut Ball, aspect: f32) {
    let max_y = (PLAYFIELD_HEIGHT - Ball::height(aspect)).max(0.0);
    ball.pos.y = ball.pos.y.clamp(0.0, max_y);
}

/// Extra vertical velocity from an off-centre hit
///
/// Grows with the square root of the distance between ball and paddle
/// centres and pushes away from the paddle's middle.
pub fn paddle_spin(ball: &Ball, paddle: &Paddle, aspect: f32) -> f32 {
    let paddle_center = paddle.center_y();
    let ball_center = ball.center(aspect).y;
    let offset = (paddle_center - ball_center).abs().sqrt();
    if ball_center < paddle_center {
        -offset
    } else {
        offset
    }
}

/// Cap each velocity component
pub fn clamp_velocity(vel: Vec2) -> Vec2 {
    Vec2::new(
        vel.x.clamp(-MAX_X_VELOCITY, MAX_X_VELOCITY),
        vel.y.clamp(-MAX_Y_VELOCITY, MAX_Y_VELOCITY),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const ASPECT: f32 = 2.0;

    fn paddles() -> (Paddle, Paddle) {
        (Paddle::new(Side::Left), Paddle::new(Side::Right))
    }

    #[test]
    fn test_rect_overlap_is_strict() {
        let a = Rect::new(0.0, 0.0, 1.0, 1.0);
        assert!(a.overlaps(&Rect::new(0.5, 0.5, 1.0, 1.0)));
        // Shared edge only
        assert!(!a.overlaps(&Rect::new(1.0, 0.0, 1.0, 1.0)));
        assert!(!a.overlaps(&Rect::new(0.0, 1.0, 1.0, 1.0)));
        assert!(!a.overlaps(&Rect::new(3.0, 3.0, 1.0, 1.0)));
    }

    #[test]
    fn test_no_collision_in_open_field() {
        let (left, right) = paddles();
        let ball = Ball::centered(Vec2::new(0.3, 0.3));
        assert_eq!(find_collision(&ball, &left, &right, ASPECT), None);
    }

    #[test]
    fn test_paddle_checked_before_wall() {
        let (mut left, right) = paddles();
        left.pos.y = 0.0;
        // Overlaps the left paddle and pokes through the top wall
        let ball = Ball {
            pos: Vec2::new(left.pos.x + 0.01, -0.01),
            vel: Vec2::new(-0.3, -0.3),
        };
        assert_eq!(
            find_collision(&ball, &left, &right, ASPECT),
            Some(Collision::Paddle(Side::Left))
        );
    }

    #[test]
    fn test_paddle_hit_at_top_wall_stays_in_field() {
        let (mut left, right) = paddles();
        left.pos.y = 0.0;
        let mut ball = Ball {
            pos: Vec2::new(left.pos.x + 0.02, -0.015),
            vel: Vec2::new(-0.3, -0.9),
        };
        let hit = find_collision(&ball, &left, &right, ASPECT);
        assert_eq!(hit, Some(Collision::Paddle(Side::Left)));

        resolve(&mut ball, Collision::Paddle(Side::Left), &left, &right, ASPECT);
        assert_eq!(ball.pos.y, 0.0);
        assert_eq!(ball.pos.x, left.pos.x + left.size.x);
        assert!(!ball.rect(ASPECT).overlaps(&left.rect()));
    }

    #[test]
    fn test_paddle_hit_at_bottom_wall_stays_in_field() {
        let (left, mut right) = paddles();
        right.pos.y = right.max_y();
        let mut ball = Ball {
            pos: Vec2::new(right.pos.x - 0.02, 0.96),
            vel: Vec2::new(0.3, 0.9),
        };
        resolve(&mut ball, Collision::Paddle(Side::Right), &left, &right, ASPECT);
        assert!(ball.pos.y + Ball::height(ASPECT) <= 1.0 + 1e-6);
        assert!(ball.vel.x < 0.0);
    }

    #[test]
    fn test_resolve_left_paddle_is_flush() {
        let (left, right) = paddles();
        let mut ball = Ball {
            pos: Vec2::new(left.pos.x + 0.01, left.center_y()),
            vel: Vec2::new(-0.3, 0.0),
        };
        let hit = find_collision(&ball, &left, &right, ASPECT).unwrap();
        resolve(&mut ball, hit, &left, &right, ASPECT);
        assert_eq!(ball.pos.x, left.pos.x + left.size.x);
        assert!((ball.vel.x - 0.3).abs() < 1e-6);
        assert!(!ball.rect(ASPECT).overlaps(&left.rect()));
    }

    #[test]
    fn test_resolve_right_paddle_is_flush() {
        let (left, right) = paddles();
        let mut ball = Ball {
            pos: Vec2::new(right.pos.x - 0.01, right.pos.y),
            vel: Vec2::new(0.4, 0.1),
        };
        resolve(&mut ball, Collision::Paddle(Side::Right), &left, &right, ASPECT);
        assert!((ball.pos.x + BALL_SIZE - right.pos.x).abs() < 1e-6);
        assert!((ball.vel.x + 0.4).abs() < 1e-6);
        assert!(!ball.rect(ASPECT).overlaps(&right.rect()));
    }

    #[test]
    fn test_resolve_walls() {
        let (left, right) = paddles();
        let mut ball = Ball {
            pos: Vec2::new(0.5, -0.02),
            vel: Vec2::new(0.3, -0.3),
        };
        resolve(&mut ball, Collision::TopWall, &left, &right, ASPECT);
        assert_eq!(ball.pos.y, 0.0);
        assert_eq!(ball.vel, Vec2::new(0.3, 0.3));

        let mut ball = Ball {
            pos: Vec2::new(0.5, 0.97),
            vel: Vec2::new(0.3, 0.3),
        };
        assert_eq!(
            find_collision(&ball, &left, &right, ASPECT),
            Some(Collision::BottomWall)
        );
        resolve(&mut ball, Collision::BottomWall, &left, &right, ASPECT);
        assert!((ball.pos.y + Ball::height(ASPECT) - 1.0).abs() < 1e-6);
        assert_eq!(ball.vel, Vec2::new(0.3, -0.3));
        assert_eq!(find_collision(&ball, &left, &right, ASPECT), None);
    }

    #[test]
    fn test_spin_pushes_away_from_center() {
        let paddle = Paddle::new(Side::Left);
        let above = Ball {
            pos: Vec2::new(0.1, paddle.pos.y),
            vel: Vec2::ZERO,
        };
        let below = Ball {
            pos: Vec2::new(0.1, paddle.pos.y + paddle.size.y - Ball::height(ASPECT)),
            vel: Vec2::ZERO,
        };
        let up = paddle_spin(&above, &paddle, ASPECT);
        let down = paddle_spin(&below, &paddle, ASPECT);
        assert!(up < 0.0);
        assert!(down > 0.0);
        assert!((up + down).abs() < 1e-5);

        // sqrt of the centre distance
        let expected = (paddle.center_y() - above.center(ASPECT).y).abs().sqrt();
        assert!((up.abs() - expected).abs() < 1e-6);
    }

    #[test]
    fn test_dead_center_hit_has_no_spin() {
        let paddle = Paddle::new(Side::Right);
        let ball = Ball {
            pos: Vec2::new(0.9, paddle.center_y() - Ball::height(ASPECT) / 2.0),
            vel: Vec2::ZERO,
        };
        assert!(paddle_spin(&ball, &paddle, ASPECT).abs() < 1e-3);
    }

    #[test]
    fn test_clamp_velocity() {
        let v = clamp_velocity(Vec2::new(5.0, -7.0));
        assert_eq!(v, Vec2::new(MAX_X_VELOCITY, -MAX_Y_VELOCITY));
        let v = clamp_velocity(Vec2::new(0.3, 0.3));
        assert_eq!(v, Vec2::new(0.3, 0.3));
    }
}
