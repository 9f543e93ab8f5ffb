//! Game state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::Rect;
use super::menu::MenuItem;
use crate::consts::*;

/// One side of the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }
}

/// Main menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MainMenuItem {
    #[default]
    StartGame,
    Exit,
}

impl MenuItem for MainMenuItem {
    const ALL: &'static [Self] = &[MainMenuItem::StartGame, MainMenuItem::Exit];

    fn label(self) -> &'static str {
        match self {
            MainMenuItem::StartGame => "Start Game",
            MainMenuItem::Exit => "Exit",
        }
    }
}

/// Win screen entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WinMenuItem {
    #[default]
    Restart,
    MainMenu,
}

impl MenuItem for WinMenuItem {
    const ALL: &'static [Self] = &[WinMenuItem::Restart, WinMenuItem::MainMenu];

    fn label(self) -> &'static str {
        match self {
            WinMenuItem::Restart => "Restart",
            WinMenuItem::MainMenu => "Main Menu",
        }
    }
}

/// Current screen, with the data only that screen needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title menu
    MainMenu { selected: MainMenuItem },
    /// Match in progress; paddles and ball frozen while paused
    Running { paused: bool },
    /// A point was scored
    WinScreen { selected: WinMenuItem, winner: Side },
}

impl Default for GamePhase {
    fn default() -> Self {
        GamePhase::MainMenu {
            selected: MainMenuItem::default(),
        }
    }
}

/// The ball. `pos` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    /// Ball centred on the playfield
    pub fn centered(vel: Vec2) -> Self {
        Self {
            pos: Vec2::new(PLAYFIELD_WIDTH / 2.0, PLAYFIELD_HEIGHT / 2.0),
            vel,
        }
    }

    /// Ball height in normalized units; the ball is square in pixels
    #[inline]
    pub fn height(aspect: f32) -> f32 {
        BALL_SIZE * aspect
    }

    pub fn rect(&self, aspect: f32) -> Rect {
        Rect::new(self.pos.x, self.pos.y, BALL_SIZE, Self::height(aspect))
    }

    pub fn center(&self, aspect: f32) -> Vec2 {
        self.pos + Vec2::new(BALL_SIZE, Self::height(aspect)) / 2.0
    }
}

/// A player paddle. `pos` is the top-left corner; only `pos.y` changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Paddle {
    /// Paddle at its home column, vertically centred
    pub fn new(side: Side) -> Self {
        let x = match side {
            Side::Left => PADDLE_WIDTH * 2.0,
            Side::Right => PLAYFIELD_WIDTH - PADDLE_WIDTH * 3.0,
        };
        Self {
            pos: Vec2::new(x, PLAYFIELD_HEIGHT / 2.0 - PADDLE_HEIGHT / 2.0),
            size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Highest allowed `pos.y`
    pub fn max_y(&self) -> f32 {
        (PLAYFIELD_HEIGHT - self.size.y).max(0.0)
    }

    /// Move vertically and clamp to the playfield
    pub fn move_by(&mut self, dy: f32) {
        self.pos.y += dy;
        self.clamp();
    }

    pub fn clamp(&mut self) {
        self.pos.y = self.pos.y.clamp(0.0, self.max_y());
    }
}

/// Points per side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Match rules
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rules {
    /// Show the win screen after every point; otherwise scoring continues
    pub win_screen_after_point: bool,
    /// Ball velocity at the start of a match
    pub initial_velocity: Vec2,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            win_screen_after_point: true,
            initial_velocity: Vec2::new(0.3, 0.3),
        }
    }
}

/// Complete game state, owned by the main loop and passed by reference
#[derive(Debug, Clone)]
pub struct GameState {
    pub rules: Rules,
    pub phase: GamePhase,
    pub ball: Ball,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub score: Score,
    rng: Pcg32,
}

impl GameState {
    /// Create a new game at the main menu
    pub fn new(seed: u64, rules: Rules) -> Self {
        Self {
            rules,
            phase: GamePhase::default(),
            ball: Ball::centered(rules.initial_velocity),
            left_paddle: Paddle::new(Side::Left),
            right_paddle: Paddle::new(Side::Right),
            score: Score::default(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left_paddle,
            Side::Right => &self.right_paddle,
        }
    }

    /// Fresh match: scores cleared, everything back in place
    pub fn start_match(&mut self) {
        self.score = Score::default();
        self.reset_positions();
        self.ball.vel = self.rules.initial_velocity;
        self.phase = GamePhase::Running { paused: true };
    }

    /// Next round after a win screen; scores carry over
    pub fn restart_round(&mut self, winner: Side) {
        self.reset_positions();
        self.ball.vel = self.serve_velocity(winner.opponent());
        self.phase = GamePhase::Running { paused: true };
    }

    /// Ball to the centre, paddles to vertical centre
    pub fn reset_positions(&mut self) {
        self.left_paddle = Paddle::new(Side::Left);
        self.right_paddle = Paddle::new(Side::Right);
        self.ball = Ball::centered(self.ball.vel);
    }

    /// Put the ball in front of the scorer's paddle and serve it back into play
    pub fn serve_from(&mut self, scorer: Side, aspect: f32) {
        let paddle = *self.paddle(scorer);
        let x = match scorer {
            Side::Left => paddle.pos.x + paddle.size.x,
            Side::Right => paddle.pos.x - BALL_SIZE,
        };
        let y = (paddle.center_y() - Ball::height(aspect) / 2.0)
            .clamp(0.0, (PLAYFIELD_HEIGHT - Ball::height(aspect)).max(0.0));
        self.ball.pos = Vec2::new(x, y);
        self.ball.vel = self.serve_velocity(scorer.opponent());
    }

    /// Random serve velocity heading toward `toward`
    pub fn serve_velocity(&mut self, toward: Side) -> Vec2 {
        let vx = self.random_int(SERVE_VX_MIN, SERVE_VX_MAX) as f32 / 100.0;
        let vy = self.random_int(-SERVE_VY_MAX, SERVE_VY_MAX) as f32 / 100.0;
        match toward {
            Side::Left => Vec2::new(-vx, vy),
            Side::Right => Vec2::new(vx, vy),
        }
    }

    /// Independent random multiplier per axis, applied after every bounce
    pub fn jitter(&mut self) -> Vec2 {
        let jx = self.random_int(JITTER_PERCENT_MIN, JITTER_PERCENT_MAX) as f32 / 100.0;
        let jy = self.random_int(JITTER_PERCENT_MIN, JITTER_PERCENT_MAX) as f32 / 100.0;
        Vec2::new(jx, jy)
    }

    /// Uniform integer in `[min, max]`
    fn random_int(&mut self, min: i32, max: i32) -> i32 {
        self.rng.random_range(min..=max)
    }
}
