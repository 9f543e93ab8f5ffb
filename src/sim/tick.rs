//! Per-frame simulation tick
//!
//! Advances the state machine, paddles and ball by one rendered frame.

use std::mem;

use super::collision::{CONTACT_EPSILON, Collision, clamp_velocity, find_collision, resolve};
use super::menu::MenuItem;
use super::state::{GamePhase, GameState, MainMenuItem, Side, WinMenuItem};
use crate::consts::*;

/// Held keys for one paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleInput {
    pub up: bool,
    pub down: bool,
}

impl PaddleInput {
    /// -1 for up, +1 for down, 0 for neither or both
    pub fn direction(self) -> f32 {
        match (self.up, self.down) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

/// Input snapshot for a single frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickInput {
    /// Held keys (W/S)
    pub left: PaddleInput,
    /// Held keys (Up/Down)
    pub right: PaddleInput,
    /// Menu cursor up, pressed this frame
    pub menu_up: bool,
    /// Menu cursor down, pressed this frame
    pub menu_down: bool,
    /// Confirm the selected menu entry
    pub confirm: bool,
    /// Pause toggle
    pub pause: bool,
    /// Screen width over height
    pub aspect: f32,
}

impl Default for TickInput {
    fn default() -> Self {
        Self {
            left: PaddleInput::default(),
            right: PaddleInput::default(),
            menu_up: false,
            menu_down: false,
            confirm: false,
            pause: false,
            aspect: DEFAULT_ASPECT,
        }
    }
}

/// Things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball bounced off a paddle
    PaddleHit(Side),
    /// Ball bounced off the top or bottom wall
    WallHit,
    /// Ball got past a paddle; carries the side that scored
    Scored(Side),
    /// Switched to another screen
    PhaseChanged(GamePhase),
    /// Player chose Exit
    Quit,
}

/// Advance the game by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
    let aspect = if input.aspect.is_finite() && input.aspect > 0.0 {
        input.aspect
    } else {
        DEFAULT_ASPECT
    };

    let mut events = Vec::new();
    let before = state.phase;

    match state.phase {
        GamePhase::MainMenu { selected } => {
            update_main_menu(state, selected, input, &mut events);
        }
        GamePhase::Running { paused } => {
            let paused = if input.pause { !paused } else { paused };
            state.phase = GamePhase::Running { paused };
            if !paused {
                update_paddles(state, input, dt);
                update_ball(state, aspect, dt, &mut events);
            }
        }
        GamePhase::WinScreen { selected, winner } => {
            update_win_screen(state, selected, winner, input);
        }
    }

    if mem::discriminant(&before) != mem::discriminant(&state.phase) {
        log::info!("Phase {:?} -> {:?}", before, state.phase);
        events.push(GameEvent::PhaseChanged(state.phase));
    }

    events
}

fn update_main_menu(
    state: &mut GameState,
    selected: MainMenuItem,
    input: &TickInput,
    events: &mut Vec<GameEvent>,
) {
    if input.confirm {
        match selected {
            MainMenuItem::StartGame => state.start_match(),
            MainMenuItem::Exit => events.push(GameEvent::Quit),
        }
        return;
    }

    state.phase = GamePhase::MainMenu {
        selected: navigate(selected, input),
    };
}

fn update_win_screen(
    state: &mut GameState,
    selected: WinMenuItem,
    winner: Side,
    input: &TickInput,
) {
    if input.confirm {
        match selected {
            WinMenuItem::Restart => state.restart_round(winner),
            WinMenuItem::MainMenu => state.phase = GamePhase::default(),
        }
        return;
    }

    state.phase = GamePhase::WinScreen {
        selected: navigate(selected, input),
        winner,
    };
}

fn navigate<T: MenuItem>(mut item: T, input: &TickInput) -> T {
    if input.menu_down {
        item = item.next();
    }
    if input.menu_up {
        item = item.prev();
    }
    item
}

/// Direct position control, clamped to the playfield every frame
fn update_paddles(state: &mut GameState, input: &TickInput, dt: f32) {
    state
        .left_paddle
        .move_by(input.left.direction() * PADDLE_SPEED * dt);
    state
        .right_paddle
        .move_by(input.right.direction() * PADDLE_SPEED * dt);
}

fn update_ball(state: &mut GameState, aspect: f32, dt: f32, events: &mut Vec<GameEvent>) {
    let mut ball = state.ball;
    ball.pos += ball.vel * dt;

    let left = state.left_paddle;
    let right = state.right_paddle;

    if let Some(hit) = find_collision(&ball, &left, &right, aspect) {
        resolve(&mut ball, hit, &left, &right, aspect);
        ball.vel = clamp_velocity(ball.vel * state.jitter());
        state.ball = ball;

        log::trace!("{:?} at {:?}, vel {:?}", hit, ball.pos, ball.vel);
        events.push(match hit {
            Collision::Paddle(side) => GameEvent::PaddleHit(side),
            Collision::TopWall | Collision::BottomWall => GameEvent::WallHit,
        });
        return;
    }

    state.ball = ball;

    let scorer = if ball.pos.x < left.pos.x + left.size.x - CONTACT_EPSILON {
        Some(Side::Right)
    } else if ball.pos.x + BALL_SIZE > right.pos.x + CONTACT_EPSILON {
        Some(Side::Left)
    } else {
        None
    };

    if let Some(scorer) = scorer {
        award_point(state, scorer, aspect, events);
    }
}

fn award_point(state: &mut GameState, scorer: Side, aspect: f32, events: &mut Vec<GameEvent>) {
    state.score.award(scorer);
    state.serve_from(scorer, aspect);
    log::info!(
        "{} scores ({} : {})",
        scorer.as_str(),
        state.score.left,
        state.score.right
    );
    events.push(GameEvent::Scored(scorer));

    if state.rules.win_screen_after_point {
        state.phase = GamePhase::WinScreen {
            selected: WinMenuItem::default(),
            winner: scorer,
        };
    }
}
