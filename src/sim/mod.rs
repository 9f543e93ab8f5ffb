//! Simulation module
//!
//! All gameplay logic lives here. This module has no rendering or platform
//! dependencies:
//! - Positions and sizes in normalized playfield units
//! - Seeded RNG only
//! - Input arrives as a plain `TickInput` snapshot

pub mod collision;
pub mod menu;
pub mod state;
pub mod tick;

pub use collision::{Collision, Rect, find_collision};
pub use menu::MenuItem;
pub use state::{
    Ball, GamePhase, GameState, MainMenuItem, Paddle, Rules, Score, Side, WinMenuItem,
};
pub use tick::{GameEvent, PaddleInput, TickInput, tick};
