//! Rendering module
//!
//! Turns a `GameState` into a list of draw commands. Nothing here mutates
//! the game; the platform layer submits the list to the graphics backend.

pub mod draw_list;
pub mod frame;
pub mod layout;

pub use draw_list::{Color, DrawCmd, colors};
pub use frame::{FrameInfo, TextMetrics, build_frame};
pub use layout::Viewport;
