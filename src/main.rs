//! Pong entry point
//!
//! Loads settings, opens the window and runs the frame loop.

use pong::Settings;
use pong::platform::{self, canvas, input};
use pong::renderer::{FrameInfo, build_frame};
use pong::sim::{GameEvent, GameState, tick};

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Pong starting...");
    let settings = Settings::load();

    macroquad::Window::from_config(platform::window_conf(&settings), run(settings));
}

/// Poll, update, draw; until the window closes or the player picks Exit
async fn run(settings: Settings) {
    let seed = settings.seed();
    log::info!("Seed {}", seed);
    let mut state = GameState::new(seed, settings.rules());

    loop {
        let viewport = platform::viewport();
        let input = input::poll(viewport.aspect());

        let events = tick(&mut state, &input, platform::frame_time());
        if events.contains(&GameEvent::Quit) {
            log::info!("Exit selected ({} : {})", state.score.left, state.score.right);
            break;
        }

        let frame = FrameInfo {
            viewport,
            fps: platform::fps(),
            show_fps: settings.show_fps,
        };
        canvas::present(&build_frame(&state, &frame, &canvas::MacroquadMetrics));

        macroquad::window::next_frame().await;
    }
}
