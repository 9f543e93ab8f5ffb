//! Frame composition: playfield, HUD and menu panels

use super::draw_list::{DrawCmd, colors};
use super::layout::{Viewport, ball_rect, centered, paddle_rect};
use crate::consts::FONT_SIZE;
use crate::sim::{GamePhase, GameState, MenuItem, Rect};

/// Title text size in menu panels
const TITLE_SIZE: u16 = FONT_SIZE * 2;
/// Height of one menu entry row
const ROW_HEIGHT: f32 = FONT_SIZE as f32 * 2.0;
const PANEL_PADDING: f32 = FONT_SIZE as f32;
const PANEL_BORDER: f32 = 2.0;
/// Narrowest menu panel, as a fraction of screen width
const PANEL_MIN_WIDTH: f32 = 0.3;
/// Vertical position of the score line
const SCORE_Y: f32 = 17.0;

/// Measures rendered text width in pixels
pub trait TextMetrics {
    fn text_width(&self, text: &str, size: u16) -> f32;
}

/// Per-frame facts that do not live in the game state
#[derive(Debug, Clone, Copy)]
pub struct FrameInfo {
    pub viewport: Viewport,
    pub fps: i32,
    pub show_fps: bool,
}

/// Build the draw list for the current screen
pub fn build_frame(
    state: &GameState,
    frame: &FrameInfo,
    metrics: &impl TextMetrics,
) -> Vec<DrawCmd> {
    let viewport = &frame.viewport;
    let mut cmds = Vec::with_capacity(16);

    match state.phase {
        GamePhase::MainMenu { selected } => {
            menu_panel(&mut cmds, "PONG", selected, viewport, metrics);
        }
        GamePhase::Running { paused } => {
            playfield(&mut cmds, state, viewport, metrics);
            if paused {
                pause_banner(&mut cmds, viewport, metrics);
            }
        }
        GamePhase::WinScreen { selected, winner } => {
            playfield(&mut cmds, state, viewport, metrics);
            let title = format!("{} player wins!", winner.as_str());
            menu_panel(&mut cmds, &title, selected, viewport, metrics);
        }
    }

    if frame.show_fps {
        cmds.push(DrawCmd::text(
            frame.fps.to_string(),
            0.0,
            0.0,
            FONT_SIZE,
            colors::HUD_TEXT,
        ));
    }

    cmds
}

/// Paddles, ball and the score line
fn playfield(
    cmds: &mut Vec<DrawCmd>,
    state: &GameState,
    viewport: &Viewport,
    metrics: &impl TextMetrics,
) {
    cmds.push(DrawCmd::rect(
        paddle_rect(&state.left_paddle, viewport),
        colors::PADDLE,
    ));
    cmds.push(DrawCmd::rect(
        paddle_rect(&state.right_paddle, viewport),
        colors::PADDLE,
    ));
    cmds.push(DrawCmd::rect(ball_rect(&state.ball, viewport), colors::BALL));

    let score = format!("{} : {}", state.score.left, state.score.right);
    let width = metrics.text_width(&score, FONT_SIZE);
    cmds.push(DrawCmd::text(
        score,
        viewport.width / 2.0 - width / 2.0,
        SCORE_Y,
        FONT_SIZE,
        colors::HUD_TEXT,
    ));
}

fn pause_banner(cmds: &mut Vec<DrawCmd>, viewport: &Viewport, metrics: &impl TextMetrics) {
    let text = "Paused";
    let width = metrics.text_width(text, FONT_SIZE);
    let size = FONT_SIZE as f32;
    cmds.push(DrawCmd::text(
        text,
        viewport.width - width - size,
        size,
        FONT_SIZE,
        colors::PAUSE_TEXT,
    ));
}

/// Centred panel with a title and one row per entry; the selected row is
/// drawn inverted on a highlight bar
fn menu_panel<T: MenuItem>(
    cmds: &mut Vec<DrawCmd>,
    title: &str,
    selected: T,
    viewport: &Viewport,
    metrics: &impl TextMetrics,
) {
    let title_width = metrics.text_width(title, TITLE_SIZE);
    let widest_item = T::ALL
        .iter()
        .map(|item| metrics.text_width(item.label(), FONT_SIZE))
        .fold(0.0f32, f32::max);

    let width = (title_width.max(widest_item) + PANEL_PADDING * 4.0)
        .max(viewport.width * PANEL_MIN_WIDTH);
    let height = PANEL_PADDING * 3.0 + TITLE_SIZE as f32 + ROW_HEIGHT * T::ALL.len() as f32;
    let panel = centered(viewport, width, height);

    cmds.push(DrawCmd::rect(
        Rect::new(
            panel.x - PANEL_BORDER,
            panel.y - PANEL_BORDER,
            panel.w + PANEL_BORDER * 2.0,
            panel.h + PANEL_BORDER * 2.0,
        ),
        colors::PANEL_BORDER,
    ));
    cmds.push(DrawCmd::rect(panel, colors::PANEL));

    cmds.push(DrawCmd::text(
        title,
        panel.x + (panel.w - title_width) / 2.0,
        panel.y + PANEL_PADDING,
        TITLE_SIZE,
        colors::MENU_TEXT,
    ));

    let rows_top = panel.y + PANEL_PADDING * 2.0 + TITLE_SIZE as f32;
    for (row, &item) in T::ALL.iter().enumerate() {
        let row_y = rows_top + ROW_HEIGHT * row as f32;
        let label = item.label();
        let label_width = metrics.text_width(label, FONT_SIZE);

        let color = if item == selected {
            cmds.push(DrawCmd::rect(
                Rect::new(
                    panel.x + PANEL_PADDING,
                    row_y,
                    panel.w - PANEL_PADDING * 2.0,
                    ROW_HEIGHT,
                ),
                colors::HIGHLIGHT,
            ));
            colors::HIGHLIGHT_TEXT
        } else {
            colors::MENU_TEXT
        };

        cmds.push(DrawCmd::text(
            label,
            panel.x + (panel.w - label_width) / 2.0,
            row_y + (ROW_HEIGHT - FONT_SIZE as f32) / 2.0,
            FONT_SIZE,
            color,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{MainMenuItem, Rules, Side, WinMenuItem};

    /// Every glyph is half as wide as the font size
    struct FixedWidth;

    impl TextMetrics for FixedWidth {
        fn text_width(&self, text: &str, size: u16) -> f32 {
            text.chars().count() as f32 * size as f32 * 0.5
        }
    }

    fn frame() -> FrameInfo {
        FrameInfo {
            viewport: Viewport::new(800.0, 400.0),
            fps: 60,
            show_fps: true,
        }
    }

    fn texts(cmds: &[DrawCmd]) -> Vec<&str> {
        cmds.iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::Text { text, .. } => Some(text.as_str()),
                DrawCmd::Rect { .. } => None,
            })
            .collect()
    }

    fn find_text<'a>(cmds: &'a [DrawCmd], wanted: &str) -> Option<&'a DrawCmd> {
        cmds.iter()
            .find(|cmd| matches!(cmd, DrawCmd::Text { text, .. } if text == wanted))
    }

    fn rect_count(cmds: &[DrawCmd]) -> usize {
        cmds.iter()
            .filter(|cmd| matches!(cmd, DrawCmd::Rect { .. }))
            .count()
    }

    #[test]
    fn test_running_frame() {
        let mut state = GameState::new(1, Rules::default());
        state.start_match();
        state.phase = GamePhase::Running { paused: false };
        state.score.left = 3;
        state.score.right = 12;

        let cmds = build_frame(&state, &frame(), &FixedWidth);
        assert_eq!(rect_count(&cmds), 3);
        assert_eq!(texts(&cmds), vec!["3 : 12", "60"]);

        // Score centred at the top
        let Some(DrawCmd::Text { x, y, .. }) = find_text(&cmds, "3 : 12") else {
            panic!("score missing");
        };
        assert!((x - (400.0 - 6.0 * 8.0 / 2.0)).abs() < 1e-3);
        assert_eq!(*y, 17.0);

        // FPS in the corner
        let Some(DrawCmd::Text { x, y, .. }) = find_text(&cmds, "60") else {
            panic!("fps missing");
        };
        assert_eq!((*x, *y), (0.0, 0.0));
    }

    #[test]
    fn test_pause_banner() {
        let mut state = GameState::new(1, Rules::default());
        state.start_match();

        let cmds = build_frame(&state, &frame(), &FixedWidth);
        let Some(DrawCmd::Text { x, y, .. }) = find_text(&cmds, "Paused") else {
            panic!("pause banner missing");
        };
        // 6 glyphs * 8px, one font size from the right edge
        assert!((x - (800.0 - 48.0 - 16.0)).abs() < 1e-3);
        assert_eq!(*y, 16.0);
    }

    #[test]
    fn test_fps_hidden() {
        let state = GameState::new(1, Rules::default());
        let info = FrameInfo {
            show_fps: false,
            ..frame()
        };
        let cmds = build_frame(&state, &info, &FixedWidth);
        assert!(find_text(&cmds, "60").is_none());
    }

    #[test]
    fn test_main_menu_highlights_selection() {
        let mut state = GameState::new(1, Rules::default());
        state.phase = GamePhase::MainMenu {
            selected: MainMenuItem::Exit,
        };

        let cmds = build_frame(&state, &frame(), &FixedWidth);
        assert_eq!(texts(&cmds), vec!["PONG", "Start Game", "Exit", "60"]);
        // Border, panel, one highlight bar; no playfield
        assert_eq!(rect_count(&cmds), 3);

        let Some(DrawCmd::Text { color, .. }) = find_text(&cmds, "Exit") else {
            panic!("exit entry missing");
        };
        assert_eq!(*color, colors::HIGHLIGHT_TEXT);
        let Some(DrawCmd::Text { color, .. }) = find_text(&cmds, "Start Game") else {
            panic!("start entry missing");
        };
        assert_eq!(*color, colors::MENU_TEXT);

        // Highlight bar sits right before the selected label
        let exit_index = cmds
            .iter()
            .position(|cmd| matches!(cmd, DrawCmd::Text { text, .. } if text == "Exit"))
            .unwrap();
        assert!(matches!(
            &cmds[exit_index - 1],
            DrawCmd::Rect { color, .. } if *color == colors::HIGHLIGHT
        ));
    }

    #[test]
    fn test_win_screen_panel_over_playfield() {
        let mut state = GameState::new(1, Rules::default());
        state.phase = GamePhase::WinScreen {
            selected: WinMenuItem::Restart,
            winner: Side::Left,
        };

        let cmds = build_frame(&state, &frame(), &FixedWidth);
        assert_eq!(
            texts(&cmds),
            vec!["0 : 0", "Left player wins!", "Restart", "Main Menu", "60"]
        );
        // Paddles + ball, then border, panel, highlight
        assert_eq!(rect_count(&cmds), 6);
    }

    #[test]
    fn test_panel_is_centered() {
        let state = GameState::new(1, Rules::default());
        let cmds = build_frame(&state, &frame(), &FixedWidth);
        let DrawCmd::Rect { rect, .. } = &cmds[1] else {
            panic!("panel missing");
        };
        assert!((rect.x + rect.w / 2.0 - 400.0).abs() < 1e-3);
        assert!((rect.y + rect.h / 2.0 - 200.0).abs() < 1e-3);
        assert!(rect.w >= 800.0 * PANEL_MIN_WIDTH);
    }
}
