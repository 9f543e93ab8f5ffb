//! Draw list submission

use macroquad::color::Color;
use macroquad::text::{draw_text, measure_text};

use crate::renderer::{self, DrawCmd, TextMetrics, colors};

/// Text measurement with the default font
pub struct MacroquadMetrics;

impl TextMetrics for MacroquadMetrics {
    fn text_width(&self, text: &str, size: u16) -> f32 {
        measure_text(text, None, size, 1.0).width
    }
}

fn to_color(color: renderer::Color) -> Color {
    let [r, g, b, a] = color;
    Color::new(r, g, b, a)
}

/// Clear the screen and issue every command in order
pub fn present(cmds: &[DrawCmd]) {
    macroquad::window::clear_background(to_color(colors::BACKGROUND));

    for cmd in cmds {
        match cmd {
            DrawCmd::Rect { rect, color } => {
                macroquad::shapes::draw_rectangle(
                    rect.x,
                    rect.y,
                    rect.w,
                    rect.h,
                    to_color(*color),
                );
            }
            DrawCmd::Text {
                text,
                x,
                y,
                size,
                color,
            } => {
                // Commands carry the top-left corner; macroquad wants the baseline
                let dims = measure_text(text, None, *size, 1.0);
                draw_text(text, *x, *y + dims.offset_y, *size as f32, to_color(*color));
            }
        }
    }
}
