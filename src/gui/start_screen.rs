//! Start/menu screen.

use crate::text::draw_text_centered;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Draws the idle start screen over the cleared backdrop.
pub fn render(canvas: &mut Canvas<Window>) -> Result<(), String> {
    let (width, height) = canvas.logical_size();
    draw_text_centered(
        canvas,
        "CLICK TO START",
        width as i32 / 2,
        height as i32 / 2,
        Color::BLACK,
        7,
    )
}
