//! In-game score readout.

use crate::text::draw_text_centered;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

const SCORE_CENTER: (i32, i32) = (500, 150);
const HIGHSCORE_CENTER: (i32, i32) = (500, 50);

/// Draws the current score and the session highscore over the playfield.
pub fn draw_score(
    canvas: &mut Canvas<Window>,
    score: u32,
    highscore: u32,
) -> Result<(), String> {
    draw_text_centered(
        canvas,
        &format!("HIGHSCORE: {highscore}"),
        HIGHSCORE_CENTER.0,
        HIGHSCORE_CENTER.1,
        Color::BLACK,
        4,
    )?;
    draw_text_centered(
        canvas,
        &format!("YOUR SCORE: {score}"),
        SCORE_CENTER.0,
        SCORE_CENTER.1,
        Color::BLACK,
        6,
    )
}
