//! Game-over screen.

use crate::text::draw_text_centered;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Configuration for the game-over screen appearance.
#[derive(Debug, Clone)]
pub struct GameOverStyle {
    pub background_color: Color,
    pub text_color: Color,
}

impl Default for GameOverStyle {
    fn default() -> Self {
        GameOverStyle {
            background_color: Color::RGB(0, 139, 69),
            text_color: Color::RGB(255, 222, 173),
        }
    }
}

/// Full-screen game-over panel: title, final score, restart hints.
pub struct GameOverScreen {
    style: GameOverStyle,
}

impl GameOverScreen {
    pub fn new() -> Self {
        GameOverScreen {
            style: GameOverStyle::default(),
        }
    }

    #[allow(dead_code)]
    pub fn with_style(style: GameOverStyle) -> Self {
        GameOverScreen { style }
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, score: u32) -> Result<(), String> {
        canvas.set_draw_color(self.style.background_color);
        canvas.clear();

        let (width, _) = canvas.logical_size();
        let center_x = width as i32 / 2;

        draw_text_centered(canvas, "GAME OVER", center_x, 200, self.style.text_color, 12)?;
        draw_text_centered(
            canvas,
            &format!("YOU GOT {score} POINTS"),
            center_x,
            340,
            self.style.text_color,
            4,
        )?;
        draw_text_centered(
            canvas,
            "PRESS ENTER TO RESTART",
            center_x,
            400,
            self.style.text_color,
            4,
        )?;
        draw_text_centered(
            canvas,
            "PRESS ESC TO RETURN TO MENU",
            center_x,
            460,
            self.style.text_color,
            4,
        )
    }
}

impl Default for GameOverScreen {
    fn default() -> Self {
        Self::new()
    }
}
