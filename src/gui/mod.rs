//! Screen-space overlays and HUD.
//!
//! Everything here renders with screen coordinates on top of the playfield
//! using the procedural bitmap font: the score readout during play, the
//! start screen, and the game-over screen.

pub mod game_over;
pub mod hud;
pub mod start_screen;

pub use game_over::GameOverScreen;
