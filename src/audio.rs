//! Best-effort audio output.
//!
//! Wraps `sdl2::mixer` chunks and music behind methods that never fail the
//! frame: missing assets load as `None`, playback errors are dropped on
//! the floor, and a bank built without a working mixer is simply silent.

use crate::assets;
use sdl2::mixer::{Channel, Music};

pub struct AudioOutput {
    jump: Option<sdl2::mixer::Chunk>,
    start: Option<sdl2::mixer::Chunk>,
    game_over: Option<sdl2::mixer::Chunk>,
    gameplay_music: Option<Music<'static>>,
    menu_music: Option<Music<'static>>,
}

impl AudioOutput {
    /// Loads every sound the game uses, tolerating any subset missing.
    pub fn load() -> Self {
        Music::set_volume(sdl2::mixer::MAX_VOLUME / 2);
        AudioOutput {
            jump: assets::load_chunk_or_silent("environment/audios/jumpSound.ogg"),
            start: assets::load_chunk_or_silent("environment/audios/GameStartSound.ogg"),
            game_over: assets::load_chunk_or_silent("environment/audios/GameOverSound.ogg"),
            gameplay_music: assets::load_music_or_silent("environment/audios/JumpAndRunBM.ogg"),
            menu_music: assets::load_music_or_silent(
                "environment/audios/MenuBackgroundMusik.ogg",
            ),
        }
    }

    /// A bank that plays nothing, for when the mixer failed to open.
    pub fn silent() -> Self {
        AudioOutput {
            jump: None,
            start: None,
            game_over: None,
            gameplay_music: None,
            menu_music: None,
        }
    }

    pub fn play_jump(&self) {
        play_once(&self.jump);
    }

    pub fn play_start(&self) {
        play_once(&self.start);
    }

    pub fn play_game_over(&self) {
        play_once(&self.game_over);
    }

    /// Loops the gameplay track until [`AudioOutput::stop_music`].
    pub fn start_gameplay_music(&self) {
        if let Some(music) = &self.gameplay_music {
            let _ = music.play(-1);
        }
    }

    /// Starts the menu loop, but only when nothing else is playing.
    pub fn play_menu_music_if_idle(&self) {
        if Music::is_playing() {
            return;
        }
        if let Some(music) = &self.menu_music {
            let _ = music.play(-1);
        }
    }

    pub fn stop_music(&self) {
        Music::halt();
    }
}

fn play_once(chunk: &Option<sdl2::mixer::Chunk>) {
    if let Some(chunk) = chunk {
        let _ = Channel::all().play(chunk, 0);
    }
}
