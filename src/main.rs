use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Scancode};
use sdl2::pixels::Color;
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;
use std::collections::HashMap;

mod animation;
mod assets;
mod audio;
mod collision;
mod environment;
mod gui;
mod obstacle;
mod player;
mod score;
mod spawner;
mod text;
mod world;

use audio::AudioOutput;
use gui::GameOverScreen;
use obstacle::ObstacleKind;
use player::{PlayerFrame, RUN_FRAME_COUNT};
use world::{FRAME_RATE, GameState, GameWorld};

// Logical game resolution; the window never resizes.
const GAME_WIDTH: u32 = 1000;
const GAME_HEIGHT: u32 = 600;

const SKY_COLOR: Color = Color::RGB(204, 235, 255);
const SPRITE_FALLBACK_COLOR: Color = Color::RGB(34, 100, 34);

/// Textures for every player sprite. `Run` frames index into `run`, which
/// always holds [`RUN_FRAME_COUNT`] entries thanks to the loader fallback.
struct PlayerSprites<'a> {
    run: Vec<Texture<'a>>,
    jump: Texture<'a>,
}

impl<'a> PlayerSprites<'a> {
    fn load(texture_creator: &'a TextureCreator<WindowContext>) -> Result<Self, String> {
        let size = (180, 160);
        let mut run = Vec::with_capacity(RUN_FRAME_COUNT);
        for i in 1..=RUN_FRAME_COUNT {
            run.push(assets::load_texture_or_fallback(
                texture_creator,
                &format!("environment/characters/RunAnimation/PlayerRun{i}.png"),
                size,
                SPRITE_FALLBACK_COLOR,
            )?);
        }
        let jump = assets::load_texture_or_fallback(
            texture_creator,
            "environment/characters/PlayerJump.png",
            size,
            SPRITE_FALLBACK_COLOR,
        )?;
        Ok(PlayerSprites { run, jump })
    }

    fn texture(&self, frame: PlayerFrame) -> &Texture<'a> {
        match frame {
            PlayerFrame::Jump => &self.jump,
            PlayerFrame::Run(index) => &self.run[index % self.run.len()],
        }
    }
}

/// Frame textures per obstacle archetype, keyed by the descriptor table.
struct ObstacleTextures<'a> {
    frames: HashMap<ObstacleKind, Vec<Texture<'a>>>,
}

impl<'a> ObstacleTextures<'a> {
    fn load(texture_creator: &'a TextureCreator<WindowContext>) -> Result<Self, String> {
        let mut frames = HashMap::new();
        for kind in ObstacleKind::all() {
            let descriptor = kind.descriptor();
            let mut textures = Vec::with_capacity(descriptor.frame_paths.len());
            for path in descriptor.frame_paths {
                textures.push(assets::load_texture_or_fallback(
                    texture_creator,
                    path,
                    (descriptor.width, descriptor.height),
                    SPRITE_FALLBACK_COLOR,
                )?);
            }
            frames.insert(kind, textures);
        }
        Ok(ObstacleTextures { frames })
    }

    fn texture(&self, kind: ObstacleKind, frame: usize) -> Option<&Texture<'a>> {
        self.frames.get(&kind).and_then(|textures| textures.get(frame))
    }
}

fn main() -> Result<(), String> {
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window = video_subsystem
        .window("Jump and Run", GAME_WIDTH, GAME_HEIGHT)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    canvas
        .set_logical_size(GAME_WIDTH, GAME_HEIGHT)
        .map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump()?;

    // Audio is strictly best-effort: a dead mixer means a silent game, not
    // a failed one.
    let _mixer_context = sdl2::mixer::init(sdl2::mixer::InitFlag::OGG).ok();
    let audio = match sdl2::mixer::open_audio(
        44_100,
        sdl2::mixer::AUDIO_S16LSB,
        sdl2::mixer::DEFAULT_CHANNELS,
        1_024,
    ) {
        Ok(()) => AudioOutput::load(),
        Err(e) => {
            eprintln!("Audio unavailable, continuing silently: {e}");
            AudioOutput::silent()
        }
    };

    let background_texture = assets::load_texture_or_fallback(
        &texture_creator,
        "environment/graphics/BG.png",
        (GAME_WIDTH, GAME_HEIGHT),
        SKY_COLOR,
    )?;
    let ground_texture = assets::load_texture_or_fallback(
        &texture_creator,
        "environment/graphics/Untergrund.png",
        (1050, 250),
        Color::RGB(255, 222, 173),
    )?;
    let player_sprites = PlayerSprites::load(&texture_creator)?;
    let obstacle_textures = ObstacleTextures::load(&texture_creator)?;

    let mut world = GameWorld::new();
    let mut rng = rand::thread_rng();
    let game_over_screen = GameOverScreen::new();

    println!("Controls:");
    println!("SPACE - Jump");
    println!("Mouse Click - Start / Restart");
    println!("ENTER - Restart after game over");
    println!("ESC - Back to menu");

    'running: loop {
        let mut activate = false;
        let mut restart_key = false;
        let mut cancel = false;

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => break 'running,
                Event::MouseButtonDown { .. } => activate = true,
                Event::KeyDown {
                    keycode: Some(Keycode::Return),
                    ..
                } => restart_key = true,
                Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => cancel = true,
                _ => {}
            }
        }

        match world.state {
            GameState::Playing => {
                if cancel {
                    world.pause();
                } else {
                    let jump_held = event_pump
                        .keyboard_state()
                        .is_scancode_pressed(Scancode::Space);
                    let outcome = world.tick(jump_held, &mut rng);
                    if outcome.jumped {
                        audio.play_jump();
                    }
                    if outcome.collided {
                        audio.play_game_over();
                    }
                }
            }
            GameState::StartScreen => {
                if activate {
                    world.start_run();
                    audio.play_start();
                    audio.stop_music();
                    audio.start_gameplay_music();
                } else {
                    audio.play_menu_music_if_idle();
                }
            }
            GameState::GameOver => {
                if activate || restart_key {
                    world.restart();
                    audio.stop_music();
                    audio.start_gameplay_music();
                } else if cancel {
                    // Back into the run without touching the score clock
                    world.resume_after_game_over();
                    audio.stop_music();
                    audio.start_gameplay_music();
                }
            }
        }

        canvas.set_draw_color(SKY_COLOR);
        canvas.clear();

        match world.state {
            GameState::Playing => {
                for rect in world.background.rects {
                    canvas.copy(&background_texture, None, rect)?;
                }
                for rect in world.ground.rects {
                    canvas.copy(&ground_texture, None, rect)?;
                }
                gui::hud::draw_score(&mut canvas, world.score, world.highscore)?;
                for obstacle in &world.obstacles {
                    if let Some(texture) =
                        obstacle_textures.texture(obstacle.kind, obstacle.frame())
                    {
                        canvas.copy(texture, None, obstacle.rect())?;
                    }
                }
                canvas.copy(
                    player_sprites.texture(world.player.frame()),
                    None,
                    world.player.rect(),
                )?;
            }
            GameState::GameOver => {
                game_over_screen.render(&mut canvas, world.score)?;
            }
            GameState::StartScreen => {
                gui::start_screen::render(&mut canvas)?;
            }
        }

        canvas.present();

        // The one yield point per frame; nothing else suspends.
        std::thread::sleep(std::time::Duration::new(0, 1_000_000_000u32 / FRAME_RATE));
    }

    Ok(())
}
