use crate::collision;
use crate::environment::{
    BACKGROUND_SPEED_FAST, GROUND_SPEED_FAST, ScrollLayer,
};
use crate::obstacle::Obstacle;
use crate::player::Player;
use crate::score::{score_from_elapsed, update_highscore};
use crate::spawner::Spawner;
use rand::Rng;
use std::time::Instant;

/// Target frame rate of the fixed-timestep loop.
pub const FRAME_RATE: u32 = 80;
/// Frame delta fed to the polled timers.
pub const TICK_MS: f32 = 1000.0 / FRAME_RATE as f32;

/// Above this score the normal spawn timer stops producing obstacles.
pub const FIRST_LEVEL: u32 = 100;
/// Above this score speed-up mode trips, once, until the next full reset.
pub const SECOND_LEVEL: u32 = 150;

/// Game-flow state; exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    StartScreen,
    Playing,
    GameOver,
}

/// What a playing tick produced, so the caller can fire sounds.
pub struct TickOutcome {
    pub jumped: bool,
    pub collided: bool,
}

/// All mutable session state, owned by the frame loop and updated in a
/// fixed order each playing tick: input, spawn timers, environment scroll,
/// player, obstacles, score, collision, speed-up threshold.
pub struct GameWorld {
    pub state: GameState,
    pub speed_up: bool,
    pub score: u32,
    pub highscore: u32,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub background: ScrollLayer,
    pub ground: ScrollLayer,
    spawner: Spawner,
    session_start: Instant,
}

impl GameWorld {
    pub fn new() -> Self {
        GameWorld {
            state: GameState::StartScreen,
            speed_up: false,
            score: 0,
            highscore: 0,
            player: Player::new(),
            obstacles: Vec::new(),
            background: ScrollLayer::background(),
            ground: ScrollLayer::ground(),
            spawner: Spawner::new(),
            session_start: Instant::now(),
        }
    }

    /// Score as of right now, derived from the absolute session start.
    /// Deliberately not accumulated: pausing on the start screen does not
    /// freeze accrual, because the start instant is left untouched.
    pub fn current_score(&self) -> u32 {
        score_from_elapsed(self.session_start.elapsed().as_millis())
    }

    /// StartScreen -> Playing on an activate input. Restarts the score
    /// clock but keeps whatever was on the field (resuming from a pause).
    pub fn start_run(&mut self) {
        self.session_start = Instant::now();
        self.state = GameState::Playing;
    }

    /// Playing -> StartScreen on a cancel input. The session clock keeps
    /// running; see [`GameWorld::current_score`].
    pub fn pause(&mut self) {
        self.state = GameState::StartScreen;
    }

    /// GameOver -> Playing on a restart input: full reset plus a fresh
    /// score clock.
    pub fn restart(&mut self) {
        self.reset();
        self.session_start = Instant::now();
        self.state = GameState::Playing;
    }

    /// GameOver -> Playing on the cancel input. Performs the full reset
    /// but keeps the original session clock, so the score picks up where
    /// the whole session began. Kept as-is from the original game.
    pub fn resume_after_game_over(&mut self) {
        self.reset();
        self.state = GameState::Playing;
    }

    /// Puts every component back to its canonical baseline. Does not touch
    /// the highscore or the session clock.
    pub fn reset(&mut self) {
        self.background = ScrollLayer::background();
        self.ground = ScrollLayer::ground();
        self.player.reset();
        self.obstacles.clear();
        self.spawner.reset();
        self.speed_up = false;
        self.score = 0;
    }

    /// One playing tick in the fixed update order.
    pub fn tick<R: Rng>(&mut self, jump_held: bool, rng: &mut R) -> TickOutcome {
        let jumped = self.player.apply_input(jump_held);

        self.spawner.update(
            TICK_MS,
            self.score,
            self.speed_up,
            &mut self.obstacles,
            rng,
        );

        self.background.scroll();
        self.ground.scroll();

        self.player.integrate();
        self.player.select_frame();

        for obstacle in &mut self.obstacles {
            obstacle.update();
        }
        self.obstacles.retain(|obstacle| !obstacle.is_offscreen());

        self.score = self.current_score();
        self.highscore = update_highscore(self.highscore, self.score);

        let hits = collision::overlapping_indices(&self.player.hitbox(), &self.obstacles);
        let collided = !hits.is_empty();
        if collided {
            self.state = GameState::GameOver;
        }

        if !self.speed_up && self.score > SECOND_LEVEL {
            self.speed_up = true;
            self.player.speed_up();
            self.background.speed = BACKGROUND_SPEED_FAST;
            self.ground.speed = GROUND_SPEED_FAST;
        }

        TickOutcome { jumped, collided }
    }
}

impl Default for GameWorld {
    fn default() -> Self {
        Self::new()
    }
}
