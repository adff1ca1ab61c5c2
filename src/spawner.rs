use crate::obstacle::{self, Obstacle, ObstacleKind};
use crate::world::FIRST_LEVEL;
use rand::Rng;

/// Period of the normal spawn timer, active until speed-up begins.
pub const NORMAL_SPAWN_PERIOD_MS: f32 = 2000.0;
/// Period of the fast spawn timer, active only in speed-up mode.
pub const FAST_SPAWN_PERIOD_MS: f32 = 770.0;

/// Spawn x range for the midbottom anchor of a new obstacle.
const SPAWN_X_MIN: i32 = 1100;
const SPAWN_X_MAX: i32 = 1300;

/// Hand-weighted candidate list: bird and the first two tree variants are
/// twice as likely as tree 3 or the mushroom. Drawing uniformly from the
/// list encodes the weights.
pub const SPAWN_CHOICES: [ObstacleKind; 8] = [
    ObstacleKind::Bird,
    ObstacleKind::Tree1,
    ObstacleKind::Tree2,
    ObstacleKind::Bird,
    ObstacleKind::Tree1,
    ObstacleKind::Tree2,
    ObstacleKind::Tree3,
    ObstacleKind::Mushroom,
];

/// A fixed-period repeating timer polled once per frame.
///
/// Not an OS timer: the caller feeds it the frame delta and it fires at
/// most once per poll, so firing resolution is bounded by the frame rate.
pub struct SpawnTimer {
    period_ms: f32,
    accumulated_ms: f32,
}

impl SpawnTimer {
    pub fn new(period_ms: f32) -> Self {
        SpawnTimer {
            period_ms,
            accumulated_ms: 0.0,
        }
    }

    /// Accumulates `dt_ms`; returns true when the period elapsed.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        self.accumulated_ms += dt_ms;
        if self.accumulated_ms >= self.period_ms {
            self.accumulated_ms -= self.period_ms;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.accumulated_ms = 0.0;
    }
}

/// The two independent spawn timers and their gating rules.
///
/// The dual-timer scheme is the difficulty escalation: normal spawning
/// stops once speed-up begins, after which only the fast timer spawns, at
/// a higher rate and with the whole collection sped up.
pub struct Spawner {
    normal: SpawnTimer,
    fast: SpawnTimer,
}

impl Spawner {
    pub fn new() -> Self {
        Spawner {
            normal: SpawnTimer::new(NORMAL_SPAWN_PERIOD_MS),
            fast: SpawnTimer::new(FAST_SPAWN_PERIOD_MS),
        }
    }

    /// Polls both timers for one playing frame and applies whatever fired.
    pub fn update<R: Rng>(
        &mut self,
        dt_ms: f32,
        score: u32,
        speed_up: bool,
        obstacles: &mut Vec<Obstacle>,
        rng: &mut R,
    ) {
        let normal_fired = self.normal.tick(dt_ms);
        let fast_fired = self.fast.tick(dt_ms);

        if normal_fired && !speed_up && score < FIRST_LEVEL {
            obstacles.push(spawn_random(rng));
        }
        if fast_fired && speed_up {
            obstacles.push(spawn_random(rng));
            obstacle::speed_up_all(obstacles);
        }
    }

    pub fn reset(&mut self) {
        self.normal.reset();
        self.fast.reset();
    }
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new()
    }
}

/// Draws a kind from the weighted list and a spawn x from the fixed range.
fn spawn_random<R: Rng>(rng: &mut R) -> Obstacle {
    let kind = SPAWN_CHOICES[rng.gen_range(0..SPAWN_CHOICES.len())];
    let center_x = rng.gen_range(SPAWN_X_MIN..=SPAWN_X_MAX);
    Obstacle::new(kind, center_x)
}
