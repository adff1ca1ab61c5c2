use crate::animation::AnimationCycle;
use sdl2::rect::Rect;

/// Horizontal center of the player sprite; the runner never moves on X.
pub const PLAYER_CENTER_X: i32 = 150;
/// Bottom edge of the player sprite while on the ground.
pub const GROUND_Y: i32 = 512;

pub const RUN_FRAME_COUNT: usize = 5;

const PLAYER_WIDTH: u32 = 180;
const PLAYER_HEIGHT: u32 = 160;

// The hitbox is the visual rect shrunk by these totals, kept centered.
const HITBOX_INSET_X: u32 = 120;
const HITBOX_INSET_Y: u32 = 50;

const JUMP_IMPULSE: f32 = -12.0;
const GRAVITY_RATE: f32 = 0.33;
const GRAVITY_RATE_FAST: f32 = 0.5;
const RUN_STEP: f32 = 0.1;
const RUN_STEP_FAST: f32 = 0.3;

/// Which sprite the player shows this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerFrame {
    Jump,
    Run(usize),
}

/// The auto-running player: a vertical kinematic body plus run animation.
///
/// Vertical velocity accumulates gravity every tick and the bottom edge is
/// clamped to [`GROUND_Y`] on landing. Jump input is edge-detected, so a
/// held key does not retrigger until released and pressed again.
pub struct Player {
    bottom: f32,
    velocity: f32,
    gravity_rate: f32,
    run_step: f32,
    run_cycle: AnimationCycle,
    jump_was_held: bool,
    frame: PlayerFrame,
}

impl Player {
    pub fn new() -> Self {
        Player {
            bottom: GROUND_Y as f32,
            velocity: 0.0,
            gravity_rate: GRAVITY_RATE,
            run_step: RUN_STEP,
            run_cycle: AnimationCycle::new(RUN_FRAME_COUNT),
            jump_was_held: false,
            frame: PlayerFrame::Run(0),
        }
    }

    pub fn grounded(&self) -> bool {
        self.bottom >= GROUND_Y as f32
    }

    /// Consumes this tick's jump input. Returns true when a jump actually
    /// started, so the caller can trigger the jump sound.
    pub fn apply_input(&mut self, jump_held: bool) -> bool {
        let pressed = jump_held && !self.jump_was_held;
        self.jump_was_held = jump_held;

        if pressed && self.grounded() {
            self.velocity = JUMP_IMPULSE;
            true
        } else {
            false
        }
    }

    /// One tick of vertical motion: gravity into velocity, velocity into
    /// position, then the landing clamp.
    pub fn integrate(&mut self) {
        self.velocity += self.gravity_rate;
        self.bottom += self.velocity;
        if self.bottom >= GROUND_Y as f32 {
            self.bottom = GROUND_Y as f32;
        }
    }

    /// Picks the sprite for this tick. Airborne shows the single jump
    /// frame; grounded advances the run cycle at the current step rate.
    pub fn select_frame(&mut self) {
        if !self.grounded() {
            self.frame = PlayerFrame::Jump;
        } else {
            self.run_cycle.advance(self.run_step);
            self.frame = PlayerFrame::Run(self.run_cycle.frame());
        }
    }

    pub fn frame(&self) -> PlayerFrame {
        self.frame
    }

    /// Back to rest position and baseline rates. The animation cursor is
    /// deliberately left where it was.
    pub fn reset(&mut self) {
        self.bottom = GROUND_Y as f32;
        self.velocity = 0.0;
        self.gravity_rate = GRAVITY_RATE;
        self.run_step = RUN_STEP;
    }

    /// Single irreversible difficulty step; only a full reset undoes it.
    pub fn speed_up(&mut self) {
        self.run_step = RUN_STEP_FAST;
        self.gravity_rate = GRAVITY_RATE_FAST;
    }

    /// Visual rect, anchored midbottom at the fixed run position.
    pub fn rect(&self) -> Rect {
        Rect::new(
            PLAYER_CENTER_X - PLAYER_WIDTH as i32 / 2,
            self.bottom as i32 - PLAYER_HEIGHT as i32,
            PLAYER_WIDTH,
            PLAYER_HEIGHT,
        )
    }

    /// Collision rect: the visual rect shrunk inward and recentered on it.
    /// Used only for collision, never for rendering.
    pub fn hitbox(&self) -> Rect {
        let rect = self.rect();
        let width = PLAYER_WIDTH - HITBOX_INSET_X;
        let height = PLAYER_HEIGHT - HITBOX_INSET_Y;
        Rect::from_center(rect.center(), width, height)
    }

    #[allow(dead_code)]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    #[allow(dead_code)]
    pub fn gravity_rate(&self) -> f32 {
        self.gravity_rate
    }

    #[allow(dead_code)]
    pub fn run_step(&self) -> f32 {
        self.run_step
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_grounded_at_rest() {
        let player = Player::new();
        assert!(player.grounded());
        assert_eq!(player.rect().bottom(), GROUND_Y);
    }

    #[test]
    fn jump_requires_press_edge() {
        let mut player = Player::new();
        assert!(player.apply_input(true));
        // Held key does not retrigger after landing
        player.reset();
        assert!(!player.apply_input(true));
        // Release then press triggers again
        assert!(!player.apply_input(false));
        assert!(player.apply_input(true));
    }

    #[test]
    fn jump_ignored_while_airborne() {
        let mut player = Player::new();
        assert!(player.apply_input(true));
        player.integrate();
        assert!(!player.grounded());
        player.apply_input(false);
        assert!(!player.apply_input(true));
    }

    #[test]
    fn integrate_never_sinks_below_ground() {
        let mut player = Player::new();
        player.apply_input(true);
        for _ in 0..2_000 {
            player.integrate();
            assert!(player.rect().bottom() <= GROUND_Y);
        }
        // Long after the arc ends the player is back at rest
        assert!(player.grounded());
    }

    #[test]
    fn jump_arc_rises_then_falls() {
        let mut player = Player::new();
        player.apply_input(true);
        player.integrate();
        let apex_side = player.rect().bottom();
        assert!(apex_side < GROUND_Y);
        let mut lowest = apex_side;
        for _ in 0..200 {
            player.integrate();
            lowest = lowest.min(player.rect().bottom());
        }
        assert!(lowest < apex_side);
        assert!(player.grounded());
    }

    #[test]
    fn airborne_shows_jump_frame() {
        let mut player = Player::new();
        player.apply_input(true);
        player.integrate();
        player.select_frame();
        assert_eq!(player.frame(), PlayerFrame::Jump);
    }

    #[test]
    fn grounded_run_cycle_wraps() {
        let mut player = Player::new();
        // 0.1 per tick over 5 frames: back at frame 0 after 50 ticks
        for _ in 0..50 {
            player.select_frame();
        }
        assert_eq!(player.frame(), PlayerFrame::Run(0));
        for _ in 0..10 {
            player.select_frame();
        }
        assert_eq!(player.frame(), PlayerFrame::Run(1));
    }

    #[test]
    fn speed_up_raises_rates_once() {
        let mut player = Player::new();
        player.speed_up();
        assert_eq!(player.run_step(), RUN_STEP_FAST);
        assert_eq!(player.gravity_rate(), GRAVITY_RATE_FAST);
        // No further escalation
        player.speed_up();
        assert_eq!(player.run_step(), RUN_STEP_FAST);
    }

    #[test]
    fn reset_restores_rest_and_baseline_rates() {
        let mut player = Player::new();
        player.apply_input(true);
        player.integrate();
        player.speed_up();
        player.reset();
        assert!(player.grounded());
        assert_eq!(player.velocity(), 0.0);
        assert_eq!(player.gravity_rate(), GRAVITY_RATE);
        assert_eq!(player.run_step(), RUN_STEP);
    }

    #[test]
    fn hitbox_is_inset_and_centered() {
        let mut player = Player::new();
        player.apply_input(true);
        player.integrate();
        let rect = player.rect();
        let hitbox = player.hitbox();
        assert_eq!(hitbox.width(), rect.width() - HITBOX_INSET_X);
        assert_eq!(hitbox.height(), rect.height() - HITBOX_INSET_Y);
        assert_eq!(hitbox.center(), rect.center());
    }
}
