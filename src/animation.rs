/// Fractional animation cursor shared by the player and obstacles.
///
/// The cursor advances by a per-tick step and wraps modulo the frame count.
/// Frame selection truncates toward zero, so a step of 0.1 holds each frame
/// for ten ticks.
#[derive(Debug, Clone)]
pub struct AnimationCycle {
    index: f32,
    frame_count: usize,
}

impl AnimationCycle {
    pub fn new(frame_count: usize) -> Self {
        AnimationCycle {
            index: 0.0,
            frame_count: frame_count.max(1),
        }
    }

    /// Advances the cursor and wraps it back into [0, frame_count).
    pub fn advance(&mut self, step: f32) {
        self.index = (self.index + step) % self.frame_count as f32;
    }

    /// Index of the frame currently on display.
    pub fn frame(&self) -> usize {
        self.index as usize
    }

    #[allow(dead_code)]
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }
}
