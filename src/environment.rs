use sdl2::rect::Rect;

/// Scroll speeds per layer; the ground moves faster than the backdrop,
/// which is what sells the parallax.
pub const BACKGROUND_SPEED: i32 = 1;
pub const BACKGROUND_SPEED_FAST: i32 = 3;
pub const GROUND_SPEED: i32 = 4;
pub const GROUND_SPEED_FAST: i32 = 12;

// Wrap rule: once a rect's right edge passes this line it teleports so its
// left edge lands at WRAP_RESPAWN_X, keeping the pair seamless.
const WRAP_EDGE_X: i32 = 12;
const WRAP_RESPAWN_X: i32 = 1000;

/// One endlessly wrap-scrolling layer drawn from two staggered copies of
/// the same texture.
pub struct ScrollLayer {
    pub rects: [Rect; 2],
    pub speed: i32,
}

impl ScrollLayer {
    /// The sky/backdrop layer: two screen-sized rects a screen apart.
    pub fn background() -> Self {
        ScrollLayer {
            rects: [
                Rect::from_center((500, 300), 1000, 600),
                Rect::from_center((1500, 300), 1000, 600),
            ],
            speed: BACKGROUND_SPEED,
        }
    }

    /// The ground strip, anchored by its top edge at y = 500.
    pub fn ground() -> Self {
        ScrollLayer {
            rects: [
                Rect::new(500 - 1050 / 2, 500, 1050, 250),
                Rect::new(1500 - 1050 / 2, 500, 1050, 250),
            ],
            speed: GROUND_SPEED,
        }
    }

    /// One tick of scrolling, then the wrap check for both rects.
    pub fn scroll(&mut self) {
        for rect in &mut self.rects {
            rect.set_x(rect.x() - self.speed);
            if rect.right() <= WRAP_EDGE_X {
                rect.set_x(WRAP_RESPAWN_X);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_start_positions() {
        let background = ScrollLayer::background();
        assert_eq!(background.rects[0].center().x(), 500);
        assert_eq!(background.rects[1].center().x(), 1500);
        assert_eq!(background.speed, BACKGROUND_SPEED);

        let ground = ScrollLayer::ground();
        assert_eq!(ground.rects[0].top(), 500);
        assert_eq!(ground.rects[1].top(), 500);
        assert_eq!(ground.speed, GROUND_SPEED);
    }

    #[test]
    fn scroll_moves_both_rects_by_speed() {
        let mut ground = ScrollLayer::ground();
        let before: Vec<i32> = ground.rects.iter().map(|r| r.x()).collect();
        ground.scroll();
        for (rect, x) in ground.rects.iter().zip(before) {
            assert_eq!(rect.x(), x - GROUND_SPEED);
        }
    }

    #[test]
    fn rect_wraps_once_right_edge_reaches_threshold() {
        let mut layer = ScrollLayer::background();
        // Park the first rect just about to wrap
        layer.rects[0].set_x(WRAP_EDGE_X - 1000);
        layer.scroll();
        assert_eq!(layer.rects[0].x(), WRAP_RESPAWN_X);
    }

    #[test]
    fn coverage_never_gaps_during_a_full_cycle() {
        let mut ground = ScrollLayer::ground();
        ground.speed = GROUND_SPEED_FAST;
        for _ in 0..2_000 {
            ground.scroll();
            // At least one rect always overlaps the visible strip
            let covers_view = ground
                .rects
                .iter()
                .any(|r| r.x() < 1000 && r.right() > WRAP_EDGE_X);
            assert!(covers_view);
        }
    }
}
