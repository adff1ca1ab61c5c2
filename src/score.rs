//! Score and highscore rules.
//!
//! The score is derived from wall-clock time since the session started:
//! one point per 100 ms, recomputed from scratch every frame rather than
//! accumulated. The highscore is a plain max-so-far that lives only for
//! the lifetime of the process.

/// One point per 100 ms of elapsed play time.
pub fn score_from_elapsed(elapsed_ms: u128) -> u32 {
    (elapsed_ms / 100) as u32
}

/// Returns the larger of the two scores; ties keep the existing highscore.
pub fn update_highscore(highscore: u32, current: u32) -> u32 {
    if highscore >= current {
        highscore
    } else {
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_is_floor_of_elapsed_over_100() {
        assert_eq!(score_from_elapsed(0), 0);
        assert_eq!(score_from_elapsed(99), 0);
        assert_eq!(score_from_elapsed(100), 1);
        assert_eq!(score_from_elapsed(12_550), 125);
    }

    #[test]
    fn score_is_monotonic() {
        let mut previous = 0;
        for t in (0..20_000).step_by(37) {
            let score = score_from_elapsed(t);
            assert!(score >= previous);
            previous = score;
        }
    }

    #[test]
    fn highscore_is_max_of_inputs() {
        assert_eq!(update_highscore(10, 25), 25);
        assert_eq!(update_highscore(25, 10), 25);
    }

    #[test]
    fn highscore_ties_keep_existing() {
        assert_eq!(update_highscore(42, 42), 42);
    }

    #[test]
    fn highscore_update_is_idempotent() {
        let once = update_highscore(17, 30);
        assert_eq!(update_highscore(once, 30), once);
    }
}
