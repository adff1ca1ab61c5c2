//! AABB collision detection.
//!
//! Pure rectangle-overlap tests plus the per-frame exhaustive check of the
//! player hitbox against every live obstacle. SDL rects use exclusive
//! upper bounds, so rectangles that merely touch at an edge do not count
//! as overlapping; that convention is relied on throughout.

use crate::obstacle::Obstacle;
use sdl2::rect::Rect;

/// Anything with an axis-aligned bounding box.
pub trait Bounded {
    fn bounds(&self) -> Rect;
}

impl Bounded for Obstacle {
    fn bounds(&self) -> Rect {
        self.rect()
    }
}

/// Two axis-aligned rects intersect when they overlap on both axes.
pub fn aabb_intersect(a: &Rect, b: &Rect) -> bool {
    let x_overlap = a.x() < b.x() + b.width() as i32 && a.x() + a.width() as i32 > b.x();
    let y_overlap = a.y() < b.y() + b.height() as i32 && a.y() + a.height() as i32 > b.y();

    x_overlap && y_overlap
}

/// Indices of every entity whose bounds overlap `bounds`.
///
/// The check is exhaustive rather than short-circuiting; which entry comes
/// first only decides which obstacle gets credited for ending the run.
pub fn overlapping_indices<T: Bounded>(bounds: &Rect, entities: &[T]) -> Vec<usize> {
    let mut hits = Vec::new();
    for (index, entity) in entities.iter().enumerate() {
        if aabb_intersect(bounds, &entity.bounds()) {
            hits.push(index);
        }
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::obstacle::ObstacleKind;

    #[test]
    fn overlapping_rects_intersect() {
        let a = Rect::new(0, 0, 32, 32);
        let b = Rect::new(16, 16, 32, 32);
        assert!(aabb_intersect(&a, &b));
        assert!(aabb_intersect(&b, &a));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::new(0, 0, 32, 32);
        let b = Rect::new(32, 0, 32, 32);
        assert!(!aabb_intersect(&a, &b));
    }

    #[test]
    fn separated_rects_do_not_intersect() {
        let a = Rect::new(0, 0, 32, 32);
        let b = Rect::new(200, 300, 32, 32);
        assert!(!aabb_intersect(&a, &b));
    }

    #[test]
    fn contained_rect_intersects() {
        let outer = Rect::new(0, 0, 100, 100);
        let inner = Rect::new(25, 25, 50, 50);
        assert!(aabb_intersect(&outer, &inner));
        assert!(aabb_intersect(&inner, &outer));
    }

    #[test]
    fn exhaustive_check_reports_every_hit() {
        // Hitbox parked where two of three obstacles overlap it
        let hitbox = Rect::new(120, 420, 60, 110);
        let obstacles = vec![
            Obstacle::new(ObstacleKind::Tree1, 150),
            Obstacle::new(ObstacleKind::Bird, 800),
            Obstacle::new(ObstacleKind::Mushroom, 150),
        ];
        assert_eq!(overlapping_indices(&hitbox, &obstacles), vec![0, 2]);
    }

    #[test]
    fn no_hits_reports_empty() {
        let hitbox = Rect::new(120, 420, 60, 110);
        let obstacles = vec![Obstacle::new(ObstacleKind::Tree3, 1200)];
        assert!(overlapping_indices(&hitbox, &obstacles).is_empty());
    }
}
