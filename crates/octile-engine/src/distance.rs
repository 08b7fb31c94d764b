//! Integer-scaled octile distance.

use octile_core::Point;

/// Cost of one orthogonal step.
pub const STRAIGHT_COST: i32 = 10;

/// Cost of one diagonal step (≈ 10·√2).
pub const DIAGONAL_COST: i32 = 14;

/// Octile distance between two points: diagonal steps across the smaller
/// axis delta, straight steps for the remainder. Admissible and
/// consistent for 8-connected movement with these unit costs.
#[inline]
pub fn octile(a: Point, b: Point) -> i32 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    let small = dx.min(dy);
    let large = dx.max(dy);
    DIAGONAL_COST * small + STRAIGHT_COST * (large - small)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_at_identity() {
        let p = Point::new(7, 3);
        assert_eq!(octile(p, p), 0);
    }

    #[test]
    fn symmetric() {
        let a = Point::new(1, 8);
        let b = Point::new(6, 2);
        assert_eq!(octile(a, b), octile(b, a));
    }

    #[test]
    fn unit_steps() {
        let o = Point::new(4, 4);
        assert_eq!(octile(o, Point::new(5, 4)), STRAIGHT_COST);
        assert_eq!(octile(o, Point::new(4, 3)), STRAIGHT_COST);
        assert_eq!(octile(o, Point::new(5, 5)), DIAGONAL_COST);
        assert_eq!(octile(o, Point::new(3, 5)), DIAGONAL_COST);
    }

    #[test]
    fn mixed_moves() {
        // 2 diagonal steps + 3 straight steps.
        assert_eq!(octile(Point::new(0, 0), Point::new(5, 2)), 2 * 14 + 3 * 10);
    }
}
