//! Minimum-translation-vector selection for overlapping boxes.

use glam::Vec2;

use crate::bounds::Aabb;

/// Compute the displacement that separates the mover `a` from `b`.
///
/// Preconditions: `box_a` and `box_b` overlap (both penetration depths are
/// then non-negative). `pos_a` and `pos_b` are the entity centers and decide
/// the direction of separation on the chosen axis.
///
/// The axis with the smaller penetration is resolved; a tie goes to X. The
/// result always has exactly one non-zero component — the MTV is single-axis,
/// never diagonal. When the two depths are near-equal this can flip axes
/// between frames (a one-frame "pop"), which is accepted behavior.
///
/// The returned vector moves `a` out of `b`; negate it to move `b` instead.
pub fn separation(box_a: &Aabb, box_b: &Aabb, pos_a: Vec2, pos_b: Vec2) -> Vec2 {
    let overlap_x = (box_a.right - box_b.left).min(box_b.right - box_a.left);
    let overlap_y = (box_a.bottom - box_b.top).min(box_b.bottom - box_a.top);

    if overlap_x <= overlap_y {
        if pos_a.x > pos_b.x {
            Vec2::new(overlap_x, 0.0)
        } else {
            Vec2::new(-overlap_x, 0.0)
        }
    } else if pos_a.y > pos_b.y {
        Vec2::new(0.0, overlap_y)
    } else {
        Vec2::new(0.0, -overlap_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxes(pos_a: Vec2, pos_b: Vec2, size: Vec2) -> (Aabb, Aabb) {
        (
            Aabb::from_center(pos_a, size),
            Aabb::from_center(pos_b, size),
        )
    }

    #[test]
    fn test_x_axis_shallower() {
        // A at (10,10) 4x4, B at (11,10) 4x4: overlap_x = 3, overlap_y = 4.
        let pos_a = Vec2::new(10.0, 10.0);
        let pos_b = Vec2::new(11.0, 10.0);
        let (box_a, box_b) = boxes(pos_a, pos_b, Vec2::new(4.0, 4.0));
        let mtv = separation(&box_a, &box_b, pos_a, pos_b);
        assert_eq!(mtv, Vec2::new(-3.0, 0.0));
    }

    #[test]
    fn test_y_axis_shallower() {
        let pos_a = Vec2::new(10.0, 10.0);
        let pos_b = Vec2::new(10.0, 11.0);
        let (box_a, box_b) = boxes(pos_a, pos_b, Vec2::new(4.0, 4.0));
        let mtv = separation(&box_a, &box_b, pos_a, pos_b);
        assert_eq!(mtv, Vec2::new(0.0, -3.0));
    }

    #[test]
    fn test_tie_break_picks_x() {
        // Perfect diagonal offset: overlap_x == overlap_y == 3.
        let pos_a = Vec2::new(10.0, 10.0);
        let pos_b = Vec2::new(11.0, 11.0);
        let (box_a, box_b) = boxes(pos_a, pos_b, Vec2::new(4.0, 4.0));
        let mtv = separation(&box_a, &box_b, pos_a, pos_b);
        assert_eq!(mtv, Vec2::new(-3.0, 0.0));
    }

    #[test]
    fn test_direction_points_away_from_b() {
        // Mover to the right of B separates in +X.
        let pos_a = Vec2::new(11.0, 10.0);
        let pos_b = Vec2::new(10.0, 10.0);
        let (box_a, box_b) = boxes(pos_a, pos_b, Vec2::new(4.0, 4.0));
        let mtv = separation(&box_a, &box_b, pos_a, pos_b);
        assert_eq!(mtv, Vec2::new(3.0, 0.0));

        // Mover below B separates in +Y.
        let pos_a = Vec2::new(10.0, 11.0);
        let pos_b = Vec2::new(10.0, 10.0);
        let (box_a, box_b) = boxes(pos_a, pos_b, Vec2::new(4.0, 4.0));
        let mtv = separation(&box_a, &box_b, pos_a, pos_b);
        assert_eq!(mtv, Vec2::new(0.0, 3.0));
    }

    #[test]
    fn test_magnitude_matches_penetration() {
        // Asymmetric sizes: A 4x4 at (10,10), B 6x2 at (12,10).
        let pos_a = Vec2::new(10.0, 10.0);
        let pos_b = Vec2::new(12.0, 10.0);
        let box_a = Aabb::from_center(pos_a, Vec2::new(4.0, 4.0));
        let box_b = Aabb::from_center(pos_b, Vec2::new(6.0, 2.0));
        // overlap_x = min(12-9, 15-8) = 3, overlap_y = min(12-9, 11-8) = 3.
        let mtv = separation(&box_a, &box_b, pos_a, pos_b);
        assert_eq!(mtv, Vec2::new(-3.0, 0.0));
    }
}
