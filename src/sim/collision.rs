//! Axis-aligned collision testing with a forgiveness margin
//!
//! Boxes are shrunk by a fixed inset on every side before the overlap test,
//! so near-misses don't count. The test itself is the usual AABB overlap:
//! all four strict inequalities must hold.

use glam::Vec2;

use super::state::{Bird, Pipe};

/// Overlap test between two boxes, each shrunk by `inset` on every side.
/// Boxes are (top-left position, size). The inset must stay below half the
/// smallest box dimension for the shrunk boxes to remain well-formed.
pub fn inset_overlap(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2, inset: f32) -> bool {
    a_pos.x + a_size.x - inset > b_pos.x + inset
        && a_pos.x + inset < b_pos.x + b_size.x - inset
        && a_pos.y + a_size.y - inset > b_pos.y + inset
        && a_pos.y + inset < b_pos.y + b_size.y - inset
}

/// Whether the bird hit a pipe, using the configured forgiveness margin.
pub fn bird_pipe_collision(bird: &Bird, pipe: &Pipe, inset: f32) -> bool {
    inset_overlap(bird.pos, bird.size, pipe.pos, pipe.size, inset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlap(a: (f32, f32, f32, f32), b: (f32, f32, f32, f32), inset: f32) -> bool {
        inset_overlap(
            Vec2::new(a.0, a.1),
            Vec2::new(a.2, a.3),
            Vec2::new(b.0, b.1),
            Vec2::new(b.2, b.3),
            inset,
        )
    }

    #[test]
    fn test_overlapping_boxes_collide() {
        // Bird 34x35 at (45, 300) vs pipe 64x50 at (50, 280), inset 5.
        assert!(overlap((45.0, 300.0, 34.0, 35.0), (50.0, 280.0, 64.0, 50.0), 5.0));
    }

    #[test]
    fn test_separated_boxes_miss() {
        assert!(!overlap((0.0, 0.0, 34.0, 35.0), (100.0, 0.0, 64.0, 512.0), 5.0));
        assert!(!overlap((0.0, 0.0, 34.0, 35.0), (0.0, 100.0, 64.0, 512.0), 5.0));
    }

    #[test]
    fn test_graze_inside_margin_is_forgiven() {
        // Boxes overlap by 8 units horizontally; a 5-unit inset on each box
        // eats 10, so the shrunk boxes are disjoint.
        assert!(overlap((0.0, 0.0, 34.0, 35.0), (26.0, 0.0, 64.0, 512.0), 0.0));
        assert!(!overlap((0.0, 0.0, 34.0, 35.0), (26.0, 0.0, 64.0, 512.0), 5.0));
    }

    #[test]
    fn test_zero_inset_is_a_strict_test() {
        // Edge-touching boxes do not overlap under strict inequalities.
        assert!(!overlap((0.0, 0.0, 10.0, 10.0), (10.0, 0.0, 10.0, 10.0), 0.0));
        assert!(overlap((0.0, 0.0, 10.0, 10.0), (9.9, 0.0, 10.0, 10.0), 0.0));
    }

    #[test]
    fn test_containment_still_collides() {
        // Bird fully inside a pipe's box is a hit, not an escape.
        assert!(overlap((100.0, 100.0, 34.0, 35.0), (80.0, 0.0, 64.0, 512.0), 5.0));
    }
}
