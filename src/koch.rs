// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Koch snowflake
//!
//! Starts from an equilateral triangle and, per round, replaces every
//! edge with four edges bending around an outward-pointing equilateral
//! peak on the middle third.  The expansion is breadth-first over an
//! explicit point list rather than call-stack recursion, so depth is
//! bounded only by memory (3·4^d points).

use geometry::{inscribed_triangle, Point};

/// Koch snowflake generator.  Holds the canvas size; everything else
/// is a parameter of [`generate`].
///
/// [`generate`]: #method.generate
pub struct KochSnowflake {
    size: u32,
}

impl KochSnowflake {
    /// Constructor.  `size` is the square canvas width in pixels.
    pub fn new(size: u32) -> KochSnowflake {
        KochSnowflake { size }
    }

    /// The depth-0 base shape: the inscribed equilateral triangle,
    /// first vertex on top, counter-clockwise.
    pub fn initial_triangle(&self) -> Vec<Point> {
        inscribed_triangle(self.size).to_vec()
    }

    /// Replace the segment p1→p2 with the five points of one Koch
    /// step: p1, the 1/3 point, the outward peak over the middle
    /// third, the 2/3 point, and p2.  A zero-length segment gets a
    /// zero peak offset, so all five points coincide with p1.
    pub fn transform(p1: Point, p2: Point) -> [Point; 5] {
        let third = p1.lerp(p2, 1.0 / 3.0);
        let two_thirds = p1.lerp(p2, 2.0 / 3.0);
        let mid = third.midpoint(two_thirds);

        let dx = p2.x - p1.x;
        let dy = p2.y - p1.y;
        let len = (dx * dx + dy * dy).sqrt();
        let peak = if len > 0.0 {
            // (dy, -dx)/len points away from the snowflake's interior
            // for a counter-clockwise vertex ordering.
            let height = (len / 3.0) * 3.0_f64.sqrt() / 2.0;
            Point::new(mid.x + dy / len * height, mid.y - dx / len * height)
        } else {
            mid
        };

        [p1, third, peak, two_thirds, p2]
    }

    /// Generate the closed snowflake outline at the given depth.  Each
    /// round rewrites every edge of the closed loop, keeping only the
    /// first four points of each transform so shared vertices are not
    /// duplicated.  The last point connects back to the first.
    pub fn generate(&self, depth: u32) -> Vec<Point> {
        let mut points = self.initial_triangle();
        for _ in 0..depth {
            let mut next = Vec::with_capacity(points.len() * 4);
            for i in 0..points.len() {
                let edge = Self::transform(points[i], points[(i + 1) % points.len()]);
                next.extend_from_slice(&edge[..4]);
            }
            points = next;
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_zero_is_the_initial_triangle() {
        let koch = KochSnowflake::new(300);
        assert_eq!(koch.generate(0), koch.initial_triangle());
    }

    #[test]
    fn point_count_is_three_times_four_to_the_depth() {
        let koch = KochSnowflake::new(300);
        for depth in 0..5 {
            let expected = 3 * 4_usize.pow(depth);
            assert_eq!(koch.generate(depth).len(), expected);
        }
    }

    #[test]
    fn transform_preserves_endpoints() {
        let p1 = Point::new(12.5, -3.0);
        let p2 = Point::new(80.0, 41.0);
        let out = KochSnowflake::transform(p1, p2);
        assert_eq!(out[0], p1);
        assert_eq!(out[4], p2);
    }

    #[test]
    fn transform_of_a_horizontal_segment() {
        let out = KochSnowflake::transform(Point::new(0.0, 0.0), Point::new(60.0, 0.0));
        assert_eq!(out[1], Point::new(20.0, 0.0));
        assert_eq!(out[3], Point::new(40.0, 0.0));
        // Peak rises by the height of an equilateral triangle with a
        // 20-unit base; the perpendicular here is (0, -1).
        assert!((out[2].x - 30.0).abs() < 1e-9);
        assert!((out[2].y + 10.0 * 3.0_f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn transform_of_a_degenerate_segment_has_no_peak() {
        let p = Point::new(7.0, 7.0);
        let out = KochSnowflake::transform(p, p);
        for q in &out {
            assert_eq!(*q, p);
        }
    }

    #[test]
    fn deeper_rounds_keep_previous_vertices() {
        let koch = KochSnowflake::new(300);
        let base = koch.generate(1);
        let refined = koch.generate(2);
        for p in &base {
            assert!(refined.iter().any(|q| p.distance(*q) < 1e-9));
        }
    }
}
