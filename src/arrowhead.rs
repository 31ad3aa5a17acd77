// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Sierpinski arrowhead curve
//!
//! Two independent constructions of the same family of curves live
//! here, deliberately kept apart because their point counts and
//! coordinate scaling differ:
//!
//! * [`generate`] — direct geometric recursion: every segment is
//!   replaced by four segments bending over a left-perpendicular
//!   equilateral peak, exactly like the Koch step but on an open path.
//! * [`generate_lsystem`] — the L-system `A → B-A-B`, `B → A+B+A`
//!   rewritten `depth` times from the axiom `A`, walked by a turtle
//!   with 60° turns, then uniformly rescaled and recentered to fit the
//!   canvas with a 10% margin.
//!
//! [`generate`]: struct.SierpinskiArrowhead.html#method.generate
//! [`generate_lsystem`]: struct.SierpinskiArrowhead.html#method.generate_lsystem

use std::f64::consts::PI;

use geometry::Point;

/// Fixed forward step, in canvas units, of the raw turtle walk.  The
/// walk is rescaled to the canvas afterwards, so the absolute value
/// only affects floating-point texture.
const TURTLE_STEP: f64 = 10.0;

/// Sierpinski arrowhead generator.
pub struct SierpinskiArrowhead {
    size: u32,
}

impl SierpinskiArrowhead {
    /// Constructor.  `size` is the square canvas width in pixels.
    pub fn new(size: u32) -> SierpinskiArrowhead {
        SierpinskiArrowhead { size }
    }

    /// The depth-0 base shape: a horizontal segment at mid-height,
    /// spanning from 0.15·size to 0.85·size, left endpoint first.
    pub fn initial_line(&self) -> [Point; 2] {
        let size = f64::from(self.size);
        let y = size / 2.0;
        [
            Point::new(size * 0.15, y),
            Point::new(size * 0.85, y),
        ]
    }

    /// Replace the segment p1→p2 with five points bending over an
    /// equilateral peak on the left-perpendicular side.  A zero-length
    /// segment is returned unchanged.
    pub fn transform(p1: Point, p2: Point) -> Vec<Point> {
        let dx = p2.x - p1.x;
        let dy = p2.y - p1.y;
        let len = (dx * dx + dy * dy).sqrt();
        if len == 0.0 {
            return vec![p1, p2];
        }

        // left perpendicular of the direction of travel
        let (vx, vy) = (-dy / len, dx / len);

        let third = p1.lerp(p2, 1.0 / 3.0);
        let two_thirds = p1.lerp(p2, 2.0 / 3.0);
        let mid = third.midpoint(two_thirds);
        let height = (len / 3.0) * 3.0_f64.sqrt() / 2.0;
        let peak = Point::new(mid.x + vx * height, mid.y + vy * height);

        vec![p1, third, peak, two_thirds, p2]
    }

    /// Generate the open arrowhead path at the given depth by
    /// rewriting every consecutive pair each round.  Only each
    /// transform's last point is dropped, and the path's final
    /// endpoint is appended once, so the curve's two endpoints are
    /// invariant across depths.
    pub fn generate(&self, depth: u32) -> Vec<Point> {
        let mut points = self.initial_line().to_vec();
        for _ in 0..depth {
            let mut next = Vec::with_capacity((points.len() - 1) * 4 + 1);
            for pair in points.windows(2) {
                let replaced = Self::transform(pair[0], pair[1]);
                next.extend_from_slice(&replaced[..replaced.len() - 1]);
            }
            if let Some(last) = points.last() {
                next.push(*last);
            }
            points = next;
        }
        points
    }

    /// Rewrite the arrowhead L-system `depth` times from the axiom
    /// `A`.  `A → B-A-B`, `B → A+B+A`; the turn symbols pass through
    /// unchanged.
    pub fn lsystem_string(depth: u32) -> String {
        let mut current = String::from("A");
        for _ in 0..depth {
            let mut next = String::with_capacity(current.len() * 5);
            for symbol in current.chars() {
                match symbol {
                    'A' => next.push_str("B-A-B"),
                    'B' => next.push_str("A+B+A"),
                    other => next.push(other),
                }
            }
            current = next;
        }
        current
    }

    /// Generate the arrowhead path via the L-system variant: rewrite,
    /// walk the string with a turtle starting at (0.2·size, 0.8·size)
    /// heading 0°, then fit the raw path to the canvas.
    pub fn generate_lsystem(&self, depth: u32) -> Vec<Point> {
        let size = f64::from(self.size);
        let start = Point::new(size * 0.2, size * 0.8);
        let commands = Self::lsystem_string(depth);
        let path = walk_turtle(&commands, start, 0.0, TURTLE_STEP);
        fit_to_canvas(&path, self.size)
    }
}

/// Trace an L-system string as turtle moves.  `A` and `B` both step
/// forward and emit a point; `+` turns left 60°, `-` turns right 60°;
/// anything else is ignored.  `heading_degrees` 0 points along +x.
pub fn walk_turtle(commands: &str, start: Point, heading_degrees: f64, step: f64) -> Vec<Point> {
    let mut heading = heading_degrees.to_radians();
    let mut position = start;
    let mut path = vec![start];
    for symbol in commands.chars() {
        match symbol {
            'A' | 'B' => {
                position = Point::new(
                    position.x + step * heading.cos(),
                    position.y + step * heading.sin(),
                );
                path.push(position);
            }
            '+' => heading += PI / 3.0,
            '-' => heading -= PI / 3.0,
            _ => {}
        }
    }
    path
}

/// Uniformly rescale a path so its bounding box fits inside a
/// size×size canvas with a 10%-of-size margin on every side, then
/// translate it so the box is centered.  Aspect ratio is preserved by
/// taking the smaller of the two axis ratios; an axis with zero extent
/// is ignored when picking the scale.
pub fn fit_to_canvas(path: &[Point], size: u32) -> Vec<Point> {
    if path.len() < 2 {
        return path.to_vec();
    }

    let mut min = path[0];
    let mut max = path[0];
    for p in path {
        min = Point::new(min.x.min(p.x), min.y.min(p.y));
        max = Point::new(max.x.max(p.x), max.y.max(p.y));
    }

    let size = f64::from(size);
    let available = size - 2.0 * size * 0.1;
    let width = max.x - min.x;
    let height = max.y - min.y;
    let mut scale = ::std::f64::INFINITY;
    if width > 0.0 {
        scale = scale.min(available / width);
    }
    if height > 0.0 {
        scale = scale.min(available / height);
    }
    if !scale.is_finite() {
        scale = 1.0;
    }

    let center_x = (min.x + max.x) / 2.0;
    let center_y = (min.y + max.y) / 2.0;
    let half = size / 2.0;
    path.iter()
        .map(|p| {
            Point::new(
                half + (p.x - center_x) * scale,
                half + (p.y - center_y) * scale,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_zero_is_the_initial_line() {
        let arrowhead = SierpinskiArrowhead::new(300);
        let points = arrowhead.generate(0);
        assert_eq!(points.len(), 2);
        assert_eq!(points, arrowhead.initial_line().to_vec());
        assert_eq!(points[0], Point::new(45.0, 150.0));
        assert_eq!(points[1], Point::new(255.0, 150.0));
    }

    #[test]
    fn point_count_follows_the_segment_quadrupling() {
        let arrowhead = SierpinskiArrowhead::new(300);
        for depth in 0..5 {
            // 4^d segments on an open path
            assert_eq!(arrowhead.generate(depth).len(), 4_usize.pow(depth) + 1);
        }
    }

    #[test]
    fn endpoints_are_invariant_across_depths() {
        let arrowhead = SierpinskiArrowhead::new(300);
        let [start, end] = arrowhead.initial_line();
        for depth in 0..5 {
            let points = arrowhead.generate(depth);
            assert_eq!(points[0], start);
            assert_eq!(*points.last().unwrap(), end);
        }
    }

    #[test]
    fn transform_of_a_horizontal_segment() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(60.0, 0.0);
        let out = SierpinskiArrowhead::transform(p1, p2);
        assert_eq!(out.len(), 5);
        assert_eq!(out[0], p1);
        assert_eq!(out[4], p2);
        assert_eq!(out[1], Point::new(20.0, 0.0));
        assert_eq!(out[3], Point::new(40.0, 0.0));
        // left perpendicular of +x is +y
        assert!((out[2].x - 30.0).abs() < 1e-9);
        assert!((out[2].y - 10.0 * 3.0_f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn transform_of_a_degenerate_segment_is_unchanged() {
        let p = Point::new(3.0, 4.0);
        assert_eq!(SierpinskiArrowhead::transform(p, p), vec![p, p]);
    }

    #[test]
    fn lsystem_axiom_and_first_rewrites() {
        assert_eq!(SierpinskiArrowhead::lsystem_string(0), "A");
        assert_eq!(SierpinskiArrowhead::lsystem_string(1), "B-A-B");
        assert_eq!(
            SierpinskiArrowhead::lsystem_string(2),
            "A+B+A-B-A-B-A+B+A"
        );
    }

    #[test]
    fn turtle_takes_a_single_step_along_its_heading() {
        let path = walk_turtle("A", Point::new(100.0, 100.0), 0.0, 10.0);
        assert_eq!(path.len(), 2);
        assert!(path[0].distance(Point::new(100.0, 100.0)) < 0.1);
        assert!(path[1].distance(Point::new(110.0, 100.0)) < 0.1);
    }

    #[test]
    fn turtle_turns_by_sixty_degrees() {
        let path = walk_turtle("A+A", Point::new(0.0, 0.0), 0.0, 10.0);
        assert_eq!(path.len(), 3);
        let last = path[2];
        assert!((last.x - (10.0 + 5.0)).abs() < 1e-9);
        assert!((last.y - 10.0 * 3.0_f64.sqrt() / 2.0).abs() < 1e-9);
    }

    #[test]
    fn fitted_path_respects_the_margin() {
        let arrowhead = SierpinskiArrowhead::new(300);
        let points = arrowhead.generate_lsystem(4);
        // the L-system triples its letter count per rewrite, so the
        // walk has 3^d segments (unlike the geometric variant's 4^d)
        assert_eq!(points.len(), 3_usize.pow(4) + 1);
        let margin = 30.0;
        for p in &points {
            assert!(p.x >= margin - 1e-6 && p.x <= 300.0 - margin + 1e-6);
            assert!(p.y >= margin - 1e-6 && p.y <= 300.0 - margin + 1e-6);
        }
    }

    #[test]
    fn fitted_path_is_centered() {
        let arrowhead = SierpinskiArrowhead::new(200);
        let points = arrowhead.generate_lsystem(3);
        let min_x = points.iter().fold(::std::f64::INFINITY, |m, p| m.min(p.x));
        let max_x = points.iter().fold(::std::f64::NEG_INFINITY, |m, p| m.max(p.x));
        let min_y = points.iter().fold(::std::f64::INFINITY, |m, p| m.min(p.y));
        let max_y = points.iter().fold(::std::f64::NEG_INFINITY, |m, p| m.max(p.y));
        assert!(((min_x + max_x) / 2.0 - 100.0).abs() < 1e-6);
        assert!(((min_y + max_y) / 2.0 - 100.0).abs() < 1e-6);
    }

    #[test]
    fn fitting_a_flat_path_scales_by_width_alone() {
        let flat = [Point::new(0.0, 50.0), Point::new(10.0, 50.0)];
        let fitted = fit_to_canvas(&flat, 100);
        assert_eq!(fitted[0], Point::new(10.0, 50.0));
        assert_eq!(fitted[1], Point::new(90.0, 50.0));
    }
}
