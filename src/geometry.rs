//! Shared 2D geometry for the curve fractals: points, triangles, and
//! the inscribed equilateral triangle both the Koch snowflake and the
//! Sierpinski gasket start from.

use std::f64::consts::PI;

/// A point in image pixel space.  Coordinates stay floating-point
/// through every transformation round and are only snapped to the
/// pixel grid at render time.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point {
    /// Horizontal coordinate, increasing rightward.
    pub x: f64,
    /// Vertical coordinate, increasing downward (image convention).
    pub y: f64,
}

impl Point {
    /// Constructor.
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    /// The point a fraction `t` of the way from `self` toward `other`.
    pub fn lerp(self, other: Point, t: f64) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    /// Midpoint of `self` and `other`.
    pub fn midpoint(self, other: Point) -> Point {
        self.lerp(other, 0.5)
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Exactly three vertices.  The ordering only matters for edge
/// walking; no winding is assumed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Triangle(pub Point, pub Point, pub Point);

impl Triangle {
    /// The vertices as an array, in edge-walking order.
    pub fn vertices(&self) -> [Point; 3] {
        [self.0, self.1, self.2]
    }
}

/// An equilateral triangle inscribed at radius 0.35·size about the
/// canvas center.  The first vertex sits at angle −90° (directly above
/// the center) and the remaining two follow counter-clockwise in 120°
/// steps.
pub fn inscribed_triangle(size: u32) -> [Point; 3] {
    let center = f64::from(size) / 2.0;
    let radius = f64::from(size) * 0.35;
    let mut vertices = [Point::new(0.0, 0.0); 3];
    for (i, vertex) in vertices.iter_mut().enumerate() {
        let angle = (i as f64) * 2.0 * PI / 3.0 - PI / 2.0;
        *vertex = Point::new(
            center + radius * angle.cos(),
            center + radius * angle.sin(),
        );
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_walks_the_segment() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(30.0, -60.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 1.0 / 3.0), Point::new(10.0, -20.0));
        assert_eq!(a.midpoint(b), Point::new(15.0, -30.0));
    }

    #[test]
    fn inscribed_triangle_first_vertex_is_above_center() {
        let [top, _, _] = inscribed_triangle(300);
        assert!((top.x - 150.0).abs() < 1e-9);
        assert!((top.y - (150.0 - 105.0)).abs() < 1e-9);
    }

    #[test]
    fn inscribed_triangle_is_equilateral() {
        let [a, b, c] = inscribed_triangle(300);
        let ab = a.distance(b);
        let bc = b.distance(c);
        let ca = c.distance(a);
        assert!((ab - bc).abs() < 1.0);
        assert!((bc - ca).abs() < 1.0);
    }

    #[test]
    fn inscribed_triangle_vertices_sit_on_the_circle() {
        let size = 240;
        let center = Point::new(120.0, 120.0);
        for vertex in &inscribed_triangle(size) {
            assert!((vertex.distance(center) - 84.0).abs() < 1e-9);
        }
    }
}
