//! Sierpinski gasket
//!
//! Per round, every triangle is replaced by its three corner
//! triangles; the central triangle formed by the edge midpoints is
//! never emitted, and that hole is the gasket.  3^d triangles after
//! depth d rounds.

use geometry::{inscribed_triangle, Point, Triangle};

/// Sierpinski gasket generator.
pub struct SierpinskiGasket {
    size: u32,
}

impl SierpinskiGasket {
    /// Constructor.  `size` is the square canvas width in pixels.
    pub fn new(size: u32) -> SierpinskiGasket {
        SierpinskiGasket { size }
    }

    /// The depth-0 base shape, identical in construction to the Koch
    /// snowflake's starting triangle.
    pub fn initial_triangle(&self) -> Triangle {
        let [a, b, c] = inscribed_triangle(self.size);
        Triangle(a, b, c)
    }

    /// Split a triangle into its three corner triangles.  Each corner
    /// triangle keeps one original vertex plus the midpoints of its
    /// two adjacent edges.
    pub fn subdivide(triangle: &Triangle) -> [Triangle; 3] {
        let Triangle(p1, p2, p3) = *triangle;
        let m12 = p1.midpoint(p2);
        let m23 = p2.midpoint(p3);
        let m31 = p3.midpoint(p1);
        [
            Triangle(p1, m12, m31),
            Triangle(p2, m23, m12),
            Triangle(p3, m31, m23),
        ]
    }

    /// Generate the gasket's triangle list at the given depth by
    /// rebuilding the working list once per round.
    pub fn generate(&self, depth: u32) -> Vec<Triangle> {
        let mut triangles = vec![self.initial_triangle()];
        for _ in 0..depth {
            let mut next = Vec::with_capacity(triangles.len() * 3);
            for triangle in &triangles {
                next.extend_from_slice(&Self::subdivide(triangle));
            }
            triangles = next;
        }
        triangles
    }
}
