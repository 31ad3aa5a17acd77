// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot set
//!
//! Per-pixel escape-time iteration of z ← z² + c over a square window
//! of the complex plane.  The generator's output is a size×size matrix
//! of iteration counts; points that never leave the |z| ≤ 2 disk
//! within the cap score exactly `max_iterations` and render black.

use num::Complex;

/// Escape-time Mandelbrot generator.  The view defaults to the
/// classic framing: centered on (−0.5, 0) with a 2-unit span per axis
/// at zoom 1.
pub struct MandelbrotSet {
    size: u32,
    center: Complex<f64>,
    zoom: f64,
    max_iterations: u32,
}

impl MandelbrotSet {
    /// Constructor with the default view.  `size` is the square
    /// canvas width in pixels, `max_iterations` the escape cap.
    pub fn new(size: u32, max_iterations: u32) -> MandelbrotSet {
        MandelbrotSet::with_view(size, max_iterations, Complex::new(-0.5, 0.0), 1.0)
    }

    /// Constructor with an explicit window: `center` on the complex
    /// plane and a `zoom` factor shrinking the default 2-unit span.
    pub fn with_view(
        size: u32,
        max_iterations: u32,
        center: Complex<f64>,
        zoom: f64,
    ) -> MandelbrotSet {
        MandelbrotSet {
            size,
            center,
            zoom,
            max_iterations,
        }
    }

    /// The escape cap this generator was built with.
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Map a pixel to its point on the complex plane.  Pixel y grows
    /// downward while the imaginary axis grows upward, so the y axis
    /// is flipped.
    pub fn pixel_to_complex(&self, x: u32, y: u32) -> Complex<f64> {
        let size = f64::from(self.size);
        let range = 2.0 / self.zoom;
        Complex::new(
            self.center.re + (f64::from(x) - size / 2.0) * range / size,
            self.center.im - (f64::from(y) - size / 2.0) * range / size,
        )
    }

    /// Iterate z ← z² + c from z = 0 and return the 0-based index of
    /// the first step where |z|² exceeds 4, or `max_iterations` if c
    /// never escapes within the cap.
    pub fn escape_iterations(&self, c: Complex<f64>) -> u32 {
        let mut z = Complex::new(0.0, 0.0);
        for i in 0..self.max_iterations {
            z = z * z + c;
            if z.norm_sqr() > 4.0 {
                return i;
            }
        }
        self.max_iterations
    }

    /// Produce the size×size escape-time matrix, row major (y outer,
    /// x inner).
    pub fn generate(&self) -> Vec<Vec<u32>> {
        let mut matrix = Vec::with_capacity(self.size as usize);
        for y in 0..self.size {
            let mut row = Vec::with_capacity(self.size as usize);
            for x in 0..self.size {
                row.push(self.escape_iterations(self.pixel_to_complex(x, y)));
            }
            matrix.push(row);
        }
        matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_origin_never_escapes() {
        let set = MandelbrotSet::new(100, 100);
        assert_eq!(set.escape_iterations(Complex::new(0.0, 0.0)), 100);
    }

    #[test]
    fn a_far_point_escapes_immediately() {
        let set = MandelbrotSet::new(100, 100);
        assert!(set.escape_iterations(Complex::new(2.0, 2.0)) < 100);
        assert_eq!(set.escape_iterations(Complex::new(2.0, 2.0)), 0);
    }

    #[test]
    fn the_center_pixel_maps_to_the_view_center() {
        let set = MandelbrotSet::new(200, 50);
        let c = set.pixel_to_complex(100, 100);
        assert!((c.re - -0.5).abs() < 0.1);
        assert!(c.im.abs() < 0.1);
    }

    #[test]
    fn pixel_y_is_flipped_against_the_imaginary_axis() {
        let set = MandelbrotSet::new(200, 50);
        let above = set.pixel_to_complex(100, 0);
        let below = set.pixel_to_complex(100, 199);
        assert!(above.im > 0.0);
        assert!(below.im < 0.0);
    }

    #[test]
    fn zoom_narrows_the_window() {
        let wide = MandelbrotSet::new(100, 10);
        let tight = MandelbrotSet::with_view(100, 10, Complex::new(-0.5, 0.0), 4.0);
        let wide_span = wide.pixel_to_complex(99, 50).re - wide.pixel_to_complex(0, 50).re;
        let tight_span = tight.pixel_to_complex(99, 50).re - tight.pixel_to_complex(0, 50).re;
        assert!((wide_span / tight_span - 4.0).abs() < 1e-9);
    }

    #[test]
    fn matrix_is_square_and_bounded() {
        let set = MandelbrotSet::new(40, 25);
        let matrix = set.generate();
        assert_eq!(matrix.len(), 40);
        for row in &matrix {
            assert_eq!(row.len(), 40);
            for &count in row {
                assert!(count <= 25);
            }
        }
    }

    #[test]
    fn the_matrix_contains_both_interior_and_exterior_points() {
        let set = MandelbrotSet::new(64, 30);
        let matrix = set.generate();
        let flat: Vec<u32> = matrix.iter().flat_map(|r| r.iter().cloned()).collect();
        assert!(flat.iter().any(|&n| n == 30));
        assert!(flat.iter().any(|&n| n < 30));
    }
}
