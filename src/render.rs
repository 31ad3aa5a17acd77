// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Rasterization
//!
//! The generators know nothing about pixels; they hand their point
//! sequences, triangle lists, or escape matrices to an [`ImageSink`].
//! [`Raster`] is the one real sink: a white size×size RGB buffer with
//! Bresenham strokes, persisted through the `image` crate with the
//! format inferred from the output extension.  The color policy is
//! fixed: black strokes, and a blue→red gradient for escape counts.
//!
//! [`ImageSink`]: trait.ImageSink.html
//! [`Raster`]: struct.Raster.html

use std::path::Path;

use image::{Rgb, RgbImage};

use geometry::{Point, Triangle};

/// Stroke color for every curve fractal.
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
/// Canvas background.
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Stroke width for the Koch snowflake and arrowhead curves.
const CURVE_STROKE: u32 = 2;
/// Stroke width for gasket triangle outlines.
const OUTLINE_STROKE: u32 = 1;

/// What can go wrong while persisting a rendered canvas.  Everything
/// upstream of this point is pure computation and cannot fail.
#[derive(Debug, Fail)]
pub enum RenderError {
    /// The output path's extension names no format `image` can encode.
    #[fail(display = "cannot infer an image format from '{}'", path)]
    UnsupportedFormat {
        /// The offending output path.
        path: String,
    },
    /// The encoder or the filesystem refused the write.
    #[fail(display = "could not write image: {}", _0)]
    Io(#[cause] ::std::io::Error),
}

/// The drawing capability handed to the render step.  Implementations
/// clip out-of-bounds coordinates instead of failing; only `persist`
/// can error.
pub trait ImageSink {
    /// Stroke a polyline through `points`; `closed` joins the last
    /// point back to the first.  `width` is the stroke thickness in
    /// pixels.  Fewer than two points draw nothing.
    fn draw_polyline(&mut self, points: &[Point], closed: bool, color: Rgb<u8>, width: u32);

    /// Outline a triangle's three edges.
    fn draw_triangle(&mut self, triangle: &Triangle, color: Rgb<u8>, width: u32) {
        self.draw_polyline(&triangle.vertices(), true, color, width);
    }

    /// Set a single pixel; out-of-bounds coordinates are ignored.
    fn put_pixel(&mut self, x: u32, y: u32, color: Rgb<u8>);

    /// Write the canvas to `path`, with the format inferred from the
    /// file extension.
    fn persist(&self, path: &Path) -> Result<(), RenderError>;
}

/// A white square RGB canvas.
pub struct Raster {
    img: RgbImage,
}

/// Extensions `image` can encode from an RGB buffer.
const ENCODABLE: &[&str] = &["png", "jpg", "jpeg", "bmp", "ico", "pnm"];

impl Raster {
    /// A size×size canvas filled with the white background.
    pub fn new(size: u32) -> Raster {
        Raster {
            img: RgbImage::from_pixel(size, size, WHITE),
        }
    }

    /// Canvas width and height in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        self.img.dimensions()
    }

    /// Read back one pixel.  Panics out of bounds; only meant for
    /// inspection in tests.
    pub fn pixel(&self, x: u32, y: u32) -> Rgb<u8> {
        *self.img.get_pixel(x, y)
    }

    /// Bresenham stroke from `a` to `b`.  Endpoints are truncated to
    /// the pixel grid; every visited pixel is dilated to a
    /// width×width block to get the stroke thickness.
    fn stroke(&mut self, a: Point, b: Point, color: Rgb<u8>, width: u32) {
        let (mut x0, mut y0) = (a.x as i64, a.y as i64);
        let (x1, y1) = (b.x as i64, b.y as i64);

        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.fill_block(x0, y0, width, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    fn fill_block(&mut self, x: i64, y: i64, width: u32, color: Rgb<u8>) {
        let (w, h) = self.img.dimensions();
        for oy in 0..i64::from(width) {
            for ox in 0..i64::from(width) {
                let (px, py) = (x + ox, y + oy);
                if px >= 0 && py >= 0 && px < i64::from(w) && py < i64::from(h) {
                    self.img.put_pixel(px as u32, py as u32, color);
                }
            }
        }
    }
}

impl ImageSink for Raster {
    fn draw_polyline(&mut self, points: &[Point], closed: bool, color: Rgb<u8>, width: u32) {
        if points.len() < 2 {
            return;
        }
        for pair in points.windows(2) {
            self.stroke(pair[0], pair[1], color, width);
        }
        if closed {
            self.stroke(points[points.len() - 1], points[0], color, width);
        }
    }

    fn put_pixel(&mut self, x: u32, y: u32, color: Rgb<u8>) {
        let (w, h) = self.img.dimensions();
        if x < w && y < h {
            self.img.put_pixel(x, y, color);
        }
    }

    fn persist(&self, path: &Path) -> Result<(), RenderError> {
        let known = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| ENCODABLE.contains(&e.to_lowercase().as_str()))
            .unwrap_or(false);
        if !known {
            return Err(RenderError::UnsupportedFormat {
                path: path.display().to_string(),
            });
        }
        self.img.save(path).map_err(RenderError::Io)
    }
}

/// Render a curve fractal: one black polyline, stroke width 2, open
/// or closed as the algorithm dictates.
pub fn render_curve<S: ImageSink>(sink: &mut S, points: &[Point], closed: bool) {
    sink.draw_polyline(points, closed, BLACK, CURVE_STROKE);
}

/// Render a gasket: every triangle outlined in black, stroke width 1.
pub fn render_triangles<S: ImageSink>(sink: &mut S, triangles: &[Triangle]) {
    for triangle in triangles {
        sink.draw_triangle(triangle, BLACK, OUTLINE_STROKE);
    }
}

/// Render an escape-time matrix pixel by pixel with the fixed
/// Mandelbrot palette.
pub fn render_escape_matrix<S: ImageSink>(sink: &mut S, matrix: &[Vec<u32>], max_iterations: u32) {
    for (y, row) in matrix.iter().enumerate() {
        for (x, &count) in row.iter().enumerate() {
            sink.put_pixel(x as u32, y as u32, escape_color(count, max_iterations));
        }
    }
}

/// The fixed blue→red gradient: interior points (count == cap) are
/// black, everything else fades from blue at 0 toward red at the cap,
/// with green trailing at half strength.
pub fn escape_color(iterations: u32, max_iterations: u32) -> Rgb<u8> {
    if iterations >= max_iterations {
        return BLACK;
    }
    let ratio = f64::from(iterations) / f64::from(max_iterations);
    Rgb([
        (255.0 * ratio) as u8,
        (128.0 * ratio) as u8,
        (255.0 * (1.0 - ratio)) as u8,
    ])
}
