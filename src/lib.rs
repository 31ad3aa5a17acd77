#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Classic fractal image generator
//!
//! Each generator in this crate is a pure function of a handful of
//! numeric parameters: an image size, a recursion depth or iteration
//! cap, and (for the Mandelbrot set) a window onto the complex plane.
//! The curve fractals produce point sequences or triangle lists in
//! image pixel space; the Mandelbrot generator produces a matrix of
//! escape-iteration counts.  None of them touch an image buffer.
//!
//! Turning those results into pixels is the job of the [`render`]
//! module, which defines the `ImageSink` capability and a raster
//! implementation over an RGB buffer.  The `fractal` binary wires the
//! two halves together behind a subcommand-per-algorithm CLI.
//!
//! [`render`]: render/index.html

extern crate image;
#[macro_use]
extern crate failure;
extern crate num;

pub mod arrowhead;
pub mod gasket;
pub mod geometry;
pub mod koch;
pub mod mandelbrot;
pub mod render;

pub use arrowhead::SierpinskiArrowhead;
pub use gasket::SierpinskiGasket;
pub use koch::KochSnowflake;
pub use mandelbrot::MandelbrotSet;
pub use render::{ImageSink, Raster, RenderError};
