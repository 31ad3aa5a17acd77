// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate clap;
extern crate env_logger;
extern crate failure;
extern crate fractalgen;
#[macro_use]
extern crate log;

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use failure::Error;
use fractalgen::render::{self, ImageSink, Raster};
use fractalgen::{KochSnowflake, MandelbrotSet, SierpinskiArrowhead, SierpinskiGasket};
use std::path::Path;
use std::str::FromStr;

const SIZE: &str = "size";
const OUTPUT: &str = "output";
const DEPTH: &str = "recursion-depth";
const ITERATIONS: &str = "num-iterations";
const METHOD: &str = "method";

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

fn size_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name(SIZE)
        .required(true)
        .long(SIZE)
        .short("s")
        .takes_value(true)
        .validator(|s| {
            validate_range::<u32>(
                &s,
                1,
                ::std::u32::MAX,
                "Could not parse image size",
                "Image size must be at least 1",
            )
        })
        .help("Width and height of the square output image, in pixels")
}

fn output_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name(OUTPUT)
        .required(true)
        .long(OUTPUT)
        .short("o")
        .takes_value(true)
        .help("Output image path; the format is inferred from the extension")
}

fn depth_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name(DEPTH)
        .required(true)
        .long(DEPTH)
        .short("d")
        .takes_value(true)
        .validator(|s| {
            validate_range::<u32>(
                &s,
                0,
                ::std::u32::MAX,
                "Could not parse recursion depth",
                "Recursion depth must be non-negative",
            )
        })
        .help("Recursion depth; memory grows exponentially with it")
}

fn args<'a>() -> ArgMatches<'a> {
    App::new("fractal")
        .version("0.1.0")
        .about("Classic fractal image generator")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("koch-snowflake")
                .about("Generate a Koch snowflake")
                .arg(depth_arg())
                .arg(size_arg())
                .arg(output_arg()),
        )
        .subcommand(
            SubCommand::with_name("sierpinski-gasket")
                .about("Generate a Sierpinski gasket")
                .arg(depth_arg())
                .arg(size_arg())
                .arg(output_arg()),
        )
        .subcommand(
            SubCommand::with_name("sierpinski-arrowhead")
                .about("Generate a Sierpinski arrowhead curve")
                .arg(depth_arg())
                .arg(size_arg())
                .arg(output_arg())
                .arg(
                    Arg::with_name(METHOD)
                        .long(METHOD)
                        .takes_value(true)
                        .possible_values(&["geometric", "lsystem"])
                        .default_value("geometric")
                        .help("Construction: direct segment replacement, or L-system rewriting walked by a turtle"),
                ),
        )
        .subcommand(
            SubCommand::with_name("mandelbrot-set")
                .about("Generate the Mandelbrot set")
                .arg(
                    Arg::with_name(ITERATIONS)
                        .required(true)
                        .long(ITERATIONS)
                        .short("n")
                        .takes_value(true)
                        .validator(|s| {
                            validate_range::<u32>(
                                &s,
                                1,
                                ::std::u32::MAX,
                                "Could not parse iteration count",
                                "Iteration count must be at least 1",
                            )
                        })
                        .help("Maximum escape-time iterations per pixel"),
                )
                .arg(size_arg())
                .arg(output_arg()),
        )
        .get_matches()
}

/// Flag values reaching this point already passed their validator.
fn flag<T: FromStr>(matches: &ArgMatches, name: &str) -> T
where
    T::Err: ::std::fmt::Debug,
{
    T::from_str(matches.value_of(name).expect("flag is required"))
        .expect("validator admitted an unparseable value")
}

fn persist(canvas: &Raster, output: &str) -> Result<(), Error> {
    canvas.persist(Path::new(output))?;
    info!("wrote {}", output);
    Ok(())
}

fn koch_snowflake(sub: &ArgMatches) -> Result<(), Error> {
    let size: u32 = flag(sub, SIZE);
    let depth: u32 = flag(sub, DEPTH);
    let points = KochSnowflake::new(size).generate(depth);
    debug!("koch-snowflake depth {}: {} points", depth, points.len());
    let mut canvas = Raster::new(size);
    render::render_curve(&mut canvas, &points, true);
    persist(&canvas, sub.value_of(OUTPUT).expect("output is required"))
}

fn sierpinski_gasket(sub: &ArgMatches) -> Result<(), Error> {
    let size: u32 = flag(sub, SIZE);
    let depth: u32 = flag(sub, DEPTH);
    let triangles = SierpinskiGasket::new(size).generate(depth);
    debug!("sierpinski-gasket depth {}: {} triangles", depth, triangles.len());
    let mut canvas = Raster::new(size);
    render::render_triangles(&mut canvas, &triangles);
    persist(&canvas, sub.value_of(OUTPUT).expect("output is required"))
}

fn sierpinski_arrowhead(sub: &ArgMatches) -> Result<(), Error> {
    let size: u32 = flag(sub, SIZE);
    let depth: u32 = flag(sub, DEPTH);
    let generator = SierpinskiArrowhead::new(size);
    let points = match sub.value_of(METHOD).expect("method has a default") {
        "lsystem" => generator.generate_lsystem(depth),
        _ => generator.generate(depth),
    };
    debug!("sierpinski-arrowhead depth {}: {} points", depth, points.len());
    let mut canvas = Raster::new(size);
    render::render_curve(&mut canvas, &points, false);
    persist(&canvas, sub.value_of(OUTPUT).expect("output is required"))
}

fn mandelbrot_set(sub: &ArgMatches) -> Result<(), Error> {
    let size: u32 = flag(sub, SIZE);
    let iterations: u32 = flag(sub, ITERATIONS);
    let set = MandelbrotSet::new(size, iterations);
    let matrix = set.generate();
    debug!("mandelbrot-set: {}x{} matrix, cap {}", size, size, iterations);
    let mut canvas = Raster::new(size);
    render::render_escape_matrix(&mut canvas, &matrix, set.max_iterations());
    persist(&canvas, sub.value_of(OUTPUT).expect("output is required"))
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    match matches.subcommand() {
        ("koch-snowflake", Some(sub)) => koch_snowflake(sub),
        ("sierpinski-gasket", Some(sub)) => sierpinski_gasket(sub),
        ("sierpinski-arrowhead", Some(sub)) => sierpinski_arrowhead(sub),
        ("mandelbrot-set", Some(sub)) => mandelbrot_set(sub),
        // clap enforces SubcommandRequiredElseHelp before we get here
        _ => unreachable!(),
    }
}

fn main() {
    env_logger::init();
    let matches = args();
    if let Err(e) = run(&matches) {
        eprintln!("fractal: {}", e);
        ::std::process::exit(1);
    }
}
