// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Lagrange interpolation CLI
//!
//! Reconstructs the polynomial through a set of points and prints it, its
//! values at requested x-coordinates, or only the recovered secret `p(0)`.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use lagrange_polynomial::{approx_eq, interpolate, Point, Polynomial, DEFAULT_EPSILON};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn, Level};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser, Debug)]
#[command(
    name = "lagrange",
    version,
    about = "Reconstruct the unique minimal-degree polynomial through a set of points using Lagrange interpolation."
)]
struct Args {
    /// A sample point written as `x,y`. Repeat for every point
    #[arg(short, long = "point", value_name = "X,Y", allow_hyphen_values = true)]
    points: Vec<Point>,

    /// JSON file holding an array of `[x, y]` pairs
    #[arg(long, value_name = "FILE")]
    points_file: Option<PathBuf>,

    /// Evaluate the interpolated polynomial at this x value. May be repeated
    #[arg(long = "at", value_name = "X", allow_hyphen_values = true)]
    at: Vec<f64>,

    /// Only print the recovered secret (the constant term)
    #[arg(long, default_value_t = false)]
    secret: bool,

    /// Tolerance for checking the result against the input points
    #[arg(long, default_value_t = DEFAULT_EPSILON)]
    tolerance: f64,

    /// Increase log output: `-v` info, `-vv` debug, `-vvv` trace
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Silence all output except errors. Cannot be used alongside `-v`
    #[arg(short, long, action = ArgAction::SetTrue, conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else {
            match self.verbose {
                0 => Level::WARN,
                1 => Level::INFO,
                2 => Level::DEBUG,
                _ => Level::TRACE,
            }
        }
    }
}

fn setup_tracing(log_level: Level) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();
}

fn main() {
    let args = Args::parse();
    setup_tracing(args.log_level());

    if let Err(err) = run(args) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let points = collect_points(args.points_file.as_deref(), args.points)?;
    info!("Interpolating {} points", points.len());

    let poly = interpolate(&points).context("Interpolation failed")?;
    check_residuals(&poly, &points, args.tolerance);

    if args.secret {
        println!("{}", poly.evaluate(0.0));
        return Ok(());
    }

    println!("p(x) = {}", poly);
    match poly.degree() {
        Some(degree) => println!("degree: {}", degree),
        None => println!("degree: none (zero polynomial)"),
    }
    for x in args.at {
        println!("p({}) = {}", x, poly.evaluate(x));
    }

    Ok(())
}

/// Loads the points file, if any, followed by the points given on the command line.
fn collect_points(file: Option<&Path>, cli_points: Vec<Point>) -> Result<Vec<Point>> {
    let mut points = match file {
        Some(path) => read_points_file(path)?,
        None => Vec::new(),
    };
    points.extend(cli_points);
    Ok(points)
}

fn read_points_file(path: &Path) -> Result<Vec<Point>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read points file {}", path.display()))?;
    let pairs: Vec<(f64, f64)> = serde_json::from_str(&contents).with_context(|| {
        format!(
            "Points file {} is not a JSON array of [x, y] pairs",
            path.display()
        )
    })?;
    debug!("Read {} points from {}", pairs.len(), path.display());
    Ok(pairs.into_iter().map(Point::from).collect())
}

/// Warns about input points the interpolated polynomial misses by more than `tolerance`.
fn check_residuals(poly: &Polynomial, points: &[Point], tolerance: f64) {
    for point in points {
        let value = poly.evaluate(point.x);
        if !approx_eq(value, point.y, tolerance) {
            warn!(
                "p({}) = {} differs from the sample value {} beyond tolerance {}",
                point.x, value, point.y, tolerance
            );
        }
    }
}
