// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Lagrange Polynomial Library
//!
//! Polynomial arithmetic over real (`f64`) coefficients and Lagrange interpolation,
//! the reconstruction step of threshold secret-sharing schemes: a secret stored as
//! the constant term of a polynomial is recovered from a quorum of points on it.
//!
//! ## Features
//!
//! - Canonical polynomials: coefficients in ascending order with no trailing zeros.
//! - Arithmetic: addition, subtraction, negation, multiplication, Horner evaluation.
//! - Interpolation: the unique polynomial of degree at most `n` through `n + 1` points.
//! - Serialization: Optional serde support with bincode integration.
//!
//! ## Precision
//!
//! All arithmetic is IEEE-754 double precision. Unlike schemes over a prime field,
//! nothing bounds the rounding error, and point sets with close x-coordinates can
//! produce a visibly wrong reconstruction.
//!
//! ## Example
//!
//! ```
//! use lagrange_polynomial::{interpolate, Point, Polynomial};
//!
//! let points = [Point::new(1.0, 2.0), Point::new(2.0, 3.0)];
//! let p = interpolate(&points).unwrap();
//! assert_eq!(p, Polynomial::new(vec![1.0, 1.0]));
//! assert_eq!(p.to_string(), "1 + 1x^1");
//! ```

pub mod errors;
pub mod interpolate;
pub mod point;
pub mod polynomial;
pub mod utils;

pub use errors::{InterpolationError, InterpolationResult, ParsePointError};
pub use interpolate::{basis_term, interpolate, recover_secret};
pub use point::Point;
pub use polynomial::Polynomial;
pub use utils::*;
