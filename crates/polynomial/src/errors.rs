// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for interpolation and point parsing.

use thiserror::Error;

/// Invalid-argument conditions raised by the interpolation entry points.
///
/// Polynomial arithmetic itself never fails; these are only returned after
/// validating the input points and before any arithmetic has been done.
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum InterpolationError {
    /// The point set was empty
    #[error("Invalid argument: must provide at least one point")]
    NoPoints,

    /// Two or more points share an x-coordinate
    #[error("Invalid argument: not all x values are distinct (x = {x} is repeated)")]
    DuplicateX { x: f64 },
}

/// Errors that can occur when parsing a point from its `x,y` text form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParsePointError {
    /// No comma separating the two coordinates
    #[error("Invalid point '{input}': expected the form x,y")]
    MissingSeparator { input: String },

    /// A coordinate is not a valid number
    #[error("Invalid point '{input}': {coordinate} is not a number")]
    InvalidCoordinate { input: String, coordinate: String },
}

/// Result type alias for interpolation operations
pub type InterpolationResult<T> = Result<T, InterpolationError>;
