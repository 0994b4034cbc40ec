// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Lagrange interpolation / secret reconstruction.

use crate::errors::{InterpolationError, InterpolationResult};
use crate::point::Point;
use crate::polynomial::Polynomial;
use crate::utils::first_repeated;
use tracing::{debug, instrument, trace};

/// Returns the unique polynomial of degree at most `n` passing through the
/// given `n + 1` points.
///
/// The polynomial is built as the sum of the scaled Lagrange basis terms:
/// ```text
///     L(x) = \sum_{i=0}^n y_i * \prod_{j=0,j≠i}^n (x - x_j) / (x_i - x_j)
/// ```
///
/// # Errors
///
/// Returns `InterpolationError::NoPoints` if `points` is empty and
/// `InterpolationError::DuplicateX` if two points share an x-coordinate.
/// Both checks run before any arithmetic.
#[instrument(level = "debug", skip_all, fields(points = points.len()))]
pub fn interpolate(points: &[Point]) -> InterpolationResult<Polynomial> {
    validate(points)?;

    let result: Polynomial = (0..points.len())
        .map(|i| {
            let term = basis_term(points, i);
            trace!("basis term {i}: {term}");
            term
        })
        .sum();

    debug!(degree = ?result.degree(), "interpolated polynomial");
    Ok(result)
}

/// Recovers the secret encoded as the constant term of the polynomial
/// passing through `points`, i.e. `L(0)`.
///
/// # Errors
///
/// Fails under the same conditions as [`interpolate`].
pub fn recover_secret(points: &[Point]) -> InterpolationResult<f64> {
    Ok(interpolate(points)?.evaluate(0.0))
}

/// Returns the i-th term of the interpolated polynomial:
/// ```text
///     y_i * \prod_{j=0,j≠i}^n (x - x_j) / (x_i - x_j)
/// ```
/// i.e. a polynomial equal to `y_i` at `x_i` and to zero at every other `x_j`.
///
/// The points are not validated: a repeated x-coordinate produces a
/// division by zero and non-finite coefficients.
///
/// # Panics
///
/// Panics if `i` is out of bounds for `points`.
pub fn basis_term(points: &[Point], i: usize) -> Polynomial {
    let Point { x: xi, y: yi } = points[i];
    let mut term = Polynomial::constant(1.0);

    for (j, &Point { x: xj, .. }) in points.iter().enumerate() {
        if j == i {
            continue;
        }
        // (x - x_j) / (x_i - x_j) = -x_j / (x_i - x_j) + x / (x_i - x_j)
        let denom = xi - xj;
        term = term.mul(&Polynomial::new(vec![-xj / denom, 1.0 / denom]));
    }

    term.scale(yi)
}

fn validate(points: &[Point]) -> InterpolationResult<()> {
    if points.is_empty() {
        return Err(InterpolationError::NoPoints);
    }

    if let Some(x) = first_repeated(points.iter().map(|p| p.x)) {
        return Err(InterpolationError::DuplicateX { x });
    }

    Ok(())
}
