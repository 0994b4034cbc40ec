// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Utility functions shared by the polynomial and interpolation code.

use std::collections::HashSet;

/// Default tolerance used when comparing floating-point results.
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Returns the prefix of `values` with every trailing occurrence of `value` removed.
///
/// # Arguments
///
/// * `values` - The slice to strip.
/// * `value` - The value to remove from the end of the slice.
///
/// # Returns
///
/// A subslice of `values`; empty if every element equals `value`.
pub fn strip_trailing<'a, T: PartialEq>(values: &'a [T], value: &T) -> &'a [T] {
    let mut end = values.len();
    while end > 0 && values[end - 1] == *value {
        end -= 1;
    }
    &values[..end]
}

/// Compares two numbers using a combined absolute and relative tolerance.
///
/// The numbers are considered equal when `|a - b| <= epsilon * max(1, |a|, |b|)`,
/// so `epsilon` acts as an absolute bound near zero and a relative bound for
/// large magnitudes.
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    if a == b {
        return true;
    }
    let scale = 1f64.max(a.abs()).max(b.abs());
    (a - b).abs() <= epsilon * scale
}

/// Returns the first value in `values` that was already seen earlier.
///
/// `0.0` and `-0.0` are treated as the same value, as are all NaNs.
pub fn first_repeated<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let mut seen = HashSet::new();
    values.into_iter().find(|&x| !seen.insert(float_key(x)))
}

/// Maps a float to a hashable key under which equal-comparing values collide.
fn float_key(x: f64) -> u64 {
    if x == 0.0 {
        0
    } else if x.is_nan() {
        f64::NAN.to_bits()
    } else {
        x.to_bits()
    }
}
