// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Polynomial arithmetic implementation.

use crate::utils::{approx_eq, strip_trailing};
use num_traits::{One, Zero};
use std::fmt;
use std::iter::{Copied, Sum};
use std::slice;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A polynomial represented by its coefficients in ascending order of degree.
///
/// The polynomial is represented as:
/// `a_0 + a_1 * x + ... + a_n * x^n`
///
/// The coefficient vector is always canonical: it never ends in a zero, and
/// the zero polynomial is the empty vector. Every constructor strips trailing
/// zeros, and no method mutates an existing polynomial.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "Vec<f64>", into = "Vec<f64>")
)]
pub struct Polynomial {
    /// Coefficients in ascending order (constant term first).
    coefficients: Vec<f64>,
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (degree, coeff) in self.iter().enumerate() {
            if coeff == 0.0 {
                continue;
            }

            if !first {
                write!(f, " + ")?;
            }
            first = false;

            if degree == 0 {
                write!(f, "{coeff}")?;
            } else {
                write!(f, "{coeff}{}^{degree}", Self::INDETERMINATE)?;
            }
        }

        if first {
            write!(f, "0")?;
        }

        Ok(())
    }
}

impl Polynomial {
    /// Symbol used for the indeterminate when rendering a polynomial.
    pub const INDETERMINATE: char = 'x';

    /// Creates a new polynomial from a vector of coefficients.
    ///
    /// All coefficients must be given, including zero ones, e.g.
    /// `Polynomial::new(vec![0.0, 1.0, 0.0, 2.0])` is `f(x) = x + 2x^3`.
    /// Trailing zeros are removed.
    ///
    /// # Arguments
    ///
    /// * `coefficients` - Vector of coefficients in ascending order of degree.
    pub fn new(mut coefficients: Vec<f64>) -> Self {
        let len = strip_trailing(&coefficients, &0.0).len();
        coefficients.truncate(len);
        Self { coefficients }
    }

    /// Creates the zero polynomial.
    pub fn zero() -> Self {
        Self {
            coefficients: Vec::new(),
        }
    }

    /// Creates a constant polynomial.
    ///
    /// # Arguments
    ///
    /// * `constant` - The constant value.
    pub fn constant(constant: f64) -> Self {
        Self::new(vec![constant])
    }

    /// Returns the canonical coefficients in ascending order.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Returns an iterator over the coefficients, constant term first.
    ///
    /// Each call starts a fresh traversal; the polynomial is not consumed.
    pub fn iter(&self) -> Copied<slice::Iter<'_, f64>> {
        self.coefficients.iter().copied()
    }

    /// Returns the number of canonical coefficients.
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Returns the degree of the polynomial, or `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.len().checked_sub(1)
    }

    /// Checks if the polynomial is zero.
    pub fn is_zero(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Adds two polynomials together.
    ///
    /// The shorter coefficient vector is padded with zeros; leading terms
    /// that cancel are stripped from the result.
    ///
    /// # Arguments
    ///
    /// * `other` - A reference to the polynomial to add to `self`.
    ///
    /// # Returns
    ///
    /// A new polynomial containing the sum of the two polynomials.
    pub fn add(&self, other: &Self) -> Self {
        let max_length = std::cmp::max(self.len(), other.len());
        let sum = (0..max_length)
            .map(|i| self.coefficient(i) + other.coefficient(i))
            .collect();

        Polynomial::new(sum)
    }

    /// Subtracts one polynomial from another.
    ///
    /// # Arguments
    ///
    /// * `other` - A reference to the polynomial to subtract from `self`.
    ///
    /// # Returns
    ///
    /// A new polynomial containing the difference.
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Negates all coefficients of the polynomial.
    ///
    /// # Returns
    ///
    /// A new polynomial with all coefficients negated.
    pub fn neg(&self) -> Self {
        Polynomial::new(self.iter().map(|x| -x).collect())
    }

    /// Multiplies two polynomials using the naive algorithm.
    ///
    /// # Arguments
    ///
    /// * `other` - A reference to the polynomial to multiply with `self`.
    ///
    /// # Returns
    ///
    /// A new polynomial containing the product.
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Polynomial::zero();
        }

        let product_len = self.len() + other.len() - 1;
        let mut product = vec![0.0; product_len];

        for (i, a) in self.iter().enumerate() {
            for (j, b) in other.iter().enumerate() {
                product[i + j] += a * b;
            }
        }

        Polynomial::new(product)
    }

    /// Multiplies each coefficient of the polynomial by a scalar.
    ///
    /// Equivalent to multiplying by the constant polynomial `[scalar]`.
    pub fn scale(&self, scalar: f64) -> Self {
        Polynomial::new(self.iter().map(|x| x * scalar).collect())
    }

    /// Evaluates the polynomial at a given point using Horner's method.
    ///
    /// # Arguments
    ///
    /// * `x` - The point at which to evaluate the polynomial.
    ///
    /// # Returns
    ///
    /// The value of the polynomial at the given point.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, coeff| acc * x + coeff)
    }

    /// Compares two polynomials coefficient-wise within `epsilon`.
    ///
    /// See [`approx_eq`](crate::utils::approx_eq) for the tolerance used per coefficient.
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        let max_length = std::cmp::max(self.len(), other.len());
        (0..max_length).all(|i| approx_eq(self.coefficient(i), other.coefficient(i), epsilon))
    }

    /// Coefficient of `x^i`, zero past the end.
    fn coefficient(&self, i: usize) -> f64 {
        self.coefficients.get(i).copied().unwrap_or(0.0)
    }
}

impl From<Vec<f64>> for Polynomial {
    fn from(coefficients: Vec<f64>) -> Self {
        Polynomial::new(coefficients)
    }
}

impl From<&[f64]> for Polynomial {
    fn from(coefficients: &[f64]) -> Self {
        Polynomial::new(coefficients.to_vec())
    }
}

impl From<Polynomial> for Vec<f64> {
    fn from(poly: Polynomial) -> Self {
        poly.coefficients
    }
}

impl FromIterator<f64> for Polynomial {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Polynomial::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Polynomial {
    type Item = f64;
    type IntoIter = Copied<slice::Iter<'a, f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// `std::ops` traits stay out of the parent scope so that an owned `f.add(&g)`
// resolves to the inherent method instead of consuming `f`.
mod ops {
    use super::Polynomial;
    use std::ops::{Add, Mul, Neg, Sub};

    macro_rules! impl_binary_op {
        ($trait:ident, $method:ident) => {
            impl $trait for &Polynomial {
                type Output = Polynomial;

                fn $method(self, rhs: &Polynomial) -> Polynomial {
                    Polynomial::$method(self, rhs)
                }
            }

            impl $trait for Polynomial {
                type Output = Polynomial;

                fn $method(self, rhs: Polynomial) -> Polynomial {
                    Polynomial::$method(&self, &rhs)
                }
            }

            impl $trait<&Polynomial> for Polynomial {
                type Output = Polynomial;

                fn $method(self, rhs: &Polynomial) -> Polynomial {
                    Polynomial::$method(&self, rhs)
                }
            }

            impl $trait<Polynomial> for &Polynomial {
                type Output = Polynomial;

                fn $method(self, rhs: Polynomial) -> Polynomial {
                    Polynomial::$method(self, &rhs)
                }
            }
        };
    }

    impl_binary_op!(Add, add);
    impl_binary_op!(Sub, sub);
    impl_binary_op!(Mul, mul);

    impl Neg for &Polynomial {
        type Output = Polynomial;

        fn neg(self) -> Polynomial {
            Polynomial::neg(self)
        }
    }

    impl Neg for Polynomial {
        type Output = Polynomial;

        fn neg(self) -> Polynomial {
            Polynomial::neg(&self)
        }
    }
}

impl Sum for Polynomial {
    fn sum<I: Iterator<Item = Polynomial>>(iter: I) -> Polynomial {
        iter.fold(Polynomial::zero(), |acc, p| acc.add(&p))
    }
}

impl<'a> Sum<&'a Polynomial> for Polynomial {
    fn sum<I: Iterator<Item = &'a Polynomial>>(iter: I) -> Polynomial {
        iter.fold(Polynomial::zero(), |acc, p| acc.add(p))
    }
}

impl Zero for Polynomial {
    fn zero() -> Self {
        Polynomial::zero()
    }

    fn is_zero(&self) -> bool {
        Polynomial::is_zero(self)
    }
}

impl One for Polynomial {
    fn one() -> Self {
        Polynomial::constant(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(coefficients: &[f64]) -> Polynomial {
        Polynomial::from(coefficients)
    }

    #[test]
    fn test_basic_polynomial_creation() {
        let poly = poly(&[1.0, 2.0, 3.0]);
        assert_eq!(poly.degree(), Some(2));
        assert_eq!(poly.coefficients(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_trailing_zeros_are_stripped() {
        let poly = poly(&[1.0, 0.0, 2.0, 0.0, 0.0]);
        assert_eq!(poly.coefficients(), &[1.0, 0.0, 2.0]);
        assert_eq!(poly.degree(), Some(2));
    }

    #[test]
    fn test_zero_polynomial() {
        let zero = poly(&[0.0]);
        assert!(zero.is_zero());
        assert_eq!(zero, Polynomial::zero());
        assert_eq!(zero.degree(), None);
        assert_eq!(zero.iter().count(), 0);
        assert_eq!(zero.to_string(), "0");
        assert_eq!(Polynomial::default(), Polynomial::zero());
    }

    #[test]
    fn test_constant_polynomial() {
        let const_poly = Polynomial::constant(42.0);
        assert_eq!(const_poly.degree(), Some(0));
        assert_eq!(const_poly.coefficients(), &[42.0]);
        assert!(Polynomial::constant(0.0).is_zero());
    }

    #[test]
    fn test_polynomial_display() {
        assert_eq!(poly(&[1.0, 2.0, 3.0]).to_string(), "1 + 2x^1 + 3x^2");
    }

    #[test]
    fn test_polynomial_display_skips_zero_terms() {
        assert_eq!(poly(&[1.0, 0.0, 3.0]).to_string(), "1 + 3x^2");
        assert_eq!(poly(&[0.0, -1.5]).to_string(), "-1.5x^1");
    }

    #[test]
    fn test_polynomial_addition() {
        let result = poly(&[1.0, 2.0, 3.0]).add(&poly(&[4.0, 5.0, 6.0]));
        assert_eq!(result.coefficients(), &[5.0, 7.0, 9.0]);
    }

    #[test]
    fn test_polynomial_addition_uneven_lengths() {
        let f = poly(&[1.0, 2.0, 3.0, 8.0]);
        let g = poly(&[4.0, 5.0, 6.0]);
        assert_eq!(f.add(&g).coefficients(), &[5.0, 7.0, 9.0, 8.0]);
        assert_eq!(g.add(&f).coefficients(), &[5.0, 7.0, 9.0, 8.0]);
    }

    #[test]
    fn test_polynomial_addition_cancels_leading_terms() {
        let f = poly(&[1.0, 2.0, 3.0]);
        let g = poly(&[1.0, 1.0, -3.0]);
        assert_eq!(f.add(&g).coefficients(), &[2.0, 3.0]);
        assert_eq!(f.add(&g).degree(), Some(1));
    }

    #[test]
    fn test_polynomial_subtraction() {
        let result = poly(&[1.0, 2.0, 3.0]).sub(&poly(&[4.0, 5.0, 6.0]));
        assert_eq!(result.coefficients(), &[-3.0, -3.0, -3.0]);
    }

    #[test]
    fn test_polynomial_subtract_zero() {
        let f = poly(&[1.0, 2.0, 3.0]);
        assert_eq!(f.sub(&poly(&[0.0])), f);
    }

    #[test]
    fn test_polynomial_subtract_self() {
        let f = poly(&[1.0, 2.0, 3.0]);
        assert!(f.sub(&f).is_zero());
    }

    #[test]
    fn test_polynomial_negation() {
        let f = poly(&[1.0, 2.0, 3.0]);
        assert_eq!(f.neg().coefficients(), &[-1.0, -2.0, -3.0]);
        assert_eq!(f.neg().neg(), f);
    }

    #[test]
    fn test_polynomial_multiplication() {
        let result = poly(&[1.0, 2.0, 3.0]).mul(&poly(&[4.0, 5.0, 6.0]));
        assert_eq!(result.coefficients(), &[4.0, 13.0, 28.0, 27.0, 18.0]);
    }

    #[test]
    fn test_multiplication_by_zero() {
        let f = poly(&[1.0, 2.0, 3.0]);
        assert!(f.mul(&Polynomial::zero()).is_zero());
        assert!(Polynomial::zero().mul(&f).is_zero());
    }

    #[test]
    fn test_scalar_multiplication() {
        let f = poly(&[1.0, 2.0, 3.0]);
        assert_eq!(f.scale(5.0).coefficients(), &[5.0, 10.0, 15.0]);
        assert_eq!(f.scale(5.0), f.mul(&Polynomial::constant(5.0)));
        assert!(f.scale(0.0).is_zero());
    }

    #[test]
    fn test_polynomial_evaluation() {
        let f = poly(&[1.0, 2.0, 3.0]); // 1 + 2x + 3x^2
        assert_eq!(f.evaluate(2.0), 1.0 + 4.0 + 12.0);
        assert_eq!(f.evaluate(0.0), 1.0);
        assert_eq!(Polynomial::zero().evaluate(7.0), 0.0);
    }

    #[test]
    fn test_iteration_is_restartable() {
        let f = poly(&[1.0, 2.0, 3.0]);
        let first: Vec<f64> = f.iter().collect();
        let second: Vec<f64> = (&f).into_iter().collect();
        assert_eq!(first, vec![1.0, 2.0, 3.0]);
        assert_eq!(first, second);
        assert_eq!(f.len(), 3);
    }

    #[test]
    fn test_operator_traits() {
        let f = poly(&[1.0, 2.0]);
        let g = poly(&[3.0, 4.0]);

        assert_eq!(&f + &g, f.add(&g));
        assert_eq!(f.clone() - g.clone(), f.sub(&g));
        assert_eq!(&f * g.clone(), f.mul(&g));
        assert_eq!(-&f, f.neg());
        assert_eq!(f.clone() + Polynomial::zero(), f);
    }

    #[test]
    fn test_sum() {
        let polys = vec![poly(&[1.0]), poly(&[0.0, 1.0]), poly(&[0.0, 0.0, 1.0])];
        let by_ref: Polynomial = polys.iter().sum();
        let by_value: Polynomial = polys.into_iter().sum();
        assert_eq!(by_ref.coefficients(), &[1.0, 1.0, 1.0]);
        assert_eq!(by_ref, by_value);
        assert!(Vec::<Polynomial>::new().into_iter().sum::<Polynomial>().is_zero());
    }

    #[test]
    fn test_num_traits() {
        let f = poly(&[1.0, 2.0]);
        assert_eq!(f.clone() * <Polynomial as One>::one(), f);
        assert!(Zero::is_zero(&<Polynomial as Zero>::zero()));
    }

    #[test]
    fn test_approx_eq() {
        let f = poly(&[1.0, 2.0]);
        let g = poly(&[1.0 + 1e-12, 2.0, 1e-12]);
        assert!(f.approx_eq(&g, 1e-9));
        assert!(g.approx_eq(&f, 1e-9));
        assert!(!f.approx_eq(&poly(&[1.0, 2.1]), 1e-9));
    }

    #[test]
    fn test_collect_from_iterator() {
        let f: Polynomial = vec![1.0, 0.0, 0.0].into_iter().collect();
        assert_eq!(f.coefficients(), &[1.0]);
        assert_eq!(Vec::from(f), vec![1.0]);
    }

    #[cfg(feature = "serde")]
    mod serialization_tests {
        use super::*;
        use bincode;

        #[test]
        fn test_polynomial_bincode_serialization() {
            let poly = poly(&[1.0, -3.0, 2.0]); // 1 - 3x + 2x^2

            let bytes = bincode::serialize(&poly).expect("Failed to serialize");
            let reconstructed: Polynomial =
                bincode::deserialize(&bytes).expect("Failed to deserialize");

            assert_eq!(poly, reconstructed);
            assert_eq!(poly.degree(), reconstructed.degree());
            assert_eq!(poly.to_string(), reconstructed.to_string());
        }

        #[test]
        fn test_deserialization_canonicalizes() {
            let bytes =
                bincode::serialize(&vec![1.0f64, 2.0, 0.0, 0.0]).expect("Failed to serialize");
            let reconstructed: Polynomial =
                bincode::deserialize(&bytes).expect("Failed to deserialize");
            assert_eq!(reconstructed.coefficients(), &[1.0, 2.0]);
        }

        #[test]
        fn test_zero_polynomial_serialization() {
            let bytes = bincode::serialize(&Polynomial::zero()).expect("Failed to serialize");
            let reconstructed: Polynomial =
                bincode::deserialize(&bytes).expect("Failed to deserialize");
            assert!(reconstructed.is_zero());
        }
    }
}
