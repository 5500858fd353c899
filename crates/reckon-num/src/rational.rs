//! Rational numbers as a pair of same-radix numbers.
//!
//! A [`Rational`] is nothing more than `p / q`: two independently valid
//! numbers sharing a radix. This layer enforces no invariant beyond a
//! nonzero denominator; reduction to lowest terms and sign normalization
//! between numerator and denominator belong to callers that can divide.
//! Addition and multiplication are cross-multiplication formulas built
//! entirely from the two core kernels.

use num_traits::{CheckedNeg, One, PrimInt, Zero};
use std::ops::{Add, Mul, Neg};

use crate::{Number, NumberError};

/// A rational number `p / q` in radix `R`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rational<const R: u32> {
    p: Number<R>,
    q: Number<R>,
}

impl<const R: u32> Rational<R> {
    /// Creates a rational from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(p: Number<R>, q: Number<R>) -> Self {
        assert!(!q.is_zero(), "denominator cannot be zero");
        Self { p, q }
    }

    /// Creates a rational from a native integer (denominator = 1).
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::InvalidOperand`] for the minimum value of a
    /// signed type.
    pub fn from_integer<V>(value: V) -> Result<Self, NumberError>
    where
        V: PrimInt + CheckedNeg,
    {
        Ok(Self { p: Number::from_integer(value)?, q: Number::one() })
    }

    /// Creates a rational from native numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::InvalidOperand`] for `i64::MIN` in either
    /// position.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    pub fn from_i64(numerator: i64, denominator: i64) -> Result<Self, NumberError> {
        Ok(Self::new(
            Number::from_integer(numerator)?,
            Number::from_integer(denominator)?,
        ))
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> &Number<R> {
        &self.p
    }

    /// Returns the denominator.
    #[must_use]
    pub fn denominator(&self) -> &Number<R> {
        &self.q
    }

    /// Returns true if the value is numerically zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.p.is_zero()
    }
}

impl<const R: u32> Zero for Rational<R> {
    fn zero() -> Self {
        Self { p: Number::zero(), q: Number::one() }
    }

    fn is_zero(&self) -> bool {
        Rational::is_zero(self)
    }
}

impl<const R: u32> One for Rational<R> {
    fn one() -> Self {
        Self { p: Number::one(), q: Number::one() }
    }
}

// Arithmetic operations
impl<const R: u32> Add for &Rational<R> {
    type Output = Rational<R>;

    fn add(self, rhs: Self) -> Self::Output {
        // p1/q1 + p2/q2 = (p1*q2 + p2*q1) / (q1*q2), left unreduced.
        Rational {
            p: &(&self.p * &rhs.q) + &(&rhs.p * &self.q),
            q: &self.q * &rhs.q,
        }
    }
}

impl<const R: u32> Add for Rational<R> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl<const R: u32> Mul for &Rational<R> {
    type Output = Rational<R>;

    fn mul(self, rhs: Self) -> Self::Output {
        Rational { p: &self.p * &rhs.p, q: &self.q * &rhs.q }
    }
}

impl<const R: u32> Mul for Rational<R> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl<const R: u32> Neg for Rational<R> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { p: -self.p, q: self.q }
    }
}

impl<const R: u32> From<Number<R>> for Rational<R> {
    fn from(n: Number<R>) -> Self {
        Self { p: n, q: Number::one() }
    }
}
