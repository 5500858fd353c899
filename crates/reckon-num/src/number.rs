//! Generic-radix arbitrary precision numbers.
//!
//! This module provides the digit-sequence representation and its
//! conversions to and from native integers. The arithmetic kernels live in
//! their own modules and are surfaced through the standard operator traits.

use num_traits::{CheckedAdd, CheckedMul, CheckedNeg, CheckedSub, One, PrimInt, Zero};
use smallvec::{smallvec, SmallVec};
use std::ops::{Add, Mul, Neg, Sub};

use crate::add::add_signed;
use crate::multiply::mul_signed;
use crate::NumberError;

/// Digit storage, least-significant digit first.
///
/// Numbers of up to eight digits stay on the stack.
pub type Mantissa = SmallVec<[u32; 8]>;

/// An arbitrary precision signed number in radix `R`.
///
/// The value is `sign · (Σ mant[i]·R^i) · R^exp`: digits are stored
/// least-significant first, and a positive exponent stands for trailing
/// zero digits that are not stored. Every stored digit lies in `[0, R)`,
/// the most-significant stored digit is nonzero unless the number is the
/// canonical single-digit zero, and a numeric zero is never negative.
///
/// Equality, ordering, and hashing are structural over
/// `(mant, exp, neg)`; see [`Number::eq_value`] for value-level equality of
/// zeros. Radices below 2 are rejected at compile time.
///
/// # Examples
///
/// ```
/// use reckon_num::Number;
///
/// let a = Number::<10>::from_integer(1234)?;
/// let b = Number::<10>::from_integer(-4321)?;
/// assert_eq!((&a + &b).to_integer::<i32>()?, -3087);
/// # Ok::<(), reckon_num::NumberError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Number<const R: u32> {
    pub(crate) mant: Mantissa,
    pub(crate) exp: i32,
    pub(crate) neg: bool,
}

impl<const R: u32> Number<R> {
    /// Creates a number from any primitive integer.
    ///
    /// The sign is captured first, then digits are extracted
    /// least-significant first by repeated division; the extraction loop
    /// runs at least once, so zero yields the single digit `0`.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::InvalidOperand`] for the minimum value of a
    /// signed type, whose magnitude overflows that type.
    pub fn from_integer<V>(value: V) -> Result<Self, NumberError>
    where
        V: PrimInt + CheckedNeg,
    {
        const { assert!(R >= 2, "radix must be at least 2") };

        let neg = value < V::zero();
        let mut value = if neg {
            value.checked_neg().ok_or(NumberError::InvalidOperand)?
        } else {
            value
        };

        let mut mant = Mantissa::new();
        match V::from(R) {
            Some(radix) => loop {
                let digit = (value % radix).to_u32().ok_or(NumberError::InvalidOperand)?;
                mant.push(digit);
                value = value / radix;
                if value.is_zero() {
                    break;
                }
            },
            // The radix exceeds the source type's range, so the whole
            // magnitude is a single digit.
            None => mant.push(value.to_u32().ok_or(NumberError::InvalidOperand)?),
        }
        Ok(Self { mant, exp: 0, neg })
    }

    /// Extracts the value into a native integer type.
    ///
    /// Digits are folded most-significant first (`acc = acc·R + d`); a
    /// negative exponent excludes the low-order digits it stands for, and a
    /// positive exponent contributes further multiplications by `R`.
    /// Negative values fold subtractively, so a value equal to `T::MIN`
    /// extracts successfully.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::SignMismatch`] when a negative value is
    /// extracted into an unsigned type, and [`NumberError::Overflow`] when
    /// the value does not fit the destination range.
    pub fn to_integer<T>(&self) -> Result<T, NumberError>
    where
        T: PrimInt + CheckedAdd + CheckedSub + CheckedMul,
    {
        let unsigned = T::min_value() == T::zero();
        if self.neg && unsigned {
            return Err(NumberError::SignMismatch);
        }

        let radix = T::from(R);
        let scale = |acc: T| -> Result<T, NumberError> {
            if acc.is_zero() {
                return Ok(acc);
            }
            let radix = radix.ok_or(NumberError::Overflow)?;
            acc.checked_mul(&radix).ok_or(NumberError::Overflow)
        };

        // A negative exponent truncates: only the digits above it take
        // part in the fold.
        let dropped = self.exp.min(0).unsigned_abs() as usize;
        let take = self.mant.len().saturating_sub(dropped);

        let mut acc = T::zero();
        for &d in self.mant.iter().rev().take(take) {
            acc = scale(acc)?;
            let d = T::from(d).ok_or(NumberError::Overflow)?;
            acc = if self.neg {
                acc.checked_sub(&d).ok_or(NumberError::Overflow)?
            } else {
                acc.checked_add(&d).ok_or(NumberError::Overflow)?
            };
        }
        for _ in 0..self.exp.max(0) {
            acc = scale(acc)?;
        }
        Ok(acc)
    }

    /// Returns true if the number is numerically zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.mant.iter().all(|&d| d == 0)
    }

    /// Returns true if the number is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.neg
    }

    /// Returns the stored exponent.
    #[must_use]
    pub fn exponent(&self) -> i32 {
        self.exp
    }

    /// Returns the stored digits, least-significant first.
    #[must_use]
    pub fn digits(&self) -> &[u32] {
        &self.mant
    }

    /// Numeric equality.
    ///
    /// Structural equality compares the stored form; this additionally
    /// identifies all representations of zero, whose exponents may differ.
    #[must_use]
    pub fn eq_value(&self, other: &Self) -> bool {
        (self.is_zero() && other.is_zero()) || self == other
    }

    /// True if the mantissa is exactly the single digit `1`, making the
    /// number a pure sign-and-shift under multiplication.
    pub(crate) fn is_unit(&self) -> bool {
        self.mant.len() == 1 && self.mant[0] == 1
    }

    /// Infallible construction from an unsigned magnitude.
    fn from_magnitude(mut value: u64) -> Self {
        const { assert!(R >= 2, "radix must be at least 2") };

        let radix = u64::from(R);
        let mut mant = Mantissa::new();
        loop {
            mant.push((value % radix) as u32);
            value /= radix;
            if value == 0 {
                break;
            }
        }
        Self { mant, exp: 0, neg: false }
    }

    /// Strips most-significant zero digits down to a lone `0` and clears
    /// the sign of a numeric zero. Applied to every assembled arithmetic
    /// result, never mid-kernel.
    pub(crate) fn normalized(mut self) -> Self {
        while self.mant.len() > 1 && self.mant.last() == Some(&0) {
            self.mant.pop();
        }
        if self.is_zero() {
            self.neg = false;
        }
        self
    }
}

impl<const R: u32> Zero for Number<R> {
    fn zero() -> Self {
        const { assert!(R >= 2, "radix must be at least 2") };
        Self { mant: smallvec![0], exp: 0, neg: false }
    }

    fn is_zero(&self) -> bool {
        Number::is_zero(self)
    }
}

impl<const R: u32> One for Number<R> {
    fn one() -> Self {
        const { assert!(R >= 2, "radix must be at least 2") };
        Self { mant: smallvec![1], exp: 0, neg: false }
    }

    fn is_one(&self) -> bool {
        !self.neg && self.exp == 0 && self.is_unit()
    }
}

impl<const R: u32> Default for Number<R> {
    fn default() -> Self {
        Self::zero()
    }
}

// Arithmetic operations
impl<const R: u32> Add for Number<R> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        add_signed(&self, &rhs)
    }
}

impl<const R: u32> Add<&Number<R>> for Number<R> {
    type Output = Self;

    fn add(self, rhs: &Number<R>) -> Self::Output {
        add_signed(&self, rhs)
    }
}

impl<const R: u32> Add for &Number<R> {
    type Output = Number<R>;

    fn add(self, rhs: Self) -> Self::Output {
        add_signed(self, rhs)
    }
}

impl<const R: u32> Sub for Number<R> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        add_signed(&self, &-rhs)
    }
}

impl<const R: u32> Sub<&Number<R>> for Number<R> {
    type Output = Self;

    fn sub(self, rhs: &Number<R>) -> Self::Output {
        add_signed(&self, &-rhs)
    }
}

impl<const R: u32> Sub for &Number<R> {
    type Output = Number<R>;

    fn sub(self, rhs: Self) -> Self::Output {
        add_signed(self, &-rhs)
    }
}

impl<const R: u32> Mul for Number<R> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        mul_signed(&self, &rhs)
    }
}

impl<const R: u32> Mul<&Number<R>> for Number<R> {
    type Output = Self;

    fn mul(self, rhs: &Number<R>) -> Self::Output {
        mul_signed(&self, rhs)
    }
}

impl<const R: u32> Mul for &Number<R> {
    type Output = Number<R>;

    fn mul(self, rhs: Self) -> Self::Output {
        mul_signed(self, rhs)
    }
}

impl<const R: u32> Neg for Number<R> {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        if !self.is_zero() {
            self.neg = !self.neg;
        }
        self
    }
}

impl<const R: u32> Neg for &Number<R> {
    type Output = Number<R>;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl<const R: u32> From<u32> for Number<R> {
    fn from(value: u32) -> Self {
        Self::from_magnitude(u64::from(value))
    }
}

impl<const R: u32> From<u64> for Number<R> {
    fn from(value: u64) -> Self {
        Self::from_magnitude(value)
    }
}

impl<const R: u32> TryFrom<i32> for Number<R> {
    type Error = NumberError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_integer(value)
    }
}

impl<const R: u32> TryFrom<i64> for Number<R> {
    type Error = NumberError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_integer(value)
    }
}
