//! The addition kernel.
//!
//! Signed addition over radix-complement digits. Instead of comparing
//! magnitudes and subtracting, the negative operand's digits are flipped to
//! `R - 1 - d` and the running carry is seeded with one, the generic-radix
//! analogue of two's-complement negation. When the combine pass ends with a
//! carry, the complement absorbed its borrow and the sum is non-negative;
//! when it ends without one, the sum underflowed and the assembled digits
//! are the radix complement of the true magnitude, so they are complemented
//! back (carry-in one) and the result marked negative.
//!
//! The kernel is written as three named phases: carry seeding, the
//! digit-wise combine walk, and sign resolution.

use crate::number::{Mantissa, Number};

/// Carry state chosen by the seed phase.
struct Seed {
    carry: u64,
    complement_a: bool,
    complement_b: bool,
}

impl Seed {
    /// Equal signs add plainly; differing signs seed the carry with one
    /// and mark the negative operand for complement treatment.
    fn for_signs(a_neg: bool, b_neg: bool) -> Self {
        if a_neg == b_neg {
            Self { carry: 0, complement_a: false, complement_b: false }
        } else {
            Self { carry: 1, complement_a: a_neg, complement_b: b_neg }
        }
    }

    fn complements(&self) -> bool {
        self.complement_a || self.complement_b
    }
}

/// Digit of `n` at absolute position `pos`, zero outside the stored range.
fn digit_at<const R: u32>(n: &Number<R>, pos: i64) -> u64 {
    let lo = i64::from(n.exp);
    let hi = lo + n.mant.len() as i64;
    if pos >= lo && pos < hi {
        u64::from(n.mant[(pos - lo) as usize])
    } else {
        0
    }
}

/// Computes `a + b`.
pub(crate) fn add_signed<const R: u32>(a: &Number<R>, b: &Number<R>) -> Number<R> {
    if a.is_zero() {
        return b.clone();
    }
    if b.is_zero() {
        return a.clone();
    }

    let radix = u64::from(R);
    let flip = u64::from(R - 1);

    // Align to the smaller exponent and span both operands, with one digit
    // of headroom for a trailing carry.
    let exp = a.exp.min(b.exp);
    let top = (a.mant.len() as i64 + i64::from(a.exp))
        .max(b.mant.len() as i64 + i64::from(b.exp));
    let width = (top - i64::from(exp)) as usize;

    let seed = Seed::for_signs(a.neg, b.neg);
    let mut carry = seed.carry;
    let mut mant = Mantissa::with_capacity(width + 1);
    for pos in 0..width {
        let pos = i64::from(exp) + pos as i64;
        let mut da = digit_at(a, pos);
        let mut db = digit_at(b, pos);
        if seed.complement_a {
            da = flip - da;
        }
        if seed.complement_b {
            db = flip - db;
        }
        carry += da + db;
        mant.push((carry % radix) as u32);
        carry /= radix;
    }

    let neg = resolve_sign::<R>(&mut mant, carry, &seed, a.neg);
    Number { mant, exp, neg }.normalized()
}

/// Sign resolution phase.
///
/// Without complementing the common sign stands and a leftover carry
/// becomes one more digit. With complementing, a leftover carry means the
/// sum is non-negative; no carry means underflow, and the digits are
/// re-complemented in place to recover the magnitude.
fn resolve_sign<const R: u32>(
    mant: &mut Mantissa,
    carry: u64,
    seed: &Seed,
    common_neg: bool,
) -> bool {
    if !seed.complements() {
        if carry != 0 {
            mant.push(carry as u32);
        }
        return common_neg;
    }
    if carry != 0 {
        return false;
    }

    let radix = u64::from(R);
    let flip = u64::from(R - 1);
    let mut carry = 1u64;
    for d in mant.iter_mut() {
        carry += flip - u64::from(*d);
        *d = (carry % radix) as u32;
        carry /= radix;
    }
    true
}
