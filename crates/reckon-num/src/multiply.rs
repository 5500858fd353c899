//! The multiplication kernel.
//!
//! Schoolbook long multiplication with nested carry absorption: every digit
//! pair's double-width product is folded straight into the accumulating
//! result at its offset, carrying forward until both the product carry and
//! the addition carry die out. No per-row partial sums are materialized.

use smallvec::smallvec;

use crate::number::{Mantissa, Number};

/// Computes `a * b`.
pub(crate) fn mul_signed<const R: u32>(a: &Number<R>, b: &Number<R>) -> Number<R> {
    let exp = a.exp + b.exp;
    let neg = a.neg != b.neg;

    // A mantissa of exactly [1] is a pure sign-and-shift; the general walk
    // below would produce the same result.
    if b.is_unit() {
        return Number { mant: a.mant.clone(), exp, neg }.normalized();
    }
    if a.is_unit() {
        return Number { mant: b.mant.clone(), exp, neg }.normalized();
    }

    let radix = u64::from(R);
    let mut mant: Mantissa = smallvec![0; a.mant.len() + b.mant.len()];
    for (i, &da) in a.mant.iter().enumerate() {
        for (j, &db) in b.mant.iter().enumerate() {
            let mut product = u64::from(da) * u64::from(db);
            let mut carry = 0u64;
            let mut k = i + j;
            while product != 0 || carry != 0 {
                carry += u64::from(mant[k]) + product % radix;
                mant[k] = (carry % radix) as u32;
                product /= radix;
                carry /= radix;
                k += 1;
            }
        }
    }
    Number { mant, exp, neg }.normalized()
}
