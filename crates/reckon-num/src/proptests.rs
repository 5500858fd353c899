//! Property-based tests for the representation and the two kernels.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Number, Rational};

    fn number<const R: u32>(value: i64) -> Number<R> {
        Number::from_integer(value).unwrap()
    }

    proptest! {
        // Round-trip through the digit representation

        #[test]
        fn round_trip_radix_2(v in any::<i32>().prop_filter("negatable", |v| *v != i32::MIN)) {
            prop_assert_eq!(Number::<2>::from_integer(v).unwrap().to_integer::<i32>(), Ok(v));
        }

        #[test]
        fn round_trip_radix_10(v in any::<i32>().prop_filter("negatable", |v| *v != i32::MIN)) {
            prop_assert_eq!(Number::<10>::from_integer(v).unwrap().to_integer::<i32>(), Ok(v));
        }

        #[test]
        fn round_trip_radix_16_unsigned(v in any::<u32>()) {
            prop_assert_eq!(Number::<16>::from_integer(v).unwrap().to_integer::<u32>(), Ok(v));
        }

        #[test]
        fn round_trip_radix_137(v in any::<i64>().prop_filter("negatable", |v| *v != i64::MIN)) {
            prop_assert_eq!(Number::<137>::from_integer(v).unwrap().to_integer::<i64>(), Ok(v));
        }

        // Kernel results cross-checked against native arithmetic

        #[test]
        fn add_matches_native(a in any::<i32>(), b in any::<i32>()) {
            let sum = number::<10>(i64::from(a)) + number::<10>(i64::from(b));
            prop_assert_eq!(sum.to_integer::<i64>(), Ok(i64::from(a) + i64::from(b)));
        }

        #[test]
        fn add_matches_native_radix_16(a in any::<i32>(), b in any::<i32>()) {
            let sum = number::<16>(i64::from(a)) + number::<16>(i64::from(b));
            prop_assert_eq!(sum.to_integer::<i64>(), Ok(i64::from(a) + i64::from(b)));
        }

        #[test]
        fn mul_matches_native(a in any::<i32>(), b in any::<i32>()) {
            let prod = number::<10>(i64::from(a)) * number::<10>(i64::from(b));
            prop_assert_eq!(prod.to_integer::<i64>(), Ok(i64::from(a) * i64::from(b)));
        }

        #[test]
        fn mul_matches_native_radix_137(a in any::<i32>(), b in any::<i32>()) {
            let prod = number::<137>(i64::from(a)) * number::<137>(i64::from(b));
            prop_assert_eq!(prod.to_integer::<i64>(), Ok(i64::from(a) * i64::from(b)));
        }

        // Algebraic laws, compared structurally

        #[test]
        fn add_commutative(a in any::<i32>(), b in any::<i32>()) {
            let a = number::<10>(i64::from(a));
            let b = number::<10>(i64::from(b));
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn mul_commutative(a in any::<i32>(), b in any::<i32>()) {
            let a = number::<10>(i64::from(a));
            let b = number::<10>(i64::from(b));
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn add_associative(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000, c in -1_000_000i64..1_000_000) {
            let a = number::<10>(a);
            let b = number::<10>(b);
            let c = number::<10>(c);
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn additive_identity(v in any::<i64>().prop_filter("negatable", |v| *v != i64::MIN)) {
            let x = number::<10>(v);
            prop_assert_eq!(&x + &Number::zero(), x.clone());
            prop_assert_eq!(&Number::zero() + &x, x);
        }

        #[test]
        fn multiplicative_identity(v in any::<i64>().prop_filter("negatable", |v| *v != i64::MIN)) {
            let x = number::<10>(v);
            prop_assert_eq!(&x * &Number::one(), x.clone());
            prop_assert_eq!(&Number::one() * &x, x);
        }

        #[test]
        fn multiplication_by_zero(v in any::<i64>().prop_filter("negatable", |v| *v != i64::MIN)) {
            let prod = number::<10>(v) * Number::zero();
            prop_assert!(prod.is_zero());
            prop_assert!(!prod.is_negative());
        }

        #[test]
        fn additive_inverse_cancels(v in any::<i64>().prop_filter("negatable", |v| *v != i64::MIN)) {
            let x = number::<10>(v);
            let sum = &x + &(-x.clone());
            prop_assert!(sum.is_zero());
        }

        // Normalization: no stored leading zero except the lone 0

        #[test]
        fn add_results_are_trimmed(a in any::<i32>(), b in any::<i32>()) {
            let sum = number::<10>(i64::from(a)) + number::<10>(i64::from(b));
            let digits = sum.digits();
            prop_assert!(digits.len() == 1 || *digits.last().unwrap() != 0);
        }

        #[test]
        fn mul_results_are_trimmed(a in any::<i32>(), b in any::<i32>()) {
            let prod = number::<10>(i64::from(a)) * number::<10>(i64::from(b));
            let digits = prod.digits();
            prop_assert!(digits.len() == 1 || *digits.last().unwrap() != 0);
        }

        #[test]
        fn digits_stay_below_the_radix(a in any::<i32>(), b in any::<i32>()) {
            let sum = number::<137>(i64::from(a)) + number::<137>(i64::from(b));
            prop_assert!(sum.digits().iter().all(|&d| d < 137));
            let prod = number::<137>(i64::from(a)) * number::<137>(i64::from(b));
            prop_assert!(prod.digits().iter().all(|&d| d < 137));
        }

        // Rational layer cross-checked against native fractions

        #[test]
        fn rational_add_cross_multiplies(
            pa in -1000i64..1000,
            qa in prop_oneof![(-1000i64..=-1), (1i64..=1000)],
            pb in -1000i64..1000,
            qb in prop_oneof![(-1000i64..=-1), (1i64..=1000)],
        ) {
            let sum = Rational::<10>::from_i64(pa, qa).unwrap() + Rational::from_i64(pb, qb).unwrap();
            prop_assert_eq!(sum.numerator().to_integer::<i64>(), Ok(pa * qb + pb * qa));
            prop_assert_eq!(sum.denominator().to_integer::<i64>(), Ok(qa * qb));
        }

        #[test]
        fn rational_mul_componentwise(
            pa in -1000i64..1000,
            qa in prop_oneof![(-1000i64..=-1), (1i64..=1000)],
            pb in -1000i64..1000,
            qb in prop_oneof![(-1000i64..=-1), (1i64..=1000)],
        ) {
            let prod = Rational::<10>::from_i64(pa, qa).unwrap() * Rational::from_i64(pb, qb).unwrap();
            prop_assert_eq!(prod.numerator().to_integer::<i64>(), Ok(pa * pb));
            prop_assert_eq!(prod.denominator().to_integer::<i64>(), Ok(qa * qb));
        }
    }
}
