//! Property-based tests for power and factorial.

#[cfg(test)]
mod tests {
    use decnum_core::{decrement, multiply, Num};
    use num_traits::One;
    use proptest::prelude::*;

    use crate::{factorial, power, power_by_squaring, try_power, Limits};

    proptest! {
        #[test]
        fn power_matches_u128(base in 0u64..1000, exp in 0u32..12) {
            let expected = u128::from(base).pow(exp);
            let got = power(&Num::from(base), &Num::from(exp));
            prop_assert_eq!(got.to_string(), expected.to_string());
        }

        #[test]
        fn squaring_agrees_with_repeated(base in 0u64..100_000, exp in 0u64..60) {
            let base = Num::from(base);
            let exp = Num::from(exp);
            prop_assert_eq!(power_by_squaring(&base, &exp), power(&base, &exp));
        }

        #[test]
        fn power_recurrence(base in 0u64..10_000, exp in 1u64..30) {
            // b^e = b * b^(e-1)
            let base = Num::from(base);
            let exp = Num::from(exp);
            prop_assert_eq!(
                power(&base, &exp),
                multiply(&base, &power(&base, &decrement(&exp)))
            );
        }

        #[test]
        fn factorial_recurrence(n in 1u64..150) {
            // n! = n * (n-1)!
            let n = Num::from(n);
            prop_assert_eq!(factorial(&n), multiply(&n, &factorial(&decrement(&n))));
        }

        #[test]
        fn factorial_matches_u128(n in 0u64..=34) {
            let expected: u128 = (1..=u128::from(n)).product();
            prop_assert_eq!(factorial(&Num::from(n)).to_string(), expected.to_string());
        }

        #[test]
        fn unbounded_try_power_agrees(base in 0u64..1000, exp in 0u64..40) {
            let base = Num::from(base);
            let exp = Num::from(exp);
            prop_assert_eq!(
                try_power(&base, &exp, &Limits::unbounded()),
                Ok(power(&base, &exp))
            );
        }

        #[test]
        fn zero_exponent_is_one(base in 0u64..u64::MAX) {
            prop_assert!(power(&Num::from(base), &Num::from(0u64)).is_one());
        }
    }
}
