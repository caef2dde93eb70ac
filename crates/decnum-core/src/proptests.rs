//! Property-based tests for the digit algorithms.
//!
//! Values that fit in a `u64` are cross-checked against native `u128`
//! arithmetic; longer strategies exercise the algebraic laws directly.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;
    use std::cmp::Ordering;

    use crate::{add, compare, decrement, halve, multiply, Num};

    // Strategy for arbitrary canonical digit strings, up to 60 digits
    fn digit_string() -> impl Strategy<Value = String> {
        prop_oneof![Just("0".to_string()), "[1-9][0-9]{0,59}"]
    }

    fn big() -> impl Strategy<Value = Num> {
        digit_string().prop_map(|s| s.parse().expect("strategy yields digit strings"))
    }

    fn is_canonical(n: &Num) -> bool {
        n.digits() == [0] || n.digits()[0] != 0
    }

    proptest! {
        // Agreement with native arithmetic

        #[test]
        fn add_matches_u128(a in any::<u64>(), b in any::<u64>()) {
            let sum = add(&Num::from(a), &Num::from(b));
            prop_assert_eq!(sum.to_string(), (u128::from(a) + u128::from(b)).to_string());
        }

        #[test]
        fn multiply_matches_u128(a in any::<u64>(), b in any::<u64>()) {
            let product = multiply(&Num::from(a), &Num::from(b));
            prop_assert_eq!(product.to_string(), (u128::from(a) * u128::from(b)).to_string());
        }

        #[test]
        fn compare_matches_u64(a in any::<u64>(), b in any::<u64>()) {
            prop_assert_eq!(compare(&Num::from(a), &Num::from(b)), a.cmp(&b));
        }

        #[test]
        fn decrement_matches_u64(a in any::<u64>()) {
            prop_assert_eq!(decrement(&Num::from(a)), Num::from(a.saturating_sub(1)));
        }

        #[test]
        fn halve_matches_u64(a in any::<u64>()) {
            prop_assert_eq!(halve(&Num::from(a)), (Num::from(a / 2), a % 2 == 1));
        }

        // Ring laws on long values

        #[test]
        fn add_commutative(a in big(), b in big()) {
            prop_assert_eq!(add(&a, &b), add(&b, &a));
        }

        #[test]
        fn add_associative(a in big(), b in big(), c in big()) {
            prop_assert_eq!(add(&add(&a, &b), &c), add(&a, &add(&b, &c)));
        }

        #[test]
        fn mul_commutative(a in big(), b in big()) {
            prop_assert_eq!(multiply(&a, &b), multiply(&b, &a));
        }

        #[test]
        fn distributive(a in big(), b in big(), c in big()) {
            prop_assert_eq!(
                multiply(&a, &add(&b, &c)),
                add(&multiply(&a, &b), &multiply(&a, &c))
            );
        }

        #[test]
        fn identities(a in big()) {
            prop_assert_eq!(add(&a, &Num::zero()), a.clone());
            prop_assert_eq!(multiply(&a, &Num::one()), a.clone());
            prop_assert!(multiply(&a, &Num::zero()).is_zero());
        }

        // Decrement undoes increment

        #[test]
        fn decrement_inverts_increment(a in big()) {
            prop_assert_eq!(decrement(&add(&a, &Num::one())), a);
        }

        #[test]
        fn halve_then_double(a in big()) {
            let (half, odd) = halve(&a);
            let doubled = add(&half, &half);
            let rebuilt = if odd { add(&doubled, &Num::one()) } else { doubled };
            prop_assert_eq!(rebuilt, a);
        }

        // Representation

        #[test]
        fn results_are_canonical(a in big(), b in big()) {
            prop_assert!(is_canonical(&add(&a, &b)));
            prop_assert!(is_canonical(&multiply(&a, &b)));
            prop_assert!(is_canonical(&decrement(&a)));
            prop_assert!(is_canonical(&halve(&a).0));
        }

        #[test]
        fn text_round_trip(s in digit_string()) {
            let n: Num = s.parse().unwrap();
            prop_assert_eq!(n.to_string(), s.clone());
            prop_assert_eq!(n.to_string().parse::<Num>().unwrap(), n);
        }

        #[test]
        fn leading_zeros_normalize(zeros in 1usize..5, s in digit_string()) {
            let padded = format!("{}{}", "0".repeat(zeros), s);
            prop_assert_eq!(padded.parse::<Num>().unwrap(), s.parse::<Num>().unwrap());
        }

        #[test]
        fn ordering_consistent_with_add(a in big(), b in big()) {
            let sum = add(&a, &b);
            prop_assert_ne!(compare(&sum, &a), Ordering::Less);
            prop_assert_ne!(compare(&sum, &b), Ordering::Less);
        }
    }
}
