//! Property-based tests for scientific notation.

#[cfg(test)]
mod tests {
    use decnum_core::Num;
    use proptest::prelude::*;

    use crate::scientific;

    fn big() -> impl Strategy<Value = Num> {
        prop_oneof![Just("0".to_string()), "[1-9][0-9]{0,79}"]
            .prop_map(|s| s.parse().expect("strategy yields digit strings"))
    }

    proptest! {
        #[test]
        fn exponent_is_digit_len_minus_one(n in big(), figures in 0usize..12) {
            let text = scientific(&n, figures);
            let (_, exponent) = text.split_once('E').expect("exponent marker");
            prop_assert_eq!(exponent.parse::<usize>().unwrap(), n.digit_len() - 1);
        }

        #[test]
        fn mantissa_is_truncated_prefix(n in big(), figures in 1usize..12) {
            let text = scientific(&n, figures);
            let (mantissa, _) = text.split_once('E').expect("exponent marker");
            let shown: String = mantissa.chars().filter(|c| *c != '.').collect();

            let mut expected = n.to_string();
            expected.truncate(figures);
            while expected.len() < figures {
                expected.push('0');
            }
            prop_assert_eq!(shown, expected);
            prop_assert_eq!(mantissa.contains('.'), figures > 1);
        }
    }
}
