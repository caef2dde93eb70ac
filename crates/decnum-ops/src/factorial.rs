//! Factorial.
//!
//! Computed with an explicit accumulator loop, so the argument's size never
//! translates into call-stack depth.

use decnum_core::{decrement, multiply, Num, NumError};
use num_traits::One;
use tracing::debug;

use crate::limits::{infallible, Guard, LimitGuard, Limits, Unguarded};

/// Computes `n!`.
///
/// `0!` and `1!` are both one.
#[must_use]
pub fn factorial(n: &Num) -> Num {
    infallible(accumulate(n, &mut Unguarded))
}

/// Computes `n!` within `limits`.
///
/// # Errors
///
/// Returns `NumError::ResourceExhausted` if `n - 1` multiplications exceed
/// the step budget or an intermediate product could exceed the digit budget.
pub fn try_factorial(n: &Num, limits: &Limits) -> Result<Num, NumError> {
    debug!(n = %n, "factorial");
    limits.check_steps(n.to_u64().map(|v| v.saturating_sub(1)))?;

    let mut guard = LimitGuard::new(limits);
    let result = accumulate(n, &mut guard)?;
    debug!(steps = guard.steps(), digits = result.digit_len(), "factorial done");
    Ok(result)
}

/// Multiplies `n * (n - 1) * ... * 2` into an accumulator.
fn accumulate<G: Guard>(n: &Num, guard: &mut G) -> Result<Num, G::Error> {
    let mut acc = Num::one();
    let mut factor = n.clone();

    // Stops at the 0 and 1 base cases.
    while !matches!(factor.digits(), [0] | [1]) {
        guard.before_multiply(&factor, &acc)?;
        acc = multiply(&factor, &acc);
        factor = decrement(&factor);
    }

    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use decnum_core::Resource;

    fn num(s: &str) -> Num {
        s.parse().unwrap()
    }

    #[test]
    fn test_base_cases() {
        assert_eq!(factorial(&num("0")), num("1"));
        assert_eq!(factorial(&num("1")), num("1"));
        assert_eq!(factorial(&num("2")), num("2"));
    }

    #[test]
    fn test_small_factorials() {
        assert_eq!(factorial(&num("5")), num("120"));
        assert_eq!(factorial(&num("10")), num("3628800"));
        assert_eq!(factorial(&num("20")), num("2432902008176640000"));
    }

    #[test]
    fn test_large_factorial() {
        assert_eq!(
            factorial(&num("30")).to_string(),
            "265252859812191058636308480000000"
        );
        // 1000! has 2568 digits; a recursive version would need 1000 frames.
        assert_eq!(factorial(&num("1000")).digit_len(), 2568);
    }

    #[test]
    fn test_try_factorial() {
        assert_eq!(
            try_factorial(&num("10"), &Limits::default()),
            Ok(num("3628800"))
        );
        let none = Limits::unbounded().with_max_steps(0);
        assert_eq!(try_factorial(&num("0"), &none), Ok(num("1")));
        assert_eq!(try_factorial(&num("1"), &none), Ok(num("1")));
    }

    #[test]
    fn test_try_factorial_budgets() {
        let steps = Limits::unbounded().with_max_steps(8);
        assert!(try_factorial(&num("9"), &steps).is_ok());
        assert_eq!(
            try_factorial(&num("10"), &steps),
            Err(NumError::ResourceExhausted {
                resource: Resource::Steps,
                limit: 8,
                requested: 9,
            })
        );

        let digits = Limits::unbounded().with_max_digits(10);
        let err = try_factorial(&num("20"), &digits).unwrap_err();
        assert!(matches!(
            err,
            NumError::ResourceExhausted {
                resource: Resource::Digits,
                ..
            }
        ));
    }
}
