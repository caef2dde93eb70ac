//! Exponentiation.
//!
//! `power` follows the naive contract: one multiplication per unit of the
//! exponent, counted down with `decrement`. Cost is linear in the exponent's
//! value, not its digit count. `power_by_squaring` walks the exponent's
//! binary digits by halving instead and returns the same results.

use decnum_core::{decrement, halve, multiply, Num, NumError};
use num_traits::{One, Zero};
use tracing::debug;

use crate::limits::{infallible, Guard, LimitGuard, Limits, Unguarded};

/// Computes `base^exponent` by repeated multiplication.
///
/// `power(b, 0)` is one for every `b`, including zero.
#[must_use]
pub fn power(base: &Num, exponent: &Num) -> Num {
    infallible(repeated_multiply(base, exponent, &mut Unguarded))
}

/// Computes `base^exponent` by repeated multiplication within `limits`.
///
/// # Errors
///
/// Returns `NumError::ResourceExhausted` if the exponent exceeds the step
/// budget or an intermediate product could exceed the digit budget.
pub fn try_power(base: &Num, exponent: &Num, limits: &Limits) -> Result<Num, NumError> {
    debug!(
        base_digits = base.digit_len(),
        exponent = %exponent,
        "power by repeated multiplication"
    );
    limits.check_steps(exponent.to_u64())?;

    let mut guard = LimitGuard::new(limits);
    let result = repeated_multiply(base, exponent, &mut guard)?;
    debug!(steps = guard.steps(), digits = result.digit_len(), "power done");
    Ok(result)
}

/// Computes `base^exponent` by binary exponentiation.
#[must_use]
pub fn power_by_squaring(base: &Num, exponent: &Num) -> Num {
    infallible(square_and_multiply(base, exponent, &mut Unguarded))
}

/// Computes `base^exponent` by binary exponentiation within `limits`.
///
/// # Errors
///
/// Returns `NumError::ResourceExhausted` if the multiplications performed
/// exceed the step budget or a product could exceed the digit budget.
pub fn try_power_by_squaring(
    base: &Num,
    exponent: &Num,
    limits: &Limits,
) -> Result<Num, NumError> {
    debug!(
        base_digits = base.digit_len(),
        exponent_digits = exponent.digit_len(),
        "power by squaring"
    );
    let mut guard = LimitGuard::new(limits);
    let result = square_and_multiply(base, exponent, &mut guard)?;
    debug!(steps = guard.steps(), digits = result.digit_len(), "power done");
    Ok(result)
}

fn repeated_multiply<G: Guard>(base: &Num, exponent: &Num, guard: &mut G) -> Result<Num, G::Error> {
    let mut result = Num::one();
    let mut remaining = exponent.clone();

    // Terminates: decrement strictly shrinks a non-zero value.
    while !remaining.is_zero() {
        guard.before_multiply(&result, base)?;
        result = multiply(&result, base);
        remaining = decrement(&remaining);
    }

    Ok(result)
}

fn square_and_multiply<G: Guard>(
    base: &Num,
    exponent: &Num,
    guard: &mut G,
) -> Result<Num, G::Error> {
    let mut result = Num::one();
    let mut square = base.clone();
    let mut remaining = exponent.clone();

    while !remaining.is_zero() {
        let (half, odd) = halve(&remaining);
        if odd {
            guard.before_multiply(&result, &square)?;
            result = multiply(&result, &square);
        }
        remaining = half;
        if !remaining.is_zero() {
            guard.before_multiply(&square, &square)?;
            square = multiply(&square, &square);
        }
    }

    Ok(result)
}
