//! Subtract-one with borrow, floored at zero.

use crate::num::normalize;
use crate::Num;

use super::is_zero_digits;

/// Subtracts one from a canonical digit sequence.
///
/// Trailing zeros become nines until the first non-zero digit absorbs the
/// borrow. Any leading zero this leaves (`100 -> 099`) is stripped. Zero is a
/// floor: decrementing it yields zero.
#[must_use]
pub fn decrement_digits(x: &[u8]) -> Vec<u8> {
    if is_zero_digits(x) {
        return vec![0];
    }

    let mut out = x.to_vec();
    for digit in out.iter_mut().rev() {
        if *digit == 0 {
            *digit = 9;
        } else {
            *digit -= 1;
            break;
        }
    }

    normalize(&mut out);
    out
}

/// Returns `x - 1`, or zero when `x` is zero.
#[must_use]
pub fn decrement(x: &Num) -> Num {
    Num::from_canonical(decrement_digits(x.digits()))
}
