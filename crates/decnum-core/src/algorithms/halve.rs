//! Halving by short division.
//!
//! Only division by two is provided. It lets exponentiation walk the bits of
//! an exponent held in decimal.

use crate::num::normalize;
use crate::Num;

/// Halves a canonical digit sequence.
///
/// Returns the quotient and whether a remainder of one was dropped.
#[must_use]
pub fn halve_digits(x: &[u8]) -> (Vec<u8>, bool) {
    let mut quotient = Vec::with_capacity(x.len());
    let mut remainder = 0u8;

    for &digit in x {
        let current = remainder * 10 + digit;
        quotient.push(current / 2);
        remainder = current % 2;
    }

    normalize(&mut quotient);
    (quotient, remainder == 1)
}

/// Returns `(x / 2, x is odd)`.
#[must_use]
pub fn halve(x: &Num) -> (Num, bool) {
    let (quotient, odd) = halve_digits(x.digits());
    (Num::from_canonical(quotient), odd)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(s: &str) -> Num {
        s.parse().unwrap()
    }

    #[test]
    fn test_halve() {
        assert_eq!(halve(&num("0")), (num("0"), false));
        assert_eq!(halve(&num("1")), (num("0"), true));
        assert_eq!(halve(&num("10")), (num("5"), false));
        assert_eq!(halve(&num("1025")), (num("512"), true));
        assert_eq!(
            halve(&num("100000000000000000000")),
            (num("50000000000000000000"), false)
        );
    }
}
