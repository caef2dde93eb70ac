//! Schoolbook long multiplication.

use crate::Num;

use super::add::add_digits;
use super::is_zero_digits;

/// Multiplies two canonical digit sequences.
///
/// For each digit of the shorter operand, least significant first, a partial
/// product against the whole longer operand is shifted into place and
/// accumulated with [`add_digits`]. Zero digits contribute nothing and are
/// skipped. Cost is O(len(x) * len(y)).
#[must_use]
pub fn multiply_digits(x: &[u8], y: &[u8]) -> Vec<u8> {
    if is_zero_digits(x) || is_zero_digits(y) {
        return vec![0];
    }

    let (long, short) = if x.len() >= y.len() { (x, y) } else { (y, x) };

    let mut product = vec![0];
    for (shift, &multiplier) in short.iter().rev().enumerate() {
        if multiplier == 0 {
            continue;
        }
        let partial = partial_product(long, multiplier, shift);
        product = add_digits(&product, &partial);
    }

    product
}

/// Multiplies `digits` by a single non-zero digit and appends `shift` zeros.
///
/// The carry can reach 8 (`9 * 9 + 8 = 89`), so it is a full digit rather
/// than a single bit as in addition.
fn partial_product(digits: &[u8], multiplier: u8, shift: usize) -> Vec<u8> {
    // Built least significant first, reversed at the end.
    let mut out = Vec::with_capacity(digits.len() + shift + 1);
    out.resize(shift, 0);

    let mut carry = 0u8;
    for &digit in digits.iter().rev() {
        let value = digit * multiplier + carry;
        out.push(value % 10);
        carry = value / 10;
    }
    if carry > 0 {
        out.push(carry);
    }

    out.reverse();
    out
}

/// Multiplies two values.
#[must_use]
pub fn multiply(x: &Num, y: &Num) -> Num {
    Num::from_canonical(multiply_digits(x.digits(), y.digits()))
}
