//! Schoolbook addition.

use crate::Num;

/// Adds two canonical digit sequences.
///
/// The operands are aligned at their least significant ends and scanned
/// right to left with a single-digit carry. The loop keeps going while the
/// longer operand has digits or a carry is outstanding, so the result has
/// either `max(len)` or `max(len) + 1` digits and never a spurious leading
/// zero.
#[must_use]
pub fn add_digits(x: &[u8], y: &[u8]) -> Vec<u8> {
    let (long, short) = if x.len() >= y.len() { (x, y) } else { (y, x) };

    let mut sum = Vec::with_capacity(long.len() + 1);
    let mut long_digits = long.iter().rev();
    let mut short_digits = short.iter().rev();
    let mut carry = 0u8;

    loop {
        // `short` runs out no later than `long`.
        let Some(&a) = long_digits.next() else {
            if carry > 0 {
                sum.push(carry);
            }
            break;
        };
        let b = short_digits.next().copied().unwrap_or(0);

        let mut digit = a + b + carry;
        if digit >= 10 {
            digit -= 10;
            carry = 1;
        } else {
            carry = 0;
        }
        sum.push(digit);
    }

    sum.reverse();
    sum
}

/// Adds two values.
#[must_use]
pub fn add(x: &Num, y: &Num) -> Num {
    Num::from_canonical(add_digits(x.digits(), y.digits()))
}
