//! Magnitude comparison.

use std::cmp::Ordering;

use crate::Num;

/// Compares two canonical digit sequences.
///
/// With no leading zeros, a longer sequence is always the larger value;
/// equal lengths fall back to digit-by-digit comparison from the most
/// significant end.
#[must_use]
pub fn compare_digits(x: &[u8], y: &[u8]) -> Ordering {
    x.len().cmp(&y.len()).then_with(|| x.cmp(y))
}

/// Compares two values.
#[must_use]
pub fn compare(x: &Num, y: &Num) -> Ordering {
    compare_digits(x.digits(), y.digits())
}
