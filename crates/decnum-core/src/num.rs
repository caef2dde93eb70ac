//! The decimal digit-sequence value type.
//!
//! A `Num` owns its digits and is never mutated after construction; every
//! arithmetic operation returns a fresh value.

use std::fmt;
use std::str::FromStr;

use crate::error::{DigitStringFault, NumError};

/// An unsigned arbitrary-precision integer.
///
/// Stored as decimal digit values (`0..=9`), most significant first. The
/// sequence is never empty and has no leading zero unless it is exactly `[0]`,
/// so two `Num`s are equal if and only if their digit vectors are equal.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Num(Vec<u8>);

impl Num {
    /// Creates a value from raw digit values, most significant first.
    ///
    /// Leading zeros are stripped; an all-zero sequence becomes zero.
    ///
    /// # Errors
    ///
    /// Returns `NumError::InvalidDigitString` if `digits` is empty or holds a
    /// value greater than 9.
    pub fn from_digits(mut digits: Vec<u8>) -> Result<Self, NumError> {
        if digits.is_empty() {
            return Err(NumError::invalid_digits("", DigitStringFault::Empty));
        }
        if let Some((position, &value)) = digits.iter().enumerate().find(|(_, &d)| d > 9) {
            let rendered: String = digits.iter().map(|d| d.to_string()).collect();
            return Err(NumError::invalid_digits(
                rendered,
                DigitStringFault::DigitOutOfRange { position, value },
            ));
        }
        normalize(&mut digits);
        Ok(Self(digits))
    }

    /// Wraps digits already known to be canonical.
    pub(crate) fn from_canonical(digits: Vec<u8>) -> Self {
        debug_assert!(is_canonical(&digits), "non-canonical digits {digits:?}");
        Self(digits)
    }

    /// Returns the digit values, most significant first.
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.0
    }

    /// Returns the number of decimal digits.
    ///
    /// Zero has one digit.
    #[must_use]
    pub fn digit_len(&self) -> usize {
        self.0.len()
    }

    /// Attempts to convert to a u64.
    ///
    /// Returns `None` if the value doesn't fit.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        self.0.iter().try_fold(0u64, |acc, &d| {
            acc.checked_mul(10)?.checked_add(u64::from(d))
        })
    }

    /// Consumes the value and returns its digit vector.
    #[must_use]
    pub fn into_digits(self) -> Vec<u8> {
        self.0
    }
}

/// Strips leading zeros, leaving a single zero for an all-zero sequence.
pub(crate) fn normalize(digits: &mut Vec<u8>) {
    match digits.iter().position(|&d| d != 0) {
        Some(0) => {}
        Some(first) => {
            digits.drain(..first);
        }
        None => {
            digits.clear();
            digits.push(0);
        }
    }
}

fn is_canonical(digits: &[u8]) -> bool {
    match digits {
        [] => false,
        [0] => true,
        [lead, ..] => *lead != 0 && digits.iter().all(|&d| d <= 9),
    }
}

impl FromStr for Num {
    type Err = NumError;

    /// Parses a decimal digit string.
    ///
    /// No sign, separators or whitespace are accepted. Leading zeros are
    /// normalized away (`"007"` parses as `7`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(NumError::invalid_digits(s, DigitStringFault::Empty));
        }

        let mut digits = Vec::with_capacity(s.len());
        for (position, c) in s.char_indices() {
            match c.to_digit(10) {
                // to_digit(10) only yields 0..=9
                #[allow(clippy::cast_possible_truncation)]
                Some(d) => digits.push(d as u8),
                None => {
                    return Err(NumError::invalid_digits(
                        s,
                        DigitStringFault::NonDigit { position, found: c },
                    ))
                }
            }
        }

        normalize(&mut digits);
        Ok(Self(digits))
    }
}

impl From<u64> for Num {
    fn from(mut value: u64) -> Self {
        if value == 0 {
            return Self(vec![0]);
        }
        let mut digits = Vec::with_capacity(20);
        while value > 0 {
            // value % 10 < 10
            #[allow(clippy::cast_possible_truncation)]
            digits.push((value % 10) as u8);
            value /= 10;
        }
        digits.reverse();
        Self(digits)
    }
}

impl From<u32> for Num {
    fn from(value: u32) -> Self {
        Self::from(u64::from(value))
    }
}

impl From<u8> for Num {
    fn from(value: u8) -> Self {
        Self::from(u64::from(value))
    }
}

impl Default for Num {
    fn default() -> Self {
        Self(vec![0])
    }
}

impl fmt::Debug for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Num({self})")
    }
}

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = self.0.iter().map(|&d| char::from(b'0' + d)).collect();
        f.pad(&text)
    }
}
