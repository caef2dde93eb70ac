//! Error types shared by every decnum crate.

use std::fmt;
use thiserror::Error;

/// Errors produced when building or bounding `Num` values.
///
/// Arithmetic on valid values never fails; only text construction and the
/// limit-checked operations can return an error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NumError {
    /// The text handed to the parser is not a decimal digit string.
    #[error("invalid digit string {input:?}: {fault}")]
    InvalidDigitString {
        /// The rejected input.
        input: String,
        /// What was wrong with it.
        fault: DigitStringFault,
    },

    /// A limit-checked operation would exceed its configured budget.
    #[error("resource exhausted: {resource} limit is {limit}, operation needs {requested}")]
    ResourceExhausted {
        /// The bounded resource.
        resource: Resource,
        /// The configured ceiling.
        limit: u64,
        /// What the operation would have needed (a lower bound).
        requested: u64,
    },
}

impl NumError {
    /// Creates an `InvalidDigitString` error.
    pub fn invalid_digits(input: impl Into<String>, fault: DigitStringFault) -> Self {
        Self::InvalidDigitString {
            input: input.into(),
            fault,
        }
    }

    /// Returns true if this is a resource-exhaustion error.
    #[must_use]
    pub fn is_resource_exhausted(&self) -> bool {
        matches!(self, Self::ResourceExhausted { .. })
    }
}

/// The reason a digit string was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DigitStringFault {
    /// No characters at all.
    Empty,
    /// A character outside `0..=9`.
    NonDigit {
        /// Byte offset of the offending character.
        position: usize,
        /// The offending character.
        found: char,
    },
    /// A raw digit value outside `0..=9`.
    DigitOutOfRange {
        /// Index of the offending digit.
        position: usize,
        /// The offending value.
        value: u8,
    },
}

impl fmt::Display for DigitStringFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty input"),
            Self::NonDigit { position, found } => {
                write!(f, "non-digit {found:?} at offset {position}")
            }
            Self::DigitOutOfRange { position, value } => {
                write!(f, "digit value {value} out of range at index {position}")
            }
        }
    }
}

/// A budgeted resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    /// Number of digits in an intermediate or final result.
    Digits,
    /// Number of multiplication steps.
    Steps,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digits => write!(f, "digit"),
            Self::Steps => write!(f, "step"),
        }
    }
}
