//! Entry points that accept digit text as well as values.
//!
//! Every function here takes anything implementing [`Operand`]: a `Num`, a
//! borrowed `&Num`, a `u64`, or decimal text. Text is validated on the way in,
//! so each function returns a `Result` even though the arithmetic itself is
//! total.

use std::borrow::Cow;
use std::cmp::Ordering;

use decnum_core::{Num, NumError};
use decnum_format::DEFAULT_SIGNIFICANT_FIGURES;
use decnum_ops::Limits;

/// A value that can stand in for a `Num` argument.
pub trait Operand<'a> {
    /// Resolves the operand, borrowing when it already is a `Num`.
    ///
    /// # Errors
    ///
    /// Returns `NumError::InvalidDigitString` if text is not a digit string.
    fn to_operand(self) -> Result<Cow<'a, Num>, NumError>;
}

impl<'a> Operand<'a> for &'a Num {
    fn to_operand(self) -> Result<Cow<'a, Num>, NumError> {
        Ok(Cow::Borrowed(self))
    }
}

impl<'a> Operand<'a> for Num {
    fn to_operand(self) -> Result<Cow<'a, Num>, NumError> {
        Ok(Cow::Owned(self))
    }
}

impl<'a> Operand<'a> for &str {
    fn to_operand(self) -> Result<Cow<'a, Num>, NumError> {
        self.parse().map(Cow::Owned)
    }
}

impl<'a> Operand<'a> for String {
    fn to_operand(self) -> Result<Cow<'a, Num>, NumError> {
        self.as_str().to_operand()
    }
}

impl<'a> Operand<'a> for &String {
    fn to_operand(self) -> Result<Cow<'a, Num>, NumError> {
        self.as_str().to_operand()
    }
}

impl<'a> Operand<'a> for u64 {
    fn to_operand(self) -> Result<Cow<'a, Num>, NumError> {
        Ok(Cow::Owned(Num::from(self)))
    }
}

/// Compares two operands.
///
/// # Errors
///
/// Returns `NumError::InvalidDigitString` for malformed text.
pub fn compare<'a, 'b>(x: impl Operand<'a>, y: impl Operand<'b>) -> Result<Ordering, NumError> {
    Ok(decnum_core::compare(&*x.to_operand()?, &*y.to_operand()?))
}

/// Adds two operands.
///
/// # Errors
///
/// Returns `NumError::InvalidDigitString` for malformed text.
pub fn add<'a, 'b>(x: impl Operand<'a>, y: impl Operand<'b>) -> Result<Num, NumError> {
    Ok(decnum_core::add(&*x.to_operand()?, &*y.to_operand()?))
}

/// Multiplies two operands.
///
/// # Errors
///
/// Returns `NumError::InvalidDigitString` for malformed text.
pub fn multiply<'a, 'b>(x: impl Operand<'a>, y: impl Operand<'b>) -> Result<Num, NumError> {
    Ok(decnum_core::multiply(&*x.to_operand()?, &*y.to_operand()?))
}

/// Subtracts one, flooring at zero.
///
/// # Errors
///
/// Returns `NumError::InvalidDigitString` for malformed text.
pub fn decrement<'a>(x: impl Operand<'a>) -> Result<Num, NumError> {
    Ok(decnum_core::decrement(&*x.to_operand()?))
}

/// Raises `base` to `exponent` by repeated multiplication.
///
/// # Errors
///
/// Returns `NumError::InvalidDigitString` for malformed text.
pub fn power<'a, 'b>(base: impl Operand<'a>, exponent: impl Operand<'b>) -> Result<Num, NumError> {
    Ok(decnum_ops::power(&*base.to_operand()?, &*exponent.to_operand()?))
}

/// Raises `base` to `exponent` within `limits`.
///
/// # Errors
///
/// Returns `NumError::InvalidDigitString` for malformed text and
/// `NumError::ResourceExhausted` when a budget is exceeded.
pub fn try_power<'a, 'b>(
    base: impl Operand<'a>,
    exponent: impl Operand<'b>,
    limits: &Limits,
) -> Result<Num, NumError> {
    decnum_ops::try_power(&*base.to_operand()?, &*exponent.to_operand()?, limits)
}

/// Raises `base` to `exponent` by binary exponentiation.
///
/// # Errors
///
/// Returns `NumError::InvalidDigitString` for malformed text.
pub fn power_by_squaring<'a, 'b>(
    base: impl Operand<'a>,
    exponent: impl Operand<'b>,
) -> Result<Num, NumError> {
    Ok(decnum_ops::power_by_squaring(
        &*base.to_operand()?,
        &*exponent.to_operand()?,
    ))
}

/// Raises `base` to `exponent` by binary exponentiation within `limits`.
///
/// # Errors
///
/// Returns `NumError::InvalidDigitString` for malformed text and
/// `NumError::ResourceExhausted` when a budget is exceeded.
pub fn try_power_by_squaring<'a, 'b>(
    base: impl Operand<'a>,
    exponent: impl Operand<'b>,
    limits: &Limits,
) -> Result<Num, NumError> {
    decnum_ops::try_power_by_squaring(&*base.to_operand()?, &*exponent.to_operand()?, limits)
}

/// Computes `n!`.
///
/// # Errors
///
/// Returns `NumError::InvalidDigitString` for malformed text.
pub fn factorial<'a>(n: impl Operand<'a>) -> Result<Num, NumError> {
    Ok(decnum_ops::factorial(&*n.to_operand()?))
}

/// Computes `n!` within `limits`.
///
/// # Errors
///
/// Returns `NumError::InvalidDigitString` for malformed text and
/// `NumError::ResourceExhausted` when a budget is exceeded.
pub fn try_factorial<'a>(n: impl Operand<'a>, limits: &Limits) -> Result<Num, NumError> {
    decnum_ops::try_factorial(&*n.to_operand()?, limits)
}

/// Renders an operand in scientific notation.
///
/// # Errors
///
/// Returns `NumError::InvalidDigitString` for malformed text.
pub fn scientific<'a>(x: impl Operand<'a>, significant_figures: usize) -> Result<String, NumError> {
    Ok(decnum_format::scientific(&*x.to_operand()?, significant_figures))
}

/// Renders an operand in scientific notation with the default figures.
///
/// # Errors
///
/// Returns `NumError::InvalidDigitString` for malformed text.
pub fn scientific_default<'a>(x: impl Operand<'a>) -> Result<String, NumError> {
    scientific(x, DEFAULT_SIGNIFICANT_FIGURES)
}
