//! # decnum-core
//!
//! Unsigned arbitrary-precision integers stored as decimal digits.
//!
//! This crate provides:
//! - The digit-sequence value type (`Num`)
//! - The primitive schoolbook algorithms every higher operation is built on:
//!   comparison, addition, multiplication, decrement and halving
//! - Operator and `num-traits` integration
//!
//! ## Representation
//!
//! A `Num` is a non-empty vector of digits `0..=9`, most significant first,
//! with no leading zero unless the value is zero itself. Decimal text only
//! appears at the parse and display boundary.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod error;
pub mod num;
mod ops;

#[cfg(test)]
mod proptests;

pub use algorithms::{add, compare, decrement, halve, multiply};
pub use error::{DigitStringFault, NumError, Resource};
pub use num::Num;
