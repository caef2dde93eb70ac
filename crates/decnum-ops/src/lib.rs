//! # decnum-ops
//!
//! Higher operations composed from the decnum primitives.
//!
//! This crate provides:
//! - Exponentiation by repeated multiplication (`power`) and by squaring
//!   (`power_by_squaring`), which agree on every input
//! - Factorial as an explicit accumulator loop
//! - `Limits`, a digit and step budget for the `try_*` variants, which return
//!   `NumError::ResourceExhausted` instead of running away
//!
//! ## Conventions
//!
//! - `power(b, 0) = 1` for every `b`, including zero
//! - `factorial(0) = factorial(1) = 1`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod factorial;
pub mod limits;
pub mod power;

#[cfg(test)]
mod proptests;

pub use factorial::{factorial, try_factorial};
pub use limits::Limits;
pub use power::{power, power_by_squaring, try_power, try_power_by_squaring};
