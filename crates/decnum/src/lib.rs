//! # decnum
//!
//! Unsigned arbitrary-precision integers held as decimal digits.
//!
//! decnum computes exact results far beyond machine word size, such as large
//! factorials, using plain schoolbook algorithms over a digit vector.
//!
//! ## Features
//!
//! - **Exact values**: `Num` is immutable; every operation returns a new value
//! - **Primitives**: compare, add, multiply, decrement
//! - **Composites**: power (repeated or by squaring) and factorial, with
//!   optional digit and step budgets
//! - **Display**: plain digits or truncated scientific notation
//!
//! ## Quick Start
//!
//! ```rust
//! use decnum::prelude::*;
//! use decnum::text;
//!
//! let n: Num = "25".parse()?;
//! assert_eq!((&n * &Num::from(100u64)).to_string(), "2500");
//!
//! assert_eq!(text::factorial("10")?.to_string(), "3628800");
//! assert_eq!(text::power("2", "10")?.to_string(), "1024");
//! assert_eq!(text::scientific("12345", 3)?, "1.23E4");
//! # Ok::<(), NumError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod text;

pub use decnum_core as digits;
pub use decnum_format as format;
pub use decnum_ops as ops;

pub use decnum_core::{add, compare, decrement, multiply, Num, NumError};
pub use decnum_format::{scientific, Scientific, DEFAULT_SIGNIFICANT_FIGURES};
pub use decnum_ops::{
    factorial, power, power_by_squaring, try_factorial, try_power, try_power_by_squaring, Limits,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::text::Operand;
    pub use decnum_core::{Num, NumError};
    pub use decnum_format::ToScientific;
    pub use decnum_ops::Limits;
    pub use num_traits::{One, Zero};
}
