//! # decnum-format
//!
//! Scientific-notation rendering for decnum values.
//!
//! The output is a lossy, display-only view: digits past the requested
//! significant figures are truncated, never rounded, and the text is not meant
//! to be parsed back into a `Num`.
//!
//! ```
//! use decnum_core::Num;
//! use decnum_format::{scientific, ToScientific};
//!
//! let n: Num = "12345".parse().unwrap();
//! assert_eq!(scientific(&n, 3), "1.23E4");
//! assert_eq!(n.to_scientific().to_string(), "1.2345E4");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod scientific;

#[cfg(test)]
mod proptests;

pub use scientific::{scientific, Scientific, ToScientific, DEFAULT_SIGNIFICANT_FIGURES};
