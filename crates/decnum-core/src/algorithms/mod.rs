//! Schoolbook algorithms over decimal digit sequences.
//!
//! Each submodule exposes a slice-level kernel (`*_digits`) that works on raw
//! digit values, most significant first, and a `Num`-level wrapper. The
//! slice kernels assume canonical input and always produce canonical output.
//!
//! Dependency order, leaves first: `compare`, `add`, `decrement` and `halve`
//! read digits directly; `multiply` accumulates through `add`.

pub mod add;
pub mod compare;
pub mod decrement;
pub mod halve;
pub mod multiply;

pub use add::add;
pub use compare::compare;
pub use decrement::decrement;
pub use halve::halve;
pub use multiply::multiply;

/// Returns true for the canonical zero sequence.
#[inline]
pub(crate) fn is_zero_digits(digits: &[u8]) -> bool {
    digits == [0]
}
