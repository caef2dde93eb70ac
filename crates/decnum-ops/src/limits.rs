//! Resource budgets for the limit-checked operations.

use std::convert::Infallible;

use decnum_core::{Num, NumError, Resource};
use tracing::warn;

/// Default ceiling on result digits.
pub const DEFAULT_MAX_DIGITS: usize = 1_000_000;

/// Default ceiling on multiplication steps.
pub const DEFAULT_MAX_STEPS: u64 = 1_000_000;

/// Budget applied by `try_power`, `try_power_by_squaring` and `try_factorial`.
///
/// `None` means unbounded. Digit checks use the upper bound
/// `len(a) + len(b)` on a product before it is computed, so an operation is
/// stopped before the oversized value is allocated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    max_digits: Option<usize>,
    max_steps: Option<u64>,
}

impl Limits {
    /// Creates limits with the default ceilings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_digits: Some(DEFAULT_MAX_DIGITS),
            max_steps: Some(DEFAULT_MAX_STEPS),
        }
    }

    /// Creates limits that never trip.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            max_digits: None,
            max_steps: None,
        }
    }

    /// Sets the digit ceiling.
    #[must_use]
    pub const fn with_max_digits(mut self, max_digits: usize) -> Self {
        self.max_digits = Some(max_digits);
        self
    }

    /// Sets the multiplication step ceiling.
    #[must_use]
    pub const fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// Returns the digit ceiling.
    #[must_use]
    pub const fn max_digits(&self) -> Option<usize> {
        self.max_digits
    }

    /// Returns the step ceiling.
    #[must_use]
    pub const fn max_steps(&self) -> Option<u64> {
        self.max_steps
    }

    /// Fails if `requested` steps exceed the ceiling.
    ///
    /// `None` stands for a count too large for a u64.
    pub(crate) fn check_steps(&self, requested: Option<u64>) -> Result<(), NumError> {
        let Some(limit) = self.max_steps else {
            return Ok(());
        };
        let requested = requested.unwrap_or(u64::MAX);
        if requested > limit {
            warn!(limit, requested, "step budget exceeded");
            return Err(NumError::ResourceExhausted {
                resource: Resource::Steps,
                limit,
                requested,
            });
        }
        Ok(())
    }

    /// Fails if a value of `requested` digits exceeds the ceiling.
    pub(crate) fn check_digits(&self, requested: usize) -> Result<(), NumError> {
        let Some(limit) = self.max_digits else {
            return Ok(());
        };
        if requested > limit {
            warn!(limit, requested, "digit budget exceeded");
            return Err(NumError::ResourceExhausted {
                resource: Resource::Digits,
                limit: u64::try_from(limit).unwrap_or(u64::MAX),
                requested: u64::try_from(requested).unwrap_or(u64::MAX),
            });
        }
        Ok(())
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook run before every multiplication of a power or factorial loop.
pub(crate) trait Guard {
    type Error;

    fn before_multiply(&mut self, lhs: &Num, rhs: &Num) -> Result<(), Self::Error>;
}

/// A guard that never objects.
pub(crate) struct Unguarded;

impl Guard for Unguarded {
    type Error = Infallible;

    fn before_multiply(&mut self, _lhs: &Num, _rhs: &Num) -> Result<(), Infallible> {
        Ok(())
    }
}

/// A guard that charges each multiplication against a `Limits` budget.
pub(crate) struct LimitGuard {
    limits: Limits,
    steps: u64,
}

impl LimitGuard {
    pub(crate) fn new(limits: &Limits) -> Self {
        Self {
            limits: *limits,
            steps: 0,
        }
    }

    pub(crate) fn steps(&self) -> u64 {
        self.steps
    }
}

impl Guard for LimitGuard {
    type Error = NumError;

    fn before_multiply(&mut self, lhs: &Num, rhs: &Num) -> Result<(), NumError> {
        self.steps = self.steps.saturating_add(1);
        self.limits.check_steps(Some(self.steps))?;
        self.limits
            .check_digits(lhs.digit_len().saturating_add(rhs.digit_len()))
    }
}

/// Unwraps a result whose error type is uninhabited.
pub(crate) fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
