//! Scientific notation with a fixed number of significant figures.

use std::fmt::{self, Write};

use decnum_core::Num;

/// Significant figures used when none are requested.
pub const DEFAULT_SIGNIFICANT_FIGURES: usize = 5;

/// Display adapter rendering a `Num` as `d.dddEx`.
///
/// The mantissa is the first digit, then (for more than one significant
/// figure) a point and the next `significant_figures - 1` digits, padded with
/// zeros when the value is shorter. The exponent is `digit_len - 1`.
/// A request for zero significant figures renders like a request for one.
#[derive(Clone, Copy, Debug)]
pub struct Scientific<'a> {
    num: &'a Num,
    significant_figures: usize,
}

impl<'a> Scientific<'a> {
    /// Creates an adapter with the default significant figures.
    #[must_use]
    pub fn new(num: &'a Num) -> Self {
        Self {
            num,
            significant_figures: DEFAULT_SIGNIFICANT_FIGURES,
        }
    }

    /// Sets the number of significant figures.
    #[must_use]
    pub fn with_significant_figures(mut self, significant_figures: usize) -> Self {
        self.significant_figures = significant_figures;
        self
    }

    /// Returns the number of significant figures.
    #[must_use]
    pub fn significant_figures(&self) -> usize {
        self.significant_figures
    }
}

impl fmt::Display for Scientific<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.num.digits();
        f.write_char(char::from(b'0' + digits[0]))?;

        if self.significant_figures > 1 {
            f.write_char('.')?;
            for i in 1..self.significant_figures {
                let digit = digits.get(i).copied().unwrap_or(0);
                f.write_char(char::from(b'0' + digit))?;
            }
        }

        write!(f, "E{}", digits.len() - 1)
    }
}

/// Extension trait for rendering values in scientific notation.
pub trait ToScientific {
    /// Returns a display adapter with the default significant figures.
    fn to_scientific(&self) -> Scientific<'_>;
}

impl ToScientific for Num {
    fn to_scientific(&self) -> Scientific<'_> {
        Scientific::new(self)
    }
}

/// Renders `num` in scientific notation with `significant_figures` digits.
#[must_use]
pub fn scientific(num: &Num, significant_figures: usize) -> String {
    Scientific::new(num)
        .with_significant_figures(significant_figures)
        .to_string()
}
