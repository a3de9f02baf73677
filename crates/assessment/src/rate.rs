use std::fmt;

use uom::si::{f64::Length, length::inch};

/// Mils per inch, the scale between the primary and display rate units.
const MILS_PER_INCH: f64 = 1000.0;

/// A uniform metal loss rate.
///
/// Stored in inches per year. Reports and the interval tiers use mils per
/// year (thousandths of an inch), available through [`Self::mils_per_year`].
/// Negative values mean the plate measured thicker than it started.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct CorrosionRate(f64);

impl CorrosionRate {
    /// No measurable metal loss.
    pub const ZERO: Self = Self(0.0);

    /// Creates a rate from inches per year.
    #[must_use]
    pub const fn from_inches_per_year(value: f64) -> Self {
        Self(value)
    }

    /// Creates a rate from mils per year.
    #[must_use]
    pub fn from_mils_per_year(value: f64) -> Self {
        Self(value / MILS_PER_INCH)
    }

    /// Computes the average rate between an original and a current thickness.
    ///
    /// Returns [`CorrosionRate::ZERO`] unless `elapsed_years` is positive.
    #[must_use]
    pub fn between(original: Length, current: Length, elapsed_years: f64) -> Self {
        if elapsed_years > 0.0 {
            Self((original.get::<inch>() - current.get::<inch>()) / elapsed_years)
        } else {
            Self::ZERO
        }
    }

    /// Returns the rate in inches per year.
    #[must_use]
    pub const fn inches_per_year(self) -> f64 {
        self.0
    }

    /// Returns the rate in mils per year.
    #[must_use]
    pub fn mils_per_year(self) -> f64 {
        self.0 * MILS_PER_INCH
    }

    /// Returns `true` if the rate indicates measurable thinning.
    #[must_use]
    pub fn is_thinning(self) -> bool {
        self.0 > 0.0
    }
}

impl fmt::Display for CorrosionRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} mpy", self.mils_per_year())
    }
}
