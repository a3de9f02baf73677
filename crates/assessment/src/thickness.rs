//! Corrosion rate, remaining life, and condition of a single reading.
//!
//! [`calculate`] is the per-reading calculator. Its three outputs are always
//! produced together from one [`ThicknessInput`]; there is no way to update
//! one of them without the others.

use uom::si::{f64::Length, length::inch};

use crate::{ConditionStatus, CorrosionRate};

/// Upper bound on remaining life, in years.
///
/// A reading with no measurable thinning reports exactly this value, which
/// reads as "effectively indefinite".
pub const REMAINING_LIFE_CAP: f64 = 999.0;

/// Inputs to the thickness calculator for one reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThicknessInput {
    /// Original (or previously measured) thickness.
    pub original: Length,

    /// Thickness measured now.
    pub current: Length,

    /// Years between the original and current measurements.
    pub elapsed_years: f64,

    /// Minimum required thickness for the reading's course.
    pub minimum: Length,
}

/// Derived values for one reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThicknessResult {
    /// Average metal loss rate between the two measurements.
    pub corrosion_rate: CorrosionRate,

    /// Years until the minimum thickness is reached, within `[0, 999]`.
    pub remaining_life: f64,

    /// Condition classification of the reading.
    pub status: ConditionStatus,
}

impl ThicknessResult {
    /// Returns `true` if the reading shows no measurable thinning.
    #[must_use]
    pub fn has_indefinite_life(&self) -> bool {
        self.remaining_life >= REMAINING_LIFE_CAP
    }
}

/// Evaluates one reading.
///
/// - The corrosion rate is `(original − current) / elapsed_years`, or zero
///   when no time has elapsed.
/// - See [`remaining_life`] for the life calculation.
/// - See [`ConditionStatus::classify`] for the status.
#[must_use]
pub fn calculate(input: ThicknessInput) -> ThicknessResult {
    let ThicknessInput {
        original,
        current,
        elapsed_years,
        minimum,
    } = input;

    let corrosion_rate = CorrosionRate::between(original, current, elapsed_years);
    let remaining_life = remaining_life(current, minimum, corrosion_rate);
    let status = ConditionStatus::classify(current, minimum, remaining_life);

    ThicknessResult {
        corrosion_rate,
        remaining_life,
        status,
    }
}

/// Computes the remaining life of a reading, in years.
///
/// - A rate that is zero or negative gives [`REMAINING_LIFE_CAP`].
/// - A reading at or below its minimum gives zero.
/// - Otherwise `(current − minimum) / rate`, clamped to `[0, 999]`.
#[must_use]
pub fn remaining_life(current: Length, minimum: Length, rate: CorrosionRate) -> f64 {
    if !rate.is_thinning() {
        return REMAINING_LIFE_CAP;
    }
    if current <= minimum {
        return 0.0;
    }

    let margin_in = current.get::<inch>() - minimum.get::<inch>();
    (margin_in / rate.inches_per_year()).clamp(0.0, REMAINING_LIFE_CAP)
}
