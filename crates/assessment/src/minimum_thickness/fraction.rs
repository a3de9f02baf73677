use thiserror::Error;
use uom::si::{f64::Length, length::inch};

use super::{CourseContext, MinimumThicknessRule, floored};

/// Minimum thickness as a fixed fraction of the course's original thickness.
///
/// The common field heuristic retires plate at half its original thickness,
/// which is [`FractionOfOriginal::HALF`]. The result is still floored at
/// [`MINIMUM_THICKNESS_FLOOR`](super::MINIMUM_THICKNESS_FLOOR) inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractionOfOriginal {
    fraction: f64,
}

/// Error returned when a fraction is outside `(0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("fraction must be finite, greater than zero, and at most one (got {0})")]
pub struct FractionError(pub f64);

impl FractionOfOriginal {
    /// Half of the original thickness.
    pub const HALF: Self = Self { fraction: 0.5 };

    /// Creates a rule retiring plate at `fraction` of its original thickness.
    ///
    /// # Errors
    ///
    /// Returns a [`FractionError`] if `fraction` is not finite or not in `(0, 1]`.
    pub fn new(fraction: f64) -> Result<Self, FractionError> {
        if fraction.is_finite() && fraction > 0.0 && fraction <= 1.0 {
            Ok(Self { fraction })
        } else {
            Err(FractionError(fraction))
        }
    }

    /// Returns the configured fraction.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        self.fraction
    }
}

impl Default for FractionOfOriginal {
    fn default() -> Self {
        Self::HALF
    }
}

impl MinimumThicknessRule for FractionOfOriginal {
    fn minimum_thickness(&self, context: &CourseContext<'_>) -> Length {
        floored(context.original_thickness.get::<inch>() * self.fraction)
    }
}
