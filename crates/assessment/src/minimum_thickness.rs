//! Minimum required thickness rules.
//!
//! A [`MinimumThicknessRule`] turns the geometry and liquid head acting on one
//! course into the thinnest plate that course may be allowed to reach.
//! Two rules are provided:
//!
//! - [`Hydrostatic`] — the one-foot method shell formula
//! - [`FractionOfOriginal`] — a flat fraction of the course's original thickness
//!
//! The two rules disagree for most tanks. Callers choose one explicitly,
//! either directly or through [`MinimumThicknessMethod`] when the choice
//! comes from configuration.
//!
//! Every rule floors its result at [`MINIMUM_THICKNESS_FLOOR`] inches.

mod fraction;
mod hydrostatic;

pub use fraction::{FractionError, FractionOfOriginal};
pub use hydrostatic::{HEAD_OFFSET, Hydrostatic, hydrostatic_minimum_thickness};

use uom::si::{f64::Length, length::inch};

use crate::TankGeometry;

/// Lowest minimum thickness any rule may return, in inches.
pub const MINIMUM_THICKNESS_FLOOR: f64 = 0.1;

/// Everything a rule may draw on when evaluating one course.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourseContext<'a> {
    /// Position of the course in the stack, with the bottom course at 1.
    pub position: usize,

    /// Geometry of the tank the course belongs to.
    pub geometry: &'a TankGeometry,

    /// Liquid head at the base of the course, before any offset is applied.
    pub liquid_head: Length,

    /// Nominal original thickness shared by the course.
    pub original_thickness: Length,
}

/// A strategy for computing the minimum required thickness of a course.
pub trait MinimumThicknessRule {
    /// Returns the minimum required thickness for the course in `context`.
    ///
    /// Implementations must never return less than
    /// [`MINIMUM_THICKNESS_FLOOR`] inches.
    fn minimum_thickness(&self, context: &CourseContext<'_>) -> Length;
}

impl<R: MinimumThicknessRule + ?Sized> MinimumThicknessRule for &R {
    fn minimum_thickness(&self, context: &CourseContext<'_>) -> Length {
        (**self).minimum_thickness(context)
    }
}

/// A rule selected at runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum MinimumThicknessMethod {
    #[default]
    Hydrostatic,
    FractionOfOriginal(FractionOfOriginal),
}

impl MinimumThicknessRule for MinimumThicknessMethod {
    fn minimum_thickness(&self, context: &CourseContext<'_>) -> Length {
        match self {
            Self::Hydrostatic => Hydrostatic.minimum_thickness(context),
            Self::FractionOfOriginal(rule) => rule.minimum_thickness(context),
        }
    }
}

/// Converts a thickness in inches to a [`Length`], applying the floor.
///
/// A NaN input yields the floor.
fn floored(thickness_in: f64) -> Length {
    Length::new::<inch>(thickness_in.max(MINIMUM_THICKNESS_FLOOR))
}
