use uom::si::{
    f64::{Length, Pressure},
    length::foot,
    pressure::psi,
};

use super::{CourseContext, MinimumThicknessRule, floored};

/// Height subtracted from the liquid head to reach the point of measurement, in feet.
pub const HEAD_OFFSET: f64 = 1.0;

/// Shell formula coefficient for diameter and head in feet, stress in psi,
/// and thickness in inches.
const SHELL_COEFFICIENT: f64 = 2.6;

/// Minimum thickness from the hydrostatic load on the shell.
///
/// Evaluates the one-foot method formula
///
/// ```text
/// t_min = 2.6 · D · (H − 1) · G / (S · E)
/// ```
///
/// using the tank geometry and the course's liquid head.
/// See [`hydrostatic_minimum_thickness`] for the edge case behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hydrostatic;

impl MinimumThicknessRule for Hydrostatic {
    fn minimum_thickness(&self, context: &CourseContext<'_>) -> Length {
        let geometry = context.geometry;
        hydrostatic_minimum_thickness(
            geometry.diameter,
            geometry.specific_gravity,
            context.liquid_head,
            geometry.joint_efficiency,
            geometry.allowable_stress,
        )
    }
}

/// Computes the hydrostatic minimum thickness for one course.
///
/// The effective head is `fill_height − 1 ft`, never less than zero.
/// The result is floored at [`MINIMUM_THICKNESS_FLOOR`](super::MINIMUM_THICKNESS_FLOOR)
/// inches, so a course with no liquid above it still gets the floor.
///
/// Stress or efficiency at or near zero drives the result toward infinity
/// instead of failing; callers are expected to supply sane values.
#[must_use]
pub fn hydrostatic_minimum_thickness(
    diameter: Length,
    specific_gravity: f64,
    fill_height: Length,
    joint_efficiency: f64,
    allowable_stress: Pressure,
) -> Length {
    let head_ft = (fill_height.get::<foot>() - HEAD_OFFSET).max(0.0);
    let stress_psi = allowable_stress.get::<psi>();

    floored(
        SHELL_COEFFICIENT * diameter.get::<foot>() * head_ft * specific_gravity
            / (stress_psi * joint_efficiency),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::length::inch;

    use crate::minimum_thickness::MINIMUM_THICKNESS_FLOOR;

    fn t_min(fill_ft: f64, stress_psi: f64, efficiency: f64) -> f64 {
        hydrostatic_minimum_thickness(
            Length::new::<foot>(100.0),
            1.0,
            Length::new::<foot>(fill_ft),
            efficiency,
            Pressure::new::<psi>(stress_psi),
        )
        .get::<inch>()
    }

    #[test]
    fn full_head_on_a_large_tank() {
        // 2.6 · 100 · 39 · 1.0 / (26,000 · 1.0)
        assert_relative_eq!(t_min(40.0, 26_000.0, 1.0), 0.39, epsilon = 1e-9);
    }

    #[test]
    fn joint_efficiency_thickens_the_minimum() {
        assert_relative_eq!(t_min(40.0, 26_000.0, 0.85), 0.39 / 0.85, epsilon = 1e-9);
    }

    #[test]
    fn small_head_is_floored() {
        // 2.6 · 100 · 2 / 26,000 = 0.02 in.
        assert_relative_eq!(t_min(3.0, 26_000.0, 1.0), MINIMUM_THICKNESS_FLOOR);
    }

    #[test]
    fn head_below_the_offset_counts_as_zero() {
        assert_relative_eq!(t_min(0.5, 26_000.0, 1.0), MINIMUM_THICKNESS_FLOOR);
        assert_relative_eq!(t_min(-12.0, 26_000.0, 1.0), MINIMUM_THICKNESS_FLOOR);
    }

    #[test]
    fn zero_stress_explodes_instead_of_failing() {
        assert!(t_min(40.0, 0.0, 1.0).is_infinite());
    }

    #[test]
    fn zero_head_and_zero_stress_yield_the_floor() {
        assert_relative_eq!(t_min(1.0, 0.0, 0.0), MINIMUM_THICKNESS_FLOOR);
    }

    #[test]
    fn rule_uses_geometry_and_course_head() {
        use crate::{TankGeometry, minimum_thickness::CourseContext};

        let geometry = TankGeometry {
            diameter: Length::new::<foot>(100.0),
            height: Length::new::<foot>(48.0),
            specific_gravity: 0.8,
            max_fill_height: Length::new::<foot>(45.0),
            joint_efficiency: 1.0,
            allowable_stress: Pressure::new::<psi>(26_000.0),
        };
        let context = CourseContext {
            position: 2,
            geometry: &geometry,
            liquid_head: Length::new::<foot>(41.0),
            original_thickness: Length::new::<inch>(0.5),
        };

        // 2.6 · 100 · 40 · 0.8 / 26,000
        assert_relative_eq!(
            Hydrostatic.minimum_thickness(&context).get::<inch>(),
            0.32,
            epsilon = 1e-9
        );
    }
}
