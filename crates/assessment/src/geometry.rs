use uom::si::f64::{Length, Pressure};

/// Geometry and service conditions of a vertical cylindrical storage tank.
///
/// A single value is shared by every course analyzed in one assessment run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TankGeometry {
    /// Nominal tank diameter.
    pub diameter: Length,

    /// Total shell height.
    pub height: Length,

    /// Specific gravity of the stored liquid.
    pub specific_gravity: f64,

    /// Maximum liquid fill height measured from the tank bottom.
    pub max_fill_height: Length,

    /// Weld joint efficiency of the shell.
    pub joint_efficiency: f64,

    /// Allowable stress of the shell plate.
    pub allowable_stress: Pressure,
}

impl TankGeometry {
    /// Returns the liquid head acting at the base of a course.
    ///
    /// `below` is the combined height of every course beneath it. The result
    /// is negative when the courses below already rise above the fill height.
    #[must_use]
    pub fn liquid_head_at(&self, below: Length) -> Length {
        self.max_fill_height - below
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{length::foot, pressure::psi};

    fn geometry() -> TankGeometry {
        TankGeometry {
            diameter: Length::new::<foot>(120.0),
            height: Length::new::<foot>(48.0),
            specific_gravity: 0.9,
            max_fill_height: Length::new::<foot>(45.0),
            joint_efficiency: 0.85,
            allowable_stress: Pressure::new::<psi>(23_200.0),
        }
    }

    #[test]
    fn head_is_fill_height_minus_courses_below() {
        let head = geometry().liquid_head_at(Length::new::<foot>(16.0));
        assert_relative_eq!(head.get::<foot>(), 29.0, epsilon = 1e-9);
    }

    #[test]
    fn head_goes_negative_above_the_fill_line() {
        let head = geometry().liquid_head_at(Length::new::<foot>(48.0));
        assert_relative_eq!(head.get::<foot>(), -3.0, epsilon = 1e-9);
    }
}
