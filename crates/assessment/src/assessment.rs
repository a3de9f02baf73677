use crate::{
    AnalyzedCourse, Course, CorrosionRate, CourseSummary, GoverningCourse, MinimumThicknessRule,
    StatusTally, TankGeometry, TankIntervals, analyze_courses, recommend_for_tank,
    select_governing,
};

/// Tank-level outcome of an assessment.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentResult {
    /// Course with the least remaining life.
    pub governing: GoverningCourse,

    /// Highest corrosion rate on the governing course.
    pub worst_corrosion_rate: CorrosionRate,

    /// Recommended re-inspection intervals for the tank.
    pub intervals: TankIntervals,
}

impl AssessmentResult {
    /// Returns the least remaining life on the tank, in years.
    #[must_use]
    pub fn remaining_life(&self) -> f64 {
        self.governing.remaining_life
    }
}

/// Everything computed for one tank.
#[derive(Debug, Clone, PartialEq)]
pub struct TankAssessment {
    /// Analyzed courses, ordered by position.
    pub courses: Vec<AnalyzedCourse>,

    /// Tank-level result, or `None` if no course has a reading.
    pub result: Option<AssessmentResult>,
}

impl TankAssessment {
    /// Returns a summary for each course with readings, ordered by position.
    pub fn summaries(&self) -> impl Iterator<Item = CourseSummary> + '_ {
        self.courses.iter().filter_map(AnalyzedCourse::summary)
    }

    /// Counts readings by condition status across the whole tank.
    #[must_use]
    pub fn status_tally(&self) -> StatusTally {
        self.courses
            .iter()
            .flat_map(|course| &course.readings)
            .map(|reading| reading.result.status)
            .collect()
    }
}

/// Runs a complete assessment of one tank.
///
/// Analyzes every course with the caller's minimum thickness `rule`, then
/// selects the governing course and the tank-level intervals.
pub fn assess<R>(
    geometry: &TankGeometry,
    courses: &[Course],
    elapsed_years: f64,
    rule: &R,
) -> TankAssessment
where
    R: MinimumThicknessRule + ?Sized,
{
    let courses = analyze_courses(courses, geometry, elapsed_years, rule);

    let result = select_governing(&courses).zip(recommend_for_tank(&courses)).map(
        |(governing, intervals)| {
            let worst_corrosion_rate = courses
                .iter()
                .find(|course| course.position == governing.position)
                .and_then(AnalyzedCourse::worst_corrosion_rate)
                .unwrap_or(governing.corrosion_rate);

            AssessmentResult {
                governing,
                worst_corrosion_rate,
                intervals,
            }
        },
    );

    if let Some(result) = &result {
        tracing::info!(
            governing_course = result.governing.position,
            remaining_life = result.remaining_life(),
            external_years = result.intervals.external_years,
            internal_years = result.intervals.internal_years,
            "tank assessment complete"
        );
    }

    TankAssessment { courses, result }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Length, Pressure},
        length::{foot, inch},
        pressure::psi,
    };

    use crate::{
        ConditionStatus,
        minimum_thickness::{FractionOfOriginal, Hydrostatic},
    };

    fn geometry() -> TankGeometry {
        TankGeometry {
            diameter: Length::new::<foot>(60.0),
            height: Length::new::<foot>(32.0),
            specific_gravity: 0.85,
            max_fill_height: Length::new::<foot>(30.0),
            joint_efficiency: 0.85,
            allowable_stress: Pressure::new::<psi>(23_600.0),
        }
    }

    fn inches(value: f64) -> Length {
        Length::new::<inch>(value)
    }

    fn courses() -> Vec<Course> {
        vec![
            Course::new(1, Length::new::<foot>(8.0), inches(0.375))
                .with_reading("0°", inches(0.340))
                .with_reading("90°", inches(0.300))
                .with_reading("180°", inches(0.355)),
            Course::new(2, Length::new::<foot>(8.0), inches(0.3125))
                .with_reading("0°", inches(0.300)),
            Course::new(3, Length::new::<foot>(8.0), inches(0.25))
                .with_reading("0°", inches(0.245)),
            Course::new(4, Length::new::<foot>(8.0), inches(0.25)),
        ]
    }

    #[test]
    fn bottom_course_governs_a_corroding_tank() {
        let assessment = assess(&geometry(), &courses(), 10.0, &Hydrostatic);
        let result = assessment.result.as_ref().unwrap();

        // Bottom course: t_min = 2.6 · 60 · 29 · 0.85 / (23,600 · 0.85) ≈ 0.1917 in.
        let t_min = 2.6 * 60.0 * 29.0 * 0.85 / (23_600.0 * 0.85);
        assert_relative_eq!(
            assessment.courses[0].minimum_thickness.get::<inch>(),
            t_min,
            epsilon = 1e-9
        );

        // The 90° reading loses 0.075 in over 10 years.
        assert_eq!(result.governing.position, 1);
        assert_eq!(result.governing.location, "90°");
        assert_relative_eq!(
            result.remaining_life(),
            (0.300 - t_min) / 0.0075,
            epsilon = 1e-6
        );
        assert_relative_eq!(result.worst_corrosion_rate.mils_per_year(), 7.5, epsilon = 1e-6);

        // Life ≈ 14.4 years at 7.5 mpy: high tier, bottom-most.
        assert_eq!(result.intervals.external_years, 3);
        assert_eq!(result.intervals.internal_years, 3);
        assert_eq!(result.intervals.external_course, 1);
        assert_eq!(result.intervals.critical_course, None);
    }

    #[test]
    fn status_tally_covers_every_reading() {
        let assessment = assess(&geometry(), &courses(), 10.0, &Hydrostatic);
        let tally = assessment.status_tally();

        assert_eq!(tally.total(), 5);
        assert_eq!(tally.count(ConditionStatus::Critical), 0);
        assert_eq!(assessment.summaries().count(), 3);
    }

    #[test]
    fn strategy_changes_the_outcome() {
        let hydrostatic = assess(&geometry(), &courses(), 10.0, &Hydrostatic);
        let half = assess(&geometry(), &courses(), 10.0, &FractionOfOriginal::HALF);

        let hydrostatic_life = hydrostatic.result.unwrap().remaining_life();
        let half_life = half.result.unwrap().remaining_life();

        // Half of 0.375 in is 0.1875 in, just under the hydrostatic 0.1917 in.
        assert_relative_eq!(half_life, (0.300 - 0.1875) / 0.0075, epsilon = 1e-6);
        assert!(half_life > hydrostatic_life);
    }

    #[test]
    fn no_readings_means_no_result() {
        let bare = vec![Course::new(1, Length::new::<foot>(8.0), inches(0.375))];
        let assessment = assess(&geometry(), &bare, 10.0, &Hydrostatic);

        assert_eq!(assessment.courses.len(), 1);
        assert!(assessment.result.is_none());
        assert_eq!(assessment.status_tally().total(), 0);
    }

    #[test]
    fn assessment_is_idempotent() {
        let first = assess(&geometry(), &courses(), 7.5, &Hydrostatic);
        let second = assess(&geometry(), &courses(), 7.5, &Hydrostatic);
        assert_eq!(first, second);
    }
}
