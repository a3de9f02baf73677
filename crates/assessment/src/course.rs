use uom::{
    ConstZero,
    si::{
        f64::Length,
        length::{foot, inch},
    },
};

use crate::{
    ConditionStatus, CorrosionRate, MinimumThicknessRule, TankGeometry,
    governing::governing_reading,
    interval::{self, IntervalInput, Intervals},
    minimum_thickness::CourseContext,
    thickness::{self, ThicknessInput, ThicknessResult},
};

/// A raw thickness reading taken at one location on a course.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    /// Where the reading was taken, such as `"0°"` or `"CML-3"`.
    pub location: String,

    /// Measured thickness.
    pub current_thickness: Length,
}

impl Reading {
    #[must_use]
    pub fn new(location: impl Into<String>, current_thickness: Length) -> Self {
        Self {
            location: location.into(),
            current_thickness,
        }
    }
}

/// One monitored course of the tank, such as a shell ring.
///
/// Courses are stacked from the bottom, starting at position 1.
/// Every reading on a course shares the course's original thickness.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    /// Position counted from the bottom, starting at 1.
    pub position: usize,

    /// Vertical height of the course.
    pub height: Length,

    /// As-built thickness.
    pub original_thickness: Length,

    /// Thickness readings taken on the course.
    pub readings: Vec<Reading>,
}

impl Course {
    /// Creates a course with no readings.
    #[must_use]
    pub fn new(position: usize, height: Length, original_thickness: Length) -> Self {
        Self {
            position,
            height,
            original_thickness,
            readings: Vec::new(),
        }
    }

    /// Returns `self` with one more reading appended.
    #[must_use]
    pub fn with_reading(mut self, location: impl Into<String>, current_thickness: Length) -> Self {
        self.readings.push(Reading::new(location, current_thickness));
        self
    }
}

/// A reading together with its calculated values.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzedReading {
    /// Where the reading was taken.
    pub location: String,

    /// Measured thickness.
    pub current_thickness: Length,

    /// Rate, remaining life, and status calculated for the reading.
    pub result: ThicknessResult,
}

/// The four values stored alongside a raw reading.
///
/// Always produced together, so a stored record never mixes values from
/// different calculations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedFields {
    /// Minimum required thickness of the reading's course.
    pub minimum_thickness: Length,

    /// Thinning rate since the original thickness.
    pub corrosion_rate: CorrosionRate,

    /// Remaining life, in years.
    pub remaining_life: f64,

    /// Condition status.
    pub status: ConditionStatus,
}

/// A course after its minimum thickness and readings have been evaluated.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzedCourse {
    /// Position counted from the bottom, starting at 1.
    pub position: usize,

    /// Vertical height of the course.
    pub height: Length,

    /// As-built thickness.
    pub original_thickness: Length,

    /// Liquid head at the base of the course.
    pub liquid_head: Length,

    /// Minimum required thickness shared by every reading on the course.
    pub minimum_thickness: Length,

    /// Whether no other course lies below this one.
    pub bottom_most: bool,

    /// Evaluated readings, in input order.
    pub readings: Vec<AnalyzedReading>,
}

/// Reading-level extremes of one analyzed course.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseSummary {
    /// Position of the course.
    pub position: usize,

    /// Whether the course is the bottom-most.
    pub bottom_most: bool,

    /// Location of the reading with the least remaining life.
    pub governing_location: String,

    /// Least remaining life among the course's readings.
    pub remaining_life: f64,

    /// Rate of the reading with the least remaining life.
    pub corrosion_rate: CorrosionRate,

    /// Highest rate among the course's readings.
    pub worst_corrosion_rate: CorrosionRate,

    pub reading_count: usize,
}

impl AnalyzedCourse {
    /// Returns the stored fields for each reading, in input order.
    pub fn derived_fields(&self) -> impl Iterator<Item = (&str, DerivedFields)> + '_ {
        self.readings.iter().map(|reading| {
            let ThicknessResult {
                corrosion_rate,
                remaining_life,
                status,
            } = reading.result;

            (
                reading.location.as_str(),
                DerivedFields {
                    minimum_thickness: self.minimum_thickness,
                    corrosion_rate,
                    remaining_life,
                    status,
                },
            )
        })
    }

    /// Returns the highest corrosion rate on the course.
    ///
    /// Ties keep the first reading. Returns `None` if there are no readings.
    #[must_use]
    pub fn worst_corrosion_rate(&self) -> Option<CorrosionRate> {
        self.readings
            .iter()
            .map(|reading| reading.result.corrosion_rate)
            .reduce(|worst, rate| if rate > worst { rate } else { worst })
    }

    /// Summarizes the course, or returns `None` if it has no readings.
    #[must_use]
    pub fn summary(&self) -> Option<CourseSummary> {
        let governing = governing_reading(&self.readings)?;
        let worst_corrosion_rate = self.worst_corrosion_rate()?;

        Some(CourseSummary {
            position: self.position,
            bottom_most: self.bottom_most,
            governing_location: governing.location.clone(),
            remaining_life: governing.result.remaining_life,
            corrosion_rate: governing.result.corrosion_rate,
            worst_corrosion_rate,
            reading_count: self.readings.len(),
        })
    }
}

impl CourseSummary {
    /// Returns the re-inspection intervals this course alone would call for.
    #[must_use]
    pub fn intervals(&self) -> Intervals {
        interval::recommend(&IntervalInput {
            corrosion_rate: self.worst_corrosion_rate,
            remaining_life: self.remaining_life,
            bottom_most: self.bottom_most,
        })
        .intervals
    }
}

/// Analyzes one course.
///
/// The liquid head at the base of the course is the tank's maximum fill
/// height less the height of every course in `below`. The `rule` is called
/// once with that head, and the resulting minimum thickness is shared by
/// every reading on the course.
pub fn analyze_course<'a, R, I>(
    course: &Course,
    below: I,
    geometry: &TankGeometry,
    elapsed_years: f64,
    rule: &R,
) -> AnalyzedCourse
where
    R: MinimumThicknessRule + ?Sized,
    I: IntoIterator<Item = &'a Course>,
{
    let (below_count, below_height) = below
        .into_iter()
        .fold((0_usize, Length::ZERO), |(count, height), c| {
            (count + 1, height + c.height)
        });

    let liquid_head = geometry.liquid_head_at(below_height);
    let minimum_thickness = rule.minimum_thickness(&CourseContext {
        position: course.position,
        geometry,
        liquid_head,
        original_thickness: course.original_thickness,
    });

    tracing::debug!(
        position = course.position,
        liquid_head_ft = liquid_head.get::<foot>(),
        minimum_thickness_in = minimum_thickness.get::<inch>(),
        readings = course.readings.len(),
        "analyzed course"
    );

    let readings = course
        .readings
        .iter()
        .map(|reading| {
            let result = thickness::calculate(ThicknessInput {
                original: course.original_thickness,
                current: reading.current_thickness,
                elapsed_years,
                minimum: minimum_thickness,
            });

            tracing::trace!(
                position = course.position,
                location = %reading.location,
                rate = %result.corrosion_rate,
                remaining_life = result.remaining_life,
                status = %result.status,
                "evaluated reading"
            );

            AnalyzedReading {
                location: reading.location.clone(),
                current_thickness: reading.current_thickness,
                result,
            }
        })
        .collect();

    AnalyzedCourse {
        position: course.position,
        height: course.height,
        original_thickness: course.original_thickness,
        liquid_head,
        minimum_thickness,
        bottom_most: below_count == 0,
        readings,
    }
}

/// Analyzes every course of a tank.
///
/// Courses are ordered by position (stable for equal positions) before the
/// liquid head is accumulated, and the result is returned in that order.
pub fn analyze_courses<R>(
    courses: &[Course],
    geometry: &TankGeometry,
    elapsed_years: f64,
    rule: &R,
) -> Vec<AnalyzedCourse>
where
    R: MinimumThicknessRule + ?Sized,
{
    let mut ordered: Vec<&Course> = courses.iter().collect();
    ordered.sort_by_key(|course| course.position);

    ordered
        .iter()
        .enumerate()
        .map(|(index, course)| {
            analyze_course(
                course,
                ordered[..index].iter().copied(),
                geometry,
                elapsed_years,
                rule,
            )
        })
        .collect()
}
