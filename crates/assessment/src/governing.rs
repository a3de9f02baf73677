use crate::{AnalyzedCourse, AnalyzedReading, CorrosionRate};

/// The course that drives the tank's schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct GoverningCourse {
    /// Position of the governing course.
    pub position: usize,

    /// Location of the governing reading on that course.
    pub location: String,

    /// Least remaining life on the course, in years.
    pub remaining_life: f64,

    /// Corrosion rate of the governing reading, in primary units.
    pub corrosion_rate: CorrosionRate,
}

/// Returns the reading with the least remaining life.
///
/// Ties keep the first reading in input order.
/// Returns `None` if `readings` is empty.
#[must_use]
pub fn governing_reading(readings: &[AnalyzedReading]) -> Option<&AnalyzedReading> {
    readings.iter().reduce(|best, reading| {
        if reading.result.remaining_life < best.result.remaining_life {
            reading
        } else {
            best
        }
    })
}

/// Selects the course with the least remaining life.
///
/// Each course is represented by its governing reading. Ties between
/// courses go to the lowest position, regardless of input order.
/// Courses without readings are skipped.
///
/// Returns `None` if no course has a reading.
#[must_use]
pub fn select_governing(courses: &[AnalyzedCourse]) -> Option<GoverningCourse> {
    let selected = courses
        .iter()
        .filter_map(|course| governing_reading(&course.readings).map(|r| (course, r)))
        .reduce(|best, candidate| {
            let (best_course, best_reading) = best;
            let (course, reading) = candidate;

            let life = reading.result.remaining_life;
            let best_life = best_reading.result.remaining_life;

            if life < best_life || (life == best_life && course.position < best_course.position) {
                candidate
            } else {
                best
            }
        });

    let Some((course, reading)) = selected else {
        tracing::warn!("no readings to select a governing course from");
        return None;
    };

    tracing::debug!(
        position = course.position,
        location = %reading.location,
        remaining_life = reading.result.remaining_life,
        "selected governing course"
    );

    Some(GoverningCourse {
        position: course.position,
        location: reading.location.clone(),
        remaining_life: reading.result.remaining_life,
        corrosion_rate: reading.result.corrosion_rate,
    })
}
