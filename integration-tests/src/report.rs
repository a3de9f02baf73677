use jiff::civil::Date;
use serde::Serialize;
use tank_assessment::{
    ConditionStatus, StatusTally, TankAssessment, calendar::CalendarError,
};
use uom::si::length::inch;

/// An assessment flattened into the values a report renderer consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub tank_id: String,
    pub elapsed_years: f64,
    pub courses: Vec<CourseReport>,
    pub summary: Option<SummaryReport>,
    pub tally: StatusTally,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseReport {
    pub position: usize,
    pub minimum_thickness_in: f64,
    pub readings: Vec<ReadingReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadingReport {
    pub location: String,
    pub thickness_in: f64,
    pub corrosion_rate_ipy: f64,
    pub corrosion_rate_mpy: f64,
    pub remaining_life: f64,
    pub status: ConditionStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport {
    pub governing_course: usize,
    pub governing_location: String,
    pub remaining_life: f64,
    pub worst_corrosion_rate_mpy: f64,
    pub external_interval_years: u32,
    pub internal_interval_years: u32,
    pub critical_course: Option<usize>,
    pub next_external_inspection: Date,
    pub next_internal_inspection: Date,
}

/// Builds a report from an assessment.
///
/// # Errors
///
/// Returns a [`CalendarError`] if a due date cannot be computed.
pub fn render(
    tank_id: &str,
    inspection_date: Date,
    elapsed_years: f64,
    assessment: &TankAssessment,
) -> Result<Report, CalendarError> {
    let courses = assessment
        .courses
        .iter()
        .map(|course| CourseReport {
            position: course.position,
            minimum_thickness_in: course.minimum_thickness.get::<inch>(),
            readings: course
                .readings
                .iter()
                .map(|reading| ReadingReport {
                    location: reading.location.clone(),
                    thickness_in: reading.current_thickness.get::<inch>(),
                    corrosion_rate_ipy: reading.result.corrosion_rate.inches_per_year(),
                    corrosion_rate_mpy: reading.result.corrosion_rate.mils_per_year(),
                    remaining_life: reading.result.remaining_life,
                    status: reading.result.status,
                })
                .collect(),
        })
        .collect();

    let summary = match &assessment.result {
        Some(result) => {
            let due = result.intervals.intervals().due_dates(inspection_date)?;
            Some(SummaryReport {
                governing_course: result.governing.position,
                governing_location: result.governing.location.clone(),
                remaining_life: result.remaining_life(),
                worst_corrosion_rate_mpy: result.worst_corrosion_rate.mils_per_year(),
                external_interval_years: result.intervals.external_years,
                internal_interval_years: result.intervals.internal_years,
                critical_course: result.intervals.critical_course,
                next_external_inspection: due.external,
                next_internal_inspection: due.internal,
            })
        }
        None => None,
    };

    Ok(Report {
        tank_id: tank_id.to_owned(),
        elapsed_years,
        courses,
        summary,
        tally: assessment.status_tally(),
    })
}
