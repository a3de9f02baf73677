//! Re-inspection interval recommendations.
//!
//! A course's worst corrosion rate and least remaining life are matched
//! against an ordered table of tiers (see [`TIERS`]); the first tier that
//! applies sets the external and internal intervals. The tank-level
//! recommendation is the most conservative of the per-course values.

mod tier;

pub use tier::{TIERS, Tier, TierKind};

use crate::{AnalyzedCourse, CorrosionRate};

/// Remaining life, in years, below which the course that sets the external
/// interval is reported as critical.
pub const CRITICAL_LIFE: f64 = 5.0;

/// Per-course input to the interval tiers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalInput {
    /// Worst corrosion rate on the course.
    pub corrosion_rate: CorrosionRate,

    /// Least remaining life on the course, in years.
    pub remaining_life: f64,

    /// Whether the course is the bottom-most, which tightens the internal caps.
    pub bottom_most: bool,
}

/// Recommended re-inspection intervals, in whole years.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Intervals {
    /// Years until the next external inspection.
    pub external_years: u32,

    /// Years until the next internal inspection.
    pub internal_years: u32,
}

/// Intervals for one course and the tier that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    /// Tier that matched.
    pub tier: TierKind,

    /// Intervals produced by that tier.
    pub intervals: Intervals,
}

/// Tank-level re-inspection intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TankIntervals {
    /// Shortest external interval across all courses.
    pub external_years: u32,

    /// Shortest internal interval across all courses.
    pub internal_years: u32,

    /// Position of the course that set the external interval.
    pub external_course: usize,

    /// Position of the course that set the internal interval.
    pub internal_course: usize,

    /// Position of the course with the least remaining life among those
    /// that set the external interval, if that life is below [`CRITICAL_LIFE`].
    pub critical_course: Option<usize>,
}

impl TankIntervals {
    /// Returns the tank-level intervals without the course attribution.
    #[must_use]
    pub fn intervals(&self) -> Intervals {
        Intervals {
            external_years: self.external_years,
            internal_years: self.internal_years,
        }
    }
}

/// Recommends intervals for one course.
///
/// Tiers are evaluated top to bottom and the first match wins.
/// Interval values are floored to whole years.
#[must_use]
pub fn recommend(input: &IntervalInput) -> Recommendation {
    let tier = TIERS
        .iter()
        .find(|tier| tier.applies(input))
        .unwrap_or(&TIERS[TIERS.len() - 1]);

    let (external, internal) = tier.intervals(input);

    Recommendation {
        tier: tier.kind,
        intervals: Intervals {
            external_years: whole_years(external),
            internal_years: whole_years(internal),
        },
    }
}

/// Recommends intervals for the whole tank.
///
/// Each course with readings gets its own recommendation, and the shortest
/// external and internal intervals govern. Ties go to the lowest position.
///
/// Returns `None` if no course has a reading.
#[must_use]
pub fn recommend_for_tank(courses: &[AnalyzedCourse]) -> Option<TankIntervals> {
    // (intervals, position, remaining life) per course
    let per_course: Vec<(Intervals, usize, f64)> = courses
        .iter()
        .filter_map(AnalyzedCourse::summary)
        .map(|summary| (summary.intervals(), summary.position, summary.remaining_life))
        .collect();

    let external = binding(&per_course, |intervals| intervals.external_years);
    let internal = binding(&per_course, |intervals| intervals.internal_years);

    let (Some(external), Some(internal)) = (external, internal) else {
        tracing::warn!("no readings to recommend tank intervals from");
        return None;
    };

    let (external_intervals, external_course, _) = *external;
    let (internal_intervals, internal_course, _) = *internal;

    // Any course tied at the binding external interval may be the critical one.
    let critical = per_course
        .iter()
        .filter(|(intervals, _, _)| intervals.external_years == external_intervals.external_years)
        .min_by(|(_, a_position, a_life), (_, b_position, b_life)| {
            a_life.total_cmp(b_life).then(a_position.cmp(b_position))
        })
        .filter(|(_, _, life)| *life < CRITICAL_LIFE);

    let critical_course = critical.map(|&(_, position, remaining_life)| {
        tracing::debug!(
            position,
            remaining_life,
            "critical course sets the external interval"
        );
        position
    });

    Some(TankIntervals {
        external_years: external_intervals.external_years,
        internal_years: internal_intervals.internal_years,
        external_course,
        internal_course,
        critical_course,
    })
}

/// Returns the entry with the smallest interval, preferring the lowest position.
fn binding<F>(per_course: &[(Intervals, usize, f64)], years: F) -> Option<&(Intervals, usize, f64)>
where
    F: Fn(&Intervals) -> u32,
{
    per_course
        .iter()
        .min_by_key(|(intervals, position, _)| (years(intervals), *position))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_years(years: f64) -> u32 {
    years.floor() as u32
}
