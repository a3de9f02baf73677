//! Thickness-loss, remaining-life, and re-inspection interval assessment
//! for aboveground storage tanks.
//!
//! The crate turns raw ultrasonic thickness readings and tank geometry into
//! the values an integrity report is built from:
//!
//! - [`MinimumThicknessRule`] — minimum required thickness for one course
//! - [`thickness::calculate`] — corrosion rate, remaining life, and
//!   [`ConditionStatus`] for one reading
//! - [`analyze_course`] / [`analyze_courses`] — one minimum thickness per
//!   course, one [`ThicknessResult`] per reading
//! - [`select_governing`] — the course with the least remaining life
//! - [`interval::recommend`] / [`recommend_for_tank`] — tiered external and
//!   internal re-inspection intervals
//! - [`assess`] — the whole pipeline in one call
//!
//! Every calculation is a pure function of its inputs. Inputs are not
//! checked for physical sense: a zero elapsed time yields a zero rate, a
//! thickening reading yields an indefinite life, and the minimum thickness
//! never drops below its floor. The only "no data" outcomes are the
//! tank-level reductions, which return `None` when no course carries a
//! reading.

mod assessment;
mod course;
mod geometry;
mod governing;
mod rate;
mod status;

pub mod calendar;
pub mod config;
pub mod interval;
pub mod minimum_thickness;
pub mod thickness;

pub use assessment::{AssessmentResult, TankAssessment, assess};
pub use config::{AssessmentConfig, ConfigError};
pub use course::{
    AnalyzedCourse, AnalyzedReading, Course, CourseSummary, DerivedFields, Reading,
    analyze_course, analyze_courses,
};
pub use geometry::TankGeometry;
pub use governing::{GoverningCourse, governing_reading, select_governing};
pub use interval::{Intervals, TankIntervals, recommend_for_tank};
pub use minimum_thickness::{MinimumThicknessMethod, MinimumThicknessRule};
pub use rate::CorrosionRate;
pub use status::{ConditionStatus, StatusTally};
pub use thickness::{REMAINING_LIFE_CAP, ThicknessInput, ThicknessResult};
