//! Calendar helpers for report dates.
//!
//! The engine itself works in fractional years. These helpers convert
//! between inspection dates and that representation.

use jiff::{Span, civil::Date};
use thiserror::Error;

use crate::Intervals;

/// Average days per year used when converting a date difference to years.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Errors from date arithmetic.
#[derive(Debug, Error)]
pub enum CalendarError {
    #[error(transparent)]
    Date(#[from] jiff::Error),
}

/// Next inspection due dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueDates {
    /// Date the next external inspection falls due.
    pub external: Date,

    /// Date the next internal inspection falls due.
    pub internal: Date,
}

/// Returns the years elapsed between two inspection dates.
///
/// The result is negative if `current` precedes `previous`.
///
/// # Errors
///
/// Returns a [`CalendarError`] if the span between the dates cannot be computed.
pub fn elapsed_years(previous: Date, current: Date) -> Result<f64, CalendarError> {
    let days = previous.until(current)?.get_days();
    Ok(f64::from(days) / DAYS_PER_YEAR)
}

impl Intervals {
    /// Returns the dates on which the next inspections fall due.
    ///
    /// A zero interval yields the inspection date itself.
    ///
    /// # Errors
    ///
    /// Returns a [`CalendarError`] if a due date is outside the supported range.
    pub fn due_dates(&self, inspection_date: Date) -> Result<DueDates, CalendarError> {
        Ok(DueDates {
            external: add_years(inspection_date, self.external_years)?,
            internal: add_years(inspection_date, self.internal_years)?,
        })
    }
}

fn add_years(date: Date, years: u32) -> Result<Date, CalendarError> {
    let span = Span::new().try_years(i64::from(years))?;
    Ok(date.checked_add(span)?)
}
