//! # Tank Assessment
//!
//! Loads a tank description from TOML, runs an assessment, and logs the
//! per-course findings and the recommended inspection schedule.
//!
//! To run this example:
//!
//! ```sh
//! RUST_LOG=info cargo run -p integration-tests --example assess_tank
//! ```
//!
//! Set `TANK_ASSESSMENT_CONFIG` to a config file path to select a different
//! minimum thickness method.

use std::error::Error;

use integration_tests::fixture::TankFixture;
use tank_assessment::{AssessmentConfig, assess};
use tracing_subscriber::EnvFilter;
use uom::si::length::inch;

/// Tank description bundled with the example.
const TANK: &str = include_str!("data/tank.toml");

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match std::env::var_os("TANK_ASSESSMENT_CONFIG") {
        Some(path) => AssessmentConfig::load(path)?,
        None => AssessmentConfig::default(),
    };

    let fixture = TankFixture::from_toml_str(TANK)?;
    let tank = &fixture.tank;

    let years = fixture.elapsed_years()?;
    let assessment = assess(
        &fixture.geometry(),
        &fixture.courses(),
        years,
        &config.minimum_thickness(),
    );

    for course in &assessment.courses {
        tracing::info!(
            tank = %tank.id,
            course = course.position,
            t_min_in = %format!("{:.3}", course.minimum_thickness.get::<inch>()),
            readings = course.readings.len(),
        );
        for reading in &course.readings {
            tracing::info!(
                course = course.position,
                location = %reading.location,
                rate = %reading.result.corrosion_rate,
                remaining_life = %format!("{:.1}", reading.result.remaining_life),
                status = %reading.result.status,
            );
        }
    }

    let Some(result) = &assessment.result else {
        tracing::warn!(tank = %tank.id, "no readings; nothing to schedule");
        return Ok(());
    };

    let due = result
        .intervals
        .intervals()
        .due_dates(tank.inspection_date)?;

    tracing::info!(
        tank = %tank.id,
        governing_course = result.governing.position,
        remaining_life = %format!("{:.1}", result.remaining_life()),
        worst_rate = %result.worst_corrosion_rate,
        external_due = %due.external,
        internal_due = %due.internal,
        critical_course = ?result.intervals.critical_course,
        tally = ?assessment.status_tally(),
        "inspection schedule"
    );

    Ok(())
}
