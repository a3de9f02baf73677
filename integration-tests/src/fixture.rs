use jiff::civil::Date;
use serde::Deserialize;
use tank_assessment::{Course, TankGeometry, calendar::elapsed_years};
use uom::si::{
    f64::{Length, Pressure},
    length::{foot, inch},
    pressure::psi,
};

/// A tank inspection record as stored in a fixture file.
#[derive(Debug, Clone, Deserialize)]
pub struct TankFixture {
    pub tank: TankRecord,
    #[serde(default)]
    pub courses: Vec<CourseRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TankRecord {
    pub id: String,
    pub inspection_date: Date,
    pub previous_inspection_date: Option<Date>,
    pub elapsed_years: Option<f64>,
    pub diameter_ft: f64,
    pub height_ft: f64,
    pub specific_gravity: f64,
    pub max_fill_height_ft: f64,
    pub joint_efficiency: f64,
    pub allowable_stress_psi: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CourseRecord {
    pub position: usize,
    pub height_ft: f64,
    pub original_thickness_in: f64,
    #[serde(default)]
    pub readings: Vec<ReadingRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReadingRecord {
    pub location: String,
    pub thickness_in: f64,
}

impl TankFixture {
    /// Parses a fixture from TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if the document does not match the fixture layout.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Returns the tank geometry in engine units.
    #[must_use]
    pub fn geometry(&self) -> TankGeometry {
        let tank = &self.tank;
        TankGeometry {
            diameter: Length::new::<foot>(tank.diameter_ft),
            height: Length::new::<foot>(tank.height_ft),
            specific_gravity: tank.specific_gravity,
            max_fill_height: Length::new::<foot>(tank.max_fill_height_ft),
            joint_efficiency: tank.joint_efficiency,
            allowable_stress: Pressure::new::<psi>(tank.allowable_stress_psi),
        }
    }

    /// Returns the courses in engine units, in fixture order.
    #[must_use]
    pub fn courses(&self) -> Vec<Course> {
        self.courses
            .iter()
            .map(|record| {
                let course = Course::new(
                    record.position,
                    Length::new::<foot>(record.height_ft),
                    Length::new::<inch>(record.original_thickness_in),
                );
                record.readings.iter().fold(course, |course, reading| {
                    course.with_reading(
                        reading.location.clone(),
                        Length::new::<inch>(reading.thickness_in),
                    )
                })
            })
            .collect()
    }

    /// Returns the elapsed years for the report.
    ///
    /// An explicit `elapsed_years` wins over the two inspection dates.
    /// Without either, no time has elapsed.
    ///
    /// # Errors
    ///
    /// Returns an error if the dates cannot be subtracted.
    pub fn elapsed_years(&self) -> Result<f64, tank_assessment::calendar::CalendarError> {
        match (self.tank.elapsed_years, self.tank.previous_inspection_date) {
            (Some(years), _) => Ok(years),
            (None, Some(previous)) => elapsed_years(previous, self.tank.inspection_date),
            (None, None) => Ok(0.0),
        }
    }
}
