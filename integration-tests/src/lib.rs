//! Shared fixtures for end-to-end tests of the assessment engine.
//!
//! Tanks are described in TOML using the units inspection records use
//! (feet, inches, psi) and converted to engine types here. The [`report`]
//! module renders an assessment as the JSON a report renderer would consume.

pub mod fixture;
pub mod report;
