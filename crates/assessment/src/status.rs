use std::fmt;

use serde::{Deserialize, Serialize};
use uom::si::f64::Length;

/// Remaining life, in years, below which action is required.
const ACTION_REQUIRED_BELOW: f64 = 5.0;

/// Remaining life, in years, below which a reading is monitored.
const MONITOR_BELOW: f64 = 10.0;

/// Condition classification of a single thickness reading.
///
/// Derived from the current thickness and remaining life only. A status has
/// no history and is recomputed from scratch on every assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionStatus {
    Critical,
    ActionRequired,
    Monitor,
    Acceptable,
}

impl ConditionStatus {
    /// All statuses, most severe first.
    pub const ALL: [Self; 4] = [
        Self::Critical,
        Self::ActionRequired,
        Self::Monitor,
        Self::Acceptable,
    ];

    /// Classifies a reading.
    ///
    /// The thickness check comes first: a reading below its minimum is
    /// critical even when it shows no measurable thinning. Otherwise the
    /// remaining life decides:
    ///
    /// | remaining life | status |
    /// |---|---|
    /// | ≤ 0 | [`Critical`](Self::Critical) |
    /// | < 5 | [`ActionRequired`](Self::ActionRequired) |
    /// | < 10 | [`Monitor`](Self::Monitor) |
    /// | otherwise | [`Acceptable`](Self::Acceptable) |
    #[must_use]
    pub fn classify(current: Length, minimum: Length, remaining_life: f64) -> Self {
        if current < minimum || remaining_life <= 0.0 {
            Self::Critical
        } else if remaining_life < ACTION_REQUIRED_BELOW {
            Self::ActionRequired
        } else if remaining_life < MONITOR_BELOW {
            Self::Monitor
        } else {
            Self::Acceptable
        }
    }

    /// Returns the label used in reports and storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::ActionRequired => "action_required",
            Self::Monitor => "monitor",
            Self::Acceptable => "acceptable",
        }
    }
}

impl fmt::Display for ConditionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of readings in each [`ConditionStatus`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusTally {
    /// Readings at or below the minimum thickness, or with no life left.
    pub critical: usize,

    /// Readings with under 5 years of life.
    pub action_required: usize,

    /// Readings with under 10 years of life.
    pub monitor: usize,

    /// All other readings.
    pub acceptable: usize,
}

impl StatusTally {
    /// Counts one more reading with `status`.
    pub fn record(&mut self, status: ConditionStatus) {
        *self.slot(status) += 1;
    }

    /// Returns the number of readings with `status`.
    #[must_use]
    pub fn count(&self, status: ConditionStatus) -> usize {
        match status {
            ConditionStatus::Critical => self.critical,
            ConditionStatus::ActionRequired => self.action_required,
            ConditionStatus::Monitor => self.monitor,
            ConditionStatus::Acceptable => self.acceptable,
        }
    }

    /// Returns the total number of readings counted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.critical + self.action_required + self.monitor + self.acceptable
    }

    /// Returns the most severe status with at least one reading.
    #[must_use]
    pub fn worst(&self) -> Option<ConditionStatus> {
        ConditionStatus::ALL
            .into_iter()
            .find(|&status| self.count(status) > 0)
    }

    fn slot(&mut self, status: ConditionStatus) -> &mut usize {
        match status {
            ConditionStatus::Critical => &mut self.critical,
            ConditionStatus::ActionRequired => &mut self.action_required,
            ConditionStatus::Monitor => &mut self.monitor,
            ConditionStatus::Acceptable => &mut self.acceptable,
        }
    }
}

impl Extend<ConditionStatus> for StatusTally {
    fn extend<I: IntoIterator<Item = ConditionStatus>>(&mut self, iter: I) {
        for status in iter {
            self.record(status);
        }
    }
}

impl FromIterator<ConditionStatus> for StatusTally {
    fn from_iter<I: IntoIterator<Item = ConditionStatus>>(iter: I) -> Self {
        let mut tally = Self::default();
        tally.extend(iter);
        tally
    }
}
