use super::IntervalInput;

/// Rate at or below which corrosion is treated as negligible, in mils per year.
const NEGLIGIBLE_MPY: f64 = 0.005;

/// Upper bound of the low-rate tier, in mils per year.
const LOW_MPY: f64 = 1.0;

/// Upper bound of the moderate-rate tier, in mils per year.
const MODERATE_MPY: f64 = 2.0;

/// Identifies a row of the interval table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TierKind {
    /// Less than one year of remaining life.
    Exhausted,
    /// Rate at or below 0.005 mpy.
    Negligible,
    /// Rate at or below 1 mpy.
    Low,
    /// Rate at or below 2 mpy.
    Moderate,
    /// Any higher rate.
    High,
}

/// One row of the interval table.
///
/// A tier pairs a predicate with the (external, internal) intervals it
/// produces, both in fractional years before flooring.
#[derive(Debug, Clone, Copy)]
pub struct Tier {
    pub kind: TierKind,
    applies: fn(&IntervalInput) -> bool,
    intervals: fn(&IntervalInput) -> (f64, f64),
}

impl Tier {
    /// Returns `true` if this tier applies to `input`.
    #[must_use]
    pub fn applies(&self, input: &IntervalInput) -> bool {
        (self.applies)(input)
    }

    /// Returns the (external, internal) intervals for `input`, unfloored.
    #[must_use]
    pub fn intervals(&self, input: &IntervalInput) -> (f64, f64) {
        (self.intervals)(input)
    }
}

/// The interval table, in evaluation order.
///
/// Rows overlap by construction; only evaluating them top to bottom makes
/// them mutually exclusive.
pub static TIERS: [Tier; 5] = [
    Tier {
        kind: TierKind::Exhausted,
        applies: |input| input.remaining_life < 1.0,
        intervals: |_| (0.0, 0.0),
    },
    Tier {
        kind: TierKind::Negligible,
        applies: |input| mpy(input) <= NEGLIGIBLE_MPY,
        intervals: |input| (5.0, internal_cap(input, 20.0, 30.0)),
    },
    Tier {
        kind: TierKind::Low,
        applies: |input| mpy(input) <= LOW_MPY,
        intervals: |input| (5.0, quarter_life(input).min(internal_cap(input, 20.0, 30.0))),
    },
    Tier {
        kind: TierKind::Moderate,
        applies: |input| mpy(input) <= MODERATE_MPY,
        intervals: |input| {
            let quarter = quarter_life(input);
            (quarter.min(5.0), quarter.min(internal_cap(input, 15.0, 20.0)))
        },
    },
    Tier {
        kind: TierKind::High,
        applies: |_| true,
        intervals: |input| {
            let quarter = quarter_life(input);
            (quarter.min(3.0), quarter.min(internal_cap(input, 10.0, 15.0)))
        },
    },
];

fn mpy(input: &IntervalInput) -> f64 {
    input.corrosion_rate.mils_per_year()
}

fn quarter_life(input: &IntervalInput) -> f64 {
    input.remaining_life / 4.0
}

fn internal_cap(input: &IntervalInput, bottom_most: f64, other: f64) -> f64 {
    if input.bottom_most { bottom_most } else { other }
}
