//! Reporting granularities and their lengths in seconds.

use std::fmt;

use serde::Serialize;

/// A granularity an offset or distance can be reported at.
///
/// Declaration order is reporting order, finest first. [`Granularity::ALL`]
/// iterates it, and the phrase catalogs index their word tables by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Second,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl Granularity {
    /// Every granularity, in reporting order.
    pub const ALL: [Granularity; 6] = [
        Granularity::Second,
        Granularity::Hour,
        Granularity::Day,
        Granularity::Week,
        Granularity::Month,
        Granularity::Year,
    ];

    /// Length of one unit in seconds, as used for numeric conversions.
    pub fn seconds(self) -> f64 {
        match self {
            Granularity::Second => 1.0,
            Granularity::Hour => 3_600.0,
            Granularity::Day => 86_400.0,
            Granularity::Week => 604_800.0,
            Granularity::Month => 2_635_200.0,   // 30.5 days
            Granularity::Year => 31_556_952.0,   // 365.2425 days
        }
    }

    /// The lowercase unit name, used as the result key ("second", "hour",
    /// "day", "week", "month", "year").
    pub fn as_str(self) -> &'static str {
        match self {
            Granularity::Second => "second",
            Granularity::Hour => "hour",
            Granularity::Day => "day",
            Granularity::Week => "week",
            Granularity::Month => "month",
            Granularity::Year => "year",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reporting_order_is_fixed() {
        let names: Vec<&str> = Granularity::ALL.iter().map(|g| g.as_str()).collect();
        assert_eq!(names, ["second", "hour", "day", "week", "month", "year"]);
    }

    #[test]
    fn test_unit_lengths() {
        assert_eq!(Granularity::Second.seconds(), 1.0);
        assert_eq!(Granularity::Hour.seconds(), 3_600.0);
        assert_eq!(Granularity::Day.seconds(), 86_400.0);
        assert_eq!(Granularity::Week.seconds(), 604_800.0);
        assert_eq!(Granularity::Month.seconds(), 2_635_200.0);
        assert_eq!(Granularity::Year.seconds(), 31_556_952.0);
    }

    #[test]
    fn test_display_matches_the_result_key() {
        assert_eq!(Granularity::Second.to_string(), "second");
        assert_eq!(Granularity::Year.to_string(), "year");
    }
}
