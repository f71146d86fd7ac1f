//! The [`Timegap`] facade: normalize raw input, parse it, compute.

use crate::error::Result;
use crate::parse::{DateParser, DefaultDateParser};
use crate::provider::{ChronoTimeProvider, TimeProvider};
use crate::result::OffsetResult;

/// Collapse every run of whitespace, within and across `parts`, to a
/// single space, and strip the ends.
///
/// Shell quoting splits a date expression unpredictably; joining the
/// pieces back through this makes `["June", "30,", "2018"]` and
/// `[" June 30,  2018 "]` the same expression.
///
/// # Examples
///
/// ```
/// use timegap::normalize_input;
///
/// assert_eq!(normalize_input(&[" 01", " 02 ", " 2000 "]), "01 02 2000");
/// assert_eq!(normalize_input(&[" 01.02.2000 "]), "01.02.2000");
/// ```
pub fn normalize_input<S: AsRef<str>>(parts: &[S]) -> String {
    parts
        .iter()
        .flat_map(|part| part.as_ref().split_whitespace())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Ties a [`TimeProvider`] and a [`DateParser`] together behind the two
/// user-facing questions: how far away is a date, and how far apart are
/// two dates.
///
/// Both strategies are fixed at construction as type parameters, so
/// swapping one in (a canned clock for tests, say) costs no dispatch.
///
/// # Examples
///
/// ```
/// use timegap::Timegap;
///
/// let timegap = Timegap::new();
/// let result = timegap
///     .distance_between(&["2000-01-01"], &["2000-01-08"])
///     .unwrap();
///
/// let week = result.timeframe("week").unwrap();
/// assert_eq!(week.phrase, "a week");
/// assert_eq!(week.value, 1.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Timegap<P = ChronoTimeProvider, D = DefaultDateParser> {
    provider: P,
    parser: D,
}

impl Timegap {
    /// A facade over the stock provider and parser.
    pub fn new() -> Self {
        Timegap {
            provider: ChronoTimeProvider,
            parser: DefaultDateParser,
        }
    }
}

impl<P: TimeProvider, D: DateParser> Timegap<P, D> {
    /// Wire an explicit provider and parser.
    pub fn with_components(provider: P, parser: D) -> Self {
        Timegap { provider, parser }
    }

    /// How far away `expression` is from the current moment, at every
    /// granularity.
    ///
    /// The expression parts are joined and whitespace-normalized before
    /// parsing. Phrasing uses the locale the parser detected, if any.
    ///
    /// # Errors
    ///
    /// Returns [`UnparseableDate`](crate::TimegapError::UnparseableDate)
    /// when the expression is not a recognizable date.
    pub fn offset_from_now<S: AsRef<str>>(&self, expression: &[S]) -> Result<OffsetResult> {
        let parsed = self.parser.parse(&normalize_input(expression))?;
        self.provider
            .offset(parsed.instant, None, parsed.locale.as_deref())
    }

    /// How far apart two expressions are, phrased without direction in
    /// the first expression's locale.
    ///
    /// # Errors
    ///
    /// Returns [`UnparseableDate`](crate::TimegapError::UnparseableDate)
    /// for whichever expression fails to parse, the first one first.
    pub fn distance_between<S: AsRef<str>>(&self, from: &[S], to: &[S]) -> Result<OffsetResult> {
        let from = self.parser.parse(&normalize_input(from))?;
        let to = self.parser.parse(&normalize_input(to))?;
        self.provider
            .distance(from.instant, to.instant, from.locale.as_deref())
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TimegapError;
    use crate::parse::ParsedDate;
    use chrono::{DateTime, Duration, Local, TimeZone};

    fn anchor() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 2, 18, 14, 30, 0).unwrap()
    }

    // ── normalize_input ─────────────────────────────────────────────────

    #[test]
    fn test_normalize_joins_and_squeezes_parts() {
        assert_eq!(normalize_input(&[" 01", " 02 ", " 2000 "]), "01 02 2000");
        assert_eq!(normalize_input(&["01 ", "02 ", " 2000 "]), "01 02 2000");
    }

    #[test]
    fn test_normalize_single_part() {
        assert_eq!(normalize_input(&[" 01.02.2000 "]), "01.02.2000");
        assert_eq!(normalize_input(&["already clean"]), "already clean");
    }

    #[test]
    fn test_normalize_collapses_inner_runs() {
        assert_eq!(normalize_input(&["June   23", "  2014"]), "June 23 2014");
        assert_eq!(normalize_input::<&str>(&[]), "");
    }

    // ── end to end with the stock components ────────────────────────────

    #[test]
    fn test_offset_of_a_past_date_reads_ago() {
        let result = Timegap::new().offset_from_now(&["2000-01-01"]).unwrap();
        let year = result.timeframe("year").unwrap();
        assert!(year.phrase.ends_with(" ago"), "got: {}", year.phrase);
        assert_eq!(result.len(), 6);
    }

    #[test]
    fn test_distance_second_value_matches_the_gap_exactly() {
        let result = Timegap::new()
            .distance_between(&["2000.01.01"], &["2001.02.02"])
            .unwrap();
        let second = result.timeframe("second").unwrap();
        assert_eq!(second.value, 34_387_200.0);
    }

    #[test]
    fn test_unparseable_expression_surfaces_the_input() {
        let err = Timegap::new()
            .offset_from_now(&["total", "nonsense"])
            .unwrap_err();
        match err {
            TimegapError::UnparseableDate(input) => assert!(input.contains("total nonsense")),
            other => panic!("unexpected error: {other}"),
        }
    }

    // ── strategy injection ──────────────────────────────────────────────

    struct FixedParser;

    impl DateParser for FixedParser {
        fn parse(&self, input: &str) -> Result<ParsedDate> {
            // The facade must hand over pre-normalized input.
            assert_eq!(input, input.trim());
            assert!(!input.contains("  "));
            let (instant, locale) = match input {
                "first" => (anchor(), Some("aa".to_string())),
                "second" => (anchor() + Duration::days(1), Some("bb".to_string())),
                other => panic!("unexpected input: {other}"),
            };
            Ok(ParsedDate { instant, locale })
        }
    }

    struct LocaleEcho;

    impl TimeProvider for LocaleEcho {
        fn offset(
            &self,
            _target: DateTime<Local>,
            _reference: Option<DateTime<Local>>,
            locale: Option<&str>,
        ) -> Result<OffsetResult> {
            let mut result = OffsetResult::new();
            result.add_timeframe("locale", 0.0, locale.unwrap_or("default"));
            Ok(result)
        }

        fn distance(
            &self,
            _from: DateTime<Local>,
            _to: DateTime<Local>,
            locale: Option<&str>,
        ) -> Result<OffsetResult> {
            let mut result = OffsetResult::new();
            result.add_timeframe("locale", 0.0, locale.unwrap_or("default"));
            Ok(result)
        }
    }

    #[test]
    fn test_distance_phrases_in_the_first_inputs_locale() {
        let timegap = Timegap::with_components(LocaleEcho, FixedParser);
        let result = timegap.distance_between(&[" first "], &["second"]).unwrap();
        assert_eq!(result.timeframe("locale").unwrap().phrase, "aa");
    }

    #[test]
    fn test_input_is_normalized_before_parsing() {
        // FixedParser asserts the normalization itself.
        let timegap = Timegap::with_components(LocaleEcho, FixedParser);
        let result = timegap.offset_from_now(&["  first", ""]).unwrap();
        assert_eq!(result.timeframe("locale").unwrap().phrase, "aa");
    }
}
