//! Offset and distance computation across every granularity at once.

use chrono::{DateTime, Local};

use crate::error::Result;
use crate::humanize::{self, PhraseMode};
use crate::result::OffsetResult;
use crate::unit::Granularity;

/// Computes a full [`OffsetResult`] from one or two instants.
///
/// Implementations populate one frame per entry of [`Granularity::ALL`],
/// in that order, pairing each phrase with a numeric value.
pub trait TimeProvider {
    /// Describe `target` relative to `reference`, at every granularity.
    ///
    /// # Arguments
    ///
    /// * `target` - the instant being described
    /// * `reference` - the comparison instant; `None` captures the current
    ///   system time, once, so all six frames agree
    /// * `locale` - locale tag for phrasing, or `None` for the default
    ///
    /// # Errors
    ///
    /// Fails only when phrasing fails in the default locale, which means a
    /// broken catalog rather than bad input.
    fn offset(
        &self,
        target: DateTime<Local>,
        reference: Option<DateTime<Local>>,
        locale: Option<&str>,
    ) -> Result<OffsetResult>;

    /// Describe how far apart `from` and `to` are, phrased without
    /// direction. Numeric values still keep the sign of `to - from`.
    fn distance(
        &self,
        from: DateTime<Local>,
        to: DateTime<Local>,
        locale: Option<&str>,
    ) -> Result<OffsetResult>;
}

/// The stock [`TimeProvider`], built on chrono arithmetic and the built-in
/// phrase catalogs.
///
/// Each frame's numeric value is read back out of its own phrase, so the
/// number and the words cannot disagree: "in 3 days" yields 3, and "3 days
/// ago" yields 3 as well, since the words already carry the direction.
/// Phrases without digits ("a day ago") fall back to a computed count
/// that does keep the sign: offsets round to the nearest unit, distances
/// truncate.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Local, TimeZone};
/// use timegap::{ChronoTimeProvider, TimeProvider};
///
/// let reference = Local.with_ymd_and_hms(2020, 5, 1, 12, 0, 0).unwrap();
/// let result = ChronoTimeProvider
///     .offset(reference + Duration::days(3), Some(reference), None)
///     .unwrap();
///
/// let day = result.timeframe("day").unwrap();
/// assert_eq!(day.phrase, "in 3 days");
/// assert_eq!(day.value, 3.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoTimeProvider;

impl ChronoTimeProvider {
    fn populate(
        &self,
        target: DateTime<Local>,
        reference: DateTime<Local>,
        locale: Option<&str>,
        mode: PhraseMode,
    ) -> Result<OffsetResult> {
        let total_seconds =
            target.signed_duration_since(reference).num_milliseconds() as f64 / 1000.0;

        let mut result = OffsetResult::new();
        for granularity in Granularity::ALL {
            let phrase = phrase_or_default(target, reference, granularity, locale, mode)?;
            let value = match first_number(&phrase) {
                Some(value) => value,
                None => {
                    let units = total_seconds / granularity.seconds();
                    match mode {
                        PhraseMode::Offset => units.round(),
                        PhraseMode::Distance => units.trunc(),
                    }
                }
            };
            result.add_timeframe(granularity.as_str(), value, &phrase);
        }
        Ok(result)
    }
}

impl TimeProvider for ChronoTimeProvider {
    fn offset(
        &self,
        target: DateTime<Local>,
        reference: Option<DateTime<Local>>,
        locale: Option<&str>,
    ) -> Result<OffsetResult> {
        let reference = reference.unwrap_or_else(Local::now);
        self.populate(target, reference, locale, PhraseMode::Offset)
    }

    fn distance(
        &self,
        from: DateTime<Local>,
        to: DateTime<Local>,
        locale: Option<&str>,
    ) -> Result<OffsetResult> {
        self.populate(to, from, locale, PhraseMode::Distance)
    }
}

/// Phrase one granularity, retrying once in the default locale when the
/// requested one has no catalog. A failure of the retry propagates.
fn phrase_or_default(
    target: DateTime<Local>,
    reference: DateTime<Local>,
    granularity: Granularity,
    locale: Option<&str>,
    mode: PhraseMode,
) -> Result<String> {
    match humanize::phrase_between(target, reference, granularity, locale, mode) {
        Ok(phrase) => Ok(phrase),
        Err(_) => Ok(humanize::phrase_between(target, reference, granularity, None, mode)?),
    }
}

/// The first contiguous run of ASCII digits in `phrase`, parsed as `f64`.
fn first_number(phrase: &str) -> Option<f64> {
    let mut digits = String::new();
    for ch in phrase.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
        } else if !digits.is_empty() {
            break;
        }
    }
    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
