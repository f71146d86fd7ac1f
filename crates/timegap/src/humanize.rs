//! Phrasing time gaps in natural language, one granularity at a time.
//!
//! [`phrase_between`] renders the gap between two instants at a single
//! granularity, either directed ("in 3 days", "3 days ago") or as a bare
//! magnitude ("3 days"). Word forms live in per-locale catalogs; only
//! English ships, matched from tags like "en", "en-US" or "en_GB".

use chrono::{DateTime, Local};
use thiserror::Error;

use crate::unit::Granularity;

// ── Catalogs ────────────────────────────────────────────────────────────────

/// No phrase catalog exists for the requested locale tag.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported locale: '{0}'")]
pub struct UnsupportedLocale(pub String);

/// Whether a phrase carries direction or bare magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhraseMode {
    /// Directed relative to the reference: "in 3 days", "3 days ago".
    Offset,
    /// Magnitude only: "3 days".
    Distance,
}

/// Word forms for one locale. The per-granularity arrays follow
/// [`Granularity`] declaration order.
struct Catalog {
    /// Exactly-one forms ("a day", "an hour").
    singular: [&'static str; 6],
    /// Unit nouns appended to every other count ("days", "hours").
    plural: [&'static str; 6],
    /// Direction wrappers with a `{}` slot for the magnitude.
    future: &'static str,
    past: &'static str,
}

static ENGLISH: Catalog = Catalog {
    singular: ["a second", "an hour", "a day", "a week", "a month", "a year"],
    plural: ["seconds", "hours", "days", "weeks", "months", "years"],
    future: "in {}",
    past: "{} ago",
};

/// Look up the catalog for a locale tag.
///
/// Matching is case-insensitive and ignores everything past the primary
/// subtag, so "en", "en-US" and "en_gb" all resolve to English.
fn catalog_for(tag: &str) -> Option<&'static Catalog> {
    let primary = tag.split(['-', '_']).next().unwrap_or(tag);
    match primary.to_ascii_lowercase().as_str() {
        "en" => Some(&ENGLISH),
        _ => None,
    }
}

// ── Phrasing ────────────────────────────────────────────────────────────────

/// Phrase the gap from `reference` to `target` at one granularity.
///
/// The gap is measured at millisecond precision and rounded to whole
/// seconds. Magnitude is the truncated number of units: exactly one unit
/// uses the singular form ("a day"), anything else the count with the
/// plural noun ("3 days", "0 days"). In [`PhraseMode::Offset`] the phrase
/// is wrapped with direction, and a zero gap phrases as future
/// ("in 0 seconds").
///
/// The year here is a flat 365 days rather than the Gregorian average of
/// [`Granularity::seconds`], so a one-calendar-year shift still reads as
/// "a year".
///
/// # Arguments
///
/// * `target` - the instant being described
/// * `reference` - the instant it is described relative to
/// * `granularity` - the single unit to phrase in
/// * `locale` - a locale tag, or `None` for the default (English)
/// * `mode` - directed or magnitude-only phrasing
///
/// # Errors
///
/// Returns [`UnsupportedLocale`] when no catalog matches `locale`. No
/// substitution happens here; falling back is the caller's decision.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Local, TimeZone};
/// use timegap::{phrase_between, Granularity, PhraseMode};
///
/// let reference = Local.with_ymd_and_hms(2020, 5, 1, 12, 0, 0).unwrap();
/// let target = reference + Duration::days(3);
///
/// let phrase =
///     phrase_between(target, reference, Granularity::Day, None, PhraseMode::Offset).unwrap();
/// assert_eq!(phrase, "in 3 days");
/// ```
pub fn phrase_between(
    target: DateTime<Local>,
    reference: DateTime<Local>,
    granularity: Granularity,
    locale: Option<&str>,
    mode: PhraseMode,
) -> Result<String, UnsupportedLocale> {
    let catalog = match locale {
        Some(tag) => catalog_for(tag).ok_or_else(|| UnsupportedLocale(tag.to_string()))?,
        None => &ENGLISH,
    };

    let delta = rounded_delta_seconds(target, reference);
    let count = (delta / phrase_seconds(granularity)).abs().trunc() as i64;

    let magnitude = if count == 1 {
        catalog.singular[granularity as usize].to_string()
    } else {
        format!("{} {}", count, catalog.plural[granularity as usize])
    };

    Ok(match mode {
        PhraseMode::Distance => magnitude,
        PhraseMode::Offset => {
            let wrapper = if delta < 0.0 { catalog.past } else { catalog.future };
            wrapper.replacen("{}", &magnitude, 1)
        }
    })
}

/// Seconds from `reference` to `target`, millisecond-accurate, rounded to
/// a whole second.
fn rounded_delta_seconds(target: DateTime<Local>, reference: DateTime<Local>) -> f64 {
    let millis = target.signed_duration_since(reference).num_milliseconds();
    (millis as f64 / 1000.0).round()
}

/// Unit length used for phrase magnitudes, with the flat 365-day year.
fn phrase_seconds(granularity: Granularity) -> f64 {
    match granularity {
        Granularity::Year => 31_536_000.0, // 365 days
        other => other.seconds(),
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
