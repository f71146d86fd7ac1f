//! Date expression parsing: explicit formats first, then English prose.
//!
//! [`DefaultDateParser`] tries RFC 3339, a fixed list of numeric formats,
//! a handful of relative keywords, and finally chrono-english natural
//! language ("friday", "3 hours ago", "June 30, 2018"). Numeric formats
//! carry no locale; prose marks the result as English so downstream
//! phrasing can answer in kind.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use chrono_english::{parse_date_string, Dialect};

use crate::error::{Result, TimegapError};

/// Locale tag attached to expressions recognized as English prose.
const ENGLISH: &str = "en";

/// Datetime formats tried before the date-only list.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Date-only formats, resolved to local midnight.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d", "%d.%m.%Y"];

/// A parsed date expression: the instant, plus the locale the wording
/// implied when one could be detected.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDate {
    /// The resolved instant in local time.
    pub instant: DateTime<Local>,
    /// `Some("en")` when the expression was English prose, `None` for
    /// purely numeric formats.
    pub locale: Option<String>,
}

/// Turns a raw date expression into an instant.
pub trait DateParser {
    /// Parse `input` relative to the current system time.
    ///
    /// # Errors
    ///
    /// Returns [`TimegapError::UnparseableDate`] carrying the offending
    /// input when no strategy recognizes it.
    fn parse(&self, input: &str) -> Result<ParsedDate>;
}

/// Format-list parser with relative keywords and an English
/// natural-language fallback.
///
/// Strategies, in order:
///
/// 1. RFC 3339 ("2014-06-23T10:30:00Z"), which is the only strategy that
///    may carry its own timezone
/// 2. Numeric datetime formats, then date-only formats resolved to local
///    midnight ("2014-06-23 10:30", "23.06.2014")
/// 3. The keywords "now", "today", "tomorrow" and "yesterday"
/// 4. chrono-english prose ("friday", "3 hours ago", "June 30, 2018")
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultDateParser;

impl DefaultDateParser {
    /// Like [`DateParser::parse`] but with an explicit reference instant
    /// for the relative strategies, which pins down tests.
    pub fn parse_at(&self, input: &str, reference: DateTime<Local>) -> Result<ParsedDate> {
        let input = input.trim();

        if let Ok(instant) = DateTime::parse_from_rfc3339(input) {
            return Ok(ParsedDate {
                instant: instant.with_timezone(&Local),
                locale: None,
            });
        }

        for format in DATETIME_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
                return Ok(ParsedDate {
                    instant: local_instant(naive, input)?,
                    locale: None,
                });
            }
        }

        for format in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(input, format) {
                return Ok(ParsedDate {
                    instant: local_instant(date.and_time(NaiveTime::MIN), input)?,
                    locale: None,
                });
            }
        }

        let keyword_date = match input.to_ascii_lowercase().as_str() {
            "now" => {
                return Ok(ParsedDate {
                    instant: reference,
                    locale: Some(ENGLISH.to_string()),
                })
            }
            "today" => Some(reference.date_naive()),
            "tomorrow" => reference.date_naive().succ_opt(),
            "yesterday" => reference.date_naive().pred_opt(),
            _ => None,
        };
        if let Some(date) = keyword_date {
            return Ok(ParsedDate {
                instant: local_instant(date.and_time(NaiveTime::MIN), input)?,
                locale: Some(ENGLISH.to_string()),
            });
        }

        match parse_date_string(input, reference, Dialect::Us) {
            Ok(instant) => Ok(ParsedDate {
                instant,
                locale: Some(ENGLISH.to_string()),
            }),
            Err(_) => Err(TimegapError::UnparseableDate(format!("'{input}'"))),
        }
    }
}

impl DateParser for DefaultDateParser {
    fn parse(&self, input: &str) -> Result<ParsedDate> {
        self.parse_at(input, Local::now())
    }
}

/// Resolve a naive wall-clock time to a local instant. A DST shift can
/// make a wall-clock time (midnight, in some zones) ambiguous or skip it
/// entirely; take the earliest valid instant.
fn local_instant(naive: NaiveDateTime, input: &str) -> Result<DateTime<Local>> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| TimegapError::UnparseableDate(format!("'{input}'")))
}

// ── Tests ───────────────────────────────────────────────────────────────────
