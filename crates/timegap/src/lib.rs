//! # timegap
//!
//! Human-readable time offsets between dates.
//!
//! timegap turns a date expression into its offset from the current moment
//! ("in a day", "3 years ago") or the distance between two dates
//! ("34387200 seconds"), reported at six granularities at once: second,
//! hour, day, week, month and year. Each result frame pairs a phrase with
//! a numeric value derived from it, so the words and the number never
//! disagree.
//!
//! ## Modules
//!
//! - [`unit`] - the granularity table and unit lengths
//! - [`result`] - the [`TimeFrame`] and [`OffsetResult`] model
//! - [`humanize`] - phrase catalogs and single-granularity phrasing
//! - [`parse`] - date expression parsing, explicit formats and English prose
//! - [`provider`] - offset and distance computation across all granularities
//! - [`engine`] - the [`Timegap`] facade over parsing and computation
//! - [`error`] - error types

pub mod engine;
pub mod error;
pub mod humanize;
pub mod parse;
pub mod provider;
pub mod result;
pub mod unit;

pub use engine::{normalize_input, Timegap};
pub use error::TimegapError;
pub use humanize::{phrase_between, PhraseMode, UnsupportedLocale};
pub use parse::{DateParser, DefaultDateParser, ParsedDate};
pub use provider::{ChronoTimeProvider, TimeProvider};
pub use result::{OffsetResult, TimeFrame};
pub use unit::Granularity;
