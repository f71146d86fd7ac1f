//! Error types for timegap operations.

use thiserror::Error;

use crate::humanize::UnsupportedLocale;

#[derive(Error, Debug)]
pub enum TimegapError {
    #[error("Invalid date expression: {0}")]
    UnparseableDate(String),

    #[error(transparent)]
    UnsupportedLocale(#[from] UnsupportedLocale),
}

pub type Result<T> = std::result::Result<T, TimegapError>;
