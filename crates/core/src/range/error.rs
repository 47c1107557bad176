//! Date range resolution errors.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur while resolving a date filter.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RangeError {
    /// Unrecognized filter token.
    #[error("Invalid date filter: {0}")]
    InvalidFilter(String),

    /// A custom range is missing one of its bounds.
    #[error("Missing date bound: {field}")]
    MissingBounds {
        /// Name of the absent field.
        field: &'static str,
    },

    /// A date string could not be parsed as `YYYY-MM-DD`.
    #[error("Malformed date for {field}: {value}")]
    MalformedDate {
        /// Name of the offending field.
        field: &'static str,
        /// The value that failed to parse.
        value: String,
    },

    /// End date is before start date.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvertedRange {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },
}
