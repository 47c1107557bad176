//! Date filter and resolved range types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::error::RangeError;

/// Symbolic date filter tokens accepted by the reporting endpoints.
///
/// Every token except `Custom` is self-contained given "now" and a
/// timezone. `Custom` additionally requires both explicit bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFilter {
    /// The current local calendar day.
    Today,
    /// The previous local calendar day.
    Yesterday,
    /// Sunday through Saturday of the current local week.
    ThisWeek,
    /// Sunday through Saturday of the previous local week.
    LastWeek,
    /// First through last day of the current local month.
    ThisMonth,
    /// First through last day of the previous local month.
    LastMonth,
    /// January 1 through December 31 of the current local year.
    ThisYear,
    /// Trailing 7 calendar days including today.
    Last7Days,
    /// Trailing 30 calendar days including today.
    Last30Days,
    /// Explicit start and end dates supplied by the caller.
    Custom,
}

impl DateFilter {
    /// Returns the wire token for this filter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Yesterday => "yesterday",
            Self::ThisWeek => "this_week",
            Self::LastWeek => "last_week",
            Self::ThisMonth => "this_month",
            Self::LastMonth => "last_month",
            Self::ThisYear => "this_year",
            Self::Last7Days => "last_7_days",
            Self::Last30Days => "last_30_days",
            Self::Custom => "custom",
        }
    }

    /// All tokens except `Custom`, which needs explicit bounds.
    pub const SELF_CONTAINED: [Self; 9] = [
        Self::Today,
        Self::Yesterday,
        Self::ThisWeek,
        Self::LastWeek,
        Self::ThisMonth,
        Self::LastMonth,
        Self::ThisYear,
        Self::Last7Days,
        Self::Last30Days,
    ];
}

impl std::fmt::Display for DateFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DateFilter {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "today" => Ok(Self::Today),
            "yesterday" => Ok(Self::Yesterday),
            "this_week" => Ok(Self::ThisWeek),
            "last_week" => Ok(Self::LastWeek),
            "this_month" => Ok(Self::ThisMonth),
            "last_month" => Ok(Self::LastMonth),
            "this_year" => Ok(Self::ThisYear),
            "last_7_days" => Ok(Self::Last7Days),
            "last_30_days" => Ok(Self::Last30Days),
            "custom" => Ok(Self::Custom),
            other => Err(RangeError::InvalidFilter(other.to_string())),
        }
    }
}

/// A concrete UTC instant interval derived from a symbolic date filter.
///
/// Invariant: `start_utc <= end_utc`. The end instant is always the last
/// representable millisecond of its calendar day in the target timezone,
/// translated to UTC, never a floating "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRange {
    /// Inclusive start instant.
    pub start_utc: DateTime<Utc>,
    /// Inclusive end instant.
    pub end_utc: DateTime<Utc>,
    /// Local calendar start date the range was derived from.
    pub start_date: NaiveDate,
    /// Local calendar end date the range was derived from.
    pub end_date: NaiveDate,
}

impl ResolvedRange {
    /// Returns true if the instant falls inside the range (inclusive).
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start_utc && instant <= self.end_utc
    }

    /// Number of local calendar days spanned by the range.
    #[must_use]
    pub fn day_count(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}
