//! Resolves date filter tokens into UTC instant ranges.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use super::error::RangeError;
use super::types::{DateFilter, ResolvedRange};
use crate::timezone;

/// Resolves symbolic date filters against a fixed-offset timezone table.
pub struct DateRangeResolver;

impl DateRangeResolver {
    /// Resolves `filter` into a concrete UTC range.
    ///
    /// `custom_start` and `custom_end` are `YYYY-MM-DD` strings, required
    /// only for [`DateFilter::Custom`]. `now` anchors the relative tokens;
    /// production callers pass `Utc::now()`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::MissingBounds`] or [`RangeError::MalformedDate`]
    /// for an incomplete custom range, and [`RangeError::InvertedRange`]
    /// when the end date precedes the start date.
    pub fn resolve(
        filter: DateFilter,
        zone: &str,
        custom_start: Option<&str>,
        custom_end: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<ResolvedRange, RangeError> {
        let offset = timezone::offset(zone);
        let local_today = (now + offset).date_naive();

        let (start_date, end_date) = match filter {
            DateFilter::Today => (local_today, local_today),
            DateFilter::Yesterday => {
                let day = local_today - Duration::days(1);
                (day, day)
            }
            DateFilter::ThisWeek => {
                let start = week_start(local_today);
                (start, start + Duration::days(6))
            }
            DateFilter::LastWeek => {
                let start = week_start(local_today) - Duration::days(7);
                (start, start + Duration::days(6))
            }
            DateFilter::ThisMonth => (first_of_month(local_today), last_of_month(local_today)),
            DateFilter::LastMonth => {
                let prev = first_of_month(local_today) - Duration::days(1);
                (first_of_month(prev), prev)
            }
            DateFilter::ThisYear => (
                local_today.with_month(1).and_then(|d| d.with_day(1)).unwrap_or(local_today),
                local_today
                    .with_month(12)
                    .and_then(|d| d.with_day(31))
                    .unwrap_or(local_today),
            ),
            // Trailing windows include the current day, so they span exactly
            // N calendar days, not N+1.
            DateFilter::Last7Days => (local_today - Duration::days(6), local_today),
            DateFilter::Last30Days => (local_today - Duration::days(29), local_today),
            DateFilter::Custom => Self::custom_bounds(custom_start, custom_end)?,
        };

        let start_utc = ((start_date.and_time(NaiveTime::MIN)) - offset).and_utc();
        let end_utc = (end_of_day(end_date) - offset).and_utc();
        debug_assert!(start_utc <= end_utc);

        Ok(ResolvedRange {
            start_utc,
            end_utc,
            start_date,
            end_date,
        })
    }

    /// Parses and validates explicit custom bounds.
    ///
    /// An end date exactly one day after the start collapses to a
    /// single-day range. The UI date picker sends an exclusive end bound
    /// for single-day selections; this is the named special case that
    /// absorbs it.
    fn custom_bounds(
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<(NaiveDate, NaiveDate), RangeError> {
        let start = parse_date("start_date", start)?;
        let end = parse_date("end_date", end)?;

        if end < start {
            return Err(RangeError::InvertedRange { start, end });
        }
        if end - start == Duration::days(1) {
            return Ok((start, start));
        }
        Ok((start, end))
    }
}

fn parse_date(field: &'static str, value: Option<&str>) -> Result<NaiveDate, RangeError> {
    let value = value
        .filter(|v| !v.trim().is_empty())
        .ok_or(RangeError::MissingBounds { field })?;
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| RangeError::MalformedDate {
        field,
        value: value.to_string(),
    })
}

/// Sunday of the week containing `date`.
fn week_start(date: NaiveDate) -> NaiveDate {
    let days_from_sunday = i64::from(date.weekday().num_days_from_sunday());
    date - Duration::days(days_from_sunday)
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn last_of_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .map_or(date, |next_first| next_first - Duration::days(1))
}

fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_milli_opt(23, 59, 59, 999)
        .unwrap_or_else(|| date.and_time(NaiveTime::MIN))
}
