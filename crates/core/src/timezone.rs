//! Fixed-offset table for named business timezones.
//!
//! The table is deliberately closed and small: zones map to constant UTC
//! offsets with no DST transitions. Unknown names fall back to a zero
//! offset (UTC). This is a documented limitation, not a substitute for the
//! IANA database; do not extend it with ad hoc DST logic.

use chrono::Duration;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static OFFSET_MINUTES: Lazy<HashMap<&'static str, i64>> = Lazy::new(|| {
    HashMap::from([
        ("IST", 330),
        ("UTC", 0),
        ("EST", -300),
        ("CST", -360),
        ("MST", -420),
        ("PST", -480),
        ("GST", 240),
        ("NPT", 345),
    ])
});

/// Returns the fixed UTC offset in minutes for a named zone.
///
/// Unknown zone names resolve to 0 (UTC).
#[must_use]
pub fn offset_minutes(zone: &str) -> i64 {
    OFFSET_MINUTES.get(zone).copied().unwrap_or(0)
}

/// Returns the fixed UTC offset for a named zone as a `Duration`.
#[must_use]
pub fn offset(zone: &str) -> Duration {
    Duration::minutes(offset_minutes(zone))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_zones() {
        assert_eq!(offset_minutes("IST"), 330);
        assert_eq!(offset_minutes("UTC"), 0);
        assert_eq!(offset_minutes("PST"), -480);
        assert_eq!(offset_minutes("NPT"), 345);
    }

    #[test]
    fn test_unknown_zone_falls_back_to_utc() {
        assert_eq!(offset_minutes("Asia/Kolkata"), 0);
        assert_eq!(offset_minutes(""), 0);
        assert_eq!(offset_minutes("ist"), 0);
    }

    #[test]
    fn test_offset_duration() {
        assert_eq!(offset("IST"), Duration::minutes(330));
        assert_eq!(offset("EST"), Duration::minutes(-300));
    }
}
