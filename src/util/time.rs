// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Timestamps for project records.

use jiff::tz::TimeZone;
use jiff::Timestamp;

/// Current time as seconds since the Unix epoch.
pub fn now_secs() -> u64 {
    u64::try_from(Timestamp::now().as_second()).unwrap_or_default()
}

/// Format a Unix timestamp as a `YYYY-MM-DD` date in the user's time zone.
pub fn format_date(secs: u64) -> String {
    format_date_in(secs, TimeZone::system())
}

fn format_date_in(secs: u64, tz: TimeZone) -> String {
    i64::try_from(secs)
        .ok()
        .and_then(|secs| Timestamp::from_second(secs).ok())
        .map(|ts| ts.to_zoned(tz).strftime("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::tz::Offset;

    #[test]
    fn test_epoch() {
        assert_eq!(format_date_in(0, TimeZone::UTC), "1970-01-01");
    }

    #[test]
    fn test_leap_day() {
        // 2024-02-29T12:00:00Z
        assert_eq!(format_date_in(1_709_208_000, TimeZone::UTC), "2024-02-29");
    }

    #[test]
    fn test_date_follows_local_zone() {
        // 2023-12-31T23:59:59Z
        let secs = 1_704_067_199;
        assert_eq!(format_date_in(secs, TimeZone::UTC), "2023-12-31");
        assert_eq!(format_date_in(secs, TimeZone::fixed(Offset::constant(1))), "2024-01-01");
    }

    #[test]
    fn test_evening_west_of_utc_stays_on_same_day() {
        // 2024-03-15T02:30:00Z is the evening of the 14th at UTC-5
        let secs = 1_710_469_800;
        assert_eq!(format_date_in(secs, TimeZone::fixed(Offset::constant(-5))), "2024-03-14");
    }

    #[test]
    fn test_now_is_after_epoch() {
        assert!(now_secs() > 1_700_000_000);
    }

    #[test]
    fn test_out_of_range_timestamp_is_blank() {
        assert_eq!(format_date_in(u64::MAX, TimeZone::UTC), "");
    }
}
