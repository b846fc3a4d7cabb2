//! Time helpers - business time zone conversion
//!
//! Scans are stored with UTC Unix millis. Wall-clock decisions and
//! "today" boundaries are made in the configured business time zone.

use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;

use super::{AppError, AppResult};

/// Parse an IANA time zone name (`Europe/Moscow`, `UTC`)
pub fn parse_timezone(name: &str) -> AppResult<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| AppError::validation(format!("Unknown time zone: {}", name)))
}

/// Date start (00:00:00) -> Unix millis (business time zone)
///
/// DST gap fallback: if local midnight does not exist, fall back to UTC.
pub fn day_start_millis(date: NaiveDate, tz: Tz) -> i64 {
    let naive = date.and_time(chrono::NaiveTime::MIN);
    naive
        .and_local_timezone(tz)
        .earliest()
        .map(|dt| dt.timestamp_millis())
        .unwrap_or_else(|| naive.and_utc().timestamp_millis())
}

/// Date end -> next day's 00:00:00 Unix millis (business time zone)
///
/// Callers use `< end` (exclusive).
pub fn day_end_millis(date: NaiveDate, tz: Tz) -> i64 {
    let next_day = date.succ_opt().unwrap_or(date);
    day_start_millis(next_day, tz)
}

/// `[start, end)` millis of the local day containing `now`
pub fn day_bounds(now: DateTime<Tz>) -> (i64, i64) {
    let tz = now.timezone();
    let date = now.date_naive();
    (day_start_millis(date, tz), day_end_millis(date, tz))
}
