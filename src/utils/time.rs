//! Time utilities: timestamp parsing, day flooring/ceiling, clock formatting.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a dataset timestamp.
///
/// Accepts RFC 3339 (the offset is dropped, wall-clock time kept), naive
/// date-times with `T` or space and a bare `YYYY-MM-DD` (midnight).
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    for fmt in NAIVE_FORMATS.iter() {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}

pub fn require_timestamp(s: &str, context: &str) -> AppResult<NaiveDateTime> {
    parse_timestamp(s).ok_or_else(|| AppError::InvalidTimestamp {
        value: s.to_string(),
        context: context.to_string(),
    })
}

/// Start of the day containing `t`.
pub fn floor_day(t: NaiveDateTime) -> NaiveDateTime {
    t.date().and_time(NaiveTime::MIN)
}

/// Smallest midnight `>= t`; an exact midnight is returned unchanged.
pub fn ceil_day(t: NaiveDateTime) -> NaiveDateTime {
    let floor = floor_day(t);
    if floor == t {
        floor
    } else {
        floor + Duration::days(1)
    }
}

pub fn seconds_from_midnight(t: NaiveTime) -> f64 {
    t.num_seconds_from_midnight() as f64 + t.nanosecond() as f64 / 1e9
}

pub fn format_clock(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}
