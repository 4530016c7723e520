use super::category::Category;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::Serialize;

/// One calendar / task / time-tracking record, drawn as a bar.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    pub key: String,       // group key of the `[key, entries]` pair
    pub name: String,      // raw name, may contain [[link][label]] markup
    pub path: String,
    pub filename: String,
    pub tags: Vec<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,

    pub category: Category, // derived once by the classifier
    pub pretty: String,     // derived once from `name`
}

impl Entry {
    pub fn day(&self) -> NaiveDate {
        self.start.date()
    }

    /// Time of day of the start, truncated to the minute.
    pub fn start_tod(&self) -> NaiveTime {
        truncate_to_minute(self.start.time())
    }

    /// Time of day of the end, truncated to the minute.
    pub fn end_tod(&self) -> NaiveTime {
        truncate_to_minute(self.end.time())
    }

    /// All-day / placeholder entries start exactly at 00:00.
    pub fn starts_at_midnight(&self) -> bool {
        self.start.hour() == 0 && self.start.minute() == 0
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

fn truncate_to_minute(t: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(t.hour(), t.minute(), 0).unwrap_or(t)
}
