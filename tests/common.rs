#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rtimeline::core::loader::{self, Dataset};
use rtimeline::core::{ChartGeometry, TimelineView};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Two groups, six entries: one per category plus a repeated label and a
/// midnight placeholder that the loader must drop.
pub const SAMPLE: &str = r#"[
  ["work.org", [
    {"name": "DONE [[https://wiki/standup][Standup]]", "path": "/org/Meetings/daily.org",
     "filename": "work.org", "tags": ["ops"],
     "start": "2024-03-04T09:00:00", "end": "2024-03-04T09:30:00"},
    {"name": "TODO Fix pager", "path": "/org/Tasks/pager.org",
     "filename": "oncall.org", "tags": [],
     "start": "2024-03-05T10:00:00", "end": "2024-03-05T12:00:00"},
    {"name": "Sprint item", "path": "/org/Tasks/board.org",
     "filename": "tasks.org", "tags": [],
     "start": "2024-03-05T13:00:00", "end": "2024-03-05T15:00:00"},
    {"name": "Holiday", "path": "/org/Extra/holiday.org",
     "filename": "extra.org", "tags": [],
     "start": "2024-03-06", "end": "2024-03-07"}
  ]],
  ["misc.org", [
    {"name": "Reading", "path": "/org/misc.org",
     "filename": "misc.org", "tags": ["home"],
     "start": "2024-03-06T14:00:00", "end": "2024-03-06T15:30:00"},
    {"name": "DONE [[https://wiki/standup][Standup]]", "path": "/org/Meetings/daily.org",
     "filename": "work.org", "tags": [],
     "start": "2024-03-06T09:00:00", "end": "2024-03-06T09:15:00"}
  ]]
]"#;

pub fn rtl() -> Command {
    cargo_bin_cmd!("rtimeline")
}

/// Unique path inside the system temp dir; any existing file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rtimeline_{}.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` as a dataset file and return its path.
pub fn write_dataset(name: &str, content: &str) -> String {
    let p = temp_path(name, "json");
    fs::write(&p, content).expect("write dataset");
    p
}

/// Config path that does not exist, so the CLI runs on defaults.
pub fn no_config(name: &str) -> String {
    temp_path(&format!("{name}_missing"), "conf")
}

pub fn sample() -> Dataset {
    loader::load_str(SAMPLE).expect("sample dataset")
}

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
}

pub fn sample_view() -> TimelineView {
    let mut view = TimelineView::new(ChartGeometry::default(), today());
    view.load(sample());
    view
}

pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
