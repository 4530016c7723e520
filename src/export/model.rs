// src/export/model.rs

use crate::models::Entry;
use serde::Serialize;

/// Flat row for CSV / JSON / XLSX export of classified entries.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub key: String,
    pub start: String,
    pub end: String,
    pub duration_minutes: i64,
    pub category: String,
    pub pretty: String,
    pub name: String,
    pub path: String,
    pub filename: String,
    pub tags: String,
}

impl From<&Entry> for EntryExport {
    fn from(e: &Entry) -> Self {
        Self {
            key: e.key.clone(),
            start: e.start.format("%Y-%m-%dT%H:%M:%S").to_string(),
            end: e.end.format("%Y-%m-%dT%H:%M:%S").to_string(),
            duration_minutes: e.duration_minutes(),
            category: e.category.as_str().to_string(),
            pretty: e.pretty.clone(),
            name: e.name.clone(),
            path: e.path.clone(),
            filename: e.filename.clone(),
            tags: e.tags.join(";"),
        }
    }
}

/// Column headers for CSV / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "key",
        "start",
        "end",
        "duration_minutes",
        "category",
        "pretty",
        "name",
        "path",
        "filename",
        "tags",
    ]
}
