//! Dataset loading: shape validation, classification and normalisation.

use crate::core::classify::{Subject, classify, pretty_name};
use crate::errors::{AppError, AppResult};
use crate::models::{Category, Entry};
use crate::utils::time::require_timestamp;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Entry object as it appears in the JSON document.
#[derive(Debug, Deserialize)]
struct RawEntry {
    name: String,
    path: String,
    filename: String,
    #[serde(default)]
    tags: Vec<String>,
    start: String,
    end: String,
}

/// Result of a load: the timed entries plus what the legend needs.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Entries kept for rendering, in document order.
    pub entries: Vec<Entry>,
    /// Entries dropped because they start at midnight.
    pub dropped: Vec<Entry>,
    /// Distinct categories in first-seen order (dropped entries included).
    pub categories: Vec<Category>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn load_file(path: &Path) -> AppResult<Dataset> {
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::InvalidInput(format!("cannot read dataset {}: {e}", path.display()))
    })?;
    load_str(&content)
}

pub fn load_str(content: &str) -> AppResult<Dataset> {
    let doc: Value = serde_json::from_str(content)?;
    from_value(&doc)
}

/// Build a dataset from an already parsed `[[key, [entry, ...]], ...]` document.
pub fn from_value(doc: &Value) -> AppResult<Dataset> {
    let groups = doc.as_array().ok_or_else(|| {
        AppError::InvalidInput("top-level value must be an array of [key, entries] pairs".into())
    })?;

    let mut dataset = Dataset::default();

    for (gi, group) in groups.iter().enumerate() {
        let (key, items) = split_group(gi, group)?;

        for (ei, item) in items.iter().enumerate() {
            let entry = normalize(gi, ei, &key, item)?;

            if !dataset.categories.contains(&entry.category) {
                dataset.categories.push(entry.category);
            }

            if entry.starts_at_midnight() {
                dataset.dropped.push(entry);
            } else {
                dataset.entries.push(entry);
            }
        }
    }

    Ok(dataset)
}

fn split_group(gi: usize, group: &Value) -> AppResult<(String, &Vec<Value>)> {
    let pair = group
        .as_array()
        .filter(|p| p.len() == 2)
        .ok_or_else(|| AppError::InvalidInput(format!("group {gi}: expected a [key, entries] pair")))?;

    let key = match &pair[0] {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    let items = pair[1].as_array().ok_or_else(|| {
        AppError::InvalidInput(format!("group {gi} ('{key}'): entries must be an array"))
    })?;

    Ok((key, items))
}

fn normalize(gi: usize, ei: usize, key: &str, item: &Value) -> AppResult<Entry> {
    let raw = RawEntry::deserialize(item)
        .map_err(|e| AppError::InvalidInput(format!("group {gi} ('{key}'), entry {ei}: {e}")))?;

    let start = require_timestamp(&raw.start, &format!("group {gi}, entry {ei}, field `start`"))?;
    let end = require_timestamp(&raw.end, &format!("group {gi}, entry {ei}, field `end`"))?;

    let category = classify(&Subject {
        name: &raw.name,
        path: &raw.path,
        filename: &raw.filename,
        tags: &raw.tags,
    });
    let pretty = pretty_name(&raw.name);

    Ok(Entry {
        key: key.to_string(),
        name: raw.name,
        path: raw.path,
        filename: raw.filename,
        tags: raw.tags,
        start,
        end,
        category,
        pretty,
    })
}
