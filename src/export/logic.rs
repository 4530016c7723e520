// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_writable, require_absolute};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EntryExport;
use crate::export::xlsx::export_xlsx;
use crate::models::Entry;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Export classified entries.
    ///
    /// - `format`: csv | json | xlsx
    /// - `file`: absolute path of the output file
    /// - `force`: overwrite without asking
    pub fn export(entries: &[Entry], format: &ExportFormat, file: &str, force: bool) -> AppResult<()> {
        let path = Path::new(file);

        require_absolute(path)?;
        ensure_writable(path, force)?;

        if entries.is_empty() {
            warning("No entries to export.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&rows(entries), path)?,
            ExportFormat::Json => export_json(&rows(entries), path)?,
            ExportFormat::Xlsx => export_xlsx(entries, path)?,
        }

        Ok(())
    }
}

fn rows(entries: &[Entry]) -> Vec<EntryExport> {
    entries.iter().map(EntryExport::from).collect()
}
