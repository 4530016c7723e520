// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::get_headers;
use crate::export::notify_export_success;
use crate::models::Entry;
use crate::ui::messages::info;
use chrono::{NaiveDate, NaiveDateTime};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const DATETIME_FORMAT: &str = "yyyy-mm-dd hh:mm";

/// Styled XLSX export with auto-sized columns.
///
/// Works on entries rather than flat rows so start/end are written as real
/// Excel date-times and the duration as a number.
pub(crate) fn export_xlsx(entries: &[Entry], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // ---------------------------
    // Empty dataset
    // ---------------------------
    if entries.is_empty() {
        worksheet
            .write(0, 0, "No data available")
            .map_err(to_export_error)?;
        workbook.save(path).map_err(to_export_error)?;
        notify_export_success("XLSX (empty dataset)", path);
        return Ok(());
    }

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();
    col_widths[1] = col_widths[1].max(DATETIME_FORMAT.len());
    col_widths[2] = col_widths[2].max(DATETIME_FORMAT.len());

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, e) in entries.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let bg = if row_index % 2 == 0 { band1 } else { band2 };

        let base = Format::new()
            .set_background_color(bg)
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin);
        let date_fmt = base.clone().set_num_format(DATETIME_FORMAT);
        let num_fmt = base.clone().set_align(FormatAlign::Right);

        let texts = [
            (0u16, e.key.as_str()),
            (4, e.category.as_str()),
            (5, e.pretty.as_str()),
            (6, e.name.as_str()),
            (7, e.path.as_str()),
            (8, e.filename.as_str()),
        ];
        for (col, text) in texts {
            write_text(worksheet, row, col, text, &base)?;
            let c = col as usize;
            col_widths[c] = col_widths[c].max(UnicodeWidthStr::width(text));
        }

        let tags = e.tags.join(";");
        write_text(worksheet, row, 9, &tags, &base)?;
        col_widths[9] = col_widths[9].max(UnicodeWidthStr::width(tags.as_str()));

        worksheet
            .write_with_format(row, 1, excel_serial(&e.start), &date_fmt)
            .map_err(to_export_error)?;
        worksheet
            .write_with_format(row, 2, excel_serial(&e.end), &date_fmt)
            .map_err(to_export_error)?;
        worksheet
            .write_with_format(row, 3, e.duration_minutes() as f64, &num_fmt)
            .map_err(to_export_error)?;
    }

    // ---------------------------
    // Set column widths
    // ---------------------------
    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_text(ws: &mut Worksheet, row: u32, col: u16, s: &str, fmt: &Format) -> AppResult<()> {
    ws.write_with_format(row, col, s, fmt)
        .map_err(to_export_error)?;
    Ok(())
}

/// Days since 1899-12-30, fractional part = time of day.
pub(crate) fn excel_serial(dt: &NaiveDateTime) -> f64 {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)
        .unwrap_or_default()
        .and_hms_opt(0, 0, 0)
        .unwrap_or_default();
    let secs = (*dt - epoch).num_seconds() as f64;
    secs / 86_400.0
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
