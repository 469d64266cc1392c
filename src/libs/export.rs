//! Session export in delimited and structured formats.
//!
//! Serializes a session collection to CSV, JSON or Excel. All formats share
//! the same row shape: `Date, Start Time, End Time, Duration, Notes`, with
//! the duration given as `H:MM`. Sessions without an end time are included
//! with empty end and duration placeholders; the exporter performs no
//! validation of its own.

use crate::libs::formatter::{format_hm, DATE_FORMAT, TIME_FORMAT};
use crate::libs::messages::Message;
use crate::libs::session::Session;
use crate::libs::summary;
use crate::msg_success;
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values for universal compatibility.
    Csv,
    /// Pretty-printed JSON for programmatic processing.
    Json,
    /// Excel workbook with formatted headers.
    Excel,
}

/// One export row; all fields are pre-formatted strings so every format
/// renders identically.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportRow {
    /// Session date in DD-MM-YYYY format
    pub date: String,
    /// Start time in HH:MM format
    pub start_time: String,
    /// End time in HH:MM format; empty while the session is active
    pub end_time: String,
    /// Worked duration as H:MM; empty while the session is active
    pub duration: String,
    /// Session notes verbatim
    pub notes: String,
}

/// Export handler holding the chosen format and output destination.
pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter. Without an explicit output path a timestamped
    /// default name is generated next to the working directory.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("shiftshift_export_{}", Local::now().format("%Y%m%d_%H%M%S"));
        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        };
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, extension)));

        Self { format, output_path }
    }

    /// Builds the formatted rows for a session collection.
    pub fn rows(sessions: &[&Session]) -> Vec<ExportRow> {
        sessions
            .iter()
            .map(|session| ExportRow {
                date: session.start.format(DATE_FORMAT).to_string(),
                start_time: session.start.format(TIME_FORMAT).to_string(),
                end_time: session
                    .end
                    .map_or_else(String::new, |end| end.format(TIME_FORMAT).to_string()),
                duration: summary::session_minutes(session).map_or_else(String::new, format_hm),
                notes: session.notes.clone(),
            })
            .collect()
    }

    /// Writes the session collection in the configured format.
    pub fn export(&self, sessions: &[&Session]) -> Result<()> {
        let rows = Self::rows(sessions);

        match self.format {
            ExportFormat::Csv => self.export_csv(&rows)?,
            ExportFormat::Json => self.export_json(&rows)?,
            ExportFormat::Excel => self.export_excel(&rows)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn export_csv(&self, rows: &[ExportRow]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(["Date", "Start Time", "End Time", "Duration", "Notes"])?;

        for row in rows {
            wtr.write_record([&row.date, &row.start_time, &row.end_time, &row.duration, &row.notes])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_json(&self, rows: &[ExportRow]) -> Result<()> {
        let json = serde_json::to_string_pretty(rows)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    fn export_excel(&self, rows: &[ExportRow]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        worksheet.write_string_with_format(0, 0, "Date", &header_format)?;
        worksheet.write_string_with_format(0, 1, "Start Time", &header_format)?;
        worksheet.write_string_with_format(0, 2, "End Time", &header_format)?;
        worksheet.write_string_with_format(0, 3, "Duration", &header_format)?;
        worksheet.write_string_with_format(0, 4, "Notes", &header_format)?;

        for (i, row) in rows.iter().enumerate() {
            let row_idx = i as u32 + 1;
            worksheet.write_string(row_idx, 0, &row.date)?;
            worksheet.write_string(row_idx, 1, &row.start_time)?;
            worksheet.write_string(row_idx, 2, &row.end_time)?;
            worksheet.write_string(row_idx, 3, &row.duration)?;
            worksheet.write_string(row_idx, 4, &row.notes)?;
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}
