//! Export service domain logic for the attendance tracker.
//!
//! This module contains all business logic related to exporting attendance
//! records as CSV downloads: rendering rows, sanitizing the event name into a
//! filename, and orchestrating record retrieval through the attendance
//! service. The REST layer only handles transport concerns.

use chrono::{FixedOffset, Utc};
use log::info;

use crate::domain::attendance_service::AttendanceService;
use crate::domain::models::attendance::{format_time_of_day, AttendanceRecord};
use crate::domain::DomainError;
use crate::storage::AttendanceStorage;

/// Which records a download covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFilter {
    All,
    Today,
}

impl ExportFilter {
    /// Parse the `filter` query value; anything unrecognized means all
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("today") => ExportFilter::Today,
            _ => ExportFilter::All,
        }
    }
}

/// A rendered CSV download
#[derive(Debug, Clone, PartialEq)]
pub struct CsvExport {
    pub content: String,
    pub filename: String,
    pub record_count: usize,
}

/// Service that renders attendance data as CSV downloads
#[derive(Clone)]
pub struct ExportService {
    /// UTC offset used for time-of-day cells and dated filenames
    offset: FixedOffset,
}

impl ExportService {
    /// Create a new ExportService
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Render records as CSV text.
    ///
    /// Fixed header row, then one row per record in input order. Every cell
    /// is double-quoted; embedded quotes are escaped by doubling. The Time
    /// cell re-renders the record's timestamp, independent of the frozen
    /// `date` field.
    pub fn records_to_csv(&self, records: &[AttendanceRecord]) -> String {
        let mut lines = Vec::with_capacity(records.len() + 1);
        lines.push(format_csv_row(&["School ID", "Name", "Date", "Time"]));

        for record in records {
            let time = format_time_of_day(record.timestamp, self.offset);
            lines.push(format_csv_row(&[
                &record.school_id,
                &record.name,
                &record.date,
                &time,
            ]));
        }

        lines.join("\n")
    }

    /// Reduce an event name to filename-safe form: strip everything outside
    /// `[A-Za-z0-9 -]`, then collapse whitespace runs into single hyphens.
    pub fn sanitize_event_name(&self, event_name: &str) -> String {
        let stripped: String = event_name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || *c == '-')
            .collect();

        stripped.split_whitespace().collect::<Vec<_>>().join("-")
    }

    /// Build the download filename for a filter from the current event name
    pub fn build_filename(&self, event_name: &str, filter: ExportFilter) -> String {
        let sanitized = self.sanitize_event_name(event_name);

        match filter {
            ExportFilter::All => format!("{}-attendance-all.csv", sanitized),
            ExportFilter::Today => {
                let today = Utc::now().with_timezone(&self.offset).format("%Y-%m-%d");
                format!("{}-attendance-{}.csv", sanitized, today)
            }
        }
    }

    /// Produce the CSV download for a filter, pulling the event name and the
    /// selected records through the attendance service
    pub async fn export_attendance_csv<S: AttendanceStorage>(
        &self,
        filter: ExportFilter,
        attendance_service: &AttendanceService<S>,
    ) -> Result<CsvExport, DomainError> {
        let event_name = attendance_service.event_name().await?;

        let records = match filter {
            ExportFilter::All => attendance_service.list_records().await?,
            ExportFilter::Today => attendance_service.list_today().await?,
        };

        let content = self.records_to_csv(&records);
        let filename = self.build_filename(&event_name, filter);

        info!(
            "Exported {} attendance records as {}",
            records.len(),
            filename
        );

        Ok(CsvExport {
            content,
            filename,
            record_count: records.len(),
        })
    }
}

/// Quote every cell; embedded quotes are doubled
fn format_csv_row(cells: &[&str]) -> String {
    cells
        .iter()
        .map(|cell| format!("\"{}\"", cell.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(",")
}
