//! # JSON Attendance Repository
//!
//! This module provides file-based storage for the attendance document using
//! a single pretty-printed JSON file `attendance.json` at the root of the
//! data directory.
//!
//! ## File Structure
//!
//! ```text
//! data/
//! └── attendance.json    ← This module manages this file
//! ```
//!
//! ## JSON Format
//!
//! ```json
//! {
//!   "eventName": "Attendance Tracker",
//!   "records": [
//!     {
//!       "id": "S1-1704105000000",
//!       "schoolId": "S1",
//!       "name": "Ann",
//!       "timestamp": "2024-01-01T10:30:00Z",
//!       "date": "1/1/2024"
//!     }
//!   ]
//! }
//! ```
//!
//! ## Features
//!
//! - Lazy creation: a missing or unreadable file reads as the default document
//! - Legacy format support: a bare array of records is still accepted
//! - Atomic file writes with temp files
//! - Read-modify-write cycles serialized behind a process-wide mutex

use anyhow::Result;
use async_trait::async_trait;
use log::{debug, info, warn};
use std::fs;
use std::sync::{Arc, Mutex};

use super::connection::JsonConnection;
use super::traits::AttendanceStorage;
use crate::domain::models::attendance::{
    AttendanceDocument, AttendanceRecord, DEFAULT_EVENT_NAME,
};

/// JSON-file-backed attendance repository
#[derive(Clone)]
pub struct AttendanceRepository {
    connection: JsonConnection,
    /// Serializes read-modify-write cycles within this process; across
    /// processes the file stays last-write-wins.
    write_lock: Arc<Mutex<()>>,
}

impl AttendanceRepository {
    /// Create a new attendance repository
    pub fn new(connection: JsonConnection) -> Self {
        Self {
            connection,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Read and parse the document, tolerating absence and bad content
    fn read_document(&self) -> AttendanceDocument {
        let file_path = self.connection.attendance_file_path();

        let raw = match fs::read_to_string(&file_path) {
            Ok(raw) => raw,
            Err(_) => {
                debug!(
                    "No attendance file at {}, using default document",
                    file_path.display()
                );
                return AttendanceDocument::default();
            }
        };

        match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(value) => normalize_document(value),
            Err(e) => {
                warn!(
                    "Attendance file {} is not valid JSON ({}), using default document",
                    file_path.display(),
                    e
                );
                AttendanceDocument::default()
            }
        }
    }

    /// Persist the whole document: write a temp file, then rename it over
    /// the target
    fn write_document(&self, document: &AttendanceDocument) -> Result<()> {
        self.connection.ensure_data_dir()?;

        let file_path = self.connection.attendance_file_path();
        let json = serde_json::to_string_pretty(document)?;

        let temp_path = file_path.with_extension("tmp");
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &file_path)?;

        debug!("Saved attendance document to {}", file_path.display());
        Ok(())
    }
}

/// Normalize a persisted JSON value into the current document shape.
///
/// Accepts the legacy bare-array format and objects with missing fields;
/// anything else collapses to the default document.
fn normalize_document(value: serde_json::Value) -> AttendanceDocument {
    match value {
        serde_json::Value::Array(entries) => AttendanceDocument {
            event_name: DEFAULT_EVENT_NAME.to_string(),
            records: parse_records(serde_json::Value::Array(entries)),
        },
        serde_json::Value::Object(mut fields) => {
            let event_name = match fields.remove("eventName") {
                Some(serde_json::Value::String(name)) if !name.is_empty() => name,
                _ => DEFAULT_EVENT_NAME.to_string(),
            };
            let records = fields
                .remove("records")
                .map(parse_records)
                .unwrap_or_default();

            AttendanceDocument {
                event_name,
                records,
            }
        }
        _ => AttendanceDocument::default(),
    }
}

fn parse_records(value: serde_json::Value) -> Vec<AttendanceRecord> {
    match serde_json::from_value(value) {
        Ok(records) => records,
        Err(e) => {
            warn!("Discarding unreadable records from attendance file: {}", e);
            Vec::new()
        }
    }
}

#[async_trait]
impl AttendanceStorage for AttendanceRepository {
    async fn load_document(&self) -> Result<AttendanceDocument> {
        let _guard = self.write_lock.lock().unwrap();
        Ok(self.read_document())
    }

    async fn append_record(&self, record: &AttendanceRecord) -> Result<()> {
        let _guard = self.write_lock.lock().unwrap();

        let mut document = self.read_document();
        document.records.push(record.clone());
        self.write_document(&document)?;

        info!(
            "Appended attendance record {} ({} total)",
            record.id,
            document.records.len()
        );
        Ok(())
    }

    async fn clear_records(&self) -> Result<()> {
        let _guard = self.write_lock.lock().unwrap();

        let mut document = self.read_document();
        let cleared = document.records.len();
        document.records.clear();
        self.write_document(&document)?;

        info!("Cleared {} attendance records", cleared);
        Ok(())
    }

    async fn set_event_name(&self, event_name: &str) -> Result<()> {
        let _guard = self.write_lock.lock().unwrap();

        let mut document = self.read_document();
        document.event_name = event_name.to_string();
        self.write_document(&document)?;

        info!("Set event name to '{}'", event_name);
        Ok(())
    }
}
