//! Domain models for attendance records and the persisted document.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

/// Event name used when none has been configured yet.
pub const DEFAULT_EVENT_NAME: &str = "Attendance Tracker";

/// One attendance entry.
///
/// Serialization matches the persisted document: camelCase keys, RFC 3339
/// timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    /// Record ID in format: "<schoolId>-<epoch_millis>"
    pub id: String,
    pub school_id: String,
    pub name: String,
    /// Creation instant (UTC)
    pub timestamp: DateTime<Utc>,
    /// Calendar date at creation time, `M/D/YYYY`, rendered through the
    /// offset configured at write time. Frozen; never recomputed from
    /// `timestamp`.
    pub date: String,
}

impl AttendanceRecord {
    /// Generate a record ID from the trimmed school identifier and the
    /// creation instant
    pub fn generate_id(school_id: &str, timestamp_millis: i64) -> String {
        format!("{}-{}", school_id, timestamp_millis)
    }
}

/// The single persisted container: the event name plus every record in
/// arrival order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceDocument {
    pub event_name: String,
    pub records: Vec<AttendanceRecord>,
}

impl Default for AttendanceDocument {
    fn default() -> Self {
        Self {
            event_name: DEFAULT_EVENT_NAME.to_string(),
            records: Vec::new(),
        }
    }
}

/// Render an instant as the calendar-date string used for same-day filtering
/// and display (`M/D/YYYY`, no zero padding).
pub fn format_date(instant: DateTime<Utc>, offset: FixedOffset) -> String {
    instant.with_timezone(&offset).format("%-m/%-d/%Y").to_string()
}

/// Render an instant as the time-of-day string used in CSV exports
/// (`H:MM:SS AM/PM`).
pub fn format_time_of_day(instant: DateTime<Utc>, offset: FixedOffset) -> String {
    instant.with_timezone(&offset).format("%-I:%M:%S %p").to_string()
}
