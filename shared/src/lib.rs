use serde::{Deserialize, Serialize};

/// One attendance entry as it travels over the wire.
///
/// Record ID in format: "<schoolId>-<epoch_millis>"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: String,
    /// School identifier entered at check-in (trimmed)
    pub school_id: String,
    /// Attendee name entered at check-in (trimmed)
    pub name: String,
    /// Creation instant (RFC 3339, UTC)
    pub timestamp: String,
    /// Calendar date at creation time, `M/D/YYYY`, frozen at write time
    pub date: String,
}

/// Request body for recording a check-in.
///
/// Both fields are optional on the wire so a missing field can be answered
/// with a validation error rather than a deserialization rejection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInRequest {
    pub school_id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInResponse {
    pub success: bool,
    pub record: AttendanceRecord,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceListResponse {
    pub records: Vec<AttendanceRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearAttendanceResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventNameResponse {
    pub event_name: String,
}

/// Request body for updating the event name.
///
/// `eventName` arrives loosely typed; the handler distinguishes missing,
/// blank, and non-string input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventNameRequest {
    pub event_name: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventNameResponse {
    pub success: bool,
    pub event_name: String,
    pub message: String,
}

/// Error body shared by every failing API response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
