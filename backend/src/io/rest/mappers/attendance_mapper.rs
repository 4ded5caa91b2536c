//! Maps domain attendance models to wire DTOs.

use chrono::SecondsFormat;

use crate::domain::models::attendance::AttendanceRecord as DomainRecord;
use shared::AttendanceRecord;

pub struct AttendanceMapper;

impl AttendanceMapper {
    /// Convert a domain record to its wire representation
    pub fn to_dto(record: DomainRecord) -> AttendanceRecord {
        AttendanceRecord {
            id: record.id,
            school_id: record.school_id,
            name: record.name,
            timestamp: record
                .timestamp
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            date: record.date,
        }
    }
}
