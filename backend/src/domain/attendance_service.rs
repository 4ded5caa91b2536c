//! Attendance domain logic: check-in validation, record construction,
//! same-day filtering, and event naming.

use chrono::{FixedOffset, Utc};
use log::{info, warn};

use crate::domain::models::attendance::{format_date, AttendanceRecord};
use crate::domain::DomainError;
use crate::storage::AttendanceStorage;

/// Service for recording and querying attendance
#[derive(Clone)]
pub struct AttendanceService<S: AttendanceStorage> {
    storage: S,
    /// UTC offset used for every calendar-date computation
    offset: FixedOffset,
}

impl<S: AttendanceStorage> AttendanceService<S> {
    /// Create a new AttendanceService
    pub fn new(storage: S, offset: FixedOffset) -> Self {
        Self { storage, offset }
    }

    /// Record a check-in for the given school ID and name.
    ///
    /// Both fields must be non-empty after trimming; a failing check-in
    /// leaves the stored document untouched.
    pub async fn check_in(
        &self,
        school_id: &str,
        name: &str,
    ) -> Result<AttendanceRecord, DomainError> {
        let school_id = school_id.trim();
        let name = name.trim();

        if school_id.is_empty() || name.is_empty() {
            warn!("Rejected check-in with blank school ID or name");
            return Err(DomainError::Validation(
                "School ID and name cannot be empty".to_string(),
            ));
        }

        let now = Utc::now();
        let record = AttendanceRecord {
            id: AttendanceRecord::generate_id(school_id, now.timestamp_millis()),
            school_id: school_id.to_string(),
            name: name.to_string(),
            timestamp: now,
            date: format_date(now, self.offset),
        };

        self.storage.append_record(&record).await?;

        info!(
            "Checked in {} ({}) with ID: {}",
            record.name, record.school_id, record.id
        );
        Ok(record)
    }

    /// List every record in arrival order
    pub async fn list_records(&self) -> Result<Vec<AttendanceRecord>, DomainError> {
        let document = self.storage.load_document().await?;
        Ok(document.records)
    }

    /// List records whose frozen date matches the current calendar date
    pub async fn list_today(&self) -> Result<Vec<AttendanceRecord>, DomainError> {
        let today = format_date(Utc::now(), self.offset);
        let records = self.list_records().await?;
        Ok(records
            .into_iter()
            .filter(|record| record.date == today)
            .collect())
    }

    /// Remove every record, keeping the event name
    pub async fn clear_records(&self) -> Result<(), DomainError> {
        self.storage.clear_records().await?;
        Ok(())
    }

    /// Current event name
    pub async fn event_name(&self) -> Result<String, DomainError> {
        let document = self.storage.load_document().await?;
        Ok(document.event_name)
    }

    /// Rename the event; the trimmed name is persisted and returned
    pub async fn rename_event(&self, event_name: &str) -> Result<String, DomainError> {
        let trimmed = event_name.trim();

        if trimmed.is_empty() {
            warn!("Rejected blank event name");
            return Err(DomainError::Validation(
                "Event name cannot be empty".to_string(),
            ));
        }

        self.storage.set_event_name(trimmed).await?;
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{AttendanceRepository, JsonConnection};
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn setup_test_service() -> (AttendanceService<AttendanceRepository>, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let connection =
            JsonConnection::new(temp_dir.path()).expect("Failed to create connection");
        let repository = AttendanceRepository::new(connection);
        let offset = FixedOffset::east_opt(0).unwrap();
        (AttendanceService::new(repository, offset), temp_dir)
    }

    #[tokio::test]
    async fn test_check_in_trims_and_appends() {
        let (service, _temp_dir) = setup_test_service();

        let record = service.check_in("  S1  ", "  Ann  ").await.unwrap();
        assert_eq!(record.school_id, "S1");
        assert_eq!(record.name, "Ann");
        assert!(record.id.starts_with("S1-"));
        assert_eq!(record.date, format_date(record.timestamp, FixedOffset::east_opt(0).unwrap()));

        let records = service.list_records().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0], record);
    }

    #[tokio::test]
    async fn test_check_in_appends_to_the_end() {
        let (service, _temp_dir) = setup_test_service();

        service.check_in("S1", "Ann").await.unwrap();
        let second = service.check_in("S2", "Bo").await.unwrap();

        let records = service.list_records().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records.last().unwrap(), &second);
    }

    #[tokio::test]
    async fn test_check_in_rejects_blank_input_without_mutation() {
        let (service, _temp_dir) = setup_test_service();

        let result = service.check_in("   ", "Ann").await;
        assert!(matches!(result, Err(DomainError::Validation(_))));

        let result = service.check_in("S1", "").await;
        assert!(matches!(result, Err(DomainError::Validation(_))));

        assert!(service.list_records().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_today_excludes_other_days() {
        let (service, temp_dir) = setup_test_service();

        // Insert a stale record directly into storage, bypassing check_in
        let connection = JsonConnection::new(temp_dir.path()).unwrap();
        let repository = AttendanceRepository::new(connection);
        let stale = AttendanceRecord {
            id: "S9-1577873400000".to_string(),
            school_id: "S9".to_string(),
            name: "Old".to_string(),
            timestamp: Utc.with_ymd_and_hms(2020, 1, 1, 10, 30, 0).unwrap(),
            date: "1/1/2020".to_string(),
        };
        repository.append_record(&stale).await.unwrap();

        let fresh = service.check_in("S1", "Ann").await.unwrap();

        let today = service.list_today().await.unwrap();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0], fresh);

        let all = service.list_records().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_clear_records_keeps_event_name() {
        let (service, _temp_dir) = setup_test_service();

        service.rename_event("Science Fair").await.unwrap();
        service.check_in("S1", "Ann").await.unwrap();
        service.clear_records().await.unwrap();

        assert!(service.list_records().await.unwrap().is_empty());
        assert_eq!(service.event_name().await.unwrap(), "Science Fair");
    }

    #[tokio::test]
    async fn test_event_name_defaults() {
        let (service, _temp_dir) = setup_test_service();
        assert_eq!(service.event_name().await.unwrap(), "Attendance Tracker");
    }

    #[tokio::test]
    async fn test_rename_event_trims_and_persists() {
        let (service, _temp_dir) = setup_test_service();

        let stored = service.rename_event("  Open House  ").await.unwrap();
        assert_eq!(stored, "Open House");
        assert_eq!(service.event_name().await.unwrap(), "Open House");
    }

    #[tokio::test]
    async fn test_rename_event_rejects_blank() {
        let (service, _temp_dir) = setup_test_service();

        let result = service.rename_event("   ").await;
        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert_eq!(service.event_name().await.unwrap(), "Attendance Tracker");
    }
}
