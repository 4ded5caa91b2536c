//! # Storage Traits
//!
//! This module defines the storage abstraction trait that allows different
//! storage backends to be used interchangeably in the domain layer.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::attendance::{AttendanceDocument, AttendanceRecord};

/// Trait defining the interface for attendance storage operations
///
/// This trait abstracts away the specific storage implementation details,
/// allowing the domain layer to work with different storage backends
/// (JSON file, databases, etc.) without modification.
#[async_trait]
pub trait AttendanceStorage: Send + Sync {
    /// Load the whole persisted document
    ///
    /// Missing, unreadable, or structurally invalid storage yields the
    /// default document; the legacy bare-array shape is normalized.
    async fn load_document(&self) -> Result<AttendanceDocument>;

    /// Append one record and persist the whole document
    async fn append_record(&self, record: &AttendanceRecord) -> Result<()>;

    /// Remove every record, keep the event name, persist
    async fn clear_records(&self) -> Result<()>;

    /// Store an already-trimmed event name
    async fn set_event_name(&self, event_name: &str) -> Result<()>;
}
