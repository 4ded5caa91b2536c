//! # Domain Module
//!
//! Contains all business logic for the attendance tracker application.
//!
//! This module encapsulates the core rules and services that define how
//! check-ins are recorded, queried, and exported. It operates independently
//! of any specific UI framework; persistence is reached only through the
//! [`crate::storage::AttendanceStorage`] trait.
//!
//! ## Module Organization
//!
//! - **attendance_service**: Check-in validation, record construction,
//!   same-day filtering, and event naming
//! - **export_service**: CSV rendering and download filename construction
//! - **models**: The attendance record and document entities
//!
//! ## Business Rules
//!
//! - School IDs and names must be non-empty after trimming
//! - Records keep their arrival order and are never deduplicated
//! - A record's calendar date is frozen at creation time
//! - Calendar-date math uses an explicitly configured UTC offset, never the
//!   ambient host timezone

pub mod attendance_service;
pub mod export_service;
pub mod models;

use thiserror::Error;

pub use attendance_service::AttendanceService;
pub use export_service::{CsvExport, ExportFilter, ExportService};

/// Domain failures, split by how the REST layer reports them
#[derive(Debug, Error)]
pub enum DomainError {
    /// Caller input failed validation; reported with the message itself
    #[error("{0}")]
    Validation(String),
    /// Persistence failed; reported generically, cause logged only
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
