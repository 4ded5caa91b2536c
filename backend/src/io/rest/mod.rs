//! # REST API Interface Layer
//!
//! Provides HTTP REST endpoints for the attendance tracker application.
//! This layer handles:
//! - HTTP request/response serialization and deserialization
//! - Input validation before domain layer processing
//! - Error translation from domain to HTTP status codes
//! - Request logging
//!
//! ## Error Contract
//!
//! - Validation failures answer 400 with `{"error": "<message>"}`
//! - Storage failures answer 500 with a generic `{"error": ...}` body; the
//!   original cause is logged, never sent to the caller

pub mod attendance_apis;
pub mod event_apis;
pub mod export_apis;
pub mod mappers;
