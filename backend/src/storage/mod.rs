//! # Storage Layer
//!
//! Data persistence for the attendance tracker.
//!
//! The whole application state is one JSON document on disk. This module
//! provides the connection type that manages the data directory, the storage
//! trait the domain layer works against, and the file-backed repository that
//! implements it.

pub mod attendance_repository;
pub mod connection;
pub mod traits;

pub use attendance_repository::AttendanceRepository;
pub use connection::JsonConnection;
pub use traits::AttendanceStorage;
