//! # Attendance Tracker Backend
//!
//! Contains all non-UI logic for the attendance tracker application.
//!
//! This crate serves as the orchestration layer that brings together:
//! - **Domain**: Business logic for check-ins, queries, and CSV export
//! - **Storage**: Data persistence (a single JSON document on disk)
//! - **IO**: REST interface layer that exposes functionality to clients
//!
//! ## Architecture
//!
//! The backend follows a layered architecture:
//! ```text
//! UI Layer (static check-in and admin pages)
//!     ↓
//! IO Layer (REST API, handlers)
//!     ↓
//! Domain Layer (Business logic, services)
//!     ↓
//! Storage Layer (JSON document persistence)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use axum::{http::Method, routing::get, Router};
use log::info;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::config::Config;
use crate::domain::{AttendanceService, ExportService};
use crate::storage::{AttendanceRepository, JsonConnection};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub attendance_service: AttendanceService<AttendanceRepository>,
    pub export_service: ExportService,
}

/// Initialize the backend with all required services
pub fn initialize_backend(config: &Config) -> Result<AppState> {
    info!(
        "Setting up attendance storage in {}",
        config.data_dir.display()
    );
    let connection = JsonConnection::new(&config.data_dir)?;
    let repository = AttendanceRepository::new(connection);

    info!("Setting up domain model");
    let attendance_service = AttendanceService::new(repository, config.utc_offset);
    let export_service = ExportService::new(config.utc_offset);

    Ok(AppState {
        attendance_service,
        export_service,
    })
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    // CORS setup so a separately hosted frontend can make requests
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    // Set up our application routes
    let api_routes = Router::new()
        .route(
            "/attendance",
            get(io::rest::attendance_apis::list_attendance)
                .post(io::rest::attendance_apis::record_attendance)
                .delete(io::rest::attendance_apis::clear_attendance),
        )
        .route(
            "/event",
            get(io::rest::event_apis::get_event_name)
                .put(io::rest::event_apis::update_event_name),
        )
        .route(
            "/download",
            get(io::rest::export_apis::download_attendance_csv),
        );

    // Define our main application router; anything outside /api serves the
    // static check-in and admin pages
    Router::new()
        .nest("/api", api_routes)
        .fallback_service(ServeDir::new("static"))
        .layer(cors)
        .with_state(app_state)
}
