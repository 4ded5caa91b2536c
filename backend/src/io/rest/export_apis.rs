//! # REST API for CSV Downloads
//!
//! Endpoint for downloading attendance records as a CSV attachment.

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};
use log::{error, info};
use serde::Deserialize;

use crate::domain::ExportFilter;
use crate::AppState;
use shared::ErrorResponse;

/// Query parameters for the download API
#[derive(Debug, Deserialize)]
pub struct DownloadQuery {
    pub filter: Option<String>,
}

/// Download attendance records as CSV
pub async fn download_attendance_csv(
    State(state): State<AppState>,
    Query(query): Query<DownloadQuery>,
) -> impl IntoResponse {
    info!("GET /api/download - query: {:?}", query);

    let filter = ExportFilter::from_query(query.filter.as_deref());

    match state
        .export_service
        .export_attendance_csv(filter, &state.attendance_service)
        .await
    {
        Ok(export) => {
            let headers = [
                (header::CONTENT_TYPE, "text/csv".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", export.filename),
                ),
            ];
            (StatusCode::OK, headers, export.content).into_response()
        }
        Err(e) => {
            error!("Failed to generate CSV download: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to generate CSV".to_string(),
                }),
            )
                .into_response()
        }
    }
}
