//! # REST API for Attendance
//!
//! Endpoints for recording check-ins, listing records, and clearing them.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use log::{error, info};

use crate::domain::DomainError;
use crate::io::rest::mappers::attendance_mapper::AttendanceMapper;
use crate::AppState;
use shared::{
    AttendanceListResponse, CheckInRequest, CheckInResponse, ClearAttendanceResponse,
    ErrorResponse,
};

/// Record a check-in
pub async fn record_attendance(
    State(state): State<AppState>,
    Json(request): Json<CheckInRequest>,
) -> impl IntoResponse {
    info!("POST /api/attendance - request: {:?}", request);

    let (school_id, name) = match (request.school_id, request.name) {
        (Some(school_id), Some(name)) => (school_id, name),
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "School ID and name are required".to_string(),
                }),
            )
                .into_response();
        }
    };

    match state.attendance_service.check_in(&school_id, &name).await {
        Ok(record) => (
            StatusCode::OK,
            Json(CheckInResponse {
                success: true,
                record: AttendanceMapper::to_dto(record),
                message: "Attendance recorded successfully".to_string(),
            }),
        )
            .into_response(),
        Err(DomainError::Validation(message)) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse { error: message }),
        )
            .into_response(),
        Err(DomainError::Storage(e)) => {
            error!("Failed to record attendance: {:#}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to record attendance".to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// List every attendance record
pub async fn list_attendance(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/attendance");

    match state.attendance_service.list_records().await {
        Ok(records) => (
            StatusCode::OK,
            Json(AttendanceListResponse {
                records: records.into_iter().map(AttendanceMapper::to_dto).collect(),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to fetch attendance records: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch attendance records".to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Clear all attendance records
pub async fn clear_attendance(State(state): State<AppState>) -> impl IntoResponse {
    info!("DELETE /api/attendance");

    match state.attendance_service.clear_records().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ClearAttendanceResponse {
                success: true,
                message: "All attendance records cleared successfully".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to clear attendance records: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to clear attendance records".to_string(),
                }),
            )
                .into_response()
        }
    }
}
