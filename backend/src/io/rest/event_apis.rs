//! # REST API for Event Naming
//!
//! Endpoints for reading and updating the display name of the tracked event.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use log::{error, info};

use crate::domain::DomainError;
use crate::AppState;
use shared::{ErrorResponse, EventNameResponse, UpdateEventNameRequest, UpdateEventNameResponse};

/// Get the current event name
pub async fn get_event_name(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/event");

    match state.attendance_service.event_name().await {
        Ok(event_name) => (StatusCode::OK, Json(EventNameResponse { event_name })).into_response(),
        Err(e) => {
            error!("Failed to get event name: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to get event name".to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Update the event name
pub async fn update_event_name(
    State(state): State<AppState>,
    Json(request): Json<UpdateEventNameRequest>,
) -> impl IntoResponse {
    info!("PUT /api/event - request: {:?}", request);

    // Missing and non-string values are both validation failures, not
    // deserialization rejections
    let event_name = match request.event_name.as_ref().and_then(|value| value.as_str()) {
        Some(event_name) => event_name.to_string(),
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Event name is required".to_string(),
                }),
            )
                .into_response();
        }
    };

    match state.attendance_service.rename_event(&event_name).await {
        Ok(stored) => (
            StatusCode::OK,
            Json(UpdateEventNameResponse {
                success: true,
                event_name: stored,
                message: "Event name updated successfully".to_string(),
            }),
        )
            .into_response(),
        Err(DomainError::Validation(message)) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse { error: message }),
        )
            .into_response(),
        Err(DomainError::Storage(e)) => {
            error!("Failed to update event name: {:#}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to update event name".to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AttendanceService, ExportService};
    use crate::storage::{AttendanceRepository, JsonConnection};
    use axum::body::to_bytes;
    use chrono::FixedOffset;
    use tempfile::TempDir;

    fn setup_test_state() -> (AppState, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let connection =
            JsonConnection::new(temp_dir.path()).expect("Failed to create connection");
        let repository = AttendanceRepository::new(connection);
        let offset = FixedOffset::east_opt(0).unwrap();

        let state = AppState {
            attendance_service: AttendanceService::new(repository, offset),
            export_service: ExportService::new(offset),
        };
        (state, temp_dir)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_get_event_name_default() {
        let (state, _temp_dir) = setup_test_state();

        let response = get_event_name(State(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["eventName"], "Attendance Tracker");
    }

    #[tokio::test]
    async fn test_update_event_name_trims() {
        let (state, _temp_dir) = setup_test_state();

        let request = UpdateEventNameRequest {
            event_name: Some(serde_json::json!("  Open House  ")),
        };
        let response = update_event_name(State(state.clone()), Json(request))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["eventName"], "Open House");

        let get_response = get_event_name(State(state)).await.into_response();
        let get_body = body_json(get_response).await;
        assert_eq!(get_body["eventName"], "Open House");
    }

    #[tokio::test]
    async fn test_update_event_name_missing() {
        let (state, _temp_dir) = setup_test_state();

        let request = UpdateEventNameRequest { event_name: None };
        let response = update_event_name(State(state), Json(request))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Event name is required");
    }

    #[tokio::test]
    async fn test_update_event_name_wrong_type() {
        let (state, _temp_dir) = setup_test_state();

        let request = UpdateEventNameRequest {
            event_name: Some(serde_json::json!(42)),
        };
        let response = update_event_name(State(state), Json(request))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Event name is required");
    }

    #[tokio::test]
    async fn test_update_event_name_blank() {
        let (state, _temp_dir) = setup_test_state();

        let request = UpdateEventNameRequest {
            event_name: Some(serde_json::json!("   ")),
        };
        let response = update_event_name(State(state.clone()), Json(request))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Event name cannot be empty");

        // Name unchanged
        let get_response = get_event_name(State(state)).await.into_response();
        let get_body = body_json(get_response).await;
        assert_eq!(get_body["eventName"], "Attendance Tracker");
    }
}
