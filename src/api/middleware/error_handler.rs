//! Error handler for converting AppError to HTTP responses.
//!
//! Implements IntoResponse for AppError so handlers can return `AppResult`
//! directly. Booking-domain failures (invalid interval, full occupancy, date
//! conflict) all read as 400 with distinct codes so the frontend can branch
//! on them; storage faults are sanitized to generic 5xx messages.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

use crate::api::dto::ErrorResponse;
use crate::error::AppError;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if matches!(
            self,
            AppError::Database { .. } | AppError::Internal { .. } | AppError::ConnectionPool { .. }
        ) {
            error!(error = %self, "request failed");
        }

        let status = error_to_status_code(&self);
        let error_response = match &self {
            AppError::NotFound {
                entity,
                field,
                value,
            } => ErrorResponse::new(
                error_to_code(&self),
                &format!("{} with {}='{}' not found", entity, field, value),
            ),
            AppError::Duplicate {
                entity,
                field,
                value,
            } => ErrorResponse::new(
                error_to_code(&self),
                &format!("{} with {}='{}' already exists", entity, field, value),
            ),
            AppError::Validation { field, reason } => {
                ErrorResponse::new(error_to_code(&self), reason).with_details(json!({
                    "field": field
                }))
            }
            AppError::ValidationErrors { errors } => ErrorResponse::new(
                error_to_code(&self),
                "One or more fields failed validation",
            )
            .with_details(json!(
                errors
                    .iter()
                    .map(|e| json!({ "field": e.field, "message": e.message }))
                    .collect::<Vec<_>>()
            )),
            AppError::InvalidInterval { reason } => {
                ErrorResponse::new(error_to_code(&self), reason)
            }
            AppError::NoRoomAvailable { room_type } => ErrorResponse::new(
                error_to_code(&self),
                "No available rooms for selected dates",
            )
            .with_details(json!({ "room_type": room_type })),
            AppError::DateConflict { message } => {
                ErrorResponse::new(error_to_code(&self), message)
            }
            AppError::Unauthorized { message } => {
                ErrorResponse::new(error_to_code(&self), message)
            }
            AppError::BadRequest { message } => ErrorResponse::new(error_to_code(&self), message),
            AppError::Database { operation, .. } => ErrorResponse::new(
                error_to_code(&self),
                &format!("Database operation failed: {}", operation),
            ),
            AppError::Configuration { key, .. } => ErrorResponse::new(
                error_to_code(&self),
                &format!("Configuration error: {}", key),
            ),
            AppError::ConnectionPool { .. } => {
                ErrorResponse::new(error_to_code(&self), "Database connection unavailable")
            }
            AppError::Internal { .. } => {
                ErrorResponse::new(error_to_code(&self), "An internal error occurred")
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Maps an AppError variant to its corresponding HTTP status code.
pub fn error_to_status_code(error: &AppError) -> StatusCode {
    match error {
        AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        AppError::Duplicate { .. } => StatusCode::CONFLICT,
        AppError::Validation { .. } => StatusCode::BAD_REQUEST,
        AppError::ValidationErrors { .. } => StatusCode::BAD_REQUEST,
        AppError::InvalidInterval { .. } => StatusCode::BAD_REQUEST,
        AppError::NoRoomAvailable { .. } => StatusCode::BAD_REQUEST,
        AppError::DateConflict { .. } => StatusCode::BAD_REQUEST,
        AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
        AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        AppError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::Configuration { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::ConnectionPool { .. } => StatusCode::SERVICE_UNAVAILABLE,
        AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Maps an AppError variant to its error code string.
pub fn error_to_code(error: &AppError) -> &'static str {
    match error {
        AppError::NotFound { .. } => "NOT_FOUND",
        AppError::Duplicate { .. } => "DUPLICATE_ENTRY",
        AppError::Validation { .. } => "VALIDATION_ERROR",
        AppError::ValidationErrors { .. } => "VALIDATION_ERROR",
        AppError::InvalidInterval { .. } => "INVALID_INTERVAL",
        AppError::NoRoomAvailable { .. } => "NO_ROOM_AVAILABLE",
        AppError::DateConflict { .. } => "DATE_CONFLICT",
        AppError::Unauthorized { .. } => "UNAUTHORIZED",
        AppError::BadRequest { .. } => "BAD_REQUEST",
        AppError::Database { .. } => "DATABASE_ERROR",
        AppError::Configuration { .. } => "CONFIGURATION_ERROR",
        AppError::ConnectionPool { .. } => "SERVICE_UNAVAILABLE",
        AppError::Internal { .. } => "INTERNAL_ERROR",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationFieldError;

    #[test]
    fn not_found_maps_to_404() {
        let error = AppError::NotFound {
            entity: "booking".to_string(),
            field: "id".to_string(),
            value: "123".to_string(),
        };
        assert_eq!(error_to_status_code(&error), StatusCode::NOT_FOUND);
        assert_eq!(error_to_code(&error), "NOT_FOUND");
    }

    #[test]
    fn duplicate_maps_to_409() {
        let error = AppError::Duplicate {
            entity: "guest".to_string(),
            field: "email".to_string(),
            value: "test@example.com".to_string(),
        };
        assert_eq!(error_to_status_code(&error), StatusCode::CONFLICT);
        assert_eq!(error_to_code(&error), "DUPLICATE_ENTRY");
    }

    #[test]
    fn invalid_interval_maps_to_400() {
        let error = AppError::InvalidInterval {
            reason: "check-out must be after check-in".to_string(),
        };
        assert_eq!(error_to_status_code(&error), StatusCode::BAD_REQUEST);
        assert_eq!(error_to_code(&error), "INVALID_INTERVAL");
    }

    #[test]
    fn no_room_available_maps_to_400() {
        let error = AppError::NoRoomAvailable {
            room_type: "Deluxe".to_string(),
        };
        assert_eq!(error_to_status_code(&error), StatusCode::BAD_REQUEST);
        assert_eq!(error_to_code(&error), "NO_ROOM_AVAILABLE");
    }

    #[test]
    fn date_conflict_maps_to_400() {
        let error = AppError::DateConflict {
            message: "overlap".to_string(),
        };
        assert_eq!(error_to_status_code(&error), StatusCode::BAD_REQUEST);
        assert_eq!(error_to_code(&error), "DATE_CONFLICT");
    }

    #[test]
    fn validation_errors_map_to_400() {
        let error = AppError::ValidationErrors {
            errors: vec![ValidationFieldError {
                field: "email".to_string(),
                message: "invalid format".to_string(),
            }],
        };
        assert_eq!(error_to_status_code(&error), StatusCode::BAD_REQUEST);
        assert_eq!(error_to_code(&error), "VALIDATION_ERROR");
    }

    #[test]
    fn unauthorized_maps_to_401() {
        let error = AppError::Unauthorized {
            message: "current password is incorrect".to_string(),
        };
        assert_eq!(error_to_status_code(&error), StatusCode::UNAUTHORIZED);
        assert_eq!(error_to_code(&error), "UNAUTHORIZED");
    }

    #[test]
    fn pool_exhaustion_maps_to_503() {
        let error = AppError::ConnectionPool {
            source: anyhow::anyhow!("pool exhausted"),
        };
        assert_eq!(error_to_status_code(&error), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(error_to_code(&error), "SERVICE_UNAVAILABLE");
    }

    #[test]
    fn storage_faults_map_to_500() {
        let database = AppError::Database {
            operation: "insert booking".to_string(),
            source: anyhow::anyhow!("connection reset"),
        };
        let internal = AppError::Internal {
            source: anyhow::anyhow!("unexpected"),
        };
        assert_eq!(
            error_to_status_code(&database),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            error_to_status_code(&internal),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_response_hides_the_source() {
        let error = AppError::Internal {
            source: anyhow::anyhow!("panic with sensitive data"),
        };
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
