//! Staff administration request handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
};

use crate::api::doc::STAFF_TAG;
use crate::api::dto::{
    ActivityLogResponse, AddStaffRequest, BlacklistEntryResponse, BlacklistRequest, StaffResponse,
    SuccessResponse,
};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::ValidatedJson;

/// Creates staff administration routes.
pub fn staff_routes() -> Router<AppState> {
    Router::new()
        .route("/blacklist", post(blacklist_guest))
        .route("/get_blacklisted_guests", get(list_blacklisted))
        .route("/get_all_staff", get(list_staff))
        .route("/add_staff", post(add_staff))
        .route("/delete_staff/{id}", delete(delete_staff))
        .route("/retrieve_logs", get(retrieve_logs))
}

/// POST /blacklist - Blacklist a guest
#[utoipa::path(
    post,
    path = "/blacklist",
    request_body = BlacklistRequest,
    responses(
        (status = 200, description = "Guest blacklisted", body = SuccessResponse),
        (status = 404, description = "Guest or staff member not found")
    ),
    tag = STAFF_TAG
)]
pub async fn blacklist_guest(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<BlacklistRequest>,
) -> Result<Json<SuccessResponse>, AppError> {
    state
        .services
        .staff
        .blacklist_guest(payload.into_command())
        .await?;
    Ok(Json(SuccessResponse::new("Guest blacklisted successfully")))
}

/// GET /get_blacklisted_guests - List blacklist entries
#[utoipa::path(
    get,
    path = "/get_blacklisted_guests",
    responses(
        (status = 200, description = "Blacklist entries", body = [BlacklistEntryResponse])
    ),
    tag = STAFF_TAG
)]
pub async fn list_blacklisted(
    State(state): State<AppState>,
) -> Result<Json<Vec<BlacklistEntryResponse>>, AppError> {
    let entries = state.services.staff.list_blacklisted().await?;
    let response: Vec<BlacklistEntryResponse> = entries
        .into_iter()
        .map(BlacklistEntryResponse::from)
        .collect();
    Ok(Json(response))
}

/// GET /get_all_staff - List staff members
#[utoipa::path(
    get,
    path = "/get_all_staff",
    responses(
        (status = 200, description = "Staff members", body = [StaffResponse])
    ),
    tag = STAFF_TAG
)]
pub async fn list_staff(
    State(state): State<AppState>,
) -> Result<Json<Vec<StaffResponse>>, AppError> {
    let staff = state.services.staff.list_staff().await?;
    let response: Vec<StaffResponse> = staff.into_iter().map(StaffResponse::from).collect();
    Ok(Json(response))
}

/// POST /add_staff - Create a staff account
#[utoipa::path(
    post,
    path = "/add_staff",
    request_body = AddStaffRequest,
    responses(
        (status = 201, description = "Staff member added", body = StaffResponse),
        (status = 409, description = "Email already in use")
    ),
    tag = STAFF_TAG
)]
pub async fn add_staff(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AddStaffRequest>,
) -> Result<(StatusCode, Json<StaffResponse>), AppError> {
    let employee = state
        .services
        .staff
        .add_staff(payload.full_name, payload.email, &payload.password)
        .await?;
    Ok((StatusCode::CREATED, Json(StaffResponse::from(employee))))
}

/// DELETE /delete_staff/:id - Delete a staff account
#[utoipa::path(
    delete,
    path = "/delete_staff/{id}",
    params(("id" = i32, Path, description = "Staff ID")),
    responses(
        (status = 200, description = "Staff member deleted", body = SuccessResponse),
        (status = 404, description = "Staff member not found")
    ),
    tag = STAFF_TAG
)]
pub async fn delete_staff(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<SuccessResponse>, AppError> {
    state.services.staff.delete_staff(id).await?;
    Ok(Json(SuccessResponse::new("Staff member deleted successfully")))
}

/// GET /retrieve_logs - Activity log feed, newest first
#[utoipa::path(
    get,
    path = "/retrieve_logs",
    responses(
        (status = 200, description = "Activity log entries", body = [ActivityLogResponse])
    ),
    tag = STAFF_TAG
)]
pub async fn retrieve_logs(
    State(state): State<AppState>,
) -> Result<Json<Vec<ActivityLogResponse>>, AppError> {
    let logs = state.services.staff.retrieve_logs().await?;
    let response: Vec<ActivityLogResponse> =
        logs.into_iter().map(ActivityLogResponse::from).collect();
    Ok(Json(response))
}
