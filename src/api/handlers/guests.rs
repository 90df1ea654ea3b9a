//! Guest account request handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::doc::GUEST_TAG;
use crate::api::dto::{
    ChangePasswordRequest, GuestResponse, RegisterRequest, SavePreferencesRequest,
    SuccessResponse, UpdateUserRequest,
};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::ValidatedJson;

/// Creates guest-account routes.
pub fn guest_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/get_user_data", get(get_user_data))
        .route("/update_user", post(update_user))
        .route("/change_password", post(change_password))
        .route("/save_preferences", post(save_preferences))
}

/// Query parameters identifying a guest.
#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct UserQuery {
    pub user_id: Uuid,
}

/// POST /register - Register a guest account
#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Guest registered", body = GuestResponse),
        (status = 400, description = "Validation failure"),
        (status = 409, description = "Email already registered")
    ),
    tag = GUEST_TAG
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<GuestResponse>), AppError> {
    let guest = state.services.guests.register(payload.into_command()).await?;
    Ok((StatusCode::CREATED, Json(GuestResponse::from(guest))))
}

/// GET /get_user_data - Fetch a guest profile
#[utoipa::path(
    get,
    path = "/get_user_data",
    params(UserQuery),
    responses(
        (status = 200, description = "Guest profile", body = GuestResponse),
        (status = 404, description = "Guest not found")
    ),
    tag = GUEST_TAG
)]
pub async fn get_user_data(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<GuestResponse>, AppError> {
    let guest = state.services.guests.get_profile(query.user_id).await?;
    Ok(Json(GuestResponse::from(guest)))
}

/// POST /update_user - Update a guest profile
#[utoipa::path(
    post,
    path = "/update_user",
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Profile updated", body = GuestResponse),
        (status = 404, description = "Guest not found"),
        (status = 409, description = "Email already in use")
    ),
    tag = GUEST_TAG
)]
pub async fn update_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<GuestResponse>, AppError> {
    let user_id = payload.user_id;
    let guest = state
        .services
        .guests
        .update_profile(user_id, payload.into_update_guest())
        .await?;
    Ok(Json(GuestResponse::from(guest)))
}

/// POST /change_password - Change a guest's password
#[utoipa::path(
    post,
    path = "/change_password",
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed", body = SuccessResponse),
        (status = 401, description = "Current password incorrect"),
        (status = 404, description = "Guest not found")
    ),
    tag = GUEST_TAG
)]
pub async fn change_password(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ChangePasswordRequest>,
) -> Result<Json<SuccessResponse>, AppError> {
    state
        .services
        .guests
        .change_password(
            payload.user_id,
            &payload.current_password,
            &payload.new_password,
        )
        .await?;
    Ok(Json(SuccessResponse::new("Password changed successfully")))
}

/// POST /save_preferences - Save a guest's room preferences
#[utoipa::path(
    post,
    path = "/save_preferences",
    request_body = SavePreferencesRequest,
    responses(
        (status = 200, description = "Preferences saved", body = SuccessResponse),
        (status = 404, description = "Guest not found")
    ),
    tag = GUEST_TAG
)]
pub async fn save_preferences(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SavePreferencesRequest>,
) -> Result<Json<SuccessResponse>, AppError> {
    state
        .services
        .guests
        .save_preferences(payload.into_command())
        .await?;
    Ok(Json(SuccessResponse::new("Preferences saved successfully")))
}
