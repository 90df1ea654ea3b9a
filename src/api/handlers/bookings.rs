//! Booking lifecycle request handlers.
//!
//! Thin HTTP layer over `BookingService`: parse, delegate, map to DTOs.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, post, put},
};

use crate::api::doc::BOOKING_TAG;
use crate::api::dto::{
    BookRoomRequest, BookRoomResponse, BookingDetailRow, EditBookingRequest,
    GroupedBookingsResponse, SuccessResponse,
};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::ValidatedJson;

/// Creates booking-related routes.
///
/// Route paths follow the established frontend contract.
pub fn booking_routes() -> Router<AppState> {
    Router::new()
        .route("/book_room", post(book_room))
        .route("/get_guest_bookingsGUEST", get(list_bookings_detailed))
        .route("/get_guest_bookings", get(list_bookings_grouped))
        .route("/edit_booking/{id}", put(edit_booking))
        .route("/cancel_booking/{id}", delete(cancel_booking))
        .route("/check_in/{id}", put(check_in))
        .route("/check_out/{id}", delete(check_out))
}

/// POST /book_room - Book the first free room of the requested type
#[utoipa::path(
    post,
    path = "/book_room",
    request_body = BookRoomRequest,
    responses(
        (status = 200, description = "Room booked", body = BookRoomResponse),
        (status = 400, description = "Invalid interval, no free room, or date conflict"),
        (status = 404, description = "Guest or room type not found")
    ),
    tag = BOOKING_TAG
)]
pub async fn book_room(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<BookRoomRequest>,
) -> Result<Json<BookRoomResponse>, AppError> {
    let placed = state.services.bookings.create(payload.into_command()).await?;
    Ok(Json(BookRoomResponse::from(placed)))
}

/// GET /get_guest_bookingsGUEST - Detailed booking listing
///
/// Returns every reservation with room type, guest name and check-in status.
#[utoipa::path(
    get,
    path = "/get_guest_bookingsGUEST",
    responses(
        (status = 200, description = "Booking list", body = [BookingDetailRow])
    ),
    tag = BOOKING_TAG
)]
pub async fn list_bookings_detailed(
    State(state): State<AppState>,
) -> Result<Json<Vec<BookingDetailRow>>, AppError> {
    let rows = state.services.bookings.list_all().await?;
    let response: Vec<BookingDetailRow> = rows.into_iter().map(BookingDetailRow::from).collect();
    Ok(Json(response))
}

/// GET /get_guest_bookings - Booking overview grouped by check-in state
#[utoipa::path(
    get,
    path = "/get_guest_bookings",
    responses(
        (status = 200, description = "Grouped booking overview", body = GroupedBookingsResponse)
    ),
    tag = BOOKING_TAG
)]
pub async fn list_bookings_grouped(
    State(state): State<AppState>,
) -> Result<Json<GroupedBookingsResponse>, AppError> {
    let rows = state.services.bookings.list_all().await?;
    Ok(Json(GroupedBookingsResponse::from_rows(rows)))
}

/// PUT /edit_booking/:id - Move a reservation to new dates
#[utoipa::path(
    put,
    path = "/edit_booking/{id}",
    params(("id" = i32, Path, description = "Booking ID")),
    request_body = EditBookingRequest,
    responses(
        (status = 200, description = "Booking updated", body = SuccessResponse),
        (status = 400, description = "Invalid interval or date conflict"),
        (status = 404, description = "Booking not found")
    ),
    tag = BOOKING_TAG
)]
pub async fn edit_booking(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<EditBookingRequest>,
) -> Result<Json<SuccessResponse>, AppError> {
    state
        .services
        .bookings
        .edit(id, payload.check_in_date, payload.check_out_date)
        .await?;
    Ok(Json(SuccessResponse::new("Booking updated successfully")))
}

/// DELETE /cancel_booking/:id - Cancel a reservation
#[utoipa::path(
    delete,
    path = "/cancel_booking/{id}",
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking cancelled", body = SuccessResponse),
        (status = 404, description = "Booking not found")
    ),
    tag = BOOKING_TAG
)]
pub async fn cancel_booking(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<SuccessResponse>, AppError> {
    state.services.bookings.cancel(id).await?;
    Ok(Json(SuccessResponse::new("Booking cancelled successfully")))
}

/// PUT /check_in/:id - Mark a guest as physically checked in
#[utoipa::path(
    put,
    path = "/check_in/{id}",
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Guest checked in", body = SuccessResponse),
        (status = 404, description = "Booking not found")
    ),
    tag = BOOKING_TAG
)]
pub async fn check_in(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<SuccessResponse>, AppError> {
    state.services.bookings.check_in(id).await?;
    Ok(Json(SuccessResponse::new("Guest checked in successfully")))
}

/// DELETE /check_out/:id - Check a guest out and release the room
#[utoipa::path(
    delete,
    path = "/check_out/{id}",
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Guest checked out", body = SuccessResponse),
        (status = 404, description = "Booking not found")
    ),
    tag = BOOKING_TAG
)]
pub async fn check_out(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<SuccessResponse>, AppError> {
    state.services.bookings.check_out(id).await?;
    Ok(Json(SuccessResponse::new("Guest checked out successfully")))
}
