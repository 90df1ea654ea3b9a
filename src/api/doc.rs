use utoipa::OpenApi;

pub const GUEST_TAG: &str = "Guests";
pub const BOOKING_TAG: &str = "Bookings";
pub const STAFF_TAG: &str = "Staff";
pub const HEALTH_TAG: &str = "Health";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Innkeeper",
        description = "Hotel management backend: availability resolution, booking lifecycle, guest accounts and staff administration",
    ),
    paths(
        crate::api::handlers::guests::register,
        crate::api::handlers::guests::get_user_data,
        crate::api::handlers::guests::update_user,
        crate::api::handlers::guests::change_password,
        crate::api::handlers::guests::save_preferences,
        crate::api::handlers::bookings::book_room,
        crate::api::handlers::bookings::list_bookings_detailed,
        crate::api::handlers::bookings::list_bookings_grouped,
        crate::api::handlers::bookings::edit_booking,
        crate::api::handlers::bookings::cancel_booking,
        crate::api::handlers::bookings::check_in,
        crate::api::handlers::bookings::check_out,
        crate::api::handlers::staff::blacklist_guest,
        crate::api::handlers::staff::list_blacklisted,
        crate::api::handlers::staff::list_staff,
        crate::api::handlers::staff::add_staff,
        crate::api::handlers::staff::delete_staff,
        crate::api::handlers::staff::retrieve_logs,
        crate::api::handlers::health::health_check,
        crate::api::handlers::health::readiness_check,
        crate::api::handlers::health::liveness_check,
    ),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
            crate::api::dto::BookRoomRequest,
            crate::api::dto::BookRoomResponse,
            crate::api::dto::BookingDetailRow,
            crate::api::dto::BookingOverviewRow,
            crate::api::dto::GroupedBookingsResponse,
            crate::api::dto::EditBookingRequest,
            crate::api::dto::RegisterRequest,
            crate::api::dto::GuestResponse,
            crate::api::dto::UpdateUserRequest,
            crate::api::dto::ChangePasswordRequest,
            crate::api::dto::SavePreferencesRequest,
            crate::api::dto::BlacklistRequest,
            crate::api::dto::BlacklistEntryResponse,
            crate::api::dto::AddStaffRequest,
            crate::api::dto::StaffResponse,
            crate::api::dto::ActivityLogResponse,
            crate::api::dto::SuccessResponse,
            crate::models::RoomStatus,
        )
    ),
    tags(
        (name = GUEST_TAG, description = "Guest account and preference endpoints"),
        (name = BOOKING_TAG, description = "Room booking lifecycle endpoints"),
        (name = STAFF_TAG, description = "Staff administration and blacklist endpoints"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;
