//! Data transfer objects for API requests and responses.

mod booking;
mod error;
mod guest;
mod staff;

pub use booking::{
    BookRoomRequest, BookRoomResponse, BookingDetailRow, BookingOverviewRow, EditBookingRequest,
    GroupedBookingsResponse,
};
pub use error::ErrorResponse;
pub use guest::{
    ChangePasswordRequest, GuestResponse, RegisterRequest, SavePreferencesRequest,
    UpdateUserRequest,
};
pub use staff::{
    ActivityLogResponse, AddStaffRequest, BlacklistEntryResponse, BlacklistRequest, StaffResponse,
    SuccessResponse,
};
