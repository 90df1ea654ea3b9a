//! Booking-related DTOs for API requests and responses.
//!
//! Field casing follows the established frontend contract: amenity flags
//! arrive in PascalCase, listing rows go out in camelCase.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Booking, Guest, Room};
use crate::services::{CreateBookingCommand, PlacedBooking};

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for booking a room.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct BookRoomRequest {
    pub user_id: Uuid,
    #[validate(length(min = 1, message = "Room type is required"))]
    pub room_type: String,
    #[schema(value_type = String, format = DateTime)]
    pub check_in_date: DateTime<Utc>,
    #[schema(value_type = String, format = DateTime)]
    pub check_out_date: DateTime<Utc>,
    #[serde(rename = "ExtraTowels", default)]
    pub extra_towels: bool,
    #[serde(rename = "RoomService", default)]
    pub room_service: bool,
    #[serde(rename = "SpaAccess", default)]
    pub spa_access: bool,
    #[serde(rename = "AirportPickup", default)]
    pub airport_pickup: bool,
    #[serde(rename = "LateCheckout", default)]
    pub late_checkout: bool,
}

impl BookRoomRequest {
    /// Converts the request DTO into a booking command for the service layer.
    pub fn into_command(self) -> CreateBookingCommand {
        CreateBookingCommand {
            guest_user_id: self.user_id,
            room_type: self.room_type,
            check_in: self.check_in_date,
            check_out: self.check_out_date,
            extra_towels: self.extra_towels,
            room_service: self.room_service,
            spa_access: self.spa_access,
            airport_pickup: self.airport_pickup,
            late_checkout: self.late_checkout,
        }
    }
}

/// Request body for moving a reservation to new dates.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct EditBookingRequest {
    #[schema(value_type = String, format = DateTime)]
    pub check_in_date: DateTime<Utc>,
    #[schema(value_type = String, format = DateTime)]
    pub check_out_date: DateTime<Utc>,
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Response body for a successful booking.
#[derive(Debug, Serialize, ToSchema)]
pub struct BookRoomResponse {
    pub success: bool,
    pub message: String,
    pub room_number: String,
}

impl From<PlacedBooking> for BookRoomResponse {
    fn from(placed: PlacedBooking) -> Self {
        Self {
            success: true,
            message: "Room booked successfully!".to_string(),
            room_number: placed.room.room_number,
        }
    }
}

/// One row of the detailed booking listing.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetailRow {
    pub id: i32,
    pub room_type: String,
    #[schema(value_type = String, format = DateTime)]
    pub check_in_date: DateTime<Utc>,
    #[schema(value_type = String, format = DateTime)]
    pub check_out_date: DateTime<Utc>,
    pub guest_name: String,
    pub status: String,
}

impl From<(Booking, Guest, Room)> for BookingDetailRow {
    fn from((booking, guest, room): (Booking, Guest, Room)) -> Self {
        Self {
            id: booking.id,
            room_type: room.room_type,
            check_in_date: booking.check_in_date,
            check_out_date: booking.check_out_date,
            guest_name: guest.full_name(),
            status: if booking.checked_in {
                "Checked In".to_string()
            } else {
                "Pending".to_string()
            },
        }
    }
}

/// One row of the grouped booking overview.
///
/// Dates render as "-" while the guest has not checked in yet, matching the
/// front-desk display contract.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingOverviewRow {
    pub id: i32,
    pub name: String,
    pub check_in_date: String,
    pub check_out_date: String,
}

/// Booking overview grouped by check-in state.
#[derive(Debug, Serialize, ToSchema)]
pub struct GroupedBookingsResponse {
    pub pending: Vec<BookingOverviewRow>,
    #[serde(rename = "checkedIn")]
    pub checked_in: Vec<BookingOverviewRow>,
}

impl GroupedBookingsResponse {
    pub fn from_rows(rows: Vec<(Booking, Guest, Room)>) -> Self {
        let mut pending = Vec::new();
        let mut checked_in = Vec::new();

        for (booking, guest, _) in rows {
            let row = BookingOverviewRow {
                id: booking.id,
                name: guest.full_name(),
                check_in_date: if booking.checked_in {
                    booking.check_in_date.to_rfc3339()
                } else {
                    "-".to_string()
                },
                check_out_date: if booking.checked_in {
                    booking.check_out_date.to_rfc3339()
                } else {
                    "-".to_string()
                },
            };
            if booking.checked_in {
                checked_in.push(row);
            } else {
                pending.push(row);
            }
        }

        Self {
            pending,
            checked_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use crate::models::RoomStatus;

    fn sample_row(checked_in: bool) -> (Booking, Guest, Room) {
        let t0 = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let t1 = Utc.with_ymd_and_hms(2024, 6, 4, 10, 0, 0).unwrap();
        (
            Booking {
                id: 7,
                room_id: 2,
                guest_id: 3,
                check_in_date: t0,
                check_out_date: t1,
                checked_in,
                extra_towels: false,
                room_service: false,
                spa_access: false,
                airport_pickup: false,
                late_checkout: false,
                created_at: t0,
            },
            Guest {
                id: 3,
                user_id: Uuid::new_v4(),
                first_name: "Grace".to_string(),
                last_name: "Hopper".to_string(),
                email: "grace@example.com".to_string(),
                mobile_number: "555".to_string(),
                password_hash: "x".to_string(),
                facial_id_consent: false,
                created_at: t0,
            },
            Room {
                id: 2,
                room_type: "Suite".to_string(),
                room_number: "201".to_string(),
                status: RoomStatus::Occupied,
            },
        )
    }

    #[test]
    fn detail_row_maps_checked_in_status() {
        let row = BookingDetailRow::from(sample_row(true));
        assert_eq!(row.status, "Checked In");
        assert_eq!(row.guest_name, "Grace Hopper");
        assert_eq!(row.room_type, "Suite");
    }

    #[test]
    fn detail_row_maps_pending_status() {
        let row = BookingDetailRow::from(sample_row(false));
        assert_eq!(row.status, "Pending");
    }

    #[test]
    fn overview_masks_dates_until_check_in() {
        let grouped = GroupedBookingsResponse::from_rows(vec![sample_row(false)]);
        assert_eq!(grouped.pending.len(), 1);
        assert!(grouped.checked_in.is_empty());
        assert_eq!(grouped.pending[0].check_in_date, "-");
        assert_eq!(grouped.pending[0].check_out_date, "-");
    }

    #[test]
    fn overview_groups_checked_in_rows() {
        let grouped = GroupedBookingsResponse::from_rows(vec![sample_row(true)]);
        assert!(grouped.pending.is_empty());
        assert_eq!(grouped.checked_in.len(), 1);
        assert_ne!(grouped.checked_in[0].check_in_date, "-");
    }

    #[test]
    fn amenity_flags_parse_from_pascal_case() {
        let json = serde_json::json!({
            "user_id": Uuid::new_v4(),
            "room_type": "Deluxe",
            "check_in_date": "2024-06-01T12:00:00Z",
            "check_out_date": "2024-06-04T10:00:00Z",
            "ExtraTowels": true,
            "LateCheckout": true
        });
        let request: BookRoomRequest = serde_json::from_value(json).unwrap();
        assert!(request.extra_towels);
        assert!(request.late_checkout);
        assert!(!request.room_service);
    }
}
