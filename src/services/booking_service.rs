//! Booking lifecycle service.
//!
//! Orchestrates the reservation lifecycle: create resolves a free room and
//! books it, edit moves the stay on the same room, cancel and check-out
//! remove the reservation and release the room. The conflict rules live in
//! `StayPeriod` and the availability resolver; the atomic write paths live
//! in the booking repository.

use chrono::{DateTime, Utc};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{Booking, Guest, NewActivityLog, NewBooking, Room, StayPeriod};
use crate::repositories::{ActivityLogRepository, BookingRepository, GuestRepository};
use crate::services::AvailabilityResolver;

/// Everything needed to place a reservation.
#[derive(Debug, Clone)]
pub struct CreateBookingCommand {
    pub guest_user_id: Uuid,
    pub room_type: String,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub extra_towels: bool,
    pub room_service: bool,
    pub spa_access: bool,
    pub airport_pickup: bool,
    pub late_checkout: bool,
}

/// A placed reservation together with the room it landed on.
#[derive(Debug, Clone)]
pub struct PlacedBooking {
    pub booking: Booking,
    pub room: Room,
}

/// Service for booking lifecycle operations.
#[derive(Clone)]
pub struct BookingService {
    resolver: AvailabilityResolver,
    bookings: BookingRepository,
    guests: GuestRepository,
    activity_logs: ActivityLogRepository,
}

impl BookingService {
    pub fn new(
        resolver: AvailabilityResolver,
        bookings: BookingRepository,
        guests: GuestRepository,
        activity_logs: ActivityLogRepository,
    ) -> Self {
        Self {
            resolver,
            bookings,
            guests,
            activity_logs,
        }
    }

    /// Books the first free room of the requested type for the guest.
    ///
    /// The resolver picks a candidate from committed reservations; the insert
    /// re-checks for overlap under a row lock, so a concurrent booking of the
    /// same room surfaces as `DateConflict` rather than a double booking.
    #[instrument(skip(self, command), fields(room_type = %command.room_type))]
    pub async fn create(&self, command: CreateBookingCommand) -> AppResult<PlacedBooking> {
        let period = StayPeriod::new(command.check_in, command.check_out)?;

        let guest = self.find_guest(command.guest_user_id).await?;
        let room = self.resolver.find_room(&command.room_type, &period).await?;

        let booking = self
            .bookings
            .create_booked(NewBooking {
                room_id: room.id,
                guest_id: guest.id,
                check_in_date: period.check_in,
                check_out_date: period.check_out,
                checked_in: false,
                extra_towels: command.extra_towels,
                room_service: command.room_service,
                spa_access: command.spa_access,
                airport_pickup: command.airport_pickup,
                late_checkout: command.late_checkout,
            })
            .await?;

        info!(
            booking_id = booking.id,
            room_number = %room.room_number,
            "reservation placed"
        );
        self.record_activity(
            &guest,
            format!(
                "booked room {} ({})",
                room.room_number, command.room_type
            ),
        )
        .await;

        Ok(PlacedBooking { booking, room })
    }

    /// Moves an existing reservation to new dates on its current room.
    ///
    /// The new stay is validated against every other reservation on the same
    /// room under the room-row lock, the same way a create is; the booking's
    /// own previous dates are excluded so shrinking or shifting a stay never
    /// conflicts with itself.
    pub async fn edit(
        &self,
        booking_id: i32,
        check_in: DateTime<Utc>,
        check_out: DateTime<Utc>,
    ) -> AppResult<Booking> {
        let period = StayPeriod::new(check_in, check_out)?;

        let updated = self
            .bookings
            .update_period_checked(booking_id, period)
            .await?;
        info!(booking_id = updated.id, "reservation dates updated");
        Ok(updated)
    }

    /// Cancels a reservation and releases its room.
    pub async fn cancel(&self, booking_id: i32) -> AppResult<Booking> {
        let booking = self.bookings.delete_and_release_room(booking_id).await?;
        info!(booking_id = booking.id, room_id = booking.room_id, "reservation cancelled");
        self.log_for_booking(&booking, "cancelled their booking").await;
        Ok(booking)
    }

    /// Marks a reservation as physically checked in.
    pub async fn check_in(&self, booking_id: i32) -> AppResult<()> {
        let affected = self.bookings.set_checked_in(booking_id).await?;
        if affected == 0 {
            return Err(Self::booking_not_found(booking_id));
        }
        info!(booking_id, "guest checked in");
        Ok(())
    }

    /// Checks a guest out: the reservation is removed and the room released.
    pub async fn check_out(&self, booking_id: i32) -> AppResult<Booking> {
        let booking = self.bookings.delete_and_release_room(booking_id).await?;
        info!(booking_id = booking.id, room_id = booking.room_id, "guest checked out");
        self.log_for_booking(&booking, "checked out").await;
        Ok(booking)
    }

    /// Lists every reservation with guest and room details.
    pub async fn list_all(&self) -> AppResult<Vec<(Booking, Guest, Room)>> {
        self.bookings.list_with_details().await
    }

    async fn find_guest(&self, guest_user_id: Uuid) -> AppResult<Guest> {
        self.guests
            .find_by_user_id(guest_user_id)
            .await?
            .ok_or_else(|| AppError::NotFound {
                entity: "guest".to_string(),
                field: "user_id".to_string(),
                value: guest_user_id.to_string(),
            })
    }

    fn booking_not_found(booking_id: i32) -> AppError {
        AppError::NotFound {
            entity: "booking".to_string(),
            field: "id".to_string(),
            value: booking_id.to_string(),
        }
    }

    async fn log_for_booking(&self, booking: &Booking, activity: &str) {
        let guest_email = match self.guests.find_by_id(booking.guest_id).await {
            Ok(Some(guest)) => guest.email,
            _ => String::new(),
        };
        let entry = NewActivityLog {
            guest_id: Some(booking.guest_id),
            email: guest_email,
            activity: activity.to_string(),
        };
        if let Err(error) = self.activity_logs.create(entry).await {
            tracing::warn!(%error, "failed to record booking activity");
        }
    }

    async fn record_activity(&self, guest: &Guest, activity: String) {
        let entry = NewActivityLog {
            guest_id: Some(guest.id),
            email: guest.email.clone(),
            activity,
        };
        if let Err(error) = self.activity_logs.create(entry).await {
            tracing::warn!(%error, "failed to record booking activity");
        }
    }
}
