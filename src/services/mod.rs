//! Service layer containing business logic.
//!
//! Services sit between the HTTP handlers and the repositories: handlers
//! stay thin, repositories stay mechanical, and the domain rules live here.

mod availability;
mod booking_service;
mod guest_service;
mod staff_service;

pub use availability::{AvailabilityResolver, first_fit};
pub use booking_service::{BookingService, CreateBookingCommand, PlacedBooking};
pub use guest_service::{GuestService, RegisterGuestCommand, SavePreferencesCommand};
pub use staff_service::{BlacklistGuestCommand, StaffService};

use crate::repositories::Repositories;

/// Aggregates all services for convenient access.
#[derive(Clone)]
pub struct Services {
    pub bookings: BookingService,
    pub guests: GuestService,
    pub staff: StaffService,
}

impl Services {
    /// Creates a new Services instance wired to the given repositories.
    pub fn new(repos: Repositories) -> Self {
        let resolver = AvailabilityResolver::new(repos.rooms.clone(), repos.bookings.clone());
        Self {
            bookings: BookingService::new(
                resolver,
                repos.bookings.clone(),
                repos.guests.clone(),
                repos.activity_logs.clone(),
            ),
            guests: GuestService::new(
                repos.guests.clone(),
                repos.preferences.clone(),
                repos.activity_logs.clone(),
            ),
            staff: StaffService::new(
                repos.staff.clone(),
                repos.blacklist.clone(),
                repos.guests.clone(),
                repos.activity_logs.clone(),
            ),
        }
    }
}
