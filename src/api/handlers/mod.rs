//! Request handlers for the API.

pub mod bookings;
pub mod guests;
pub mod health;
pub mod staff;
