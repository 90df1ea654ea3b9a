//! Repository layer for data access operations.
//!
//! Provides async CRUD operations for all domain entities.

mod activity_log_repo;
mod blacklist_repo;
mod booking_repo;
mod guest_repo;
mod preference_repo;
mod room_repo;
mod staff_repo;

pub use activity_log_repo::ActivityLogRepository;
pub use blacklist_repo::BlacklistRepository;
pub use booking_repo::BookingRepository;
pub use guest_repo::GuestRepository;
pub use preference_repo::PreferenceRepository;
pub use room_repo::RoomRepository;
pub use staff_repo::StaffRepository;

use crate::db::AsyncDbPool;

/// Aggregates all repositories for convenient access.
///
/// Since `AsyncDbPool` uses `Arc` internally, cloning is cheap.
#[derive(Clone)]
pub struct Repositories {
    pub rooms: RoomRepository,
    pub bookings: BookingRepository,
    pub guests: GuestRepository,
    pub staff: StaffRepository,
    pub blacklist: BlacklistRepository,
    pub preferences: PreferenceRepository,
    pub activity_logs: ActivityLogRepository,
}

impl Repositories {
    /// Creates a new Repositories instance with all repositories initialized.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            rooms: RoomRepository::new(pool.clone()),
            bookings: BookingRepository::new(pool.clone()),
            guests: GuestRepository::new(pool.clone()),
            staff: StaffRepository::new(pool.clone()),
            blacklist: BlacklistRepository::new(pool.clone()),
            preferences: PreferenceRepository::new(pool.clone()),
            activity_logs: ActivityLogRepository::new(pool),
        }
    }
}
