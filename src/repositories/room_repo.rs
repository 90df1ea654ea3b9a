//! Room repository for async database operations.
//!
//! Read-only access to the rooms table. Room status writes are deliberately
//! absent here: the status flag may only change together with a reservation
//! mutation, inside the booking repository's transactions.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppResult;
use crate::models::Room;

/// Room repository holding an async connection pool.
///
/// Since `AsyncDbPool` (bb8::Pool) internally uses `Arc`, cloning is cheap.
#[derive(Clone)]
pub struct RoomRepository {
    pool: AsyncDbPool,
}

impl RoomRepository {
    /// Creates a new RoomRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Lists every room of the given type, ordered by id.
    ///
    /// Returns all rooms regardless of the cached status flag; availability
    /// is re-derived from the reservation rows by the resolver.
    pub async fn list_by_type(&self, requested_type: &str) -> AppResult<Vec<Room>> {
        use crate::schema::rooms::dsl::*;
        let mut conn = self.pool.get().await?;

        rooms
            .filter(room_type.eq(requested_type))
            .order(id.asc())
            .select(Room::as_select())
            .load(&mut conn)
            .await
            .map_err(Into::into)
    }
}
