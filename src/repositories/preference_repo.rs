//! Room preference repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppResult;
use crate::models::RoomPreference;

/// Room preference repository holding an async connection pool.
#[derive(Clone)]
pub struct PreferenceRepository {
    pool: AsyncDbPool,
}

impl PreferenceRepository {
    /// Creates a new PreferenceRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Inserts or replaces a guest's room preferences.
    pub async fn upsert(&self, preference: RoomPreference) -> AppResult<RoomPreference> {
        use crate::schema::room_preferences::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(room_preferences)
            .values(&preference)
            .on_conflict(guest_id)
            .do_update()
            .set(&preference)
            .returning(RoomPreference::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(Into::into)
    }
}
