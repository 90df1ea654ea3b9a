//! Activity log repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppResult;
use crate::models::{ActivityLog, NewActivityLog};

/// Activity log repository holding an async connection pool.
#[derive(Clone)]
pub struct ActivityLogRepository {
    pool: AsyncDbPool,
}

impl ActivityLogRepository {
    /// Creates a new ActivityLogRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Appends an activity entry.
    pub async fn create(&self, new_entry: NewActivityLog) -> AppResult<ActivityLog> {
        use crate::schema::activity_logs::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(activity_logs)
            .values(&new_entry)
            .returning(ActivityLog::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(Into::into)
    }

    /// Lists all activity entries, newest first.
    pub async fn list_all(&self) -> AppResult<Vec<ActivityLog>> {
        use crate::schema::activity_logs::dsl::*;
        let mut conn = self.pool.get().await?;

        activity_logs
            .order(logged_at.desc())
            .select(ActivityLog::as_select())
            .load(&mut conn)
            .await
            .map_err(Into::into)
    }
}
