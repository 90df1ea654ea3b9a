//! Blacklist repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppResult;
use crate::models::{BlacklistEntry, NewBlacklistEntry};

/// Blacklist repository holding an async connection pool.
#[derive(Clone)]
pub struct BlacklistRepository {
    pool: AsyncDbPool,
}

impl BlacklistRepository {
    /// Creates a new BlacklistRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Adds a guest to the blacklist.
    pub async fn create(&self, new_entry: NewBlacklistEntry) -> AppResult<BlacklistEntry> {
        use crate::schema::blacklist::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(blacklist)
            .values(&new_entry)
            .returning(BlacklistEntry::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(Into::into)
    }

    /// Lists every blacklist entry ordered by id.
    pub async fn list_all(&self) -> AppResult<Vec<BlacklistEntry>> {
        use crate::schema::blacklist::dsl::*;
        let mut conn = self.pool.get().await?;

        blacklist
            .order(id.asc())
            .select(BlacklistEntry::as_select())
            .load(&mut conn)
            .await
            .map_err(Into::into)
    }
}
