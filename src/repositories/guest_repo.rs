//! Guest repository for async database operations.
//!
//! Provides CRUD operations for the guests table using diesel_async.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::db::AsyncDbPool;
use crate::error::AppResult;
use crate::models::{Guest, NewGuest, UpdateGuest};

/// Guest repository holding an async connection pool.
#[derive(Clone)]
pub struct GuestRepository {
    pool: AsyncDbPool,
}

impl GuestRepository {
    /// Creates a new GuestRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Creates a new guest record.
    pub async fn create(&self, new_guest: NewGuest) -> AppResult<Guest> {
        use crate::schema::guests::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(guests)
            .values(&new_guest)
            .returning(Guest::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(Into::into)
    }

    /// Finds a guest by their internal row id.
    pub async fn find_by_id(&self, guest_id: i32) -> AppResult<Option<Guest>> {
        use crate::schema::guests::dsl::*;
        let mut conn = self.pool.get().await?;

        guests
            .filter(id.eq(guest_id))
            .select(Guest::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(Into::into)
    }

    /// Finds a guest by their external identity.
    pub async fn find_by_user_id(&self, guest_user_id: Uuid) -> AppResult<Option<Guest>> {
        use crate::schema::guests::dsl::*;
        let mut conn = self.pool.get().await?;

        guests
            .filter(user_id.eq(guest_user_id))
            .select(Guest::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(Into::into)
    }

    /// Finds a guest by their email address.
    pub async fn find_by_email(&self, guest_email: &str) -> AppResult<Option<Guest>> {
        use crate::schema::guests::dsl::*;
        let mut conn = self.pool.get().await?;

        guests
            .filter(email.eq(guest_email))
            .select(Guest::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(Into::into)
    }

    /// Updates a guest's profile details (None fields are ignored).
    pub async fn update_details(
        &self,
        guest_user_id: Uuid,
        update_data: UpdateGuest,
    ) -> AppResult<Guest> {
        use crate::schema::guests::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(guests.filter(user_id.eq(guest_user_id)))
            .set(&update_data)
            .returning(Guest::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(Into::into)
    }

    /// Replaces a guest's stored password hash.
    pub async fn update_password_hash(
        &self,
        guest_user_id: Uuid,
        new_hash: &str,
    ) -> AppResult<usize> {
        use crate::schema::guests::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(guests.filter(user_id.eq(guest_user_id)))
            .set(password_hash.eq(new_hash))
            .execute(&mut conn)
            .await
            .map_err(Into::into)
    }
}
