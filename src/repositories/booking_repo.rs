//! Booking repository for async database operations.
//!
//! Owns the write paths of the booking lifecycle. A reservation insert or
//! delete and the matching room-status update always commit in the same
//! transaction, so the status flag cannot drift from the reservation set;
//! inserts and date edits both re-run their overlap check under a
//! `SELECT ... FOR UPDATE` lock on the room row, so conflicting writes on
//! the same room serialize instead of racing.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{
    Booking, Guest, NewBooking, Room, RoomStatus, StayPeriod, conflicts_excluding,
};

/// Booking repository holding an async connection pool.
#[derive(Clone)]
pub struct BookingRepository {
    pool: AsyncDbPool,
}

impl BookingRepository {
    /// Creates a new BookingRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Loads the stay periods of every booking on a room.
    pub async fn list_periods_by_room(&self, target_room: i32) -> AppResult<Vec<StayPeriod>> {
        use crate::schema::room_bookings::dsl::*;
        let mut conn = self.pool.get().await?;

        let rows: Vec<(DateTime<Utc>, DateTime<Utc>)> = room_bookings
            .filter(room_id.eq(target_room))
            .order(id.asc())
            .select((check_in_date, check_out_date))
            .load(&mut conn)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(check_in, check_out)| StayPeriod {
                check_in,
                check_out,
            })
            .collect())
    }

    /// Lists all bookings joined with their guest and room rows.
    pub async fn list_with_details(&self) -> AppResult<Vec<(Booking, Guest, Room)>> {
        use crate::schema::{guests, room_bookings, rooms};
        let mut conn = self.pool.get().await?;

        room_bookings::table
            .inner_join(guests::table)
            .inner_join(rooms::table)
            .order(room_bookings::id.asc())
            .select((
                Booking::as_select(),
                Guest::as_select(),
                Room::as_select(),
            ))
            .load(&mut conn)
            .await
            .map_err(Into::into)
    }

    /// Inserts a reservation and marks its room Occupied in one transaction.
    ///
    /// The room row is locked with `SELECT ... FOR UPDATE` and the overlap
    /// check re-runs against committed bookings while the lock is held, so
    /// concurrent create calls for the same room serialize instead of both
    /// observing "no conflict". The loser gets `DateConflict` and nothing is
    /// written.
    pub async fn create_booked(&self, new_booking: NewBooking) -> AppResult<Booking> {
        use crate::schema::{room_bookings, rooms};
        let mut conn = self.pool.get().await?;

        let target_room = new_booking.room_id;
        conn.transaction::<Booking, AppError, _>(|conn| {
            async move {
                let _locked: Room = rooms::table
                    .find(target_room)
                    .select(Room::as_select())
                    .for_update()
                    .first(conn)
                    .await?;

                let overlapping: i64 = room_bookings::table
                    .filter(room_bookings::room_id.eq(target_room))
                    .filter(room_bookings::check_in_date.lt(new_booking.check_out_date))
                    .filter(room_bookings::check_out_date.gt(new_booking.check_in_date))
                    .count()
                    .get_result(conn)
                    .await?;
                if overlapping > 0 {
                    return Err(AppError::DateConflict {
                        message: "room is no longer available for the selected dates".to_string(),
                    });
                }

                let booking: Booking = diesel::insert_into(room_bookings::table)
                    .values(&new_booking)
                    .returning(Booking::as_returning())
                    .get_result(conn)
                    .await?;

                diesel::update(rooms::table.find(target_room))
                    .set(rooms::status.eq(RoomStatus::Occupied))
                    .execute(conn)
                    .await?;

                Ok(booking)
            }
            .scope_boxed()
        })
        .await
    }

    /// Moves a reservation to new dates, re-validating under the room lock.
    ///
    /// Mirrors `create_booked`: the room row is locked with `SELECT ... FOR
    /// UPDATE` and the new interval is checked against every other committed
    /// reservation on the room while the lock is held. An edit racing a
    /// create (or another edit) on the same room therefore serializes; the
    /// loser gets `DateConflict` and the dates stay unchanged. Returns
    /// `NotFound` when the booking does not exist.
    pub async fn update_period_checked(
        &self,
        booking_id: i32,
        period: StayPeriod,
    ) -> AppResult<Booking> {
        use crate::schema::{room_bookings, rooms};
        let mut conn = self.pool.get().await?;

        conn.transaction::<Booking, AppError, _>(|conn| {
            async move {
                let booking: Booking = room_bookings::table
                    .find(booking_id)
                    .select(Booking::as_select())
                    .first(conn)
                    .await
                    .optional()?
                    .ok_or_else(|| AppError::NotFound {
                        entity: "booking".to_string(),
                        field: "id".to_string(),
                        value: booking_id.to_string(),
                    })?;

                let _locked: Room = rooms::table
                    .find(booking.room_id)
                    .select(Room::as_select())
                    .for_update()
                    .first(conn)
                    .await?;

                let rows: Vec<(i32, DateTime<Utc>, DateTime<Utc>)> = room_bookings::table
                    .filter(room_bookings::room_id.eq(booking.room_id))
                    .order(room_bookings::id.asc())
                    .select((
                        room_bookings::id,
                        room_bookings::check_in_date,
                        room_bookings::check_out_date,
                    ))
                    .load(conn)
                    .await?;
                let existing: Vec<(i32, StayPeriod)> = rows
                    .into_iter()
                    .map(|(other_id, check_in, check_out)| {
                        (other_id, StayPeriod { check_in, check_out })
                    })
                    .collect();
                if conflicts_excluding(&existing, booking_id, &period) {
                    return Err(AppError::DateConflict {
                        message: "the new dates overlap another reservation on this room"
                            .to_string(),
                    });
                }

                diesel::update(room_bookings::table.find(booking_id))
                    .set((
                        room_bookings::check_in_date.eq(period.check_in),
                        room_bookings::check_out_date.eq(period.check_out),
                    ))
                    .returning(Booking::as_returning())
                    .get_result(conn)
                    .await
                    .map_err(Into::into)
            }
            .scope_boxed()
        })
        .await
    }

    /// Flags a reservation as physically checked in.
    ///
    /// Returns the number of affected rows (0 when the booking is absent).
    pub async fn set_checked_in(&self, booking_id: i32) -> AppResult<usize> {
        use crate::schema::room_bookings::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(room_bookings.filter(id.eq(booking_id)))
            .set(checked_in.eq(true))
            .execute(&mut conn)
            .await
            .map_err(Into::into)
    }

    /// Deletes a reservation and marks its room Available in one transaction.
    ///
    /// Backs both cancellation and check-out. Returns `NotFound` when the
    /// booking does not exist; either both writes commit or neither does.
    pub async fn delete_and_release_room(&self, booking_id: i32) -> AppResult<Booking> {
        use crate::schema::{room_bookings, rooms};
        let mut conn = self.pool.get().await?;

        conn.transaction::<Booking, AppError, _>(|conn| {
            async move {
                let booking: Booking = room_bookings::table
                    .find(booking_id)
                    .select(Booking::as_select())
                    .first(conn)
                    .await
                    .optional()?
                    .ok_or_else(|| AppError::NotFound {
                        entity: "booking".to_string(),
                        field: "id".to_string(),
                        value: booking_id.to_string(),
                    })?;

                diesel::delete(room_bookings::table.find(booking_id))
                    .execute(conn)
                    .await?;

                diesel::update(rooms::table.find(booking.room_id))
                    .set(rooms::status.eq(RoomStatus::Available))
                    .execute(conn)
                    .await?;

                Ok(booking)
            }
            .scope_boxed()
        })
        .await
    }
}
