//! Room availability resolution.
//!
//! Availability is derived from the reservation rows, never from the cached
//! room status flag: a room is free for a stay exactly when no existing
//! reservation on it overlaps the requested half-open interval. Rooms are
//! tried in ascending id order and the first free one wins, so repeated
//! requests fill the inventory deterministically.

use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::models::{Room, StayPeriod};
use crate::repositories::{BookingRepository, RoomRepository};

/// Picks the first room (by position) whose reservations leave the requested
/// period free. Pure so the selection rule is testable without a database.
pub fn first_fit<'a>(
    candidates: &'a [(Room, Vec<StayPeriod>)],
    requested: &StayPeriod,
) -> Option<&'a Room> {
    candidates
        .iter()
        .find(|(_, periods)| !requested.conflicts_with(periods))
        .map(|(room, _)| room)
}

/// Resolves which physical room serves a booking request.
#[derive(Clone)]
pub struct AvailabilityResolver {
    rooms: RoomRepository,
    bookings: BookingRepository,
}

impl AvailabilityResolver {
    pub fn new(rooms: RoomRepository, bookings: BookingRepository) -> Self {
        Self { rooms, bookings }
    }

    /// Finds a free room of the requested type for the requested stay.
    ///
    /// Returns `NotFound` when the hotel has no rooms of that type at all,
    /// and `NoRoomAvailable` when every room of the type is booked over the
    /// requested dates. The two cases are deliberately distinct: the first is
    /// a bad request, the second is full occupancy.
    pub async fn find_room(&self, room_type: &str, requested: &StayPeriod) -> AppResult<Room> {
        let rooms = self.rooms.list_by_type(room_type).await?;
        if rooms.is_empty() {
            return Err(AppError::NotFound {
                entity: "room".to_string(),
                field: "room_type".to_string(),
                value: room_type.to_string(),
            });
        }

        let mut candidates = Vec::with_capacity(rooms.len());
        for room in rooms {
            let periods = self.bookings.list_periods_by_room(room.id).await?;
            candidates.push((room, periods));
        }

        match first_fit(&candidates, requested) {
            Some(room) => {
                debug!(
                    room_id = room.id,
                    room_number = %room.room_number,
                    room_type,
                    "resolved free room"
                );
                Ok(room.clone())
            }
            None => Err(AppError::NoRoomAvailable {
                room_type: room_type.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RoomStatus;
    use chrono::{DateTime, TimeZone, Utc};
    use proptest::prelude::*;

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, d, 0, 0, 0).unwrap()
    }

    fn room(id: i32, status: RoomStatus) -> Room {
        Room {
            id,
            room_type: "Deluxe".to_string(),
            room_number: format!("{}01", id),
            status,
        }
    }

    fn period(from: u32, to: u32) -> StayPeriod {
        StayPeriod::new(day(from), day(to)).unwrap()
    }

    #[test]
    fn picks_lowest_id_free_room() {
        let candidates = vec![
            (room(1, RoomStatus::Available), vec![period(1, 10)]),
            (room(2, RoomStatus::Available), vec![]),
            (room(3, RoomStatus::Available), vec![]),
        ];
        let chosen = first_fit(&candidates, &period(2, 5)).unwrap();
        assert_eq!(chosen.id, 2);
    }

    #[test]
    fn status_flag_does_not_block_selection() {
        // A stale Occupied flag must not hide a room whose reservations
        // leave the requested dates free.
        let candidates = vec![(room(1, RoomStatus::Occupied), vec![period(10, 15)])];
        let chosen = first_fit(&candidates, &period(1, 5)).unwrap();
        assert_eq!(chosen.id, 1);
    }

    #[test]
    fn back_to_back_stays_share_a_room() {
        let candidates = vec![(room(1, RoomStatus::Occupied), vec![period(1, 5)])];
        let chosen = first_fit(&candidates, &period(5, 9)).unwrap();
        assert_eq!(chosen.id, 1);
    }

    #[test]
    fn fully_booked_type_yields_no_room() {
        let candidates = vec![
            (room(1, RoomStatus::Occupied), vec![period(1, 10)]),
            (room(2, RoomStatus::Occupied), vec![period(3, 12)]),
        ];
        assert!(first_fit(&candidates, &period(4, 6)).is_none());
    }

    #[test]
    fn empty_candidate_list_yields_no_room() {
        assert!(first_fit(&[], &period(1, 2)).is_none());
    }

    proptest! {
        /// The chosen room never carries a reservation overlapping the
        /// requested stay, whatever the existing booking pattern looks like.
        #[test]
        fn chosen_room_never_conflicts(
            existing in prop::collection::vec(
                (0usize..4, 1u32..27, 1u32..3),
                0..12,
            ),
            req_start in 1u32..27,
            req_len in 1u32..3,
        ) {
            let mut candidates: Vec<(Room, Vec<StayPeriod>)> = (0..4)
                .map(|i| (room(i as i32 + 1, RoomStatus::Available), Vec::new()))
                .collect();
            for (slot, start, len) in existing {
                candidates[slot].1.push(period(start, start + len));
            }
            let requested = period(req_start, req_start + req_len);

            if let Some(chosen) = first_fit(&candidates, &requested) {
                let periods = &candidates
                    .iter()
                    .find(|(r, _)| r.id == chosen.id)
                    .unwrap()
                    .1;
                prop_assert!(!requested.conflicts_with(periods));
            } else {
                // No pick means every candidate genuinely conflicts.
                for (_, periods) in &candidates {
                    prop_assert!(requested.conflicts_with(periods));
                }
            }
        }
    }
}
