use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// The half-open [check_in, check_out) interval of a stay.
///
/// Two periods overlap iff `a.check_in < b.check_out && a.check_out >
/// b.check_in`; a stay ending exactly when another begins does not conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayPeriod {
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
}

impl StayPeriod {
    /// Builds a period, rejecting intervals whose check-out does not lie
    /// strictly after check-in.
    pub fn new(check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> AppResult<Self> {
        if check_in >= check_out {
            return Err(AppError::InvalidInterval {
                reason: "check-out must be after check-in".to_string(),
            });
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// Half-open interval overlap test.
    pub fn overlaps(&self, other: &StayPeriod) -> bool {
        self.check_in < other.check_out && self.check_out > other.check_in
    }

    /// True when this period overlaps any of the given periods.
    pub fn conflicts_with(&self, others: &[StayPeriod]) -> bool {
        others.iter().any(|other| self.overlaps(other))
    }
}

/// True when `requested` overlaps any reservation in `existing` other than
/// the one identified by `excluded`.
///
/// The exclusion is what lets an edited reservation move freely over its own
/// previous dates while still being checked against every neighbor.
pub fn conflicts_excluding(
    existing: &[(i32, StayPeriod)],
    excluded: i32,
    requested: &StayPeriod,
) -> bool {
    existing
        .iter()
        .any(|(booking_id, period)| *booking_id != excluded && requested.overlaps(period))
}

/// Booking model for reading from database
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::room_bookings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Booking {
    pub id: i32,
    pub room_id: i32,
    pub guest_id: i32,
    pub check_in_date: DateTime<Utc>,
    pub check_out_date: DateTime<Utc>,
    pub checked_in: bool,
    pub extra_towels: bool,
    pub room_service: bool,
    pub spa_access: bool,
    pub airport_pickup: bool,
    pub late_checkout: bool,
    pub created_at: DateTime<Utc>,
}

/// NewBooking model for inserting new records
#[derive(Debug, Insertable, Deserialize, Clone)]
#[diesel(table_name = crate::schema::room_bookings)]
pub struct NewBooking {
    pub room_id: i32,
    pub guest_id: i32,
    pub check_in_date: DateTime<Utc>,
    pub check_out_date: DateTime<Utc>,
    pub checked_in: bool,
    pub extra_towels: bool,
    pub room_service: bool,
    pub spa_access: bool,
    pub airport_pickup: bool,
    pub late_checkout: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn rejects_reversed_interval() {
        assert!(StayPeriod::new(day(5), day(1)).is_err());
    }

    #[test]
    fn rejects_zero_length_interval() {
        assert!(StayPeriod::new(day(3), day(3)).is_err());
    }

    #[test]
    fn touching_periods_do_not_overlap() {
        let a = StayPeriod::new(day(1), day(5)).unwrap();
        let b = StayPeriod::new(day(5), day(8)).unwrap();
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn contained_period_overlaps() {
        let a = StayPeriod::new(day(1), day(10)).unwrap();
        let b = StayPeriod::new(day(3), day(6)).unwrap();
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn partial_overlap_detected() {
        let a = StayPeriod::new(day(1), day(5)).unwrap();
        let b = StayPeriod::new(day(3), day(6)).unwrap();
        assert!(a.overlaps(&b));
    }

    #[test]
    fn edited_stay_ignores_its_own_old_dates() {
        // Booking 1 shifts by a day; the new dates overlap only its own old
        // entry, which the exclusion filters out.
        let existing = vec![
            (1, StayPeriod::new(day(1), day(5)).unwrap()),
            (2, StayPeriod::new(day(10), day(12)).unwrap()),
        ];
        let requested = StayPeriod::new(day(2), day(6)).unwrap();
        assert!(!conflicts_excluding(&existing, 1, &requested));
    }

    #[test]
    fn edited_stay_still_checked_against_neighbors() {
        let existing = vec![
            (1, StayPeriod::new(day(1), day(5)).unwrap()),
            (2, StayPeriod::new(day(10), day(12)).unwrap()),
        ];
        let requested = StayPeriod::new(day(9), day(11)).unwrap();
        assert!(conflicts_excluding(&existing, 1, &requested));
    }

    #[test]
    fn shrinking_a_stay_never_conflicts_with_itself() {
        let existing = vec![(7, StayPeriod::new(day(1), day(10)).unwrap())];
        let requested = StayPeriod::new(day(2), day(4)).unwrap();
        assert!(!conflicts_excluding(&existing, 7, &requested));
    }
}
