use diesel::deserialize::{self, FromSql};
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::serialize::{self, Output, ToSql};
use diesel::sql_types::Text;
use diesel::{AsExpression, FromSqlRow};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Occupancy status of a room.
///
/// Derived state under the occupancy invariant: the status must say Occupied
/// exactly when an active reservation exists for the room. It is written
/// explicitly by the booking lifecycle (create/cancel/check-out), never
/// recomputed per query, and availability decisions re-derive the truth from
/// the reservation rows instead of trusting this flag.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    utoipa::ToSchema,
    AsExpression,
    FromSqlRow,
)]
#[diesel(sql_type = Text)]
pub enum RoomStatus {
    Available,
    Occupied,
}

impl RoomStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomStatus::Available => "Available",
            RoomStatus::Occupied => "Occupied",
        }
    }
}

impl diesel::query_builder::QueryId for RoomStatus {
    type QueryId = RoomStatus;
    const HAS_STATIC_QUERY_ID: bool = false;
}

impl ToSql<Text, Pg> for RoomStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(serialize::IsNull::No)
    }
}

impl FromSql<Text, Pg> for RoomStatus {
    fn from_sql(
        bytes: <Pg as diesel::backend::Backend>::RawValue<'_>,
    ) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        match s.as_str() {
            "Available" => Ok(RoomStatus::Available),
            "Occupied" => Ok(RoomStatus::Occupied),
            _ => Err(format!("Unrecognized room status: {}", s).into()),
        }
    }
}

/// Room model for reading from database
#[derive(Debug, Queryable, Selectable, Serialize, Clone)]
#[diesel(table_name = crate::schema::rooms)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Room {
    pub id: i32,
    pub room_type: String,
    pub room_number: String,
    pub status: RoomStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_str() {
        assert_eq!(RoomStatus::Available.as_str(), "Available");
        assert_eq!(RoomStatus::Occupied.as_str(), "Occupied");
    }

    #[test]
    fn status_serializes_as_plain_string() {
        let json = serde_json::to_string(&RoomStatus::Occupied).unwrap();
        assert_eq!(json, "\"Occupied\"");
    }
}
