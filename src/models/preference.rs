use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Room preference model; one row per guest, replaced wholesale on save.
#[derive(Debug, Queryable, Selectable, Insertable, AsChangeset, Serialize, Deserialize, Clone)]
#[diesel(table_name = crate::schema::room_preferences)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RoomPreference {
    pub guest_id: i32,
    pub bed_type: Option<String>,
    pub room_view: Option<String>,
    pub floor_preference: Option<String>,
    pub extra_pillows: bool,
    pub extra_beds: bool,
    pub extra_towels: bool,
    pub early_check_in: bool,
}
