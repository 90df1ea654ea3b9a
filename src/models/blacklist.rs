use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Blacklist entry model for reading from database
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::blacklist)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BlacklistEntry {
    pub id: i32,
    pub email: String,
    pub reason: String,
    pub added_by: i32,
    pub created_at: DateTime<Utc>,
}

/// NewBlacklistEntry model for inserting new records
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::blacklist)]
pub struct NewBlacklistEntry {
    pub email: String,
    pub reason: String,
    pub added_by: i32,
}
