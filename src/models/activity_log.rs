use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;

/// Activity log entry model for reading from database
#[derive(Debug, Queryable, Selectable, Serialize, Clone)]
#[diesel(table_name = crate::schema::activity_logs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ActivityLog {
    pub id: i64,
    pub guest_id: Option<i32>,
    pub email: String,
    pub activity: String,
    pub logged_at: DateTime<Utc>,
}

/// NewActivityLog model for inserting new records
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::activity_logs)]
pub struct NewActivityLog {
    pub guest_id: Option<i32>,
    pub email: String,
    pub activity: String,
}
