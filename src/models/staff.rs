use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Employee model for reading from database
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::employees)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Employee {
    pub id: i32,
    pub email: String,
    pub full_name: String,
    pub password_hash: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// NewEmployee model for inserting new records
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::employees)]
pub struct NewEmployee {
    pub email: String,
    pub full_name: String,
    pub password_hash: String,
    pub active: bool,
}
