use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Guest model for reading from database
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::guests)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Guest {
    pub id: i32,
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile_number: String,
    pub password_hash: String,
    pub facial_id_consent: bool,
    pub created_at: DateTime<Utc>,
}

impl Guest {
    /// Display name used by the booking listings.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// NewGuest model for inserting new records
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::guests)]
pub struct NewGuest {
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile_number: String,
    pub password_hash: String,
    pub facial_id_consent: bool,
}

/// UpdateGuest model for partial profile updates
#[derive(Debug, AsChangeset, Deserialize, Serialize, Clone, Default)]
#[diesel(table_name = crate::schema::guests)]
pub struct UpdateGuest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub mobile_number: Option<String>,
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn full_name_trims_missing_parts() {
        let guest = Guest {
            id: 1,
            user_id: Uuid::new_v4(),
            first_name: "Ada".to_string(),
            last_name: "".to_string(),
            email: "ada@example.com".to_string(),
            mobile_number: "123".to_string(),
            password_hash: "x".to_string(),
            facial_id_consent: false,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        };
        assert_eq!(guest.full_name(), "Ada");
    }
}
