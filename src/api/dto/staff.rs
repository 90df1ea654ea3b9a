//! Staff- and blacklist-related DTOs for API requests and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{ActivityLog, BlacklistEntry, Employee};
use crate::services::BlacklistGuestCommand;

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for blacklisting a guest.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct BlacklistRequest {
    #[validate(email(message = "Invalid guest email format"))]
    #[schema(format = "email")]
    pub email: String,
    #[validate(length(min = 1, max = 500, message = "Reason is required"))]
    pub reason: String,
    #[validate(email(message = "Invalid staff email format"))]
    #[schema(format = "email")]
    pub added_by: String,
}

impl BlacklistRequest {
    /// Converts the request DTO into a blacklist command.
    pub fn into_command(self) -> BlacklistGuestCommand {
        BlacklistGuestCommand {
            guest_email: self.email,
            reason: self.reason,
            staff_email: self.added_by,
        }
    }
}

/// Request body for creating a staff account.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct AddStaffRequest {
    #[validate(length(min = 1, max = 200, message = "Full name is required"))]
    pub full_name: String,
    #[validate(email(message = "Invalid email format"))]
    #[schema(format = "email")]
    pub email: String,
    #[validate(length(min = 8, max = 72, message = "Password must be at least 8 characters"))]
    #[schema(format = "password", min_length = 8, max_length = 72)]
    pub password: String,
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Generic success acknowledgement.
#[derive(Debug, Serialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
    pub message: String,
}

impl SuccessResponse {
    pub fn new(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }
}

/// Response body for staff data (excludes the password hash).
#[derive(Debug, Serialize, ToSchema)]
pub struct StaffResponse {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub active: bool,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
}

impl From<Employee> for StaffResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            full_name: employee.full_name,
            email: employee.email,
            active: employee.active,
            created_at: employee.created_at,
        }
    }
}

/// Response body for a blacklist entry.
#[derive(Debug, Serialize, ToSchema)]
pub struct BlacklistEntryResponse {
    pub id: i32,
    pub email: String,
    pub reason: String,
    pub added_by: i32,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
}

impl From<BlacklistEntry> for BlacklistEntryResponse {
    fn from(entry: BlacklistEntry) -> Self {
        Self {
            id: entry.id,
            email: entry.email,
            reason: entry.reason,
            added_by: entry.added_by,
            created_at: entry.created_at,
        }
    }
}

/// Response body for one activity log entry.
#[derive(Debug, Serialize, ToSchema)]
pub struct ActivityLogResponse {
    pub id: i64,
    pub email: String,
    pub activity: String,
    #[schema(value_type = String, format = DateTime)]
    pub logged_at: DateTime<Utc>,
}

impl From<ActivityLog> for ActivityLogResponse {
    fn from(entry: ActivityLog) -> Self {
        Self {
            id: entry.id,
            email: entry.email,
            activity: entry.activity,
            logged_at: entry.logged_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staff_response_excludes_the_hash() {
        let employee = Employee {
            id: 1,
            email: "staff@example.com".to_string(),
            full_name: "Front Desk".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            active: true,
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&StaffResponse::from(employee)).unwrap();
        assert!(!json.contains("argon2"));
    }
}
