//! Guest-related DTOs for API requests and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Guest, UpdateGuest};
use crate::services::{RegisterGuestCommand, SavePreferencesCommand};

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for registering a guest account.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "Invalid email format"))]
    #[schema(format = "email")]
    pub email: String,
    #[validate(length(min = 1, max = 30, message = "Mobile number is required"))]
    pub mobile_number: String,
    #[validate(length(min = 8, max = 72, message = "Password must be at least 8 characters"))]
    #[schema(format = "password", min_length = 8, max_length = 72)]
    pub password: String,
    #[serde(default)]
    pub facial_id_consent: bool,
}

impl RegisterRequest {
    /// Converts the request DTO into a registration command.
    pub fn into_command(self) -> RegisterGuestCommand {
        RegisterGuestCommand {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            mobile_number: self.mobile_number,
            password: self.password,
            facial_id_consent: self.facial_id_consent,
        }
    }
}

/// Request body for updating a guest profile.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateUserRequest {
    pub user_id: Uuid,
    #[validate(length(min = 1, max = 100, message = "First name must not be empty"))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 100, message = "Last name must not be empty"))]
    pub last_name: Option<String>,
    #[validate(length(min = 1, max = 30, message = "Mobile number must not be empty"))]
    pub mobile_number: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    #[schema(format = "email")]
    pub email: Option<String>,
}

impl UpdateUserRequest {
    /// Converts the request DTO into a profile changeset.
    pub fn into_update_guest(self) -> UpdateGuest {
        UpdateGuest {
            first_name: self.first_name,
            last_name: self.last_name,
            mobile_number: self.mobile_number,
            email: self.email,
        }
    }
}

/// Request body for changing a guest's password.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct ChangePasswordRequest {
    pub user_id: Uuid,
    #[validate(length(min = 1, message = "Current password is required"))]
    #[schema(format = "password")]
    pub current_password: String,
    #[validate(length(min = 8, max = 72, message = "New password must be at least 8 characters"))]
    #[schema(format = "password", min_length = 8, max_length = 72)]
    pub new_password: String,
}

/// Request body for saving room preferences.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct SavePreferencesRequest {
    pub user_id: Uuid,
    pub bed_type: Option<String>,
    pub room_view: Option<String>,
    pub floor_preference: Option<String>,
    #[serde(rename = "extraPillows", default)]
    pub extra_pillows: bool,
    #[serde(rename = "extraBeds", default)]
    pub extra_beds: bool,
    #[serde(rename = "extraTowels", default)]
    pub extra_towels: bool,
    #[serde(rename = "earlyCheckIn", default)]
    pub early_check_in: bool,
}

impl SavePreferencesRequest {
    /// Converts the request DTO into a preferences command.
    pub fn into_command(self) -> SavePreferencesCommand {
        SavePreferencesCommand {
            guest_user_id: self.user_id,
            bed_type: self.bed_type,
            room_view: self.room_view,
            floor_preference: self.floor_preference,
            extra_pillows: self.extra_pillows,
            extra_beds: self.extra_beds,
            extra_towels: self.extra_towels,
            early_check_in: self.early_check_in,
        }
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Response body for guest profile data (excludes the password hash).
#[derive(Debug, Serialize, ToSchema)]
pub struct GuestResponse {
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile_number: String,
    pub facial_id_consent: bool,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
}

impl From<Guest> for GuestResponse {
    fn from(guest: Guest) -> Self {
        Self {
            user_id: guest.user_id,
            first_name: guest.first_name,
            last_name: guest.last_name,
            email: guest.email,
            mobile_number: guest.mobile_number,
            facial_id_consent: guest.facial_id_consent,
            created_at: guest.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guest_response_never_carries_the_hash() {
        let guest = Guest {
            id: 1,
            user_id: Uuid::new_v4(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            mobile_number: "123".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            facial_id_consent: true,
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&GuestResponse::from(guest)).unwrap();
        assert!(!json.contains("argon2"));
        assert!(!json.contains("password"));
    }

    #[test]
    fn preference_flags_parse_from_camel_case() {
        let json = serde_json::json!({
            "user_id": Uuid::new_v4(),
            "bed_type": "Queen",
            "extraPillows": true,
            "earlyCheckIn": true
        });
        let request: SavePreferencesRequest = serde_json::from_value(json).unwrap();
        assert!(request.extra_pillows);
        assert!(request.early_check_in);
        assert!(!request.extra_beds);
        assert_eq!(request.bed_type.as_deref(), Some("Queen"));
    }
}
