//! Guest account service.
//!
//! Registration, profile reads and updates, password changes and room
//! preference storage. Each successful mutation appends an activity entry.

use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{Guest, NewActivityLog, NewGuest, RoomPreference, UpdateGuest};
use crate::repositories::{ActivityLogRepository, GuestRepository, PreferenceRepository};
use crate::utils::password::{hash_password, verify_password};

/// Everything needed to open a guest account.
#[derive(Debug, Clone)]
pub struct RegisterGuestCommand {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile_number: String,
    pub password: String,
    pub facial_id_consent: bool,
}

/// A guest's saved room preferences, keyed by their external identity.
#[derive(Debug, Clone)]
pub struct SavePreferencesCommand {
    pub guest_user_id: Uuid,
    pub bed_type: Option<String>,
    pub room_view: Option<String>,
    pub floor_preference: Option<String>,
    pub extra_pillows: bool,
    pub extra_beds: bool,
    pub extra_towels: bool,
    pub early_check_in: bool,
}

/// Service for guest account operations.
#[derive(Clone)]
pub struct GuestService {
    guests: GuestRepository,
    preferences: PreferenceRepository,
    activity_logs: ActivityLogRepository,
}

impl GuestService {
    pub fn new(
        guests: GuestRepository,
        preferences: PreferenceRepository,
        activity_logs: ActivityLogRepository,
    ) -> Self {
        Self {
            guests,
            preferences,
            activity_logs,
        }
    }

    /// Registers a new guest account.
    ///
    /// The email must be unused; the password is stored as an Argon2id hash
    /// and the account is assigned a fresh external identity.
    pub async fn register(&self, command: RegisterGuestCommand) -> AppResult<Guest> {
        if self.guests.find_by_email(&command.email).await?.is_some() {
            return Err(AppError::Duplicate {
                entity: "guest".to_string(),
                field: "email".to_string(),
                value: command.email,
            });
        }

        let password_hash = hash_password(&command.password)?;
        let guest = self
            .guests
            .create(NewGuest {
                user_id: Uuid::new_v4(),
                first_name: command.first_name,
                last_name: command.last_name,
                email: command.email,
                mobile_number: command.mobile_number,
                password_hash,
                facial_id_consent: command.facial_id_consent,
            })
            .await?;

        info!(guest_id = guest.id, "guest registered");
        self.record_activity(&guest, format!("{} registered an account", guest.email))
            .await;
        Ok(guest)
    }

    /// Loads a guest's profile by their external identity.
    pub async fn get_profile(&self, guest_user_id: Uuid) -> AppResult<Guest> {
        self.find_guest(guest_user_id).await
    }

    /// Updates a guest's profile details; absent fields keep their value.
    pub async fn update_profile(
        &self,
        guest_user_id: Uuid,
        update: UpdateGuest,
    ) -> AppResult<Guest> {
        // Existence check first so an unknown identity reads as 404 rather
        // than an empty update error.
        self.find_guest(guest_user_id).await?;

        if let Some(new_email) = update.email.as_deref() {
            if let Some(other) = self.guests.find_by_email(new_email).await? {
                if other.user_id != guest_user_id {
                    return Err(AppError::Duplicate {
                        entity: "guest".to_string(),
                        field: "email".to_string(),
                        value: new_email.to_string(),
                    });
                }
            }
        }

        let guest = self.guests.update_details(guest_user_id, update).await?;
        info!(guest_id = guest.id, "guest profile updated");
        self.record_activity(&guest, format!("{} updated their profile", guest.email))
            .await;
        Ok(guest)
    }

    /// Changes a guest's password after verifying the current one.
    pub async fn change_password(
        &self,
        guest_user_id: Uuid,
        current_password: &str,
        new_password: &str,
    ) -> AppResult<()> {
        let guest = self.find_guest(guest_user_id).await?;

        if !verify_password(current_password, &guest.password_hash)? {
            return Err(AppError::Unauthorized {
                message: "current password is incorrect".to_string(),
            });
        }

        let new_hash = hash_password(new_password)?;
        self.guests
            .update_password_hash(guest_user_id, &new_hash)
            .await?;

        info!(guest_id = guest.id, "guest password changed");
        self.record_activity(&guest, format!("{} changed their password", guest.email))
            .await;
        Ok(())
    }

    /// Saves (or replaces) a guest's room preferences.
    pub async fn save_preferences(
        &self,
        command: SavePreferencesCommand,
    ) -> AppResult<RoomPreference> {
        let guest = self.find_guest(command.guest_user_id).await?;

        let saved = self
            .preferences
            .upsert(RoomPreference {
                guest_id: guest.id,
                bed_type: command.bed_type,
                room_view: command.room_view,
                floor_preference: command.floor_preference,
                extra_pillows: command.extra_pillows,
                extra_beds: command.extra_beds,
                extra_towels: command.extra_towels,
                early_check_in: command.early_check_in,
            })
            .await?;

        info!(guest_id = guest.id, "room preferences saved");
        Ok(saved)
    }

    async fn find_guest(&self, guest_user_id: Uuid) -> AppResult<Guest> {
        self.guests
            .find_by_user_id(guest_user_id)
            .await?
            .ok_or_else(|| AppError::NotFound {
                entity: "guest".to_string(),
                field: "user_id".to_string(),
                value: guest_user_id.to_string(),
            })
    }

    async fn record_activity(&self, guest: &Guest, activity: String) {
        let entry = NewActivityLog {
            guest_id: Some(guest.id),
            email: guest.email.clone(),
            activity,
        };
        if let Err(error) = self.activity_logs.create(entry).await {
            warn!(%error, "failed to record guest activity");
        }
    }
}
