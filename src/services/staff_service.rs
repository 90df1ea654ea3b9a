//! Staff administration service.
//!
//! Staff accounts, the guest blacklist and the activity log feed. Every
//! blacklist addition is attributed to the staff member who requested it.

use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::{
    ActivityLog, BlacklistEntry, Employee, NewActivityLog, NewBlacklistEntry, NewEmployee,
};
use crate::repositories::{
    ActivityLogRepository, BlacklistRepository, GuestRepository, StaffRepository,
};
use crate::utils::password::hash_password;

/// Everything needed to blacklist a guest.
#[derive(Debug, Clone)]
pub struct BlacklistGuestCommand {
    pub guest_email: String,
    pub reason: String,
    pub staff_email: String,
}

/// Service for staff administration operations.
#[derive(Clone)]
pub struct StaffService {
    staff: StaffRepository,
    blacklist: BlacklistRepository,
    guests: GuestRepository,
    activity_logs: ActivityLogRepository,
}

impl StaffService {
    pub fn new(
        staff: StaffRepository,
        blacklist: BlacklistRepository,
        guests: GuestRepository,
        activity_logs: ActivityLogRepository,
    ) -> Self {
        Self {
            staff,
            blacklist,
            guests,
            activity_logs,
        }
    }

    /// Blacklists a guest by email, attributed to the requesting staff member.
    pub async fn blacklist_guest(
        &self,
        command: BlacklistGuestCommand,
    ) -> AppResult<BlacklistEntry> {
        let guest = self
            .guests
            .find_by_email(&command.guest_email)
            .await?
            .ok_or_else(|| AppError::NotFound {
                entity: "guest".to_string(),
                field: "email".to_string(),
                value: command.guest_email.clone(),
            })?;

        let staff = self
            .staff
            .find_by_email(&command.staff_email)
            .await?
            .ok_or_else(|| AppError::NotFound {
                entity: "employee".to_string(),
                field: "email".to_string(),
                value: command.staff_email.clone(),
            })?;

        let entry = self
            .blacklist
            .create(NewBlacklistEntry {
                email: guest.email.clone(),
                reason: command.reason,
                added_by: staff.id,
            })
            .await?;

        info!(guest_id = guest.id, staff_id = staff.id, "guest blacklisted");
        let log = NewActivityLog {
            guest_id: Some(guest.id),
            email: guest.email,
            activity: format!("blacklisted by {}", staff.email),
        };
        if let Err(error) = self.activity_logs.create(log).await {
            tracing::warn!(%error, "failed to record blacklist activity");
        }
        Ok(entry)
    }

    /// Lists every blacklist entry.
    pub async fn list_blacklisted(&self) -> AppResult<Vec<BlacklistEntry>> {
        self.blacklist.list_all().await
    }

    /// Lists all staff members.
    pub async fn list_staff(&self) -> AppResult<Vec<Employee>> {
        self.staff.list_all().await
    }

    /// Creates a new staff account with a hashed password.
    pub async fn add_staff(
        &self,
        full_name: String,
        email: String,
        password: &str,
    ) -> AppResult<Employee> {
        if self.staff.find_by_email(&email).await?.is_some() {
            return Err(AppError::Duplicate {
                entity: "employee".to_string(),
                field: "email".to_string(),
                value: email,
            });
        }

        let password_hash = hash_password(password)?;
        let employee = self
            .staff
            .create(NewEmployee {
                email,
                full_name,
                password_hash,
                active: true,
            })
            .await?;

        info!(staff_id = employee.id, "staff member added");
        Ok(employee)
    }

    /// Deletes a staff account.
    pub async fn delete_staff(&self, staff_id: i32) -> AppResult<()> {
        let affected = self.staff.delete(staff_id).await?;
        if affected == 0 {
            return Err(AppError::NotFound {
                entity: "employee".to_string(),
                field: "id".to_string(),
                value: staff_id.to_string(),
            });
        }
        info!(staff_id, "staff member deleted");
        Ok(())
    }

    /// Returns the activity log feed, newest first.
    pub async fn retrieve_logs(&self) -> AppResult<Vec<ActivityLog>> {
        self.activity_logs.list_all().await
    }
}
