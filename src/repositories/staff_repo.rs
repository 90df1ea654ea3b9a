//! Staff repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppResult;
use crate::models::{Employee, NewEmployee};

/// Staff repository holding an async connection pool.
#[derive(Clone)]
pub struct StaffRepository {
    pool: AsyncDbPool,
}

impl StaffRepository {
    /// Creates a new StaffRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Lists all staff members ordered by id.
    pub async fn list_all(&self) -> AppResult<Vec<Employee>> {
        use crate::schema::employees::dsl::*;
        let mut conn = self.pool.get().await?;

        employees
            .order(id.asc())
            .select(Employee::as_select())
            .load(&mut conn)
            .await
            .map_err(Into::into)
    }

    /// Finds a staff member by email address.
    pub async fn find_by_email(&self, staff_email: &str) -> AppResult<Option<Employee>> {
        use crate::schema::employees::dsl::*;
        let mut conn = self.pool.get().await?;

        employees
            .filter(email.eq(staff_email))
            .select(Employee::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(Into::into)
    }

    /// Creates a new staff member.
    pub async fn create(&self, new_employee: NewEmployee) -> AppResult<Employee> {
        use crate::schema::employees::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(employees)
            .values(&new_employee)
            .returning(Employee::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(Into::into)
    }

    /// Deletes a staff member, returning the number of affected rows.
    pub async fn delete(&self, staff_id: i32) -> AppResult<usize> {
        use crate::schema::employees::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(employees.filter(id.eq(staff_id)))
            .execute(&mut conn)
            .await
            .map_err(Into::into)
    }
}
