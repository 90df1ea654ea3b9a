use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::error::AppError;

/// Converts Diesel database errors into structured `AppError` variants.
///
/// Unique-constraint violations become `Duplicate` with the table and column
/// taken from the error metadata; everything else is wrapped as a `Database`
/// error carrying the operation context.
pub struct DatabaseErrorConverter;

impl DatabaseErrorConverter {
    /// Converts a Diesel error to an appropriate AppError variant.
    ///
    /// # Arguments
    /// * `error` - The Diesel error to convert
    /// * `operation` - Description of the database operation that failed
    pub fn convert_diesel_error(error: DieselError, operation: &str) -> AppError {
        match error {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                AppError::Duplicate {
                    entity: info.table_name().unwrap_or("record").to_string(),
                    field: info.column_name().unwrap_or("field").to_string(),
                    value: info
                        .details()
                        .map(|d| d.to_string())
                        .unwrap_or_else(|| "unknown".to_string()),
                }
            }
            DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
                AppError::Validation {
                    field: info.column_name().unwrap_or("reference").to_string(),
                    reason: "referenced record does not exist".to_string(),
                }
            }
            DieselError::NotFound => AppError::NotFound {
                entity: "resource".to_string(),
                field: "id".to_string(),
                value: "unknown".to_string(),
            },
            other => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::from(other),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_not_found() {
        let result = DatabaseErrorConverter::convert_diesel_error(DieselError::NotFound, "find");
        assert!(matches!(result, AppError::NotFound { .. }));
    }

    #[test]
    fn rollback_maps_to_database_error() {
        let result = DatabaseErrorConverter::convert_diesel_error(
            DieselError::RollbackTransaction,
            "create booking",
        );
        match result {
            AppError::Database { operation, .. } => assert_eq!(operation, "create booking"),
            other => panic!("expected Database error, got {other:?}"),
        }
    }
}
