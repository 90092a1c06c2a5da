//! Conversions from infrastructure errors into domain errors.

use rusqlite::Error as SqlError;
use taqwa_domain::TaqwaError;

/// Error newtype that keeps conversions on the infrastructure side and can
/// be converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub TaqwaError);

impl From<InfraError> for TaqwaError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        use rusqlite::ffi::ErrorCode;

        let mapped = match value {
            SqlError::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match err.code {
                    ErrorCode::DatabaseBusy => TaqwaError::Storage("database is busy".into()),
                    ErrorCode::DatabaseLocked => TaqwaError::Storage("database is locked".into()),
                    ErrorCode::DiskFull => TaqwaError::Storage("disk is full".into()),
                    _ => TaqwaError::Storage(format!(
                        "sqlite failure {:?} (code {}): {message}",
                        err.code, err.extended_code
                    )),
                }
            }
            SqlError::QueryReturnedNoRows => {
                TaqwaError::NotFound("no rows returned by query".into())
            }
            SqlError::FromSqlConversionFailure(_, _, cause) => {
                TaqwaError::Storage(format!("failed to convert sqlite value: {cause}"))
            }
            SqlError::InvalidColumnType(_, _, ty) => {
                TaqwaError::Storage(format!("invalid column type: {ty}"))
            }
            other => TaqwaError::Storage(other.to_string()),
        };

        InfraError(mapped)
    }
}

impl From<r2d2::Error> for InfraError {
    fn from(value: r2d2::Error) -> Self {
        InfraError(TaqwaError::Storage(format!("connection pool error: {value}")))
    }
}
