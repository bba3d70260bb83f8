//! Store error taxonomy shared by every row operation.

use thiserror::Error;

/// Errors produced by the data layer.
#[derive(Debug, Error)]
pub enum Error {
    /// No row matched the given id.
    #[error("no row matched the given id")]
    NotFound,

    /// A commit hit a unique constraint (duplicate `users.email` or
    /// `pets.name`). Callers surface this as an inline form message.
    #[error("a row with this unique value already exists")]
    Duplicate,

    /// Any other database failure.
    #[error(transparent)]
    Database(sqlx::Error),

    /// Password hashing or verification failed.
    #[error("password hashing failed: {0}")]
    PasswordHash(String),
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => Error::Duplicate,
            sqlx::Error::RowNotFound => Error::NotFound,
            _ => Error::Database(err),
        }
    }
}
