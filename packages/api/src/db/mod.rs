//! SQLite connection pool and schema bootstrap.
//!
//! The pool is returned to the caller and threaded through handlers as part
//! of the application state; there is no process-global handle.

mod seed;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

pub use seed::seed_defaults;

use crate::Error;

/// Open a connection pool to the given SQLite database URL, creating the
/// database file if it does not exist yet.
///
/// A single connection is enough for this app and keeps SQLite's
/// single-writer model out of the picture.
pub async fn connect(url: &str) -> Result<SqlitePool, Error> {
    let options = SqliteConnectOptions::from_str(url)
        .map_err(Error::from)?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;
    Ok(pool)
}

/// Create the `users` and `pets` tables if they don't exist.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            full_name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS pets (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            age TEXT NOT NULL,
            bio TEXT NOT NULL,
            posted_by INTEGER REFERENCES users(id)
        )",
    )
    .execute(pool)
    .await?;
    Ok(())
}
