//! # User model — rescue-center staff accounts
//!
//! One row per staff account in the `users` table:
//!
//! - `id` — integer primary key, auto-assigned, stable for the row's life.
//! - `full_name` — display name collected at signup.
//! - `email` — unique across all users; the login identifier.
//! - `password_hash` — Argon2id PHC string, never the plaintext password.
//!
//! Rows are created only by signup (and the seed initializer); no handler
//! ever updates or deletes a user.

use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use crate::auth::{hash_password, verify_password};
use crate::Error;

/// Full user record from the database.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
}

impl User {
    /// Insert a new user, hashing the given plaintext password.
    ///
    /// A duplicate email surfaces as [`Error::Duplicate`] from the
    /// database's unique constraint; nothing is checked up front, so two
    /// racing signups still resolve correctly at commit time.
    pub async fn create(
        pool: &SqlitePool,
        full_name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, Error> {
        let password_hash = hash_password(password)?;
        let user = sqlx::query_as(
            "INSERT INTO users (full_name, email, password_hash) VALUES (?, ?, ?) RETURNING *",
        )
        .bind(full_name)
        .bind(email)
        .bind(&password_hash)
        .fetch_one(pool)
        .await?;
        Ok(user)
    }

    pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, Error> {
        let user = sqlx::query_as("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(pool)
            .await?;
        Ok(user)
    }

    /// Look up a user by email and verify the password against the stored
    /// hash. Returns `None` for an unknown email or a wrong password; the
    /// caller cannot tell which, matching the single "wrong credentials"
    /// message shown to the user.
    pub async fn authenticate(
        pool: &SqlitePool,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, Error> {
        let Some(user) = User::find_by_email(pool, email).await? else {
            return Ok(None);
        };
        if verify_password(password, &user.password_hash)? {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }
}
