//! Idempotent startup seeding.
//!
//! Ensures the default staff account and the four sample pets exist. Each
//! row is inserted only if no existing row shares its unique key (email for
//! users, name for pets), so re-running at every startup never duplicates
//! data. The whole batch runs in one transaction; on failure it is rolled
//! back and logged, never raised to the caller.

use sqlx::SqlitePool;

use crate::auth::hash_password;
use crate::Error;

const DEFAULT_STAFF: (&str, &str, &str) = ("Pet Rescue Team", "team@petrescue.co", "adminPass");

const SAMPLE_PETS: [(&str, &str, &str); 4] = [
    (
        "Nelly",
        "5 weeks",
        "I am a tiny kitten rescued by the good people at Paws Rescue Center. \
         I love squeaky toys and cuddles.",
    ),
    (
        "Yuki",
        "8 months",
        "I am a handsome gentle-cat. I like to dress up in bow ties.",
    ),
    ("Basker", "1 year", "I love barking. But, I love my friends more."),
    ("Mr. Furrkins", "5 years", "Probably napping."),
];

/// Insert the default user and sample pets where missing. Errors are logged
/// and swallowed; a failed seed leaves the database untouched.
pub async fn seed_defaults(pool: &SqlitePool) {
    if let Err(err) = try_seed(pool).await {
        tracing::error!(error = %err, "seeding default rows failed, batch rolled back");
    }
}

async fn try_seed(pool: &SqlitePool) -> Result<(), Error> {
    let mut tx = pool.begin().await?;

    let (full_name, email, password) = DEFAULT_STAFF;
    let existing: Option<(i64,)> = sqlx::query_as("SELECT id FROM users WHERE email = ?")
        .bind(email)
        .fetch_optional(&mut *tx)
        .await?;
    if existing.is_none() {
        let password_hash = hash_password(password)?;
        sqlx::query("INSERT INTO users (full_name, email, password_hash) VALUES (?, ?, ?)")
            .bind(full_name)
            .bind(email)
            .bind(&password_hash)
            .execute(&mut *tx)
            .await?;
    }

    for (name, age, bio) in SAMPLE_PETS {
        let existing: Option<(i64,)> = sqlx::query_as("SELECT id FROM pets WHERE name = ?")
            .bind(name)
            .fetch_optional(&mut *tx)
            .await?;
        if existing.is_none() {
            sqlx::query("INSERT INTO pets (name, age, bio) VALUES (?, ?, ?)")
                .bind(name)
                .bind(age)
                .bind(bio)
                .execute(&mut *tx)
                .await?;
        }
    }

    tx.commit().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{connect, ensure_schema};
    use crate::models::{Pet, User};

    async fn pool() -> SqlitePool {
        let pool = connect("sqlite::memory:").await.unwrap();
        ensure_schema(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn seeding_twice_is_idempotent() {
        let pool = pool().await;

        seed_defaults(&pool).await;
        seed_defaults(&pool).await;

        let users: Vec<User> = sqlx::query_as("SELECT * FROM users")
            .fetch_all(&pool)
            .await
            .unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].email, "team@petrescue.co");

        let pets = Pet::list(&pool).await.unwrap();
        assert_eq!(pets.len(), 4);
        let names: Vec<&str> = pets.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Nelly", "Yuki", "Basker", "Mr. Furrkins"]);
    }

    #[tokio::test]
    async fn seeded_staff_password_is_hashed() {
        let pool = pool().await;
        seed_defaults(&pool).await;

        let user = User::find_by_email(&pool, "team@petrescue.co")
            .await
            .unwrap()
            .unwrap();
        assert_ne!(user.password_hash, "adminPass");
        assert!(crate::auth::verify_password("adminPass", &user.password_hash).unwrap());
    }
}
