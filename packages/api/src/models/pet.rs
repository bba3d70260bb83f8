//! # Pet model — adoptable animals
//!
//! One row per animal in the `pets` table:
//!
//! - `id` — integer primary key, auto-assigned.
//! - `name` — unique across all pets.
//! - `age` — free-text descriptor ("5 weeks"), not numeric.
//! - `bio` — free-text description.
//! - `posted_by` — optional reference to the posting user; the seeded
//!   sample pets have no owner set.
//!
//! Pets are created only by the seed initializer; the handlers can update
//! name/age/bio and delete rows.

use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use crate::Error;

#[derive(Debug, Clone, FromRow, Serialize, PartialEq)]
pub struct Pet {
    pub id: i64,
    pub name: String,
    pub age: String,
    pub bio: String,
    pub posted_by: Option<i64>,
}

impl Pet {
    /// All pets, ordered by id ascending.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Pet>, Error> {
        let pets = sqlx::query_as("SELECT * FROM pets ORDER BY id")
            .fetch_all(pool)
            .await?;
        Ok(pets)
    }

    pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<Pet>, Error> {
        let pet = sqlx::query_as("SELECT * FROM pets WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(pet)
    }

    /// Overwrite name, age, and bio on an existing row.
    ///
    /// A name already used by another pet surfaces as [`Error::Duplicate`]
    /// and leaves the stored row unchanged; an unknown id is
    /// [`Error::NotFound`].
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        name: &str,
        age: &str,
        bio: &str,
    ) -> Result<Pet, Error> {
        let pet: Option<Pet> =
            sqlx::query_as("UPDATE pets SET name = ?, age = ?, bio = ? WHERE id = ? RETURNING *")
                .bind(name)
                .bind(age)
                .bind(bio)
                .bind(id)
                .fetch_optional(pool)
                .await?;
        pet.ok_or(Error::NotFound)
    }

    /// Delete the row with the given id. Unknown ids are [`Error::NotFound`].
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), Error> {
        let result = sqlx::query("DELETE FROM pets WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{connect, ensure_schema, seed_defaults};

    async fn seeded_pool() -> SqlitePool {
        let pool = connect("sqlite::memory:").await.unwrap();
        ensure_schema(&pool).await.unwrap();
        seed_defaults(&pool).await;
        pool
    }

    #[tokio::test]
    async fn list_is_ordered_by_id() {
        let pool = seeded_pool().await;
        let pets = Pet::list(&pool).await.unwrap();
        let ids: Vec<i64> = pets.iter().map(|p| p.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[tokio::test]
    async fn find_unknown_id_is_none() {
        let pool = seeded_pool().await;
        assert!(Pet::find(&pool, 999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_overwrites_all_three_fields() {
        let pool = seeded_pool().await;
        let nelly = Pet::list(&pool).await.unwrap().remove(0);

        let updated = Pet::update(&pool, nelly.id, "Nelly II", "6 weeks", "Still tiny.")
            .await
            .unwrap();
        assert_eq!(updated.name, "Nelly II");
        assert_eq!(updated.age, "6 weeks");
        assert_eq!(updated.bio, "Still tiny.");

        let stored = Pet::find(&pool, nelly.id).await.unwrap().unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn update_to_existing_name_keeps_stored_row() {
        let pool = seeded_pool().await;
        let nelly = Pet::list(&pool).await.unwrap().remove(0);

        let err = Pet::update(&pool, nelly.id, "Yuki", "5 weeks", "bio")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Duplicate));

        let stored = Pet::find(&pool, nelly.id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Nelly");
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let pool = seeded_pool().await;
        let err = Pet::update(&pool, 999, "Ghost", "?", "?").await.unwrap_err();
        assert!(matches!(err, Error::NotFound));
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_row() {
        let pool = seeded_pool().await;
        let pets = Pet::list(&pool).await.unwrap();
        let victim = pets[0].id;

        Pet::delete(&pool, victim).await.unwrap();
        assert!(Pet::find(&pool, victim).await.unwrap().is_none());
        assert_eq!(Pet::list(&pool).await.unwrap().len(), pets.len() - 1);

        let err = Pet::delete(&pool, victim).await.unwrap_err();
        assert!(matches!(err, Error::NotFound));
    }
}
