//! Contact repository
//!
//! One insert per submission, one unfiltered read for listing. Identity and
//! creation timestamp come back from the store via RETURNING.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::models::ContactSubmission;

/// Contact record from database
#[derive(Debug, Clone, FromRow)]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Contact repository
pub struct ContactRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ContactRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert one contact record. At most one row per call, no retry.
    pub async fn create(&self, submission: ContactSubmission) -> Result<Contact, DbError> {
        let contact: Contact = sqlx::query_as(
            r#"
            INSERT INTO contacts (name, email, message)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, message, created_at
            "#,
        )
        .bind(submission.name())
        .bind(submission.email())
        .bind(submission.message())
        .fetch_one(self.pool)
        .await?;

        Ok(contact)
    }

    /// List every contact record, oldest first. Unbounded by design.
    pub async fn list(&self) -> Result<Vec<Contact>, DbError> {
        let contacts: Vec<Contact> = sqlx::query_as(
            r#"
            SELECT id, name, email, message, created_at
            FROM contacts
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(contacts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations};

    // Integration tests - run with DATABASE_URL set
    // cargo test -p contactd-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn submit_then_list_round_trip() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migration failed");

        let repo = ContactRepo::new(&pool);
        let submission =
            ContactSubmission::new("Ada", "ada@example.com", "hi").expect("valid submission");
        let created = repo.create(submission).await.expect("insert failed");

        assert_eq!(created.name, "Ada");
        assert_eq!(created.email, "ada@example.com");
        assert_eq!(created.message, "hi");

        let all = repo.list().await.expect("list failed");
        assert!(all.iter().any(|c| c.id == created.id
            && c.name == "Ada"
            && c.email == "ada@example.com"
            && c.message == "hi"));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_is_oldest_first() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migration failed");

        let repo = ContactRepo::new(&pool);
        let first = repo
            .create(ContactSubmission::new("a", "a@example.com", "first").expect("valid"))
            .await
            .expect("insert failed");
        let second = repo
            .create(ContactSubmission::new("b", "b@example.com", "second").expect("valid"))
            .await
            .expect("insert failed");

        let all = repo.list().await.expect("list failed");
        let pos_first = all.iter().position(|c| c.id == first.id).expect("first present");
        let pos_second = all.iter().position(|c| c.id == second.id).expect("second present");
        assert!(pos_first < pos_second);
    }
}
