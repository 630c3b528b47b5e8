//! Schema setup for the contacts table

use sqlx::PgPool;

use crate::db::repos::DbError;

/// Create the contacts table and its index if they don't exist.
///
/// Idempotent; runs once at startup before the server accepts requests.
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running contacts migration...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS contacts (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            message TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Listing reads oldest-first
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_contacts_created ON contacts(created_at)")
        .execute(pool)
        .await?;

    tracing::info!("Contacts migration complete");
    Ok(())
}
