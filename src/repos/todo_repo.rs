/*
 * Responsibility
 * - todo table CRUD via SQLx, taking a PgPool
 * - Every by-id statement filters on BOTH id AND user_id, so a todo owned by
 *   another account behaves exactly like a missing one (no existence leak)
 */
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoError;

// user_id stays out of the row: callers already know the owner (it is the
// filter), and responses must not echo it.
#[derive(Debug, Clone, FromRow)]
pub struct TodoRow {
    pub id: Uuid,
    pub description: String,
    pub is_complete: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub async fn list(db: &PgPool, user_id: Uuid) -> Result<Vec<TodoRow>, RepoError> {
    let rows = sqlx::query_as::<_, TodoRow>(
        r#"
        SELECT id, description, is_complete, created_at, updated_at
        FROM todo
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn create(db: &PgPool, user_id: Uuid, description: &str) -> Result<TodoRow, RepoError> {
    let row = sqlx::query_as::<_, TodoRow>(
        r#"
        INSERT INTO todo (user_id, description)
        VALUES ($1, $2)
        RETURNING id, description, is_complete, created_at, updated_at
        "#,
    )
    .bind(user_id)
    .bind(description)
    .fetch_one(db)
    .await?;

    Ok(row)
}

pub async fn get(db: &PgPool, id: Uuid, user_id: Uuid) -> Result<Option<TodoRow>, RepoError> {
    let row = sqlx::query_as::<_, TodoRow>(
        r#"
        SELECT id, description, is_complete, created_at, updated_at
        FROM todo
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn update(
    db: &PgPool,
    id: Uuid,
    user_id: Uuid,
    description: &str,
) -> Result<Option<TodoRow>, RepoError> {
    let row = sqlx::query_as::<_, TodoRow>(
        r#"
        UPDATE todo
        SET description = $3, updated_at = now()
        WHERE id = $1 AND user_id = $2
        RETURNING id, description, is_complete, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(description)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn delete(db: &PgPool, id: Uuid, user_id: Uuid) -> Result<bool, RepoError> {
    let result = sqlx::query(
        r#"
        DELETE FROM todo
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(id)
    .bind(user_id)
    .execute(db)
    .await?;

    Ok(result.rows_affected() > 0)
}

// Single-statement flip keeps the toggle atomic without a transaction.
pub async fn toggle(db: &PgPool, id: Uuid, user_id: Uuid) -> Result<Option<TodoRow>, RepoError> {
    let row = sqlx::query_as::<_, TodoRow>(
        r#"
        UPDATE todo
        SET is_complete = NOT is_complete, updated_at = now()
        WHERE id = $1 AND user_id = $2
        RETURNING id, description, is_complete, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}
