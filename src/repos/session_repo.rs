/*
 * Responsibility
 * - Read-only lookup against the identity provider's auth.session table
 * - The session store is the source of truth for token validity; no caching,
 *   every call re-queries so expiry is always evaluated against fresh data
 */
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoError;

#[derive(Debug, FromRow)]
pub struct SessionRow {
    pub id: Uuid,
    #[sqlx(rename = "userId")]
    pub user_id: Uuid,
    #[sqlx(rename = "expiresAt")]
    pub expires_at: DateTime<Utc>,
}

// A session is live iff its stored token matches AND it has not expired.
// Both conditions go into the WHERE clause so an expired session is
// indistinguishable from an unknown token at this layer.
pub async fn find_valid(
    db: &PgPool,
    token: &str,
    now: DateTime<Utc>,
) -> Result<Option<SessionRow>, RepoError> {
    let row = sqlx::query_as::<_, SessionRow>(
        r#"
        SELECT id, "userId", "expiresAt"
        FROM auth.session
        WHERE token = $1 AND "expiresAt" > $2
        "#,
    )
    .bind(token)
    .bind(now)
    .fetch_optional(db)
    .await?;

    Ok(row)
}
