/*
 * Responsibility
 * - Shared context attached to the Router (AppState)
 *   - db: PgPool, accepted auth cookie names
 * - Clone is expected to be cheap (Arc / pool handles internally)
 */
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: sqlx::PgPool,
    pub auth_cookie_names: Arc<Vec<String>>,
}

impl AppState {
    pub fn new(db: sqlx::PgPool, auth_cookie_names: Vec<String>) -> Self {
        Self {
            db,
            auth_cookie_names: Arc::new(auth_cookie_names),
        }
    }
}
