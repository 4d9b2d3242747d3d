//! Session validation middleware → puts AuthCtx into request extensions.
//!
//! The gate for every protected route:
//! 1. extract the canonical token (header, then configured cookies)
//! 2. look up a live session (token match + expiry strictly in the future)
//! 3. resolve the owning account
//!
//! Every failure collapses into the same 401. Which factor failed (missing
//! token, expired session, vanished account) is visible in the logs only,
//! never in the response — distinguishing them would leak information.

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};
use chrono::Utc;

use crate::api::v1::extractors::AuthCtx;
use crate::error::AppError;
use crate::repos::{session_repo, user_repo};
use crate::services::auth::token;
use crate::state::AppState;

/// Apply session authentication to a router scope.
///
/// Example:
/// ```ignore
/// let v1 = middleware::auth::session::apply(api::v1::routes(), state.clone());
/// app = app.nest("/api/v1", v1);
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8's from_fn cannot take a State extractor; pass state explicitly.
    router.layer(middleware::from_fn_with_state(state, session_middleware))
}

async fn session_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let Some(session_token) = token::extract(req.headers(), &state.auth_cookie_names) else {
        tracing::warn!("no session token in request");
        return Err(AppError::Unauthorized);
    };

    // Timezone-aware comparison end to end: Utc::now() against a timestamptz
    // column, never a naive timestamp.
    let session = match session_repo::find_valid(&state.db, &session_token, Utc::now()).await {
        Ok(Some(session)) => session,
        Ok(None) => {
            tracing::warn!("session token did not match a live session");
            return Err(AppError::Unauthorized);
        }
        Err(err) => {
            tracing::error!(error = ?err, "session lookup failed");
            return Err(AppError::Internal);
        }
    };

    tracing::debug!(
        session_id = %session.id,
        expires_at = %session.expires_at,
        "session validated"
    );

    let user = match user_repo::get(&state.db, session.user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            tracing::warn!(user_id = %session.user_id, "session resolved to a missing account");
            return Err(AppError::Unauthorized);
        }
        Err(err) => {
            tracing::error!(error = ?err, "account lookup failed");
            return Err(AppError::Internal);
        }
    };

    // middleware → extractor hand-off
    req.extensions_mut().insert(AuthCtx::new(user));

    Ok(next.run(req).await)
}
