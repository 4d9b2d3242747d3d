/*
 * Responsibility
 * - GET /auth/me — echo the authenticated account's profile
 * - The heavy lifting already happened in the session middleware
 */
use axum::Json;

use crate::{
    api::v1::{dto::users::UserResponse, extractors::AuthCtxExtractor},
    error::AppError,
};

pub async fn me(AuthCtxExtractor(ctx): AuthCtxExtractor) -> Result<Json<UserResponse>, AppError> {
    Ok(Json(UserResponse::from(ctx.user)))
}
