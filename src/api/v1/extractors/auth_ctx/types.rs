/*
 * Responsibility
 * - The "authenticated context" type handlers see
 * - The middleware validates the session and stores this in request
 *   extensions; handlers only ever receive this type
 *
 * Notes
 * - Token extraction / session lookup logic lives in middleware/services
 * - This is a contract type: keep it stable while the scaffold grows
 */

use crate::repos::user_repo::UserRow;

/// Context attached to an authenticated request.
///
/// Carries the resolved account row; the owning `user.id` is what scopes
/// every todo operation.
#[derive(Debug, Clone)]
pub struct AuthCtx {
    pub user: UserRow,
}

impl AuthCtx {
    pub fn new(user: UserRow) -> Self {
        Self { user }
    }
}
