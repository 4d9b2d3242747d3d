/*
 * Responsibility
 * - Define the v1 URL structure
 * - /todos, /auth/me — the whole router is behind the session gate, which is
 *   applied in app.rs via middleware::auth::session::apply
 */
use axum::{
    Router,
    routing::{get, patch},
};

use crate::state::AppState;

use crate::api::v1::handlers::{
    auth::me,
    todos::{create_todo, delete_todo, get_todo, list_todos, toggle_todo, update_todo},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{todo_id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .route("/todos/{todo_id}/toggle", patch(toggle_todo))
        .route("/auth/me", get(me))
}
