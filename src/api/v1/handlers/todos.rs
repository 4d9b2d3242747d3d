/*
 * Responsibility
 * - /todos CRUD handlers
 * - Receive Path/Json via extractors, DTO validation → repo calls
 * - Every repo call is scoped by the authenticated account id from AuthCtx;
 *   a miss on (id, user_id) is always reported as 404
 */
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};
use uuid::Uuid;

use crate::{
    api::v1::{
        dto::todos::{CreateTodoRequest, TodoListResponse, TodoResponse, UpdateTodoRequest},
        extractors::AuthCtxExtractor,
    },
    error::AppError,
    repos::todo_repo,
    state::AppState,
};

pub async fn list_todos(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
) -> Result<Json<TodoListResponse>, AppError> {
    let rows = todo_repo::list(&state.db, ctx.user.id).await?;

    let todos: Vec<TodoResponse> = rows.into_iter().map(TodoResponse::from).collect();
    let count = todos.len();

    Ok(Json(TodoListResponse { todos, count }))
}

pub async fn create_todo(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Json(req): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<TodoResponse>), AppError> {
    let description = req
        .validate()
        .map_err(|msg| AppError::validation("description", msg))?;

    let row = todo_repo::create(&state.db, ctx.user.id, description).await?;

    Ok((StatusCode::CREATED, Json(TodoResponse::from(row))))
}

pub async fn get_todo(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Path(todo_id): Path<Uuid>,
) -> Result<Json<TodoResponse>, AppError> {
    let row = todo_repo::get(&state.db, todo_id, ctx.user.id)
        .await?
        .ok_or(AppError::not_found("todo"))?;

    Ok(Json(TodoResponse::from(row)))
}

pub async fn update_todo(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Path(todo_id): Path<Uuid>,
    Json(req): Json<UpdateTodoRequest>,
) -> Result<Json<TodoResponse>, AppError> {
    let description = req
        .validate()
        .map_err(|msg| AppError::validation("description", msg))?;

    let row = todo_repo::update(&state.db, todo_id, ctx.user.id, description)
        .await?
        .ok_or(AppError::not_found("todo"))?;

    Ok(Json(TodoResponse::from(row)))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Path(todo_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let deleted = todo_repo::delete(&state.db, todo_id, ctx.user.id).await?;

    if deleted {
        Ok(Json(json!({"message": "todo deleted successfully"})))
    } else {
        Err(AppError::not_found("todo"))
    }
}

pub async fn toggle_todo(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Path(todo_id): Path<Uuid>,
) -> Result<Json<TodoResponse>, AppError> {
    let row = todo_repo::toggle(&state.db, todo_id, ctx.user.id)
        .await?
        .ok_or(AppError::not_found("todo"))?;

    Ok(Json(TodoResponse::from(row)))
}
