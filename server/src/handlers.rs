//! The five CRUD handlers.
//!
//! Each handler does one store call. Ids are parsed from the path before the
//! store is touched, and on PUT before the body is looked at, so a malformed
//! id is always a 400 regardless of the payload.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use todo_core::{Todo, TodoFields, TodoId};
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::AppState;

type Payload = Result<Json<TodoFields>, JsonRejection>;

#[instrument(skip(state))]
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = state.store.list_all().await?;
    Ok(Json(todos))
}

#[instrument(skip(state, payload))]
pub async fn create_todo(
    State(state): State<AppState>,
    payload: Payload,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let Json(fields) = payload?;
    let todo = state.store.insert(fields).await?;
    info!(id = %todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

#[instrument(skip(state))]
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    let id: TodoId = id.parse()?;
    let todo = state.store.find_by_id(&id).await?;
    Ok(Json(todo))
}

#[instrument(skip(state, payload))]
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Payload,
) -> Result<Json<Todo>, ApiError> {
    let id: TodoId = id.parse()?;
    let Json(fields) = payload?;
    let todo = state.store.update_by_id(&id, fields).await?;
    info!(%id, completed = todo.completed, "updated todo");
    Ok(Json(todo))
}

#[instrument(skip(state))]
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id: TodoId = id.parse()?;
    state.store.delete_by_id(&id).await?;
    info!(%id, "deleted todo");
    Ok(StatusCode::NO_CONTENT)
}
