use std::sync::Arc;

use api::v1::{CreateTodo, Todo, TodoId, UpdateTodo};
use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    routing::{delete, get, patch, post},
    Json, Router,
};
use tracing::info;

use crate::{error::ApiError, AppState};

type Body<T> = Result<Json<T>, JsonRejection>;
type Id = Result<Path<TodoId>, PathRejection>;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/todos", get(get_todos).post(add_todo))
        .route("/todo/create", post(add_todo))
        // static segment wins over `:id`, so other methods here get 405
        .route("/todos/completed", delete(delete_completed_todos))
        .route(
            "/todos/:id",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .route("/todos/:id/toggle", patch(toggle_todo))
        .route("/generation", get(get_generation))
}

async fn get_generation(State(state): State<Arc<AppState>>) -> Json<u64> {
    Json(state.todos.generation())
}

async fn get_todos(State(state): State<Arc<AppState>>) -> Json<Vec<Todo>> {
    Json(state.todos.list().await)
}

async fn get_todo(State(state): State<Arc<AppState>>, id: Id) -> Result<Json<Todo>, ApiError> {
    let Path(id) = id?;
    Ok(Json(state.todos.get(id).await?))
}

async fn add_todo(
    State(state): State<Arc<AppState>>,
    body: Body<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let Json(input) = body?;
    let todo = state.todos.create(input.title).await?;

    info!(
        id = %todo.id,
        title = %todo.title,
        "created todo"
    );

    Ok((StatusCode::CREATED, Json(todo)))
}

async fn update_todo(
    State(state): State<Arc<AppState>>,
    id: Id,
    body: Body<UpdateTodo>,
) -> Result<Json<Todo>, ApiError> {
    let Path(id) = id?;
    let Json(input) = body?;
    let todo = state.todos.update(id, input.title, input.completed).await?;

    info!(
        id = %todo.id,
        title = ?todo.title,
        completed = todo.completed,
        "updated todo"
    );

    Ok(Json(todo))
}

async fn toggle_todo(State(state): State<Arc<AppState>>, id: Id) -> Result<Json<Todo>, ApiError> {
    let Path(id) = id?;
    let todo = state.todos.toggle(id).await?;

    info!(
        id = %todo.id,
        completed = todo.completed,
        "toggled todo"
    );

    Ok(Json(todo))
}

async fn delete_todo(State(state): State<Arc<AppState>>, id: Id) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    state.todos.delete(id).await?;

    info!(id = %id, "deleted todo");

    Ok(StatusCode::NO_CONTENT)
}

async fn delete_completed_todos(State(state): State<Arc<AppState>>) -> Json<usize> {
    let removed = state.todos.clear_completed().await;

    info!(removed, "deleted completed todos");

    Json(removed)
}
