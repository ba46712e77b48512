use crate::domain::todo::driven_ports::{TodoReader, TodoWriter};
use crate::domain::todo::driving_ports::TodoPort;
use crate::routing_utils::{BasicErrorResponse, Json, Path, TodoErrorResponse};
use crate::{AppState, SharedData, domain, dto};
use axum::Router;
use axum::extract::State;
use axum::response::ErrorResponse;
use axum::routing::{get, put};
use std::sync::Arc;
use tracing::info;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(list_todos, create_todo, get_todo, update_todo, toggle_todo, delete_todo),
    components(
        schemas(dto::todo::NewTodo, dto::todo::UpdateTodo, dto::todo::Todo, dto::todo::DeletedTodo),
        responses(BasicErrorResponse)
    )
)]
/// Defines the OpenAPI documentation for the todo API
pub struct TodoApi;
/// Constant used to group todo endpoints in OpenAPI documentation
pub const TODO_API_GROUP: &str = "Todos";

/// Creates a router for endpoints under "/api/todos"
pub fn todo_routes() -> Router<Arc<SharedData>> {
    Router::new()
        .route(
            "/",
            get(|State(app_state): AppState| async move {
                let todo_service = domain::todo::TodoService {};

                list_todos(&todo_service, &app_state.todo_store).await
            })
            .post(
                |State(app_state): AppState, Json(new_todo): Json<dto::todo::NewTodo>| async move {
                    let todo_service = domain::todo::TodoService {};

                    create_todo(new_todo, &todo_service, &app_state.todo_store).await
                },
            ),
        )
        .route(
            "/:todo_id",
            get(
                |State(app_state): AppState, Path(todo_id): Path<i64>| async move {
                    let todo_service = domain::todo::TodoService {};

                    get_todo(todo_id, &todo_service, &app_state.todo_store).await
                },
            )
            .put(
                |State(app_state): AppState,
                 Path(todo_id): Path<i64>,
                 Json(update): Json<dto::todo::UpdateTodo>| async move {
                    let todo_service = domain::todo::TodoService {};

                    update_todo(todo_id, update, &todo_service, &app_state.todo_store).await
                },
            )
            .delete(
                |State(app_state): AppState, Path(todo_id): Path<i64>| async move {
                    let todo_service = domain::todo::TodoService {};

                    delete_todo(todo_id, &todo_service, &app_state.todo_store).await
                },
            ),
        )
        .route(
            "/:todo_id/toggle",
            put(
                |State(app_state): AppState, Path(todo_id): Path<i64>| async move {
                    let todo_service = domain::todo::TodoService {};

                    toggle_todo(todo_id, &todo_service, &app_state.todo_store).await
                },
            ),
        )
}

#[utoipa::path(
    get,
    path = "/api/todos",
    tag = TODO_API_GROUP,
    responses(
        (status = 200, description = "Every todo in creation order", body = [dto::todo::Todo]),
        (status = 500, response = BasicErrorResponse),
    ),
)]
/// Retrieves every todo
async fn list_todos(
    todo_service: &impl TodoPort,
    todo_read: &impl TodoReader,
) -> Result<Json<Vec<dto::todo::Todo>>, ErrorResponse> {
    info!("Requested todos");
    let todos = todo_service
        .list_todos(todo_read)
        .await
        .map_err(TodoErrorResponse::from)?;

    Ok(Json(todos.into_iter().map(dto::todo::Todo::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/todos",
    tag = TODO_API_GROUP,
    request_body = dto::todo::NewTodo,
    responses(
        (status = 200, description = "The created todo", body = dto::todo::Todo),
        (status = 422, response = BasicErrorResponse),
        (status = 500, response = BasicErrorResponse),
    ),
)]
/// Creates a todo
async fn create_todo(
    new_todo: dto::todo::NewTodo,
    todo_service: &impl TodoPort,
    todo_write: &impl TodoWriter,
) -> Result<Json<dto::todo::Todo>, ErrorResponse> {
    info!("Creating todo: {}", new_todo);
    let domain_todo = domain::todo::NewTodo::from(new_todo);
    let created_todo = todo_service
        .create_todo(&domain_todo, todo_write)
        .await
        .map_err(TodoErrorResponse::from)?;

    Ok(Json(created_todo.into()))
}

#[utoipa::path(
    get,
    path = "/api/todos/{todo_id}",
    tag = TODO_API_GROUP,
    params(("todo_id" = i64, Path, description = "ID of the todo")),
    responses(
        (status = 200, description = "The requested todo", body = dto::todo::Todo),
        (status = 404, response = BasicErrorResponse),
        (status = 422, response = BasicErrorResponse),
    ),
)]
/// Retrieves a single todo
async fn get_todo(
    todo_id: i64,
    todo_service: &impl TodoPort,
    todo_read: &impl TodoReader,
) -> Result<Json<dto::todo::Todo>, ErrorResponse> {
    info!("Get todo {todo_id}");
    let todo = todo_service
        .todo_by_id(todo_id, todo_read)
        .await
        .map_err(TodoErrorResponse::from)?;

    Ok(Json(todo.into()))
}

#[utoipa::path(
    put,
    path = "/api/todos/{todo_id}",
    tag = TODO_API_GROUP,
    params(("todo_id" = i64, Path, description = "ID of the todo")),
    request_body = dto::todo::UpdateTodo,
    responses(
        (status = 200, description = "The updated todo", body = dto::todo::Todo),
        (status = 404, response = BasicErrorResponse),
        (status = 422, response = BasicErrorResponse),
    ),
)]
/// Replaces a todo's title and description
async fn update_todo(
    todo_id: i64,
    update: dto::todo::UpdateTodo,
    todo_service: &impl TodoPort,
    todo_write: &impl TodoWriter,
) -> Result<Json<dto::todo::Todo>, ErrorResponse> {
    info!("Updating todo {todo_id} to: {}", update);
    let domain_update = domain::todo::UpdateTodo::from(update);
    let updated_todo = todo_service
        .update_todo(todo_id, &domain_update, todo_write)
        .await
        .map_err(TodoErrorResponse::from)?;

    Ok(Json(updated_todo.into()))
}

#[utoipa::path(
    put,
    path = "/api/todos/{todo_id}/toggle",
    tag = TODO_API_GROUP,
    params(("todo_id" = i64, Path, description = "ID of the todo")),
    responses(
        (status = 200, description = "The todo with its completion flipped", body = dto::todo::Todo),
        (status = 404, response = BasicErrorResponse),
        (status = 422, response = BasicErrorResponse),
    ),
)]
/// Flips a todo between pending and completed
async fn toggle_todo(
    todo_id: i64,
    todo_service: &impl TodoPort,
    todo_write: &impl TodoWriter,
) -> Result<Json<dto::todo::Todo>, ErrorResponse> {
    info!("Toggling todo {todo_id}");
    let toggled_todo = todo_service
        .toggle_todo(todo_id, todo_write)
        .await
        .map_err(TodoErrorResponse::from)?;

    Ok(Json(toggled_todo.into()))
}

#[utoipa::path(
    delete,
    path = "/api/todos/{todo_id}",
    tag = TODO_API_GROUP,
    params(("todo_id" = i64, Path, description = "ID of the todo")),
    responses(
        (status = 200, description = "The todo was removed", body = dto::todo::DeletedTodo),
        (status = 404, response = BasicErrorResponse),
        (status = 422, response = BasicErrorResponse),
    ),
)]
/// Deletes a todo
async fn delete_todo(
    todo_id: i64,
    todo_service: &impl TodoPort,
    todo_write: &impl TodoWriter,
) -> Result<Json<dto::todo::DeletedTodo>, ErrorResponse> {
    info!("Deleting todo {todo_id}");
    todo_service
        .delete_todo(todo_id, todo_write)
        .await
        .map_err(TodoErrorResponse::from)?;

    Ok(Json(dto::todo::DeletedTodo::confirmation()))
}
