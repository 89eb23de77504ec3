/// Per-user todo endpoints
///
/// All endpoints require bearer authentication. Ownership is enforced by the
/// model layer: every query filters on the authenticated user's id, so a
/// todo owned by someone else is indistinguishable from one that does not
/// exist.
///
/// # Endpoints
///
/// - `GET /v1/todos` - List the caller's todos
/// - `GET /v1/todos/:id` - Fetch one todo
/// - `POST /v1/todos` - Create a todo
/// - `PUT /v1/todos/:id` - Replace a todo's fields
/// - `DELETE /v1/todos/:id` - Delete a todo

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use libris_shared::{
    auth::middleware::AuthContext,
    models::todo::{CreateTodo, Todo, UpdateTodo},
};
use serde::Deserialize;
use validator::Validate;

/// Todo create/update request
#[derive(Debug, Deserialize, Validate)]
pub struct TodoRequest {
    /// Title
    #[validate(length(min = 3, message = "Title must be at least 3 characters"))]
    pub title: String,

    /// Description
    #[validate(length(min = 3, max = 100, message = "Description must be 3-100 characters"))]
    pub description: String,

    /// Priority, 1 to 5
    #[validate(range(min = 1, max = 5, message = "Priority must be between 1 and 5"))]
    pub priority: i32,

    /// Completion flag
    pub complete: bool,
}

fn validate_id(id: i64) -> ApiResult<()> {
    if id < 1 {
        return Err(ApiError::BadRequest("Id must be greater than 0".to_string()));
    }
    Ok(())
}

/// List every todo owned by the caller
pub async fn list_todos(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<Json<Vec<Todo>>> {
    let todos = Todo::list_by_owner(&state.db, auth.user_id).await?;
    Ok(Json(todos))
}

/// Fetch a single owned todo
///
/// # Errors
///
/// - `400 Bad Request`: Non-positive id
/// - `404 Not Found`: Missing, or owned by a different user
pub async fn get_todo(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Todo>> {
    validate_id(id)?;

    let todo = Todo::find_by_id_and_owner(&state.db, id, auth.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Todo not found".to_string()))?;

    Ok(Json(todo))
}

/// Create a todo owned by the caller
///
/// The owner is always the authenticated user; the request cannot set it.
pub async fn create_todo(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<TodoRequest>,
) -> ApiResult<(StatusCode, Json<Todo>)> {
    req.validate()?;

    let todo = Todo::create(
        &state.db,
        CreateTodo {
            title: req.title,
            description: req.description,
            priority: req.priority,
            complete: req.complete,
            owner_id: auth.user_id,
        },
    )
    .await?;

    tracing::debug!(todo_id = todo.id, owner_id = auth.user_id, "Todo created");

    Ok((StatusCode::CREATED, Json(todo)))
}

/// Replace the mutable fields of an owned todo
///
/// # Errors
///
/// - `400 Bad Request`: Non-positive id
/// - `404 Not Found`: Missing, or owned by a different user
/// - `422 Unprocessable Entity`: Validation failed
pub async fn update_todo(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<i64>,
    Json(req): Json<TodoRequest>,
) -> ApiResult<StatusCode> {
    validate_id(id)?;
    req.validate()?;

    let updated = Todo::update(
        &state.db,
        id,
        auth.user_id,
        UpdateTodo {
            title: req.title,
            description: req.description,
            priority: req.priority,
            complete: req.complete,
        },
    )
    .await?;

    if !updated {
        return Err(ApiError::NotFound("Todo not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Delete an owned todo
///
/// # Errors
///
/// - `400 Bad Request`: Non-positive id
/// - `404 Not Found`: Missing, or owned by a different user
pub async fn delete_todo(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    validate_id(id)?;

    let deleted = Todo::delete(&state.db, id, auth.user_id).await?;

    if !deleted {
        return Err(ApiError::NotFound("Todo not found".to_string()));
    }

    tracing::debug!(todo_id = id, owner_id = auth.user_id, "Todo deleted");

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> TodoRequest {
        TodoRequest {
            title: "Return books".to_string(),
            description: "Due Friday".to_string(),
            priority: 3,
            complete: false,
        }
    }

    #[test]
    fn test_todo_request_valid() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_todo_request_rejects_short_title() {
        let mut req = valid_request();
        req.title = "ab".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_todo_request_rejects_priority_out_of_range() {
        let mut req = valid_request();
        req.priority = 0;
        assert!(req.validate().is_err());

        req.priority = 6;
        assert!(req.validate().is_err());

        req.priority = 5;
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_validate_id() {
        assert!(validate_id(1).is_ok());
        assert!(validate_id(0).is_err());
        assert!(validate_id(-3).is_err());
    }
}
