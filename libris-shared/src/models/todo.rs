/// Todo model and database operations
///
/// Todos are strictly per-user: every query in this module carries an
/// `owner_id` filter, so a todo is only ever visible to or mutable by its
/// owner. There is no cross-user listing.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE todos (
///     id BIGSERIAL PRIMARY KEY,
///     title VARCHAR(255) NOT NULL,
///     description VARCHAR(255) NOT NULL,
///     priority INTEGER NOT NULL,
///     complete BOOLEAN NOT NULL DEFAULT FALSE,
///     owner_id BIGINT NOT NULL REFERENCES users(id) ON DELETE CASCADE
/// );
/// ```

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Todo item owned by a single user
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Todo {
    /// Unique todo id
    pub id: i64,

    /// Title
    pub title: String,

    /// Free-form description
    pub description: String,

    /// Priority, 1 (lowest) to 5 (highest)
    pub priority: i32,

    /// Completion flag
    pub complete: bool,

    /// Owning user id
    pub owner_id: i64,
}

/// Input for creating a new todo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub title: String,
    pub description: String,
    pub priority: i32,
    pub complete: bool,
    pub owner_id: i64,
}

/// Input for replacing a todo's mutable fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTodo {
    pub title: String,
    pub description: String,
    pub priority: i32,
    pub complete: bool,
}

impl Todo {
    /// Creates a new todo for the given owner
    pub async fn create(pool: &PgPool, data: CreateTodo) -> Result<Self, sqlx::Error> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            INSERT INTO todos (title, description, priority, complete, owner_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, description, priority, complete, owner_id
            "#,
        )
        .bind(data.title)
        .bind(data.description)
        .bind(data.priority)
        .bind(data.complete)
        .bind(data.owner_id)
        .fetch_one(pool)
        .await?;

        Ok(todo)
    }

    /// Lists all todos owned by a user
    pub async fn list_by_owner(pool: &PgPool, owner_id: i64) -> Result<Vec<Self>, sqlx::Error> {
        let todos = sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, title, description, priority, complete, owner_id
            FROM todos
            WHERE owner_id = $1
            ORDER BY id
            "#,
        )
        .bind(owner_id)
        .fetch_all(pool)
        .await?;

        Ok(todos)
    }

    /// Finds a todo by id, scoped to its owner
    ///
    /// Returns None both when the todo does not exist and when it belongs to
    /// a different user; callers cannot distinguish the two.
    pub async fn find_by_id_and_owner(
        pool: &PgPool,
        id: i64,
        owner_id: i64,
    ) -> Result<Option<Self>, sqlx::Error> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, title, description, priority, complete, owner_id
            FROM todos
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(pool)
        .await?;

        Ok(todo)
    }

    /// Replaces the mutable fields of an owned todo
    ///
    /// Returns true if a row was updated; false when the todo is missing or
    /// owned by someone else.
    pub async fn update(
        pool: &PgPool,
        id: i64,
        owner_id: i64,
        data: UpdateTodo,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE todos
            SET title = $3, description = $4, priority = $5, complete = $6
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .bind(data.title)
        .bind(data.description)
        .bind(data.priority)
        .bind(data.complete)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes an owned todo
    ///
    /// Returns true if a row was deleted.
    pub async fn delete(pool: &PgPool, id: i64, owner_id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_todo_struct() {
        let create = CreateTodo {
            title: "Return library books".to_string(),
            description: "Due on Friday".to_string(),
            priority: 3,
            complete: false,
            owner_id: 1,
        };

        assert_eq!(create.priority, 3);
        assert!(!create.complete);
    }

    // Database-backed tests are in the API crate's tests/ directory.
}
