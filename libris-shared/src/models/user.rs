/// User model and database operations
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id BIGSERIAL PRIMARY KEY,
///     username VARCHAR(64) NOT NULL UNIQUE,
///     email VARCHAR(255) NOT NULL,
///     first_name VARCHAR(100) NOT NULL,
///     last_name VARCHAR(100) NOT NULL,
///     hashed_password VARCHAR(255) NOT NULL,
///     role VARCHAR(32) NOT NULL,
///     is_active BOOLEAN NOT NULL DEFAULT TRUE,
///     phone_number VARCHAR(15)
/// );
/// ```
///
/// Username uniqueness is enforced by the unique constraint, not by
/// application logic; a duplicate insert surfaces as a database error.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// User model representing an account row
///
/// Passwords are stored as Argon2id hashes, never in plaintext.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user id
    pub id: i64,

    /// Username, unique across all users
    pub username: String,

    /// Email address
    pub email: String,

    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Argon2id password hash
    pub hashed_password: String,

    /// Role string (e.g. "admin", "user")
    pub role: String,

    /// Whether the account is active
    pub is_active: bool,

    /// Optional phone number
    pub phone_number: Option<String>,
}

/// Input for creating a new user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Argon2id password hash (NOT the plaintext password)
    pub hashed_password: String,
    pub role: String,
    pub phone_number: Option<String>,
}

impl User {
    /// Creates a new user, active by default
    ///
    /// # Errors
    ///
    /// Returns an error if the username already exists (unique constraint
    /// violation) or the database is unreachable.
    pub async fn create(pool: &PgPool, data: CreateUser) -> Result<Self, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, first_name, last_name, hashed_password, role, is_active, phone_number)
            VALUES ($1, $2, $3, $4, $5, $6, TRUE, $7)
            RETURNING id, username, email, first_name, last_name, hashed_password, role, is_active, phone_number
            "#,
        )
        .bind(data.username)
        .bind(data.email)
        .bind(data.first_name)
        .bind(data.last_name)
        .bind(data.hashed_password)
        .bind(data.role)
        .bind(data.phone_number)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by id
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, first_name, last_name, hashed_password, role, is_active, phone_number
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by username
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, first_name, last_name, hashed_password, role, is_active, phone_number
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Replaces the stored password hash
    ///
    /// Returns true if the user was found and updated.
    pub async fn update_password(
        pool: &PgPool,
        id: i64,
        hashed_password: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE users SET hashed_password = $2 WHERE id = $1")
            .bind(id)
            .bind(hashed_password)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Replaces the stored phone number
    ///
    /// Returns true if the user was found and updated.
    pub async fn update_phone_number(
        pool: &PgPool,
        id: i64,
        phone_number: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE users SET phone_number = $2 WHERE id = $1")
            .bind(id)
            .bind(phone_number)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
