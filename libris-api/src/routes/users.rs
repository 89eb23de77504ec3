/// Current-user endpoints
///
/// All endpoints require bearer authentication and operate on the user
/// identified by the token, re-read from the database on each call.
///
/// # Endpoints
///
/// - `GET /v1/users/me` - Current user profile
/// - `PUT /v1/users/password` - Change password
/// - `PUT /v1/users/phone-number` - Update phone number

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    routes::auth::UserResponse,
};
use axum::{extract::State, http::StatusCode, Extension, Json};
use libris_shared::{
    auth::{middleware::AuthContext, password},
    models::user::User,
};
use serde::Deserialize;
use validator::Validate;

/// Change password request
#[derive(Debug, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    /// Current password, verified before the change is applied
    #[validate(length(min = 8, max = 36, message = "Password must be 8-36 characters"))]
    pub old_password: String,

    /// Replacement password
    #[validate(length(min = 8, max = 36, message = "Password must be 8-36 characters"))]
    pub new_password: String,
}

/// Update phone number request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePhoneNumberRequest {
    #[validate(length(min = 1, max = 15, message = "Phone number must be 1-15 characters"))]
    pub phone_number: String,
}

/// Looks up the authenticated user's row, 404 if it no longer exists
///
/// Tokens outlive account deletion, so the row can be gone while the token
/// still validates.
async fn current_user(state: &AppState, auth: &AuthContext) -> ApiResult<User> {
    User::find_by_id(&state.db, auth.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))
}

/// Current user profile
///
/// # Errors
///
/// - `401 Unauthorized`: Missing or invalid token
/// - `404 Not Found`: User row no longer exists
pub async fn get_me(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<Json<UserResponse>> {
    let user = current_user(&state, &auth).await?;
    Ok(Json(user.into()))
}

/// Change the current user's password
///
/// Verifies the old password before storing a new Argon2id hash.
///
/// # Errors
///
/// - `401 Unauthorized`: Missing/invalid token, or wrong old password
/// - `404 Not Found`: User row no longer exists
/// - `422 Unprocessable Entity`: Validation failed
pub async fn change_password(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<ChangePasswordRequest>,
) -> ApiResult<StatusCode> {
    req.validate()?;

    let user = current_user(&state, &auth).await?;

    let valid = password::verify_password(&req.old_password, &user.hashed_password)?;
    if !valid {
        return Err(ApiError::Unauthorized("Wrong password".to_string()));
    }

    let new_hash = password::hash_password(&req.new_password)?;
    User::update_password(&state.db, user.id, &new_hash).await?;

    tracing::info!(user_id = user.id, "Password changed");

    Ok(StatusCode::NO_CONTENT)
}

/// Update the current user's phone number
///
/// # Errors
///
/// - `400 Bad Request`: New number equals the stored one
/// - `401 Unauthorized`: Missing or invalid token
/// - `404 Not Found`: User row no longer exists
/// - `422 Unprocessable Entity`: Validation failed
pub async fn update_phone_number(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<UpdatePhoneNumberRequest>,
) -> ApiResult<StatusCode> {
    req.validate()?;

    let user = current_user(&state, &auth).await?;

    if user.phone_number.as_deref() == Some(req.phone_number.as_str()) {
        return Err(ApiError::BadRequest(
            "Phone number already set to this value".to_string(),
        ));
    }

    User::update_phone_number(&state.db, user.id, &req.phone_number).await?;

    Ok(StatusCode::NO_CONTENT)
}
