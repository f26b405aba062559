use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::validation::validate_username;
use super::{ApiError, ApiResponse, AppState, RegisterRequest, UserDto};
use crate::services::{RegisterUser, UserError};

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::DuplicateEmail(_) => Self::validation("Email is already registered"),
            UserError::Validation(msg) => Self::validation(msg),
            UserError::Database(msg) => Self::database(msg),
            UserError::Internal(msg) => Self::internal(msg),
        }
    }
}

/// POST /users/register
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<UserDto>>, ApiError> {
    let user = state
        .user_service()
        .register(RegisterUser {
            email: payload.email,
            password: payload.password,
            username: payload.username,
        })
        .await?;

    Ok(Json(ApiResponse::success(user.into())))
}

/// GET /users
pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<UserDto>>>, ApiError> {
    let users = state.user_service().list_users().await?;
    Ok(Json(ApiResponse::success(
        users.into_iter().map(UserDto::from).collect(),
    )))
}

/// GET /users/{id}
///
/// Any id that was never issued, including zero or negative ones, is a 404.
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<UserDto>>, ApiError> {
    let user = state
        .user_service()
        .get_user(id)
        .await?
        .ok_or_else(|| ApiError::user_not_found(id))?;

    Ok(Json(ApiResponse::success(user.into())))
}

/// GET /users/by-username/{username}
pub async fn get_user_by_username(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<Json<ApiResponse<UserDto>>, ApiError> {
    let username = validate_username(&username)?;
    let user = state
        .user_service()
        .find_by_username(username)
        .await?
        .ok_or_else(|| ApiError::not_found("User", format!("'{username}'")))?;

    Ok(Json(ApiResponse::success(user.into())))
}
