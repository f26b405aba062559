use axum::{Json, extract::State};
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, CreatePostRequest, PostDto};
use crate::services::{CreatePost, PostError};

impl From<PostError> for ApiError {
    fn from(err: PostError) -> Self {
        match err {
            PostError::AuthorNotFound(id) => Self::not_found("Author", id),
            PostError::Validation(msg) => Self::validation(msg),
            PostError::Database(msg) => Self::database(msg),
            PostError::Internal(msg) => Self::internal(msg),
        }
    }
}

/// POST /posts
pub async fn create_post(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreatePostRequest>,
) -> Result<Json<ApiResponse<PostDto>>, ApiError> {
    let author_id = payload
        .author_id
        .ok_or_else(|| ApiError::validation("authorId is required"))?;

    let post = state
        .post_service()
        .create_post(CreatePost {
            title: payload.title,
            content: payload.content,
            author_id,
        })
        .await?;

    Ok(Json(ApiResponse::success(post.into())))
}

/// GET /posts
pub async fn list_posts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<PostDto>>>, ApiError> {
    let posts = state.post_service().list_posts().await?;
    Ok(Json(ApiResponse::success(
        posts.into_iter().map(PostDto::from).collect(),
    )))
}
