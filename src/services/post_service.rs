//! Domain service for creating and listing posts.

use thiserror::Error;

use crate::models::post::Post;

/// Errors specific to post operations.
#[derive(Debug, Error)]
pub enum PostError {
    #[error("Author not found: {0}")]
    AuthorNotFound(i64),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sea_orm::DbErr> for PostError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for PostError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct CreatePost {
    pub title: String,
    pub content: String,
    pub author_id: i64,
}

/// Domain service trait for posts.
#[async_trait::async_trait]
pub trait PostService: Send + Sync {
    /// Creates a post owned by `author_id`.
    ///
    /// # Errors
    ///
    /// Returns [`PostError::AuthorNotFound`] if the author does not exist; nothing is written.
    async fn create_post(&self, request: CreatePost) -> Result<Post, PostError>;

    /// Lists all posts with their authors, oldest first.
    async fn list_posts(&self) -> Result<Vec<Post>, PostError>;
}
