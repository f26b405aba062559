//! `SeaORM` implementation of the `PostService` trait.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::db::Store;
use crate::models::post::Post;
use crate::services::post_service::{CreatePost, PostError, PostService};

pub struct SeaOrmPostService {
    store: Store,
}

impl SeaOrmPostService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    fn validate(request: &CreatePost) -> Result<(), PostError> {
        if request.title.trim().is_empty() {
            return Err(PostError::Validation("Title is required".to_string()));
        }
        if request.content.trim().is_empty() {
            return Err(PostError::Validation("Content is required".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl PostService for SeaOrmPostService {
    async fn create_post(&self, request: CreatePost) -> Result<Post, PostError> {
        Self::validate(&request)?;

        let Some(author) = self.store.get_user(request.author_id).await? else {
            warn!(author_id = request.author_id, "Rejected post for unknown author");
            metrics::counter!("posts_rejected_total", "reason" => "author_not_found").increment(1);
            return Err(PostError::AuthorNotFound(request.author_id));
        };

        let post = self
            .store
            .create_post(request.title, request.content, author)
            .await?;

        metrics::counter!("posts_created_total").increment(1);
        info!(post_id = post.id, author_id = post.author.id, "Created post");
        Ok(post)
    }

    async fn list_posts(&self) -> Result<Vec<Post>, PostError> {
        Ok(self.store.list_posts().await?)
    }
}
