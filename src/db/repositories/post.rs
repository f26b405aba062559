use anyhow::{Context, Result};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::entities::{posts, prelude::*, users};
use crate::models::post::Post;
use crate::models::user::User;

pub struct PostRepository {
    conn: DatabaseConnection,
}

impl PostRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Inserts a post owned by an already resolved author.
    pub async fn create(&self, title: String, content: String, author: User) -> Result<Post> {
        let model = posts::ActiveModel {
            title: Set(title),
            content: Set(content),
            author_id: Set(author.id),
            ..Default::default()
        }
        .insert(&self.conn)
        .await
        .context("Failed to insert post")?;

        Ok(Post {
            id: model.id,
            title: model.title,
            content: model.content,
            author,
        })
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Post>> {
        let row = Posts::find_by_id(id)
            .find_also_related(Users)
            .one(&self.conn)
            .await
            .context("Failed to query post by ID")?;

        row.map(into_post).transpose()
    }

    pub async fn list_all(&self) -> Result<Vec<Post>> {
        let rows = Posts::find()
            .find_also_related(Users)
            .order_by_asc(posts::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to list posts")?;

        rows.into_iter().map(into_post).collect()
    }
}

fn into_post((post, author): (posts::Model, Option<users::Model>)) -> Result<Post> {
    let author = author.ok_or_else(|| {
        anyhow::anyhow!("Post {} references missing author {}", post.id, post.author_id)
    })?;

    Ok(Post {
        id: post.id,
        title: post.title,
        content: post.content,
        author: User::from(author),
    })
}
