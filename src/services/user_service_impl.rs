//! `SeaORM` implementation of the `UserService` trait.

use async_trait::async_trait;
use tokio::task;
use tracing::{debug, info, warn};

use crate::config::SecurityConfig;
use crate::db::Store;
use crate::models::user::{NewUser, User};
use crate::services::password;
use crate::services::user_service::{RegisterUser, UserError, UserService};

pub struct SeaOrmUserService {
    store: Store,
    security: SecurityConfig,
}

impl SeaOrmUserService {
    #[must_use]
    pub const fn new(store: Store, security: SecurityConfig) -> Self {
        Self { store, security }
    }

    /// Inserts the row, treating a unique-index rejection as a duplicate email.
    ///
    /// The lookup in `register` runs first, so this only fires when two
    /// registrations for the same email race past it.
    async fn insert_user(&self, new_user: NewUser) -> Result<User, UserError> {
        let email = new_user.email.clone();
        match self.store.create_user(new_user).await? {
            Some(user) => Ok(user),
            None => {
                warn!(email = %email, "Unique index rejected concurrent registration");
                reject_duplicate(email)
            }
        }
    }
}

fn reject_duplicate<T>(email: String) -> Result<T, UserError> {
    metrics::counter!("registrations_rejected_total", "reason" => "duplicate_email")
        .increment(1);
    Err(UserError::DuplicateEmail(email))
}

#[async_trait]
impl UserService for SeaOrmUserService {
    async fn register(&self, request: RegisterUser) -> Result<User, UserError> {
        let request = request.validate()?;

        if self.store.get_user_by_email(&request.email).await?.is_some() {
            return reject_duplicate(request.email);
        }

        let security = self.security.clone();
        let plain = request.password;
        let password_hash = task::spawn_blocking(move || password::hash_password(&plain, &security))
            .await
            .map_err(|e| UserError::Internal(format!("Password hashing task panicked: {e}")))??;

        let user = self
            .insert_user(NewUser {
                username: request.username,
                email: request.email,
                password_hash,
            })
            .await?;

        metrics::counter!("users_registered_total").increment(1);
        info!(user_id = user.id, "Registered user {}", user.username);
        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        Ok(self.store.list_users().await?)
    }

    async fn get_user(&self, id: i64) -> Result<Option<User>, UserError> {
        let user = self.store.get_user(id).await?;
        if user.is_none() {
            debug!(user_id = id, "User not found");
        }
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserError> {
        Ok(self.store.get_user_by_username(username).await?)
    }
}
