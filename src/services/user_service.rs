//! Domain service for user registration and lookup.

use thiserror::Error;

use crate::models::user::User;

/// Errors specific to user operations.
#[derive(Debug, Error)]
pub enum UserError {
    #[error("Email is already registered: {0}")]
    DuplicateEmail(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sea_orm::DbErr> for UserError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for UserError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// Registration request as received from the caller.
#[derive(Debug, Clone)]
pub struct RegisterUser {
    pub email: String,
    pub password: String,
    pub username: String,
}

impl RegisterUser {
    /// Presence checks only. Email and username are trimmed.
    pub fn validate(self) -> Result<Self, UserError> {
        let email = self.email.trim().to_string();
        let username = self.username.trim().to_string();

        if email.is_empty() {
            return Err(UserError::Validation("Email is required".to_string()));
        }
        if self.password.is_empty() {
            return Err(UserError::Validation("Password is required".to_string()));
        }
        if username.is_empty() {
            return Err(UserError::Validation("Username is required".to_string()));
        }

        Ok(Self {
            email,
            password: self.password,
            username,
        })
    }
}

/// Domain service trait for users.
#[async_trait::async_trait]
pub trait UserService: Send + Sync {
    /// Registers a new user with a hashed password.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::DuplicateEmail`] if the email is already taken.
    async fn register(&self, request: RegisterUser) -> Result<User, UserError>;

    /// Lists all users in registration order.
    async fn list_users(&self) -> Result<Vec<User>, UserError>;

    /// Gets a user by id, `None` if it was never issued.
    async fn get_user(&self, id: i64) -> Result<Option<User>, UserError>;

    /// Gets the earliest registered user with this username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserError>;
}
