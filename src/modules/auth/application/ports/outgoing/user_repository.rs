use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::User;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Write side of the users table.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, user: User) -> Result<User, UserRepositoryError>;

    /// Swaps the not-yet-activated row `stale_id` for `user` in one step. Fails with
    /// `UserAlreadyExists` once that row has been activated or is gone.
    async fn replace_inactive_user(
        &self,
        stale_id: Uuid,
        user: User,
    ) -> Result<User, UserRepositoryError>;

    /// Flips the activation flag. Returns the user as stored afterwards.
    async fn activate_user(&self, user_id: Uuid) -> Result<User, UserRepositoryError>;

    /// Replaces (or clears with `None`) the digest of the current refresh token.
    async fn set_refresh_token_hash(
        &self,
        user_id: Uuid,
        refresh_token_hash: Option<String>,
    ) -> Result<(), UserRepositoryError>;
}
