use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserProfile;

#[derive(Debug, thiserror::Error, Clone)]
pub enum FetchUserProfileError {
    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    #[error("Account has not been activated")]
    AccountNotActivated,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait FetchUserProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<UserProfile, FetchUserProfileError>;
}
