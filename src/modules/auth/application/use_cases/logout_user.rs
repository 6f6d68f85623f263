use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{info, warn};

use crate::modules::auth::application::ports::outgoing::{
    TokenProvider, TokenType, UserRepository, UserRepositoryError,
};

// ========================= Logout Request =========================
/// The access token is read from the session cookie by the route, if present.
#[derive(Debug, Clone, Default)]
pub struct LogoutRequest {
    access_token: Option<String>,
}

impl LogoutRequest {
    pub fn new(access_token: Option<String>) -> Self {
        Self {
            access_token: access_token
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty()),
        }
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }
}

// ====================== Logout Response =============================
#[derive(Debug, Clone, Serialize)]
pub struct LogoutResponse {
    pub message: String,
}

// ====================== Logout Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum LogoutError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

// ====================== Use case =============================
#[async_trait]
pub trait ILogoutUseCase: Send + Sync {
    async fn execute(&self, request: LogoutRequest) -> Result<LogoutResponse, LogoutError>;
}

pub struct LogoutUseCase<R>
where
    R: UserRepository,
{
    repository: R,
    token_provider: Arc<dyn TokenProvider>,
}

impl<R> LogoutUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repository: R, token_provider: Arc<dyn TokenProvider>) -> Self {
        Self {
            repository,
            token_provider,
        }
    }
}

#[async_trait]
impl<R> ILogoutUseCase for LogoutUseCase<R>
where
    R: UserRepository,
{
    async fn execute(&self, request: LogoutRequest) -> Result<LogoutResponse, LogoutError> {
        // Logout always succeeds for the caller; a stale or missing cookie just skips revocation.
        if let Some(token) = request.access_token() {
            match self.token_provider.verify_token_of_type(token, TokenType::Access) {
                Ok(user_id) => match self.repository.set_refresh_token_hash(user_id, None).await {
                    Ok(()) => info!(%user_id, "Refresh token revoked on logout"),
                    Err(UserRepositoryError::UserNotFound) => {
                        warn!(%user_id, "Logout for a user that no longer exists")
                    }
                    Err(e) => return Err(LogoutError::RepositoryError(e.to_string())),
                },
                Err(e) => warn!(error = %e, "Logout with an unusable access token"),
            }
        }

        Ok(LogoutResponse {
            message: "Logged out successfully".to_string(),
        })
    }
}
