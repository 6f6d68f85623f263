use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::auth::application::ports::outgoing::{
    TokenError, TokenProvider, TokenType, UserQuery, UserRepository,
};
use crate::modules::auth::application::services::{digest_token, matches_digest};

// ========================= Refresh Token Request =========================
/// Validated refresh token request
#[derive(Debug, Clone)]
pub struct RefreshTokenRequest {
    refresh_token: String, // Private - guaranteed non-empty
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RefreshTokenRequestError {
    #[error("Refresh token cannot be empty")]
    EmptyToken,
}

impl RefreshTokenRequest {
    pub fn new(refresh_token: String) -> Result<Self, RefreshTokenRequestError> {
        let refresh_token = refresh_token.trim();
        if refresh_token.is_empty() {
            return Err(RefreshTokenRequestError::EmptyToken);
        }

        Ok(Self {
            refresh_token: refresh_token.to_string(),
        })
    }

    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }
}

// ====================== Refresh Token Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum RefreshTokenError {
    #[error("Refresh token has expired")]
    TokenExpired,

    #[error("Invalid refresh token")]
    InvalidToken,

    /// The token verified but no longer matches the stored session (logout or rotation).
    #[error("Refresh token has been revoked")]
    SessionRevoked,

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<TokenError> for RefreshTokenError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::TokenExpired => RefreshTokenError::TokenExpired,
            TokenError::EncodingError(msg) => RefreshTokenError::TokenGenerationFailed(msg),
            _ => RefreshTokenError::InvalidToken,
        }
    }
}

// ============================ Refresh Token Response =========================
#[derive(Debug, Clone)]
pub struct RefreshTokenResponse {
    pub access_token: String,
    pub refresh_token: String,
}

// ============================ Refresh Token Use Case =============================
#[async_trait]
pub trait IRefreshTokenUseCase: Send + Sync {
    async fn execute(
        &self,
        request: RefreshTokenRequest,
    ) -> Result<RefreshTokenResponse, RefreshTokenError>;
}

pub struct RefreshTokenUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q, R> RefreshTokenUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(query: Q, repository: R, token_provider: Arc<dyn TokenProvider>) -> Self {
        Self {
            query,
            repository,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q, R> IRefreshTokenUseCase for RefreshTokenUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    async fn execute(
        &self,
        request: RefreshTokenRequest,
    ) -> Result<RefreshTokenResponse, RefreshTokenError> {
        let user_id = self
            .token_provider
            .verify_token_of_type(request.refresh_token(), TokenType::Refresh)?;

        let user = self
            .query
            .find_by_id(user_id)
            .await
            .map_err(|e| RefreshTokenError::QueryError(e.to_string()))?
            .ok_or(RefreshTokenError::InvalidToken)?;

        if !user.is_activated {
            return Err(RefreshTokenError::InvalidToken);
        }

        let stored = user
            .refresh_token_hash
            .as_deref()
            .ok_or(RefreshTokenError::SessionRevoked)?;
        if !matches_digest(request.refresh_token(), stored) {
            return Err(RefreshTokenError::SessionRevoked);
        }

        let access_token = self.token_provider.generate_access_token(user.id)?;
        let refresh_token = self.token_provider.generate_refresh_token(user.id)?;

        self.repository
            .set_refresh_token_hash(user.id, Some(digest_token(&refresh_token)))
            .await
            .map_err(|e| RefreshTokenError::RepositoryError(e.to_string()))?;

        Ok(RefreshTokenResponse {
            access_token,
            refresh_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::User;
    use crate::tests::support::fakes::{stored_user, test_jwt_service, InMemoryUsers};

    fn use_case(users: &InMemoryUsers) -> RefreshTokenUseCase<InMemoryUsers, InMemoryUsers> {
        RefreshTokenUseCase::new(users.clone(), users.clone(), Arc::new(test_jwt_service()))
    }

    /// An active user with a live session for the returned refresh token.
    fn signed_in_user() -> (User, String) {
        let mut user = stored_user("ok@example.com", "password123", true);
        let refresh = test_jwt_service().generate_refresh_token(user.id).unwrap();
        user.refresh_token_hash = Some(digest_token(&refresh));
        (user, refresh)
    }

    fn request(token: &str) -> RefreshTokenRequest {
        RefreshTokenRequest::new(token.to_string()).unwrap()
    }

    #[test]
    fn request_rejects_blank_token() {
        assert_eq!(
            RefreshTokenRequest::new("  ".into()).unwrap_err(),
            RefreshTokenRequestError::EmptyToken
        );
    }

    #[test]
    fn request_trims_the_token() {
        assert_eq!(request(" abc ").refresh_token(), "abc");
    }

    #[tokio::test]
    async fn rotates_tokens_and_stored_digest() {
        let (user, refresh) = signed_in_user();
        let users = InMemoryUsers::default().with_user(user.clone());

        let response = use_case(&users).execute(request(&refresh)).await.unwrap();

        let jwt = test_jwt_service();
        assert_eq!(
            jwt.verify_token_of_type(&response.access_token, TokenType::Access),
            Ok(user.id)
        );
        assert_ne!(response.refresh_token, refresh);
        let stored = users.get(user.id).unwrap().refresh_token_hash.unwrap();
        assert!(matches_digest(&response.refresh_token, &stored));
    }

    #[tokio::test]
    async fn old_refresh_token_is_rejected_after_rotation() {
        let (user, refresh) = signed_in_user();
        let users = InMemoryUsers::default().with_user(user);
        let uc = use_case(&users);

        uc.execute(request(&refresh)).await.unwrap();
        let replay = uc.execute(request(&refresh)).await;

        assert!(matches!(replay, Err(RefreshTokenError::SessionRevoked)));
    }

    #[tokio::test]
    async fn cleared_session_is_revoked() {
        let (mut user, refresh) = signed_in_user();
        user.refresh_token_hash = None;
        let users = InMemoryUsers::default().with_user(user);

        let result = use_case(&users).execute(request(&refresh)).await;

        assert!(matches!(result, Err(RefreshTokenError::SessionRevoked)));
    }

    #[tokio::test]
    async fn access_token_cannot_be_used_to_refresh() {
        let (user, _) = signed_in_user();
        let access = test_jwt_service().generate_access_token(user.id).unwrap();
        let users = InMemoryUsers::default().with_user(user);

        let result = use_case(&users).execute(request(&access)).await;

        assert!(matches!(result, Err(RefreshTokenError::InvalidToken)));
    }

    #[tokio::test]
    async fn unknown_user_is_invalid() {
        let (_, refresh) = signed_in_user();
        let users = InMemoryUsers::default();

        let result = use_case(&users).execute(request(&refresh)).await;

        assert!(matches!(result, Err(RefreshTokenError::InvalidToken)));
    }
}
