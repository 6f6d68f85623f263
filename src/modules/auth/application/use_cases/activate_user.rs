use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::auth::application::ports::outgoing::{
    TokenError, TokenProvider, TokenType, UserQuery, UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationOutcome {
    Activated,
    /// The account was already active; nothing changed.
    AlreadyActive,
}

impl ActivationOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            ActivationOutcome::Activated => "Account activated successfully",
            ActivationOutcome::AlreadyActive => "Account already activated",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActivateUserError {
    #[error("Activation token is required")]
    MissingToken,

    #[error("Activation token has expired")]
    TokenExpired,

    #[error("Invalid activation token")]
    TokenInvalid,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<TokenError> for ActivateUserError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::TokenExpired => ActivateUserError::TokenExpired,
            _ => ActivateUserError::TokenInvalid,
        }
    }
}

#[async_trait]
pub trait IActivateUserUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<ActivationOutcome, ActivateUserError>;
}

pub struct ActivateUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q, R> ActivateUserUseCase<Q, R>
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
impl<Q, R> IActivateUserUseCase for ActivateUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    async fn execute(&self, token: &str) -> Result<ActivationOutcome, ActivateUserError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ActivateUserError::MissingToken);
        }

        let user_id = self
            .token_provider
            .verify_token_of_type(token, TokenType::Activation)?;

        let user = self
            .query
            .find_by_id(user_id)
            .await
            .map_err(|e| ActivateUserError::DatabaseError(e.to_string()))?
            .ok_or(ActivateUserError::UserNotFound)?;

        if user.is_activated {
            return Ok(ActivationOutcome::AlreadyActive);
        }

        self.repository
            .activate_user(user_id)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => ActivateUserError::UserNotFound,
                other => ActivateUserError::DatabaseError(other.to_string()),
            })?;

        Ok(ActivationOutcome::Activated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::User;
    use crate::tests::support::fakes::{stored_user, test_jwt_service, InMemoryUsers};
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub Repo {}
        #[async_trait]
        impl UserRepository for Repo {
            async fn create_user(&self, user: User) -> Result<User, UserRepositoryError>;
            async fn replace_inactive_user(
                &self,
                stale_id: Uuid,
                user: User,
            ) -> Result<User, UserRepositoryError>;
            async fn activate_user(&self, user_id: Uuid) -> Result<User, UserRepositoryError>;
            async fn set_refresh_token_hash(
                &self,
                user_id: Uuid,
                refresh_token_hash: Option<String>,
            ) -> Result<(), UserRepositoryError>;
        }
    }

    fn use_case(users: &InMemoryUsers) -> ActivateUserUseCase<InMemoryUsers, InMemoryUsers> {
        ActivateUserUseCase::new(users.clone(), users.clone(), Arc::new(test_jwt_service()))
    }

    #[tokio::test]
    async fn valid_token_activates_the_user() {
        let user = stored_user("new@example.com", "password123", false);
        let users = InMemoryUsers::default().with_user(user.clone());
        let token = test_jwt_service().generate_activation_token(user.id).unwrap();

        let outcome = use_case(&users).execute(&token).await.unwrap();

        assert_eq!(outcome, ActivationOutcome::Activated);
        assert!(users.get(user.id).unwrap().is_activated);
    }

    #[tokio::test]
    async fn reused_token_is_a_no_op_success() {
        let user = stored_user("done@example.com", "password123", true);
        let users = InMemoryUsers::default().with_user(user.clone());
        let token = test_jwt_service().generate_activation_token(user.id).unwrap();

        let mut repo = MockRepo::new();
        repo.expect_activate_user().never();
        let uc = ActivateUserUseCase::new(users.clone(), repo, Arc::new(test_jwt_service()));

        let outcome = uc.execute(&token).await.unwrap();
        assert_eq!(outcome, ActivationOutcome::AlreadyActive);
        assert_eq!(outcome.message(), "Account already activated");
    }

    #[tokio::test]
    async fn access_token_cannot_activate() {
        let user = stored_user("new@example.com", "password123", false);
        let users = InMemoryUsers::default().with_user(user.clone());
        let token = test_jwt_service().generate_access_token(user.id).unwrap();

        let result = use_case(&users).execute(&token).await;

        assert_eq!(result, Err(ActivateUserError::TokenInvalid));
        assert!(!users.get(user.id).unwrap().is_activated);
    }

    #[tokio::test]
    async fn garbage_token_is_invalid() {
        let users = InMemoryUsers::default();
        let result = use_case(&users).execute("definitely-not-a-jwt").await;
        assert_eq!(result, Err(ActivateUserError::TokenInvalid));
    }

    #[tokio::test]
    async fn blank_token_is_rejected() {
        let users = InMemoryUsers::default();
        let result = use_case(&users).execute("   ").await;
        assert_eq!(result, Err(ActivateUserError::MissingToken));
    }

    #[tokio::test]
    async fn token_for_unknown_user_is_not_found() {
        let users = InMemoryUsers::default();
        let token = test_jwt_service()
            .generate_activation_token(Uuid::new_v4())
            .unwrap();

        let result = use_case(&users).execute(&token).await;
        assert_eq!(result, Err(ActivateUserError::UserNotFound));
    }

    #[test]
    fn expired_token_error_is_preserved() {
        assert_eq!(
            ActivateUserError::from(TokenError::TokenExpired),
            ActivateUserError::TokenExpired
        );
        assert_eq!(
            ActivateUserError::from(TokenError::InvalidSignature),
            ActivateUserError::TokenInvalid
        );
    }
}
