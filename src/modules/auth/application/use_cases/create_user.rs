use std::sync::Arc;

use async_trait::async_trait;
use email_address::EmailAddress;
use tracing::info;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::ports::outgoing::{
    PasswordHasher, UserQuery, UserRepository, UserRepositoryError,
};

const MIN_PASSWORD_LEN: usize = 8;
const MAX_PASSWORD_LEN: usize = 128;

// ========================= Input =========================

/// Signup fields after validation. Construct through [`CreateUserInput::new`].
#[derive(Debug, Clone)]
pub struct CreateUserInput {
    personal_id: String,
    name: String,
    email: String,
    password: String,
    address: String,
    phone_number: String,
    user_image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateUserInputError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password must be between {MIN_PASSWORD_LEN} and {MAX_PASSWORD_LEN} characters")]
    InvalidPasswordLength,
}

/// Raw signup fields as received from a client.
#[derive(Debug, Clone, Default)]
pub struct SignupFields {
    pub personal_id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub address: String,
    pub phone_number: String,
    pub user_image: Option<String>,
}

impl CreateUserInput {
    pub fn new(fields: SignupFields) -> Result<Self, CreateUserInputError> {
        let personal_id = required("personal_id", fields.personal_id)?;
        let name = required("name", fields.name)?;
        let email = required("email", fields.email)?.to_lowercase();
        if !EmailAddress::is_valid(&email) {
            return Err(CreateUserInputError::InvalidEmail);
        }

        if fields.password.trim().is_empty() {
            return Err(CreateUserInputError::MissingField("password"));
        }
        let len = fields.password.chars().count();
        if !(MIN_PASSWORD_LEN..=MAX_PASSWORD_LEN).contains(&len) {
            return Err(CreateUserInputError::InvalidPasswordLength);
        }

        let address = required("address", fields.address)?;
        let phone_number = required("phone_number", fields.phone_number)?;
        let user_image = fields
            .user_image
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        Ok(Self {
            personal_id,
            name,
            email,
            password: fields.password,
            address,
            phone_number,
            user_image,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

fn required(field: &'static str, value: String) -> Result<String, CreateUserInputError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CreateUserInputError::MissingField(field));
    }
    Ok(value.to_string())
}

// ========================= Output / Errors =========================

#[derive(Debug, Clone)]
pub struct CreateUserOutput {
    pub user_id: Uuid,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateUserError {
    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

// ========================= Use case =========================

#[async_trait]
pub trait ICreateUserUseCase: Send + Sync {
    async fn execute(&self, input: CreateUserInput) -> Result<CreateUserOutput, CreateUserError>;
}

#[derive(Clone)]
pub struct CreateUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl<Q, R> CreateUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(query: Q, repository: R, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q, R> ICreateUserUseCase for CreateUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    /// An unactivated account with the same email is replaced under a new id, so a
    /// signup whose activation mail never arrived can be retried and links sent for
    /// the replaced row stop working.
    async fn execute(&self, input: CreateUserInput) -> Result<CreateUserOutput, CreateUserError> {
        let existing = self
            .query
            .find_by_email(&input.email)
            .await
            .map_err(|e| CreateUserError::QueryError(e.to_string()))?;
        if existing.as_ref().is_some_and(|u| u.is_activated) {
            return Err(CreateUserError::EmailAlreadyExists);
        }

        let password_hash = self
            .password_hasher
            .hash_password(&input.password)
            .await
            .map_err(|e| CreateUserError::HashingFailed(e.to_string()))?;

        let user = User::new_inactive(
            input.personal_id,
            input.name,
            input.email,
            password_hash,
            input.address,
            input.phone_number,
            input.user_image,
        );

        // The unique index still guards against a concurrent signup with the same email.
        let stored = match existing {
            Some(stale) => {
                info!(stale_id = %stale.id, "Replacing unactivated signup");
                self.repository.replace_inactive_user(stale.id, user).await
            }
            None => self.repository.create_user(user).await,
        }
        .map_err(|e| match e {
            UserRepositoryError::UserAlreadyExists => CreateUserError::EmailAlreadyExists,
            other => CreateUserError::RepositoryError(other.to_string()),
        })?;

        Ok(CreateUserOutput {
            user_id: stored.id,
            email: stored.email,
            name: stored.name,
        })
    }
}
