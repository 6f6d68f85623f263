use std::sync::Arc;

use tracing::error;

use crate::auth::application::use_cases::create_user::{
    CreateUserError, CreateUserInput, CreateUserOutput, ICreateUserUseCase,
};
use crate::email::application::ports::outgoing::UserEmailNotifier;

/// What signup answers with; never a session.
#[derive(Debug)]
pub struct UserRegistrationOutput {
    pub user_id: uuid::Uuid,
    pub email: String,
    pub message: String,
}

impl From<CreateUserOutput> for UserRegistrationOutput {
    fn from(output: CreateUserOutput) -> Self {
        Self {
            user_id: output.user_id,
            email: output.email,
            message: "Account created. Please check your email to activate your account."
                .to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UserRegistrationError {
    #[error("User creation failed: {0}")]
    CreateUserFailed(#[from] CreateUserError),

    /// The account row exists; only the activation mail failed.
    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),
}

#[derive(Clone)]
pub struct UserRegistrationOrchestrator {
    create_user_use_case: Arc<dyn ICreateUserUseCase + Send + Sync>,
    email_service: Arc<dyn UserEmailNotifier + Send + Sync>,
}

impl UserRegistrationOrchestrator {
    pub fn new(
        create_user_use_case: Arc<dyn ICreateUserUseCase + Send + Sync>,
        email_service: Arc<dyn UserEmailNotifier + Send + Sync>,
    ) -> Self {
        Self {
            create_user_use_case,
            email_service,
        }
    }

    /// Creates the inactive account, then sends the activation email.
    pub async fn register_user(
        &self,
        input: CreateUserInput,
    ) -> Result<UserRegistrationOutput, UserRegistrationError> {
        let created_user = self.create_user_use_case.execute(input).await?;

        if let Err(e) = self.email_service.send_activation_email(&created_user).await {
            error!(
                user_id = %created_user.user_id,
                error = %e,
                "Activation email could not be sent"
            );
            return Err(UserRegistrationError::EmailSendingFailed(e.to_string()));
        }

        Ok(created_user.into())
    }
}
