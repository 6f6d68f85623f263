use crate::auth::application::use_cases::create_user::CreateUserOutput;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserEmailNotificationError {
    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),
}

#[async_trait::async_trait]
pub trait UserEmailNotifier: Send + Sync {
    async fn send_activation_email(
        &self,
        user: &CreateUserOutput,
    ) -> Result<(), UserEmailNotificationError>;
}
