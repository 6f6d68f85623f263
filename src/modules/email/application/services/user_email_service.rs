use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::auth::application::ports::outgoing::TokenProvider;
use crate::auth::application::use_cases::create_user::CreateUserOutput;
use crate::email::application::ports::outgoing::{
    EmailSender, UserEmailNotificationError, UserEmailNotifier,
};

/// Sends the account activation mail for a freshly registered user.
#[derive(Clone)]
pub struct UserEmailService {
    token_provider: Arc<dyn TokenProvider>,
    sender: Arc<dyn EmailSender>,
    app_url: String,
}

impl fmt::Debug for UserEmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserEmailService")
            .field("sender", &"<dyn EmailSender>")
            .field("app_url", &self.app_url)
            .finish()
    }
}

impl UserEmailService {
    pub fn new(
        token_provider: Arc<dyn TokenProvider>,
        sender: Arc<dyn EmailSender>,
        app_url: impl Into<String>,
    ) -> Self {
        Self {
            token_provider,
            sender,
            app_url: app_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn activation_link(&self, token: &str) -> String {
        format!("{}/activate?token={}", self.app_url, token)
    }

    /// `name` is user input and is HTML-escaped before it reaches the body.
    fn activation_body(&self, name: &str, token: &str) -> String {
        let link = self.activation_link(token);
        let name = html_escape::encode_text(name);
        format!(
            "<p>Hi {name},</p>\
             <p>Thanks for signing up. Activate your account by opening the link below:</p>\
             <p><a href=\"{link}\">{link}</a></p>\
             <p>If the link does not work, paste this activation token into the app:</p>\
             <pre>{token}</pre>"
        )
    }
}

#[async_trait]
impl UserEmailNotifier for UserEmailService {
    async fn send_activation_email(
        &self,
        user: &CreateUserOutput,
    ) -> Result<(), UserEmailNotificationError> {
        let token = self
            .token_provider
            .generate_activation_token(user.user_id)
            .map_err(|e| UserEmailNotificationError::TokenGenerationFailed(e.to_string()))?;

        let body = self.activation_body(&user.name, &token);
        self.sender
            .send_email(&user.email, "Activate your account", &body)
            .await
            .map_err(|e| UserEmailNotificationError::EmailSendingFailed(e.to_string()))?;

        info!(user_id = %user.user_id, email = %user.email, "Activation email sent");
        Ok(())
    }
}
