//! Session state mirrored from the server: who is signed in and the request flags
//! the presentation layer renders.

use tracing::{debug, info, warn};

use crate::api::TodoApi;
use crate::error::ClientError;
use crate::forms::SignupForm;
use crate::models::UserProfile;
use crate::storage::{PersistedSession, SessionStorage};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionContext {
    #[default]
    Anonymous,
    Authenticated(UserProfile),
}

impl SessionContext {
    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            SessionContext::Authenticated(user) => Some(user),
            SessionContext::Anonymous => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionContext::Authenticated(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthState {
    pub session: SessionContext,
    pub is_loading: bool,
    pub is_error: bool,
    pub is_success: bool,
    pub is_logged_out: bool,
    pub needs_activation: bool,
    pub message: String,
    pub refresh_token: Option<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            session: SessionContext::Anonymous,
            is_loading: false,
            is_error: false,
            is_success: false,
            is_logged_out: true,
            needs_activation: false,
            message: String::new(),
            refresh_token: None,
        }
    }
}

impl AuthState {
    /// Rebuilds the state saved by a previous run.
    pub fn restore(persisted: PersistedSession) -> Self {
        let session = match persisted.user {
            Some(user) => SessionContext::Authenticated(user),
            None => SessionContext::Anonymous,
        };
        Self {
            is_logged_out: !session.is_authenticated(),
            session,
            refresh_token: persisted.refresh_token,
            ..Self::default()
        }
    }

    /// Clears the per-request flags, keeping the session itself.
    pub fn reset(&mut self) {
        self.is_loading = false;
        self.is_error = false;
        self.is_success = false;
        self.needs_activation = false;
        self.message.clear();
    }

    fn begin(&mut self) {
        self.reset();
        self.is_loading = true;
    }

    fn succeed(&mut self, message: String) {
        self.is_loading = false;
        self.is_success = true;
        self.message = message;
    }

    fn fail(&mut self, err: ClientError) -> ClientError {
        self.is_loading = false;
        self.is_error = true;
        self.message = err.message();
        err
    }

    fn persisted(&self) -> PersistedSession {
        PersistedSession {
            user: self.session.user().cloned(),
            refresh_token: self.refresh_token.clone(),
        }
    }

    fn sign_out_locally(&mut self, storage: &SessionStorage) {
        self.session = SessionContext::Anonymous;
        self.refresh_token = None;
        self.is_logged_out = true;
        if let Err(e) = storage.clear() {
            warn!(error = %e, "Failed to clear stored session");
        }
    }

    fn persist(&self, storage: &SessionStorage) {
        if let Err(e) = storage.save(&self.persisted()) {
            warn!(error = %e, "Failed to persist session");
        }
    }

    pub async fn signup(&mut self, api: &dyn TodoApi, form: &SignupForm) -> Result<(), ClientError> {
        self.begin();
        let payload = form
            .validate()
            .map_err(|e| self.fail(ClientError::Validation(e.to_string())))?;

        match api.signup(&payload).await {
            Ok(response) => {
                info!(email = %payload.email, "Signed up, awaiting activation");
                self.succeed(response.message);
                self.needs_activation = true;
                Ok(())
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    pub async fn activate(
        &mut self,
        api: &dyn TodoApi,
        activation_token: &str,
    ) -> Result<(), ClientError> {
        self.begin();
        let token = activation_token.trim();
        if token.is_empty() {
            return Err(self.fail(ClientError::Validation(
                "Activation token is required".to_string(),
            )));
        }

        match api.activate(token).await {
            Ok(response) => {
                self.succeed(response.message);
                Ok(())
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    pub async fn signin(
        &mut self,
        api: &dyn TodoApi,
        storage: &SessionStorage,
        email: &str,
        password: &str,
    ) -> Result<(), ClientError> {
        self.begin();
        if email.trim().is_empty() || password.is_empty() {
            return Err(self.fail(ClientError::Validation(
                "Please fill in all fields".to_string(),
            )));
        }

        match api.signin(email.trim(), password).await {
            Ok(response) => {
                info!(user_id = %response.user.id, "Signed in");
                self.session = SessionContext::Authenticated(response.user);
                self.refresh_token = Some(response.refresh_token);
                self.is_logged_out = false;
                self.persist(storage);
                self.succeed(response.message);
                Ok(())
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// The server clears the cookie even when revocation fails, so local state is
    /// always dropped on success.
    pub async fn logout(
        &mut self,
        api: &dyn TodoApi,
        storage: &SessionStorage,
    ) -> Result<(), ClientError> {
        self.begin();
        match api.logout().await {
            Ok(response) => {
                self.sign_out_locally(storage);
                self.succeed(response.message);
                Ok(())
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    pub async fn load_profile(
        &mut self,
        api: &dyn TodoApi,
        storage: &SessionStorage,
    ) -> Result<(), ClientError> {
        self.begin();
        match api.profile().await {
            Ok(profile) => {
                self.session = SessionContext::Authenticated(profile);
                self.is_logged_out = false;
                self.persist(storage);
                self.is_loading = false;
                self.is_success = true;
                Ok(())
            }
            Err(e) => {
                if e.is_unauthorized() {
                    self.sign_out_locally(storage);
                }
                Err(self.fail(e))
            }
        }
    }

    /// Exchanges the stored refresh token for a fresh access cookie.
    pub async fn refresh(
        &mut self,
        api: &dyn TodoApi,
        storage: &SessionStorage,
    ) -> Result<(), ClientError> {
        self.begin();
        let Some(token) = self.refresh_token.clone() else {
            return Err(self.fail(ClientError::NotSignedIn));
        };

        match api.refresh(&token).await {
            Ok(response) => {
                self.refresh_token = Some(response.refresh_token);
                self.persist(storage);
                self.succeed(response.message);
                Ok(())
            }
            Err(e) => {
                if e.is_unauthorized() {
                    self.sign_out_locally(storage);
                }
                Err(self.fail(e))
            }
        }
    }

    /// The cookie jar lives only as long as the process, so a stored refresh token
    /// is exchanged for a new access cookie before calls that need one. A failed
    /// exchange is left for the following call to report.
    pub async fn resume(&mut self, api: &dyn TodoApi, storage: &SessionStorage) {
        if self.refresh_token.is_none() {
            return;
        }
        if let Err(e) = self.refresh(api, storage).await {
            debug!(error = %e, "Could not resume the stored session");
        }
    }
}
