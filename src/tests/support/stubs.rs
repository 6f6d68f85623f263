use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserProfile;
use crate::auth::application::use_cases::activate_user::{
    ActivateUserError, ActivationOutcome, IActivateUserUseCase,
};
use crate::auth::application::use_cases::create_user::{
    CreateUserError, CreateUserInput, CreateUserOutput, ICreateUserUseCase,
};
use crate::auth::application::use_cases::fetch_profile::{
    FetchUserProfileError, FetchUserProfileUseCase,
};
use crate::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginRequest, LoginUserResponse,
};
use crate::auth::application::use_cases::logout_user::{
    ILogoutUseCase, LogoutError, LogoutRequest, LogoutResponse,
};
use crate::auth::application::use_cases::refresh_token::{
    IRefreshTokenUseCase, RefreshTokenError, RefreshTokenRequest, RefreshTokenResponse,
};
use crate::email::application::ports::outgoing::user_email_notifier::{
    UserEmailNotificationError, UserEmailNotifier,
};
use crate::modules::todo::application::domain::TodoStatus;
use crate::modules::todo::application::ports::incoming::use_cases::{
    CreateTodoError, CreateTodoUseCase, DeleteTodoError, DeleteTodoUseCase, GetTodosError,
    GetTodosUseCase, NewTodo, PatchTodoError, PatchTodoUseCase,
};
use crate::modules::todo::application::ports::outgoing::{PatchTodoData, TodoResult};

// ============================ Fixtures ============================

pub fn sample_todo(name: &str) -> TodoResult {
    let now = Utc::now();
    TodoResult {
        id: Uuid::new_v4(),
        todo_name: name.to_string(),
        todo_desc: format!("{name} description"),
        todo_status: TodoStatus::Active,
        todo_image: "https://img.example/todo.png".to_string(),
        created_at: now,
        updated_at: now,
    }
}

// ============================ Auth stubs ============================

#[derive(Default, Clone)]
pub struct StubCreateUserUseCase {
    error: Option<CreateUserError>,
}

impl StubCreateUserUseCase {
    pub fn success() -> Self {
        Self { error: None }
    }

    pub fn failing(error: CreateUserError) -> Self {
        Self { error: Some(error) }
    }
}

#[async_trait]
impl ICreateUserUseCase for StubCreateUserUseCase {
    async fn execute(&self, input: CreateUserInput) -> Result<CreateUserOutput, CreateUserError> {
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(CreateUserOutput {
                user_id: Uuid::new_v4(),
                email: input.email().to_string(),
                name: input.name().to_string(),
            }),
        }
    }
}

#[derive(Default, Clone)]
pub struct StubUserEmailNotifier {
    fail: bool,
}

impl StubUserEmailNotifier {
    pub fn ok() -> Self {
        Self { fail: false }
    }

    pub fn failing() -> Self {
        Self { fail: true }
    }
}

#[async_trait]
impl UserEmailNotifier for StubUserEmailNotifier {
    async fn send_activation_email(
        &self,
        _user: &CreateUserOutput,
    ) -> Result<(), UserEmailNotificationError> {
        if self.fail {
            return Err(UserEmailNotificationError::EmailSendingFailed(
                "smtp unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Clone)]
pub struct StubActivateUserUseCase {
    result: Result<ActivationOutcome, ActivateUserError>,
}

impl StubActivateUserUseCase {
    pub fn ok(outcome: ActivationOutcome) -> Self {
        Self {
            result: Ok(outcome),
        }
    }

    pub fn err(error: ActivateUserError) -> Self {
        Self { result: Err(error) }
    }
}

impl Default for StubActivateUserUseCase {
    fn default() -> Self {
        Self::ok(ActivationOutcome::Activated)
    }
}

#[async_trait]
impl IActivateUserUseCase for StubActivateUserUseCase {
    async fn execute(&self, _token: &str) -> Result<ActivationOutcome, ActivateUserError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubLoginUserUseCase {
    result: Result<LoginUserResponse, LoginError>,
}

impl StubLoginUserUseCase {
    pub fn ok(response: LoginUserResponse) -> Self {
        Self {
            result: Ok(response),
        }
    }

    pub fn err(error: LoginError) -> Self {
        Self { result: Err(error) }
    }
}

impl Default for StubLoginUserUseCase {
    fn default() -> Self {
        Self::err(LoginError::InvalidCredentials)
    }
}

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubRefreshTokenUseCase {
    result: Result<RefreshTokenResponse, RefreshTokenError>,
}

impl StubRefreshTokenUseCase {
    pub fn ok(response: RefreshTokenResponse) -> Self {
        Self {
            result: Ok(response),
        }
    }

    pub fn err(error: RefreshTokenError) -> Self {
        Self { result: Err(error) }
    }
}

impl Default for StubRefreshTokenUseCase {
    fn default() -> Self {
        Self::err(RefreshTokenError::InvalidToken)
    }
}

#[async_trait]
impl IRefreshTokenUseCase for StubRefreshTokenUseCase {
    async fn execute(
        &self,
        _request: RefreshTokenRequest,
    ) -> Result<RefreshTokenResponse, RefreshTokenError> {
        self.result.clone()
    }
}

/// Records the access token it was handed so routes can be checked for cookie plumbing.
#[derive(Clone)]
pub struct StubLogoutUserUseCase {
    error: Option<LogoutError>,
    last_token: Arc<Mutex<Option<String>>>,
}

impl StubLogoutUserUseCase {
    pub fn ok() -> Self {
        Self {
            error: None,
            last_token: Arc::new(Mutex::new(None)),
        }
    }

    pub fn err(error: LogoutError) -> Self {
        Self {
            error: Some(error),
            last_token: Arc::new(Mutex::new(None)),
        }
    }

    pub fn last_token(&self) -> Option<String> {
        self.last_token.lock().unwrap().clone()
    }
}

impl Default for StubLogoutUserUseCase {
    fn default() -> Self {
        Self::ok()
    }
}

#[async_trait]
impl ILogoutUseCase for StubLogoutUserUseCase {
    async fn execute(&self, request: LogoutRequest) -> Result<LogoutResponse, LogoutError> {
        *self.last_token.lock().unwrap() = request.access_token().map(str::to_string);
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(LogoutResponse {
                message: "Logged out successfully".to_string(),
            }),
        }
    }
}

#[derive(Clone)]
pub struct StubFetchUserProfileUseCase {
    result: Result<UserProfile, FetchUserProfileError>,
}

impl StubFetchUserProfileUseCase {
    pub fn ok(profile: UserProfile) -> Self {
        Self {
            result: Ok(profile),
        }
    }

    pub fn err(error: FetchUserProfileError) -> Self {
        Self { result: Err(error) }
    }
}

impl Default for StubFetchUserProfileUseCase {
    fn default() -> Self {
        Self::err(FetchUserProfileError::UserNotFound(Uuid::nil()))
    }
}

#[async_trait]
impl FetchUserProfileUseCase for StubFetchUserProfileUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<UserProfile, FetchUserProfileError> {
        self.result.clone()
    }
}

// ============================ Todo stubs ============================

#[derive(Clone)]
pub struct StubGetTodosUseCase {
    result: Result<Vec<TodoResult>, GetTodosError>,
}

impl StubGetTodosUseCase {
    pub fn ok(todos: Vec<TodoResult>) -> Self {
        Self { result: Ok(todos) }
    }

    pub fn err(error: GetTodosError) -> Self {
        Self { result: Err(error) }
    }
}

impl Default for StubGetTodosUseCase {
    fn default() -> Self {
        Self::ok(vec![])
    }
}

#[async_trait]
impl GetTodosUseCase for StubGetTodosUseCase {
    async fn execute(&self) -> Result<Vec<TodoResult>, GetTodosError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubCreateTodoUseCase {
    error: CreateTodoError,
}

impl StubCreateTodoUseCase {
    pub fn err(error: CreateTodoError) -> Self {
        Self { error }
    }
}

impl Default for StubCreateTodoUseCase {
    fn default() -> Self {
        Self::err(CreateTodoError::RepositoryError(
            "not used in this test".to_string(),
        ))
    }
}

#[async_trait]
impl CreateTodoUseCase for StubCreateTodoUseCase {
    async fn execute(&self, _todo: NewTodo) -> Result<TodoResult, CreateTodoError> {
        Err(self.error.clone())
    }
}

#[derive(Default, Clone)]
pub struct StubPatchTodoUseCase;

#[async_trait]
impl PatchTodoUseCase for StubPatchTodoUseCase {
    async fn execute(
        &self,
        _todo_id: Uuid,
        _data: PatchTodoData,
    ) -> Result<TodoResult, PatchTodoError> {
        Err(PatchTodoError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteTodoUseCase;

#[async_trait]
impl DeleteTodoUseCase for StubDeleteTodoUseCase {
    async fn execute(&self, _todo_id: Uuid) -> Result<(), DeleteTodoError> {
        Err(DeleteTodoError::NotFound)
    }
}
