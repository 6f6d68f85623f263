use std::sync::Arc;

use actix_web::web;

use crate::auth::adapter::incoming::web::SessionCookieConfig;
use crate::auth::application::orchestrator::user_registration::UserRegistrationOrchestrator;
use crate::auth::application::use_cases::{
    activate_user::IActivateUserUseCase, fetch_profile::FetchUserProfileUseCase,
    login_user::ILoginUserUseCase, logout_user::ILogoutUseCase,
    refresh_token::IRefreshTokenUseCase,
};
use crate::modules::todo::application::ports::incoming::use_cases::{
    CreateTodoUseCase, DeleteTodoUseCase, GetTodosUseCase, PatchTodoUseCase,
};
use crate::modules::todo::application::todo_use_cases::TodoUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Every slot starts as a stub; tests swap in what they exercise.
pub struct TestAppStateBuilder {
    register_user: Arc<UserRegistrationOrchestrator>,
    activate_user: Arc<dyn IActivateUserUseCase + Send + Sync>,
    login_user: Arc<dyn ILoginUserUseCase + Send + Sync>,
    refresh_token: Arc<dyn IRefreshTokenUseCase + Send + Sync>,
    logout_user: Arc<dyn ILogoutUseCase + Send + Sync>,
    fetch_user_profile: Arc<dyn FetchUserProfileUseCase + Send + Sync>,
    session_cookie: SessionCookieConfig,
    todo: TodoUseCases,
}

pub fn default_test_user_registration_orchestrator() -> Arc<UserRegistrationOrchestrator> {
    Arc::new(UserRegistrationOrchestrator::new(
        Arc::new(StubCreateUserUseCase::success()),
        Arc::new(StubUserEmailNotifier::ok()),
    ))
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: default_test_user_registration_orchestrator(),
            activate_user: Arc::new(StubActivateUserUseCase::default()),
            login_user: Arc::new(StubLoginUserUseCase::default()),
            refresh_token: Arc::new(StubRefreshTokenUseCase::default()),
            logout_user: Arc::new(StubLogoutUserUseCase::default()),
            fetch_user_profile: Arc::new(StubFetchUserProfileUseCase::default()),
            session_cookie: SessionCookieConfig::new(1800),
            todo: TodoUseCases {
                get_all: Arc::new(StubGetTodosUseCase::default()),
                create: Arc::new(StubCreateTodoUseCase::default()),
                patch: Arc::new(StubPatchTodoUseCase),
                delete: Arc::new(StubDeleteTodoUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_user(mut self, orchestrator: UserRegistrationOrchestrator) -> Self {
        self.register_user = Arc::new(orchestrator);
        self
    }

    pub fn with_activate_user(
        mut self,
        uc: impl IActivateUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.activate_user = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_refresh_token(
        mut self,
        uc: impl IRefreshTokenUseCase + Send + Sync + 'static,
    ) -> Self {
        self.refresh_token = Arc::new(uc);
        self
    }

    pub fn with_logout_user(mut self, uc: impl ILogoutUseCase + Send + Sync + 'static) -> Self {
        self.logout_user = Arc::new(uc);
        self
    }

    pub fn with_fetch_user_profile(
        mut self,
        uc: impl FetchUserProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.fetch_user_profile = Arc::new(uc);
        self
    }

    pub fn with_session_cookie(mut self, config: SessionCookieConfig) -> Self {
        self.session_cookie = config;
        self
    }

    pub fn with_get_todos(mut self, uc: impl GetTodosUseCase + Send + Sync + 'static) -> Self {
        self.todo.get_all = Arc::new(uc);
        self
    }

    pub fn with_create_todo(mut self, uc: impl CreateTodoUseCase + Send + Sync + 'static) -> Self {
        self.todo.create = Arc::new(uc);
        self
    }

    pub fn with_patch_todo(mut self, uc: impl PatchTodoUseCase + Send + Sync + 'static) -> Self {
        self.todo.patch = Arc::new(uc);
        self
    }

    pub fn with_delete_todo(mut self, uc: impl DeleteTodoUseCase + Send + Sync + 'static) -> Self {
        self.todo.delete = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_user_orchestrator: self.register_user,
            activate_user_use_case: self.activate_user,
            login_user_use_case: self.login_user,
            refresh_token_use_case: self.refresh_token,
            logout_user_use_case: self.logout_user,
            fetch_user_profile_use_case: self.fetch_user_profile,
            session_cookie: self.session_cookie,
            todo: self.todo,
        })
    }
}
