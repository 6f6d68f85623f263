pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::email;
pub use modules::todo;

use crate::auth::adapter::incoming::web::SessionCookieConfig;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::orchestrator::user_registration::UserRegistrationOrchestrator;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::services::FetchUserProfileService;
use crate::auth::application::use_cases::{
    activate_user::{ActivateUserUseCase, IActivateUserUseCase},
    create_user::{CreateUserUseCase, ICreateUserUseCase},
    fetch_profile::FetchUserProfileUseCase,
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    logout_user::{ILogoutUseCase, LogoutUseCase},
    refresh_token::{IRefreshTokenUseCase, RefreshTokenUseCase},
};
use crate::email::adapter::outgoing::SmtpEmailSender;
use crate::email::application::ports::outgoing::UserEmailNotifier;
use crate::email::application::services::UserEmailService;
use crate::shared::api::{custom_json_config, custom_path_config};
use crate::todo::adapter::outgoing::{TodoQueryPostgres, TodoRepositoryPostgres};
use crate::todo::application::service::{
    CreateTodoService, DeleteTodoService, GetTodosService, PatchTodoService,
};
use crate::todo::application::todo_use_cases::TodoUseCases;

use actix_cors::Cors;
use actix_web::{http::header, web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_user_orchestrator: Arc<UserRegistrationOrchestrator>,
    pub activate_user_use_case: Arc<dyn IActivateUserUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub refresh_token_use_case: Arc<dyn IRefreshTokenUseCase + Send + Sync>,
    pub logout_user_use_case: Arc<dyn ILogoutUseCase + Send + Sync>,
    pub fetch_user_profile_use_case: Arc<dyn FetchUserProfileUseCase + Send + Sync>,
    pub session_cookie: SessionCookieConfig,
    pub todo: TodoUseCases,
}

/// Start-up failures surface as `io::Error` so `start()` can bail with `?`.
#[cfg(not(tarpaulin_include))]
fn config_error(context: &str, err: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::new(
        std::io::ErrorKind::InvalidInput,
        format!("{context}: {err}"),
    )
}

#[cfg(not(tarpaulin_include))]
fn required_env(key: &str) -> std::io::Result<String> {
    env::var(key).map_err(|_| config_error(key, "is not set"))
}

#[cfg(not(tarpaulin_include))]
fn smtp_sender_from_env(from_email: &str) -> std::io::Result<SmtpEmailSender> {
    if env::var("RUST_ENV").as_deref() == Ok("production") {
        let smtp_server = required_env("SMTP_SERVER")?;
        let smtp_user = required_env("SMTP_USERNAME")?;
        let smtp_pass = required_env("SMTP_PASSWORD")?;

        SmtpEmailSender::new(&smtp_server, &smtp_user, &smtp_pass, from_email)
            .map_err(|e| config_error("SMTP", e))
    } else {
        // Local relay (Mailpit, MailHog, etc.)
        let host = env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string());
        let port: u16 = env::var("SMTP_PORT")
            .unwrap_or_else(|_| "1025".to_string())
            .parse()
            .map_err(|e| config_error("SMTP_PORT", e))?;

        Ok(SmtpEmailSender::new_local(&host, port, from_email))
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = required_env("DATABASE_URL")?;
    let host = required_env("HOST")?;
    let port = required_env("PORT")?;
    let allowed_origin = required_env("CORS_ALLOWED_ORIGIN")?;
    let app_url = env::var("APP_URL").unwrap_or_else(|_| allowed_origin.clone());
    let from_email = required_env("EMAIL_FROM")?;

    let jwt_config = JwtConfig::from_env().map_err(|e| config_error("JWT", e))?;
    let session_cookie = SessionCookieConfig::from_env(jwt_config.access_token_expiry)
        .map_err(|e| config_error("Cookie", e))?;
    let argon2_hasher = Argon2Hasher::from_env().map_err(|e| config_error("Argon2", e))?;
    let smtp_sender = smtp_sender_from_env(&from_email)?;

    if !session_cookie.secure {
        warn!("Access token cookie is not marked Secure");
    }

    let server_url = format!("{host}:{port}");
    info!(%server_url, %allowed_origin, env = %env_name, "Configuration loaded");

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(20)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .map_err(|e| std::io::Error::other(format!("Failed to connect to database: {e}")))?;
    let db_arc = Arc::new(conn);

    // Auth
    let jwt_service: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(jwt_config));
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(argon2_hasher);

    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));

    let create_user_use_case: Arc<dyn ICreateUserUseCase + Send + Sync> =
        Arc::new(CreateUserUseCase::new(
            user_query.clone(),
            user_repo.clone(),
            password_hasher.clone(),
        ));
    let email_notifier: Arc<dyn UserEmailNotifier + Send + Sync> = Arc::new(
        UserEmailService::new(jwt_service.clone(), Arc::new(smtp_sender), app_url),
    );
    let register_user_orchestrator =
        UserRegistrationOrchestrator::new(create_user_use_case, email_notifier);

    let activate_user_use_case =
        ActivateUserUseCase::new(user_query.clone(), user_repo.clone(), jwt_service.clone());
    let login_user_use_case = LoginUserUseCase::new(
        user_query.clone(),
        user_repo.clone(),
        password_hasher,
        jwt_service.clone(),
    );
    let refresh_token_use_case =
        RefreshTokenUseCase::new(user_query.clone(), user_repo.clone(), jwt_service.clone());
    let logout_user_use_case = LogoutUseCase::new(user_repo, jwt_service.clone());
    let fetch_user_profile_use_case = FetchUserProfileService::new(user_query);

    // Todo
    let todo_query = TodoQueryPostgres::new(Arc::clone(&db_arc));
    let todo_repo = TodoRepositoryPostgres::new(Arc::clone(&db_arc));
    let todo = TodoUseCases {
        get_all: Arc::new(GetTodosService::new(todo_query)),
        create: Arc::new(CreateTodoService::new(todo_repo.clone())),
        patch: Arc::new(PatchTodoService::new(todo_repo.clone())),
        delete: Arc::new(DeleteTodoService::new(todo_repo)),
    };

    let state = AppState {
        register_user_orchestrator: Arc::new(register_user_orchestrator),
        activate_user_use_case: Arc::new(activate_user_use_case),
        login_user_use_case: Arc::new(login_user_use_case),
        refresh_token_use_case: Arc::new(refresh_token_use_case),
        logout_user_use_case: Arc::new(logout_user_use_case),
        fetch_user_profile_use_case: Arc::new(fetch_user_profile_use_case),
        session_cookie,
        todo,
    };

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&allowed_origin)
            .allowed_methods(vec!["GET", "POST", "PATCH", "DELETE"])
            .allowed_header(header::CONTENT_TYPE)
            .supports_credentials()
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(actix_web::middleware::Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&jwt_service)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .app_data(custom_path_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::signup_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::activate_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::signin_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::refresh_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::user_info_handler);
    // Todo
    cfg.service(crate::todo::adapter::incoming::web::routes::get_todos_handler);
    cfg.service(crate::todo::adapter::incoming::web::routes::add_todo_handler);
    cfg.service(crate::todo::adapter::incoming::web::routes::update_todo_handler);
    cfg.service(crate::todo::adapter::incoming::web::routes::delete_todo_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
