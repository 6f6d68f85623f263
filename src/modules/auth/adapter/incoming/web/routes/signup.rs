use crate::auth::application::orchestrator::user_registration::UserRegistrationError;
use crate::auth::application::use_cases::create_user::{
    CreateUserError, CreateUserInput, CreateUserInputError, SignupFields,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

#[derive(Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub personal_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub user_image: Option<String>,
}

impl From<SignupRequest> for SignupFields {
    fn from(req: SignupRequest) -> Self {
        Self {
            personal_id: req.personal_id,
            name: req.name,
            email: req.email,
            password: req.password,
            address: req.address,
            phone_number: req.phone_number,
            user_image: req.user_image,
        }
    }
}

#[derive(Serialize)]
struct SignupResponse {
    message: String,
}

fn map_input_error(err: CreateUserInputError) -> HttpResponse {
    match err {
        CreateUserInputError::InvalidEmail => {
            ApiResponse::bad_request("INVALID_EMAIL", &err.to_string())
        }
        other => ApiResponse::bad_request("VALIDATION_ERROR", &other.to_string()),
    }
}

fn map_registration_error(err: UserRegistrationError, email: &str) -> HttpResponse {
    match err {
        UserRegistrationError::CreateUserFailed(CreateUserError::EmailAlreadyExists) => {
            warn!(email = %email, "Signup with an already registered email");
            ApiResponse::conflict("EMAIL_ALREADY_EXISTS", "Email is already registered")
        }
        UserRegistrationError::CreateUserFailed(other) => {
            error!(email = %email, error = %other, "User creation failed");
            ApiResponse::internal_error()
        }
        UserRegistrationError::EmailSendingFailed(e) => {
            error!(email = %email, error = %e, "Account created but activation email failed");
            ApiResponse::internal_error()
        }
    }
}

#[post("/service/user/signup")]
pub async fn signup_handler(
    req: web::Json<SignupRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let input = match CreateUserInput::new(req.into_inner().into()) {
        Ok(input) => input,
        Err(e) => {
            warn!(error = %e, "Invalid signup input");
            return map_input_error(e);
        }
    };
    let email = input.email().to_string();

    info!(email = %email, "User signup attempt");

    match data.register_user_orchestrator.register_user(input).await {
        Ok(output) => {
            info!(user_id = %output.user_id, email = %output.email, "User signed up");
            ApiResponse::success(SignupResponse {
                message: output.message,
            })
        }
        Err(e) => map_registration_error(e, &email),
    }
}
