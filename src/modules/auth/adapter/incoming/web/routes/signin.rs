use crate::auth::application::domain::entities::UserProfile;
use crate::auth::application::use_cases::login_user::{LoginError, LoginRequest, LoginRequestError};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

#[derive(Deserialize)]
pub struct SigninRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize)]
struct SigninResponse {
    user: UserProfile,
    message: &'static str,
    #[serde(rename = "refreshToken")]
    refresh_token: String,
}

#[post("/service/user/signin")]
pub async fn signin_handler(
    req: web::Json<SigninRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match LoginRequest::new(dto.email, dto.password) {
        Ok(req) => req,
        Err(e @ LoginRequestError::InvalidEmailFormat) => {
            return ApiResponse::bad_request("INVALID_EMAIL", &e.to_string());
        }
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    info!(email = %request.email(), "Signin attempt");

    match data.login_user_use_case.execute(request).await {
        Ok(response) => {
            info!(user_id = %response.user.id, "User signed in");
            let cookie = data.session_cookie.access_cookie(response.access_token);
            ApiResponse::success_with_cookie(
                SigninResponse {
                    user: response.user,
                    message: "Signed in successfully",
                    refresh_token: response.refresh_token,
                },
                cookie,
            )
        }

        Err(LoginError::InvalidCredentials) => {
            warn!("Signin failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }

        Err(LoginError::AccountNotActivated) => {
            warn!("Signin failed: account not activated");
            ApiResponse::forbidden(
                "ACCOUNT_NOT_ACTIVATED",
                "Please activate your account before signing in",
            )
        }

        Err(e) => {
            error!(error = %e, "Signin failed");
            ApiResponse::internal_error()
        }
    }
}
