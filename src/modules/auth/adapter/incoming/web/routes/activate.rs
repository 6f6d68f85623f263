use crate::auth::application::use_cases::activate_user::ActivateUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

#[derive(Deserialize)]
pub struct ActivateRequest {
    #[serde(default)]
    pub activation_token: String,
}

#[derive(Serialize)]
struct ActivateResponse {
    message: &'static str,
}

#[post("/service/user/activate")]
pub async fn activate_handler(
    req: web::Json<ActivateRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .activate_user_use_case
        .execute(&req.activation_token)
        .await
    {
        Ok(outcome) => {
            info!(?outcome, "Activation request handled");
            ApiResponse::success(ActivateResponse {
                message: outcome.message(),
            })
        }
        Err(ActivateUserError::MissingToken) => {
            ApiResponse::bad_request("VALIDATION_ERROR", "Activation token is required")
        }
        Err(ActivateUserError::TokenExpired) => {
            warn!("Expired activation token");
            ApiResponse::bad_request("TOKEN_EXPIRED", "Activation token has expired")
        }
        Err(ActivateUserError::TokenInvalid) => {
            warn!("Invalid activation token");
            ApiResponse::bad_request("INVALID_TOKEN", "Invalid activation token")
        }
        Err(ActivateUserError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(ActivateUserError::DatabaseError(e)) => {
            error!(error = %e, "Activation failed");
            ApiResponse::internal_error()
        }
    }
}
