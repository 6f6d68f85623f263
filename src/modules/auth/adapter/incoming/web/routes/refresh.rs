use crate::auth::application::use_cases::refresh_token::{RefreshTokenError, RefreshTokenRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

#[derive(Deserialize)]
pub struct RefreshRequest {
    #[serde(default, rename = "refreshToken")]
    pub refresh_token: String,
}

#[derive(Serialize)]
struct RefreshResponse {
    message: &'static str,
    #[serde(rename = "refreshToken")]
    refresh_token: String,
}

#[post("/service/user/refresh")]
pub async fn refresh_handler(
    req: web::Json<RefreshRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = match RefreshTokenRequest::new(req.into_inner().refresh_token) {
        Ok(request) => request,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.refresh_token_use_case.execute(request).await {
        Ok(response) => {
            info!("Session refreshed");
            let cookie = data.session_cookie.access_cookie(response.access_token);
            ApiResponse::success_with_cookie(
                RefreshResponse {
                    message: "Session refreshed",
                    refresh_token: response.refresh_token,
                },
                cookie,
            )
        }
        Err(RefreshTokenError::TokenExpired) => {
            ApiResponse::unauthorized("TOKEN_EXPIRED", "Refresh token has expired")
        }
        Err(e @ (RefreshTokenError::InvalidToken | RefreshTokenError::SessionRevoked)) => {
            warn!(error = %e, "Refresh rejected");
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid or revoked refresh token")
        }
        Err(e) => {
            error!(error = %e, "Refresh failed");
            ApiResponse::internal_error()
        }
    }
}
