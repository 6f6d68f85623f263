use crate::auth::adapter::incoming::web::extractors::access_token_from_cookie;
use crate::auth::application::use_cases::logout_user::LogoutRequest;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpRequest, Responder};
use serde::Serialize;
use tracing::{error, info};

#[derive(Serialize)]
struct LogoutResponse {
    message: String,
}

#[post("/service/user/logout")]
pub async fn logout_handler(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    let request = LogoutRequest::new(access_token_from_cookie(&req));

    // The cookie is removed regardless of what happens to the stored session.
    let message = match data.logout_user_use_case.execute(request).await {
        Ok(response) => {
            info!("User logged out");
            response.message
        }
        Err(e) => {
            error!(error = %e, "Failed to revoke session on logout");
            "Logged out successfully".to_string()
        }
    };

    ApiResponse::success_with_cookie(
        LogoutResponse { message },
        data.session_cookie.removal_cookie(),
    )
}
