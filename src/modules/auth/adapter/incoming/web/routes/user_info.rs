use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::use_cases::fetch_profile::FetchUserProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::{error, warn};

#[get("/service/user/user-infor")]
pub async fn user_info_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.fetch_user_profile_use_case.execute(user.user_id).await {
        Ok(profile) => ApiResponse::success(profile),

        // A valid cookie for a missing or inactive account is not a usable session.
        Err(FetchUserProfileError::UserNotFound(id)) => {
            warn!(user_id = %id, "Access token for unknown user");
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid or expired token")
        }
        Err(FetchUserProfileError::AccountNotActivated) => {
            warn!(user_id = %user.user_id, "Access token for inactive user");
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid or expired token")
        }
        Err(FetchUserProfileError::QueryError(e)) => {
            error!(error = %e, "Database error fetching user profile");
            ApiResponse::internal_error()
        }
    }
}
