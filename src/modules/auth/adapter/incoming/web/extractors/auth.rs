use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use tracing::warn;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::session_cookie::ACCESS_TOKEN_COOKIE;
use crate::auth::application::ports::outgoing::{TokenProvider, TokenType};
use crate::shared::api::ApiResponse;

/// User id taken from a valid `access_token` cookie.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let jwt_service = match req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>() {
            Some(service) => service,
            None => {
                tracing::error!("Token provider is not registered as app data");
                return ready(Err(create_api_error(ApiResponse::internal_error())));
            }
        };

        let token = match access_token_from_cookie(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_ACCESS_TOKEN",
                    "Authentication required",
                ))));
            }
        };

        match jwt_service.verify_token_of_type(&token, TokenType::Access) {
            Ok(user_id) => ready(Ok(AuthenticatedUser { user_id })),
            Err(e) => {
                warn!(error = %e, "Rejected access token");
                ready(Err(create_api_error(ApiResponse::unauthorized(
                    "INVALID_TOKEN",
                    "Invalid or expired token",
                ))))
            }
        }
    }
}

/// Raw cookie value, if any and not blank.
pub fn access_token_from_cookie(req: &HttpRequest) -> Option<String> {
    req.cookie(ACCESS_TOKEN_COOKIE)
        .map(|c| c.value().trim().to_string())
        .filter(|v| !v.is_empty())
}
