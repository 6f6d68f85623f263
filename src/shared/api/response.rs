use actix_web::{cookie::Cookie, http::StatusCode, HttpResponse};
use serde::Serialize;

/// Builds every JSON response the service sends. Successful bodies are the
/// payload itself; failures are an [`ApiError`].
pub struct ApiResponse;

/// Error body: a human-readable `message` plus a stable machine `code`.
#[derive(Debug, Serialize, Clone)]
pub struct ApiError {
    pub message: String,
    pub code: String,
}

impl ApiResponse {
    pub fn success<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Ok().json(data)
    }

    pub fn created<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Created().json(data)
    }

    /// 200 response that also sets (or removes) a cookie on the client.
    pub fn success_with_cookie<T: Serialize>(data: T, cookie: Cookie<'static>) -> HttpResponse {
        HttpResponse::Ok().cookie(cookie).json(data)
    }

    pub fn error(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiError {
            message: message.to_string(),
            code: code.to_string(),
        })
    }

    pub fn not_found(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, code, message)
    }

    pub fn bad_request(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, code, message)
    }

    pub fn forbidden(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::FORBIDDEN, code, message)
    }

    pub fn unauthorized(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, code, message)
    }

    pub fn conflict(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::CONFLICT, code, message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "An unexpected error occurred",
        )
    }
}
