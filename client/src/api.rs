use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;
use uuid::Uuid;

use crate::error::ClientError;
use crate::models::{
    ApiErrorBody, DeleteTodoResponse, MessageResponse, NewTodo, RefreshResponse, SigninResponse,
    SignupPayload, Todo, TodoPatch, UserProfile,
};

pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// One method per endpoint; each call is a single round-trip.
#[async_trait]
pub trait TodoApi: Send + Sync {
    async fn signup(&self, payload: &SignupPayload) -> Result<MessageResponse, ClientError>;
    async fn activate(&self, activation_token: &str) -> Result<MessageResponse, ClientError>;
    async fn signin(&self, email: &str, password: &str) -> Result<SigninResponse, ClientError>;
    async fn logout(&self) -> Result<MessageResponse, ClientError>;
    async fn profile(&self) -> Result<UserProfile, ClientError>;
    async fn refresh(&self, refresh_token: &str) -> Result<RefreshResponse, ClientError>;

    async fn list_todos(&self) -> Result<Vec<Todo>, ClientError>;
    async fn add_todo(&self, todo: &NewTodo) -> Result<Todo, ClientError>;
    async fn update_todo(&self, id: Uuid, patch: &TodoPatch) -> Result<Todo, ClientError>;
    async fn delete_todo(&self, id: Uuid) -> Result<DeleteTodoResponse, ClientError>;
}

/// HTTP transport. The cookie store keeps the `access_token` cookie between calls.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Reads `TODO_API_URL`, defaulting to a local server.
    pub fn from_env() -> Result<Self, ClientError> {
        let base_url = std::env::var("TODO_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        debug!(status, bytes = body.len(), "Response received");
        decode_response(status, &body)
    }
}

/// A 2xx body is the payload itself; anything else becomes [`ClientError::Api`]
/// carrying the server's `message` when it sent one.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T, ClientError> {
    if (200..300).contains(&status) {
        return serde_json::from_slice(body).map_err(|e| ClientError::Decode(e.to_string()));
    }

    match serde_json::from_slice::<ApiErrorBody>(body) {
        Ok(err) => Err(ClientError::Api {
            status,
            code: err.code.unwrap_or_else(|| "HTTP_ERROR".to_string()),
            message: err.message,
        }),
        Err(_) => Err(ClientError::Api {
            status,
            code: "HTTP_ERROR".to_string(),
            message: format!("Request failed with status {status}"),
        }),
    }
}

#[async_trait]
impl TodoApi for ApiClient {
    async fn signup(&self, payload: &SignupPayload) -> Result<MessageResponse, ClientError> {
        self.send(self.http.post(self.url("/service/user/signup")).json(payload))
            .await
    }

    async fn activate(&self, activation_token: &str) -> Result<MessageResponse, ClientError> {
        self.send(
            self.http
                .post(self.url("/service/user/activate"))
                .json(&json!({ "activation_token": activation_token })),
        )
        .await
    }

    async fn signin(&self, email: &str, password: &str) -> Result<SigninResponse, ClientError> {
        self.send(
            self.http
                .post(self.url("/service/user/signin"))
                .json(&json!({ "email": email, "password": password })),
        )
        .await
    }

    async fn logout(&self) -> Result<MessageResponse, ClientError> {
        self.send(self.http.post(self.url("/service/user/logout")))
            .await
    }

    async fn profile(&self) -> Result<UserProfile, ClientError> {
        self.send(self.http.get(self.url("/service/user/user-infor")))
            .await
    }

    async fn refresh(&self, refresh_token: &str) -> Result<RefreshResponse, ClientError> {
        self.send(
            self.http
                .post(self.url("/service/user/refresh"))
                .json(&json!({ "refreshToken": refresh_token })),
        )
        .await
    }

    async fn list_todos(&self) -> Result<Vec<Todo>, ClientError> {
        self.send(self.http.get(self.url("/service/todo/get_all")))
            .await
    }

    async fn add_todo(&self, todo: &NewTodo) -> Result<Todo, ClientError> {
        self.send(self.http.post(self.url("/service/todo/add_todo")).json(todo))
            .await
    }

    async fn update_todo(&self, id: Uuid, patch: &TodoPatch) -> Result<Todo, ClientError> {
        self.send(
            self.http
                .patch(self.url(&format!("/service/todo/update_todo/{id}")))
                .json(patch),
        )
        .await
    }

    async fn delete_todo(&self, id: Uuid) -> Result<DeleteTodoResponse, ClientError> {
        self.send(
            self.http
                .delete(self.url(&format!("/service/todo/delete_todo/{id}"))),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_success_payload() {
        let body = br#"{"message":"ok"}"#;
        let decoded: MessageResponse = decode_response(200, body).unwrap();
        assert_eq!(decoded.message, "ok");
    }

    #[test]
    fn decodes_a_bare_todo_array() {
        let body = br#"[]"#;
        let decoded: Vec<Todo> = decode_response(200, body).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn decodes_error_body() {
        let body = br#"{"message":"Todo not found","code":"TODO_NOT_FOUND"}"#;
        let err = decode_response::<Todo>(404, body).unwrap_err();
        assert_eq!(
            err,
            ClientError::Api {
                status: 404,
                code: "TODO_NOT_FOUND".to_string(),
                message: "Todo not found".to_string(),
            }
        );
    }

    #[test]
    fn error_without_code_keeps_the_message() {
        let err = decode_response::<Todo>(400, br#"{"message":"All fields are required"}"#)
            .unwrap_err();
        assert_eq!(err.message(), "All fields are required");
        assert!(matches!(err, ClientError::Api { status: 400, .. }));
    }

    #[test]
    fn non_json_error_body_keeps_status() {
        let err = decode_response::<Todo>(502, b"Bad Gateway").unwrap_err();
        assert!(matches!(err, ClientError::Api { status: 502, .. }));
    }

    #[test]
    fn malformed_success_body_is_decode_error() {
        let err = decode_response::<Todo>(200, b"{}").unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[test]
    fn base_url_drops_trailing_slash() {
        let client = ApiClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(
            client.url("/service/todo/get_all"),
            "http://localhost:8080/service/todo/get_all"
        );
    }
}
