//! Wire types shared with the todo service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of every non-2xx answer.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub personal_id: String,
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: String,
    pub user_image: Option<String>,
    #[serde(rename = "isActivated")]
    pub is_activated: bool,
    #[serde(rename = "joinedAt")]
    pub joined_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoStatus {
    #[default]
    Active,
    Completed,
}

impl std::str::FromStr for TodoStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(TodoStatus::Active),
            "completed" => Ok(TodoStatus::Completed),
            other => Err(format!("unknown status '{other}', expected active or completed")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub todo_name: String,
    pub todo_desc: String,
    pub todo_status: TodoStatus,
    pub todo_image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTodo {
    pub todo_name: String,
    pub todo_desc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub todo_status: Option<TodoStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub todo_image: Option<String>,
}

/// Partial update. `todo_image: Some(None)` is sent as `null` and clears the image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub todo_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub todo_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub todo_status: Option<TodoStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub todo_image: Option<Option<String>>,
}

impl TodoPatch {
    pub fn is_empty(&self) -> bool {
        self.todo_name.is_none()
            && self.todo_desc.is_none()
            && self.todo_status.is_none()
            && self.todo_image.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupPayload {
    pub personal_id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub address: String,
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_image: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SigninResponse {
    pub user: UserProfile,
    pub message: String,
    #[serde(rename = "refreshToken")]
    pub refresh_token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RefreshResponse {
    pub message: String,
    #[serde(rename = "refreshToken")]
    pub refresh_token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteTodoResponse {
    pub message: String,
    pub id: Uuid,
}
