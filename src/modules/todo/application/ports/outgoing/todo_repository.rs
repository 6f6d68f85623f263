use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::todo::application::domain::TodoStatus;

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// - Unset: field not provided => keep DB value
// - Null: explicitly null
// - Value(v): replace with v
//
// With #[serde(default)] on the request field an omitted key stays Unset.
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PatchField::Null)
    }
}

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// Fully resolved values for a new row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTodoData {
    pub todo_name: String,
    pub todo_desc: String,
    pub todo_status: TodoStatus,
    pub todo_image: String,
}

/// Patch semantics:
/// - todo_name/todo_desc/todo_status: Unset => keep, Value => replace
/// - todo_image: Unset => keep, Value => replace (an explicit null is stored as "")
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchTodoData {
    pub todo_name: PatchField<String>,
    pub todo_desc: PatchField<String>,
    pub todo_status: PatchField<TodoStatus>,
    pub todo_image: PatchField<String>,
}

impl PatchTodoData {
    pub fn is_empty(&self) -> bool {
        self.todo_name.is_unset()
            && self.todo_desc.is_unset()
            && self.todo_status.is_unset()
            && self.todo_image.is_unset()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoResult {
    pub id: Uuid,
    pub todo_name: String,
    pub todo_desc: String,
    pub todo_status: TodoStatus,
    pub todo_image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum TodoRepositoryError {
    #[error("Todo not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (command side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait TodoRepository: Send + Sync {
    async fn create_todo(&self, data: CreateTodoData) -> Result<TodoResult, TodoRepositoryError>;

    async fn patch_todo(
        &self,
        todo_id: Uuid,
        data: PatchTodoData,
    ) -> Result<TodoResult, TodoRepositoryError>;

    async fn delete_todo(&self, todo_id: Uuid) -> Result<(), TodoRepositoryError>;
}
