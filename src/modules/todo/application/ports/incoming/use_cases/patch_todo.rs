use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::todo::application::ports::outgoing::{PatchTodoData, TodoResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum PatchTodoError {
    #[error("{0}")]
    ValidationError(String),

    #[error("Todo not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait PatchTodoUseCase: Send + Sync {
    async fn execute(&self, todo_id: Uuid, data: PatchTodoData)
        -> Result<TodoResult, PatchTodoError>;
}
