use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteTodoError {
    #[error("Todo not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteTodoUseCase: Send + Sync {
    async fn execute(&self, todo_id: Uuid) -> Result<(), DeleteTodoError>;
}
