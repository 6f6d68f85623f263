use async_trait::async_trait;

use crate::modules::todo::application::ports::outgoing::TodoResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTodosError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetTodosUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<TodoResult>, GetTodosError>;
}
