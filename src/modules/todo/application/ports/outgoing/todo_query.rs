use async_trait::async_trait;

use crate::modules::todo::application::ports::outgoing::todo_repository::TodoResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TodoQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TodoQuery: Send + Sync {
    /// Every todo, oldest first.
    async fn list_all(&self) -> Result<Vec<TodoResult>, TodoQueryError>;
}
