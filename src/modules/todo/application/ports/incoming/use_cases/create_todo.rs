use async_trait::async_trait;

use crate::modules::todo::application::domain::TodoStatus;
use crate::modules::todo::application::ports::outgoing::TodoResult;

/// Todo fields as received from a client, before validation.
#[derive(Debug, Clone, Default)]
pub struct NewTodo {
    pub todo_name: String,
    pub todo_desc: String,
    pub todo_status: Option<TodoStatus>,
    pub todo_image: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateTodoError {
    #[error("{0}")]
    ValidationError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateTodoUseCase: Send + Sync {
    async fn execute(&self, todo: NewTodo) -> Result<TodoResult, CreateTodoError>;
}
