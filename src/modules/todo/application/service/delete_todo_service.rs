use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::todo::application::ports::incoming::use_cases::{
    DeleteTodoError, DeleteTodoUseCase,
};
use crate::modules::todo::application::ports::outgoing::{TodoRepository, TodoRepositoryError};

pub struct DeleteTodoService<R>
where
    R: TodoRepository,
{
    todo_repository: R,
}

impl<R> DeleteTodoService<R>
where
    R: TodoRepository,
{
    pub fn new(todo_repository: R) -> Self {
        Self { todo_repository }
    }
}

#[async_trait]
impl<R> DeleteTodoUseCase for DeleteTodoService<R>
where
    R: TodoRepository,
{
    async fn execute(&self, todo_id: Uuid) -> Result<(), DeleteTodoError> {
        self.todo_repository
            .delete_todo(todo_id)
            .await
            .map_err(|e| match e {
                TodoRepositoryError::NotFound => DeleteTodoError::NotFound,
                TodoRepositoryError::DatabaseError(msg) => DeleteTodoError::RepositoryError(msg),
            })?;

        info!(%todo_id, "Todo deleted");
        Ok(())
    }
}
