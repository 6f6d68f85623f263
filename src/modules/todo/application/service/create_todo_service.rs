use async_trait::async_trait;
use tracing::info;

use crate::modules::todo::application::domain::default_todo_image;
use crate::modules::todo::application::ports::incoming::use_cases::{
    CreateTodoError, CreateTodoUseCase, NewTodo,
};
use crate::modules::todo::application::ports::outgoing::{
    CreateTodoData, TodoRepository, TodoRepositoryError, TodoResult,
};

pub struct CreateTodoService<R>
where
    R: TodoRepository,
{
    todo_repository: R,
}

impl<R> CreateTodoService<R>
where
    R: TodoRepository,
{
    pub fn new(todo_repository: R) -> Self {
        Self { todo_repository }
    }
}

/// Trimmed value, or a validation message naming the field.
pub(crate) fn non_blank(field: &str, value: &str) -> Result<String, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(format!("{field} cannot be empty"));
    }
    Ok(value.to_string())
}

#[async_trait]
impl<R> CreateTodoUseCase for CreateTodoService<R>
where
    R: TodoRepository,
{
    async fn execute(&self, todo: NewTodo) -> Result<TodoResult, CreateTodoError> {
        let todo_name =
            non_blank("todo_name", &todo.todo_name).map_err(CreateTodoError::ValidationError)?;
        let todo_desc =
            non_blank("todo_desc", &todo.todo_desc).map_err(CreateTodoError::ValidationError)?;
        let todo_image = todo
            .todo_image
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| default_todo_image(&todo_name));

        let created = self
            .todo_repository
            .create_todo(CreateTodoData {
                todo_name,
                todo_desc,
                todo_status: todo.todo_status.unwrap_or_default(),
                todo_image,
            })
            .await
            .map_err(|e| match e {
                TodoRepositoryError::DatabaseError(msg) => CreateTodoError::RepositoryError(msg),
                TodoRepositoryError::NotFound => CreateTodoError::RepositoryError(
                    "unexpected not found while creating todo".to_string(),
                ),
            })?;

        info!(todo_id = %created.id, "Todo created");
        Ok(created)
    }
}
