use async_trait::async_trait;
use uuid::Uuid;

use super::create_todo_service::non_blank;
use crate::modules::todo::application::ports::incoming::use_cases::{
    PatchTodoError, PatchTodoUseCase,
};
use crate::modules::todo::application::ports::outgoing::{
    PatchField, PatchTodoData, TodoRepository, TodoRepositoryError, TodoResult,
};

pub struct PatchTodoService<R>
where
    R: TodoRepository,
{
    todo_repository: R,
}

impl<R> PatchTodoService<R>
where
    R: TodoRepository,
{
    pub fn new(todo_repository: R) -> Self {
        Self { todo_repository }
    }
}

fn required_text(field: &str, value: PatchField<String>) -> Result<PatchField<String>, PatchTodoError> {
    match value {
        PatchField::Unset => Ok(PatchField::Unset),
        PatchField::Null => Err(PatchTodoError::ValidationError(format!(
            "{field} cannot be null"
        ))),
        PatchField::Value(v) => non_blank(field, &v)
            .map(PatchField::Value)
            .map_err(PatchTodoError::ValidationError),
    }
}

/// Rejects patches that would break row invariants and normalizes the rest.
fn validate(data: PatchTodoData) -> Result<PatchTodoData, PatchTodoError> {
    if data.is_empty() {
        return Err(PatchTodoError::ValidationError(
            "No fields to update".to_string(),
        ));
    }

    let todo_status = match data.todo_status {
        PatchField::Null => {
            return Err(PatchTodoError::ValidationError(
                "todo_status cannot be null".to_string(),
            ))
        }
        other => other,
    };

    let todo_image = match data.todo_image {
        PatchField::Unset => PatchField::Unset,
        PatchField::Null => PatchField::Value(String::new()),
        PatchField::Value(url) => PatchField::Value(url.trim().to_string()),
    };

    Ok(PatchTodoData {
        todo_name: required_text("todo_name", data.todo_name)?,
        todo_desc: required_text("todo_desc", data.todo_desc)?,
        todo_status,
        todo_image,
    })
}

#[async_trait]
impl<R> PatchTodoUseCase for PatchTodoService<R>
where
    R: TodoRepository,
{
    async fn execute(
        &self,
        todo_id: Uuid,
        data: PatchTodoData,
    ) -> Result<TodoResult, PatchTodoError> {
        let data = validate(data)?;

        self.todo_repository
            .patch_todo(todo_id, data)
            .await
            .map_err(|e| match e {
                TodoRepositoryError::NotFound => PatchTodoError::NotFound,
                TodoRepositoryError::DatabaseError(msg) => PatchTodoError::RepositoryError(msg),
            })
    }
}
