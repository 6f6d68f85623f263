use async_trait::async_trait;

use crate::modules::todo::application::ports::incoming::use_cases::{
    GetTodosError, GetTodosUseCase,
};
use crate::modules::todo::application::ports::outgoing::{TodoQuery, TodoQueryError, TodoResult};

pub struct GetTodosService<Q>
where
    Q: TodoQuery,
{
    todo_query: Q,
}

impl<Q> GetTodosService<Q>
where
    Q: TodoQuery,
{
    pub fn new(todo_query: Q) -> Self {
        Self { todo_query }
    }
}

#[async_trait]
impl<Q> GetTodosUseCase for GetTodosService<Q>
where
    Q: TodoQuery,
{
    async fn execute(&self) -> Result<Vec<TodoResult>, GetTodosError> {
        self.todo_query.list_all().await.map_err(|e| match e {
            TodoQueryError::DatabaseError(msg) => GetTodosError::RepositoryError(msg),
        })
    }
}
