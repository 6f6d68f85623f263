pub mod todo_query;
pub mod todo_repository;

pub use todo_query::{TodoQuery, TodoQueryError};
pub use todo_repository::{
    CreateTodoData, PatchField, PatchTodoData, TodoRepository, TodoRepositoryError, TodoResult,
};
