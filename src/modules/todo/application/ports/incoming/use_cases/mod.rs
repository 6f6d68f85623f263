mod create_todo;
mod delete_todo;
mod get_todos;
mod patch_todo;

pub use create_todo::{CreateTodoError, CreateTodoUseCase, NewTodo};
pub use delete_todo::{DeleteTodoError, DeleteTodoUseCase};
pub use get_todos::{GetTodosError, GetTodosUseCase};
pub use patch_todo::{PatchTodoError, PatchTodoUseCase};
