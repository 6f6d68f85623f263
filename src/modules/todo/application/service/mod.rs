mod create_todo_service;
mod delete_todo_service;
mod get_todos_service;
mod patch_todo_service;

pub use create_todo_service::CreateTodoService;
pub use delete_todo_service::DeleteTodoService;
pub use get_todos_service::GetTodosService;
pub use patch_todo_service::PatchTodoService;
