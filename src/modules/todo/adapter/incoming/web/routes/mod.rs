mod add_todo;
mod delete_todo;
mod get_todos;
mod update_todo;

pub use add_todo::add_todo_handler;
pub use delete_todo::delete_todo_handler;
pub use get_todos::get_todos_handler;
pub use update_todo::update_todo_handler;
