pub mod todo_status;

pub use todo_status::{ParseTodoStatusError, TodoStatus};

/// Placeholder picture derived from the todo name.
pub const DEFAULT_TODO_IMAGE_BASE: &str = "https://api.dicebear.com/9.x/icons/svg?seed=";

pub fn default_todo_image(todo_name: &str) -> String {
    format!("{DEFAULT_TODO_IMAGE_BASE}{todo_name}")
}
