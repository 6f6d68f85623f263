use tracing::{info, warn};
use uuid::Uuid;

use crate::api::TodoApi;
use crate::error::ClientError;
use crate::forms::TodoForm;
use crate::models::{Todo, TodoPatch};

/// Local copy of the todo list. Mutations patch it from the server's response
/// instead of re-fetching.
#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    todos: Vec<Todo>,
    message: String,
    is_loading: bool,
    is_error: bool,
    is_success: bool,
}

impl TodoStore {
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn get(&self, id: Uuid) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Outcome of the last action, as shown to the user.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Set while a request is in flight.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    pub fn is_success(&self) -> bool {
        self.is_success
    }

    fn begin(&mut self) {
        self.is_loading = true;
        self.is_error = false;
        self.is_success = false;
        self.message.clear();
    }

    fn done(&mut self, message: &str) {
        self.is_loading = false;
        self.is_error = false;
        self.is_success = true;
        self.message = message.to_string();
    }

    fn rejected(&mut self, message: String) -> ClientError {
        self.is_loading = false;
        self.is_error = true;
        self.is_success = false;
        self.message = message.clone();
        ClientError::Validation(message)
    }

    fn failed(&mut self, message: &str, err: ClientError) -> ClientError {
        warn!(error = %err, "{}", message);
        self.is_loading = false;
        self.is_error = true;
        self.is_success = false;
        self.message = message.to_string();
        err
    }

    pub async fn load(&mut self, api: &dyn TodoApi) -> Result<(), ClientError> {
        self.begin();
        match api.list_todos().await {
            Ok(todos) => {
                self.todos = todos;
                self.done("");
                Ok(())
            }
            Err(e) => Err(self.failed("Failed to fetch tasks", e)),
        }
    }

    pub async fn add(&mut self, api: &dyn TodoApi, form: &TodoForm) -> Result<Todo, ClientError> {
        self.begin();
        let new_todo = form.validate().map_err(|e| self.rejected(e.to_string()))?;

        match api.add_todo(&new_todo).await {
            Ok(todo) => {
                info!(todo_id = %todo.id, "Task added");
                self.todos.push(todo.clone());
                self.done("Task added successfully!");
                Ok(todo)
            }
            Err(e) => Err(self.failed("Failed to add task", e)),
        }
    }

    pub async fn update(
        &mut self,
        api: &dyn TodoApi,
        id: Uuid,
        patch: &TodoPatch,
    ) -> Result<Todo, ClientError> {
        self.begin();
        let blank = |field: &Option<String>| field.as_deref().is_some_and(|s| s.trim().is_empty());
        if patch.is_empty() || blank(&patch.todo_name) || blank(&patch.todo_desc) {
            return Err(self.rejected("Please fill in all fields".to_string()));
        }

        match api.update_todo(id, patch).await {
            Ok(todo) => {
                match self.todos.iter_mut().find(|t| t.id == todo.id) {
                    Some(slot) => *slot = todo.clone(),
                    None => self.todos.push(todo.clone()),
                }
                self.done("Task updated successfully!");
                Ok(todo)
            }
            Err(e) => {
                if e.is_not_found() {
                    self.todos.retain(|t| t.id != id);
                }
                Err(self.failed("Failed to update task", e))
            }
        }
    }

    pub async fn delete(&mut self, api: &dyn TodoApi, id: Uuid) -> Result<(), ClientError> {
        self.begin();
        match api.delete_todo(id).await {
            Ok(response) => {
                self.todos.retain(|t| t.id != response.id);
                self.done("Task deleted successfully!");
                Ok(())
            }
            Err(e) => Err(self.failed("Failed to delete task", e)),
        }
    }
}
