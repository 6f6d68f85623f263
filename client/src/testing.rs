//! In-memory `TodoApi` for exercising state transitions without a server.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use uuid::Uuid;

use crate::api::TodoApi;
use crate::error::ClientError;
use crate::models::{
    DeleteTodoResponse, MessageResponse, NewTodo, RefreshResponse, SigninResponse, SignupPayload,
    Todo, TodoPatch, TodoStatus, UserProfile,
};

pub const PASSWORD: &str = "correct-horse";
pub const REVOKED: &str = "revoked-refresh";

pub fn sample_profile() -> UserProfile {
    UserProfile {
        id: Uuid::new_v4(),
        personal_id: "P-100".to_string(),
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        address: "1 Main St".to_string(),
        phone_number: "555-0100".to_string(),
        user_image: None,
        is_activated: true,
        joined_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
    }
}

pub fn sample_todo(name: &str) -> Todo {
    let now = Utc::now();
    Todo {
        id: Uuid::new_v4(),
        todo_name: name.to_string(),
        todo_desc: format!("{name} description"),
        todo_status: TodoStatus::Active,
        todo_image: format!("https://api.dicebear.com/9.x/icons/svg?seed={name}"),
        created_at: now,
        updated_at: now,
    }
}

fn api_error(status: u16, code: &str, message: &str) -> ClientError {
    ClientError::Api {
        status,
        code: code.to_string(),
        message: message.to_string(),
    }
}

#[derive(Default)]
pub struct StubApi {
    profile: Mutex<Option<UserProfile>>,
    cookie: Mutex<bool>,
    todos: Mutex<Vec<Todo>>,
    next_error: Mutex<Option<ClientError>>,
    calls: Mutex<Vec<&'static str>>,
}

impl StubApi {
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        let api = Self::default();
        *api.todos.lock().unwrap() = todos;
        api
    }

    /// Simulates a process that still holds a valid access cookie.
    pub fn signed_in(self) -> Self {
        *self.profile.lock().unwrap() = Some(sample_profile());
        *self.cookie.lock().unwrap() = true;
        self
    }

    pub fn fail_next(&self, error: ClientError) {
        *self.next_error.lock().unwrap() = Some(error);
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn server_todos(&self) -> Vec<Todo> {
        self.todos.lock().unwrap().clone()
    }

    fn enter(&self, call: &'static str) -> Result<(), ClientError> {
        self.calls.lock().unwrap().push(call);
        match self.next_error.lock().unwrap().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl TodoApi for StubApi {
    async fn signup(&self, _payload: &SignupPayload) -> Result<MessageResponse, ClientError> {
        self.enter("signup")?;
        Ok(MessageResponse {
            message: "Registration successful. Check your email to activate your account."
                .to_string(),
        })
    }

    async fn activate(&self, activation_token: &str) -> Result<MessageResponse, ClientError> {
        self.enter("activate")?;
        if activation_token.is_empty() {
            return Err(api_error(400, "INVALID_TOKEN", "Invalid activation token"));
        }
        Ok(MessageResponse {
            message: "Account activated successfully".to_string(),
        })
    }

    async fn signin(&self, _email: &str, password: &str) -> Result<SigninResponse, ClientError> {
        self.enter("signin")?;
        if password != PASSWORD {
            return Err(api_error(401, "INVALID_CREDENTIALS", "Invalid email or password"));
        }
        let user = sample_profile();
        *self.profile.lock().unwrap() = Some(user.clone());
        *self.cookie.lock().unwrap() = true;
        Ok(SigninResponse {
            user,
            message: "Signed in successfully".to_string(),
            refresh_token: "refresh-1".to_string(),
        })
    }

    async fn logout(&self) -> Result<MessageResponse, ClientError> {
        self.enter("logout")?;
        *self.cookie.lock().unwrap() = false;
        Ok(MessageResponse {
            message: "Logged out successfully".to_string(),
        })
    }

    async fn profile(&self) -> Result<UserProfile, ClientError> {
        self.enter("profile")?;
        let profile = self.profile.lock().unwrap().clone();
        match (*self.cookie.lock().unwrap(), profile) {
            (true, Some(profile)) => Ok(profile),
            _ => Err(api_error(401, "MISSING_ACCESS_TOKEN", "Access token is missing")),
        }
    }

    async fn refresh(&self, refresh_token: &str) -> Result<RefreshResponse, ClientError> {
        self.enter("refresh")?;
        if refresh_token == REVOKED {
            return Err(api_error(401, "INVALID_TOKEN", "Invalid or expired token"));
        }
        self.profile
            .lock()
            .unwrap()
            .get_or_insert_with(sample_profile);
        *self.cookie.lock().unwrap() = true;
        Ok(RefreshResponse {
            message: "Session refreshed".to_string(),
            refresh_token: format!("{refresh_token}-next"),
        })
    }

    async fn list_todos(&self) -> Result<Vec<Todo>, ClientError> {
        self.enter("list_todos")?;
        Ok(self.server_todos())
    }

    async fn add_todo(&self, todo: &NewTodo) -> Result<Todo, ClientError> {
        self.enter("add_todo")?;
        let mut created = sample_todo(&todo.todo_name);
        created.todo_desc = todo.todo_desc.clone();
        created.todo_status = todo.todo_status.unwrap_or_default();
        if let Some(image) = &todo.todo_image {
            created.todo_image = image.clone();
        }
        self.todos.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update_todo(&self, id: Uuid, patch: &TodoPatch) -> Result<Todo, ClientError> {
        self.enter("update_todo")?;
        let mut todos = self.todos.lock().unwrap();
        let todo = todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| api_error(404, "TODO_NOT_FOUND", "Todo not found"))?;
        if let Some(name) = &patch.todo_name {
            todo.todo_name = name.clone();
        }
        if let Some(desc) = &patch.todo_desc {
            todo.todo_desc = desc.clone();
        }
        if let Some(status) = patch.todo_status {
            todo.todo_status = status;
        }
        if let Some(image) = &patch.todo_image {
            todo.todo_image = image.clone().unwrap_or_default();
        }
        todo.updated_at = Utc::now();
        Ok(todo.clone())
    }

    async fn delete_todo(&self, id: Uuid) -> Result<DeleteTodoResponse, ClientError> {
        self.enter("delete_todo")?;
        let mut todos = self.todos.lock().unwrap();
        let before = todos.len();
        todos.retain(|t| t.id != id);
        if todos.len() == before {
            return Err(api_error(404, "TODO_NOT_FOUND", "Todo not found"));
        }
        Ok(DeleteTodoResponse {
            message: "Todo deleted successfully".to_string(),
            id,
        })
    }
}
