//! In-memory port implementations shared by use-case tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::ports::outgoing::{
    HashError, PasswordHasher, UserQuery, UserQueryError, UserRepository, UserRepositoryError,
};
use crate::modules::todo::application::ports::outgoing::{
    CreateTodoData, PatchField, PatchTodoData, TodoQuery, TodoQueryError, TodoRepository,
    TodoRepositoryError, TodoResult,
};

#[derive(Clone, Default)]
pub struct InMemoryUsers {
    users: Arc<Mutex<HashMap<Uuid, User>>>,
    create_error: Option<UserRepositoryError>,
    query_error: Option<UserQueryError>,
}

impl InMemoryUsers {
    pub fn with_user(self, user: User) -> Self {
        self.users.lock().unwrap().insert(user.id, user);
        self
    }

    pub fn failing_create_with(mut self, err: UserRepositoryError) -> Self {
        self.create_error = Some(err);
        self
    }

    pub fn failing_queries_with(mut self, err: UserQueryError) -> Self {
        self.query_error = Some(err);
        self
    }

    pub fn get(&self, id: Uuid) -> Option<User> {
        self.users.lock().unwrap().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserQuery for InMemoryUsers {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError> {
        if let Some(err) = &self.query_error {
            return Err(err.clone());
        }
        Ok(self.get(user_id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        if let Some(err) = &self.query_error {
            return Err(err.clone());
        }
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email == email)
            .cloned())
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create_user(&self, user: User) -> Result<User, UserRepositoryError> {
        if let Some(err) = &self.create_error {
            return Err(err.clone());
        }
        let mut users = self.users.lock().unwrap();
        if users.values().any(|u| u.email == user.email) {
            return Err(UserRepositoryError::UserAlreadyExists);
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn replace_inactive_user(
        &self,
        stale_id: Uuid,
        user: User,
    ) -> Result<User, UserRepositoryError> {
        let mut users = self.users.lock().unwrap();
        match users.get(&stale_id) {
            Some(stale) if !stale.is_activated => {}
            _ => return Err(UserRepositoryError::UserAlreadyExists),
        }
        users.remove(&stale_id);
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn activate_user(&self, user_id: Uuid) -> Result<User, UserRepositoryError> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .get_mut(&user_id)
            .ok_or(UserRepositoryError::UserNotFound)?;
        user.is_activated = true;
        Ok(user.clone())
    }

    async fn set_refresh_token_hash(
        &self,
        user_id: Uuid,
        refresh_token_hash: Option<String>,
    ) -> Result<(), UserRepositoryError> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .get_mut(&user_id)
            .ok_or(UserRepositoryError::UserNotFound)?;
        user.refresh_token_hash = refresh_token_hash;
        Ok(())
    }
}

/// Deterministic stand-in for argon2: `hashed:<password>`.
pub struct PlainTextHasher;

#[async_trait]
impl PasswordHasher for PlainTextHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        Ok(hash == format!("hashed:{password}"))
    }
}

pub fn test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
        issuer: "todo-test".to_string(),
        access_token_expiry: 1800,
        refresh_token_expiry: 604_800,
        activation_token_expiry: 86_400,
    })
}

/// A user whose stored hash matches `password` under [`PlainTextHasher`].
pub fn stored_user(email: &str, password: &str, is_activated: bool) -> User {
    let mut user = User::new_inactive(
        "P-900".to_string(),
        "Test User".to_string(),
        email.to_string(),
        format!("hashed:{password}"),
        "1 Test Way".to_string(),
        "555-0000".to_string(),
        None,
    );
    user.is_activated = is_activated;
    user
}

/// Todo store backed by a vector, kept in insertion order.
#[derive(Clone, Default)]
pub struct InMemoryTodos {
    todos: Arc<Mutex<Vec<TodoResult>>>,
    error: Option<String>,
}

impl InMemoryTodos {
    pub fn failing_with(mut self, msg: &str) -> Self {
        self.error = Some(msg.to_string());
        self
    }

    fn check(&self) -> Result<(), TodoRepositoryError> {
        match &self.error {
            Some(msg) => Err(TodoRepositoryError::DatabaseError(msg.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl TodoQuery for InMemoryTodos {
    async fn list_all(&self) -> Result<Vec<TodoResult>, TodoQueryError> {
        if let Some(msg) = &self.error {
            return Err(TodoQueryError::DatabaseError(msg.clone()));
        }
        Ok(self.todos.lock().unwrap().clone())
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodos {
    async fn create_todo(&self, data: CreateTodoData) -> Result<TodoResult, TodoRepositoryError> {
        self.check()?;
        let now = Utc::now();
        let todo = TodoResult {
            id: Uuid::new_v4(),
            todo_name: data.todo_name,
            todo_desc: data.todo_desc,
            todo_status: data.todo_status,
            todo_image: data.todo_image,
            created_at: now,
            updated_at: now,
        };
        self.todos.lock().unwrap().push(todo.clone());
        Ok(todo)
    }

    async fn patch_todo(
        &self,
        todo_id: Uuid,
        data: PatchTodoData,
    ) -> Result<TodoResult, TodoRepositoryError> {
        self.check()?;
        let mut todos = self.todos.lock().unwrap();
        let todo = todos
            .iter_mut()
            .find(|t| t.id == todo_id)
            .ok_or(TodoRepositoryError::NotFound)?;
        if let PatchField::Value(v) = data.todo_name {
            todo.todo_name = v;
        }
        if let PatchField::Value(v) = data.todo_desc {
            todo.todo_desc = v;
        }
        if let PatchField::Value(v) = data.todo_status {
            todo.todo_status = v;
        }
        if let PatchField::Value(v) = data.todo_image {
            todo.todo_image = v;
        }
        todo.updated_at = Utc::now();
        Ok(todo.clone())
    }

    async fn delete_todo(&self, todo_id: Uuid) -> Result<(), TodoRepositoryError> {
        self.check()?;
        let mut todos = self.todos.lock().unwrap();
        let before = todos.len();
        todos.retain(|t| t.id != todo_id);
        if todos.len() == before {
            return Err(TodoRepositoryError::NotFound);
        }
        Ok(())
    }
}
