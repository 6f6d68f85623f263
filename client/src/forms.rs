//! Local form checks run before any request is sent.

use crate::models::{NewTodo, SignupPayload, TodoStatus};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Passwords do not match")]
    PasswordMismatch,
}

#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub personal_id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub address: String,
    pub phone_number: String,
    pub user_image: Option<String>,
}

impl SignupForm {
    pub fn validate(&self) -> Result<SignupPayload, FormError> {
        let required = [
            &self.personal_id,
            &self.name,
            &self.email,
            &self.password,
            &self.address,
            &self.phone_number,
        ];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(FormError::MissingFields);
        }
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }

        Ok(SignupPayload {
            personal_id: self.personal_id.trim().to_string(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            address: self.address.trim().to_string(),
            phone_number: self.phone_number.trim().to_string(),
            user_image: self
                .user_image
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct TodoForm {
    pub todo_name: String,
    pub todo_desc: String,
    pub todo_status: Option<TodoStatus>,
    pub todo_image: Option<String>,
}

impl TodoForm {
    pub fn validate(&self) -> Result<NewTodo, FormError> {
        if self.todo_name.trim().is_empty() || self.todo_desc.trim().is_empty() {
            return Err(FormError::MissingFields);
        }

        Ok(NewTodo {
            todo_name: self.todo_name.trim().to_string(),
            todo_desc: self.todo_desc.trim().to_string(),
            todo_status: self.todo_status,
            todo_image: self
                .todo_image
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        })
    }
}
