use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, warn};

use crate::modules::todo::application::domain::TodoStatus;
use crate::modules::todo::application::ports::incoming::use_cases::{CreateTodoError, NewTodo};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct AddTodoRequest {
    #[serde(default)]
    pub todo_name: String,
    #[serde(default)]
    pub todo_desc: String,
    #[serde(default)]
    pub todo_status: Option<TodoStatus>,
    #[serde(default)]
    pub todo_image: Option<String>,
}

impl From<AddTodoRequest> for NewTodo {
    fn from(req: AddTodoRequest) -> Self {
        NewTodo {
            todo_name: req.todo_name,
            todo_desc: req.todo_desc,
            todo_status: req.todo_status,
            todo_image: req.todo_image,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[post("/service/todo/add_todo")]
pub async fn add_todo_handler(
    req: web::Json<AddTodoRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.todo.create.execute(req.into_inner().into()).await {
        Ok(created) => ApiResponse::created(created),

        Err(CreateTodoError::ValidationError(msg)) => {
            warn!(error = %msg, "Invalid todo");
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(CreateTodoError::RepositoryError(e)) => {
            error!(error = %e, "Repository error creating todo");
            ApiResponse::internal_error()
        }
    }
}
