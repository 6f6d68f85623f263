use actix_web::{patch, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use uuid::Uuid;

use crate::modules::todo::application::domain::TodoStatus;
use crate::modules::todo::application::ports::incoming::use_cases::PatchTodoError;
use crate::modules::todo::application::ports::outgoing::{PatchField, PatchTodoData};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateTodoRequest {
    #[serde(default)]
    pub todo_name: PatchField<String>,

    #[serde(default)]
    pub todo_desc: PatchField<String>,

    #[serde(default)]
    pub todo_status: PatchField<TodoStatus>,

    #[serde(default)]
    pub todo_image: PatchField<String>,
}

impl From<UpdateTodoRequest> for PatchTodoData {
    fn from(req: UpdateTodoRequest) -> Self {
        PatchTodoData {
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

#[patch("/service/todo/update_todo/{todo_id}")]
pub async fn update_todo_handler(
    path: web::Path<Uuid>,
    req: web::Json<UpdateTodoRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let todo_id = path.into_inner();

    match data.todo.patch.execute(todo_id, req.into_inner().into()).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(PatchTodoError::ValidationError(msg)) => {
            warn!(%todo_id, error = %msg, "Invalid todo patch");
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(PatchTodoError::NotFound) => ApiResponse::not_found("TODO_NOT_FOUND", "Todo not found"),

        Err(PatchTodoError::RepositoryError(e)) => {
            error!(%todo_id, error = %e, "Repository error patching todo");
            ApiResponse::internal_error()
        }
    }
}
