use actix_web::{delete, web, Responder};
use serde::Serialize;
use tracing::error;
use uuid::Uuid;

use crate::modules::todo::application::ports::incoming::use_cases::DeleteTodoError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize)]
struct DeleteTodoResponse {
    message: &'static str,
    id: Uuid,
}

#[delete("/service/todo/delete_todo/{todo_id}")]
pub async fn delete_todo_handler(path: web::Path<Uuid>, data: web::Data<AppState>) -> impl Responder {
    let todo_id = path.into_inner();

    match data.todo.delete.execute(todo_id).await {
        Ok(()) => ApiResponse::success(DeleteTodoResponse {
            message: "Todo deleted successfully",
            id: todo_id,
        }),

        Err(DeleteTodoError::NotFound) => ApiResponse::not_found("TODO_NOT_FOUND", "Todo not found"),

        Err(DeleteTodoError::RepositoryError(e)) => {
            error!(%todo_id, error = %e, "Repository error deleting todo");
            ApiResponse::internal_error()
        }
    }
}
