use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::todo::application::ports::incoming::use_cases::GetTodosError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/service/todo/get_all")]
pub async fn get_todos_handler(data: web::Data<AppState>) -> impl Responder {
    match data.todo.get_all.execute().await {
        Ok(todos) => ApiResponse::success(todos),

        Err(GetTodosError::RepositoryError(e)) => {
            error!(error = %e, "Repository error listing todos");
            ApiResponse::internal_error()
        }
    }
}
