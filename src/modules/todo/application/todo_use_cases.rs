use std::sync::Arc;

use crate::modules::todo::application::ports::incoming::use_cases::{
    CreateTodoUseCase, DeleteTodoUseCase, GetTodosUseCase, PatchTodoUseCase,
};

#[derive(Clone)]
pub struct TodoUseCases {
    pub get_all: Arc<dyn GetTodosUseCase + Send + Sync>,
    pub create: Arc<dyn CreateTodoUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchTodoUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteTodoUseCase + Send + Sync>,
}
