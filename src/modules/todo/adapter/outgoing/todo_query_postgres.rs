use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use std::sync::Arc;

use crate::modules::todo::adapter::outgoing::sea_orm_entity::todos::{Column, Entity};
use crate::modules::todo::application::ports::outgoing::{TodoQuery, TodoQueryError, TodoResult};

#[derive(Clone)]
pub struct TodoQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TodoQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TodoQuery for TodoQueryPostgres {
    async fn list_all(&self) -> Result<Vec<TodoResult>, TodoQueryError> {
        let models = Entity::find()
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(TodoResult::from).collect())
    }
}

fn map_db_err(e: DbErr) -> TodoQueryError {
    TodoQueryError::DatabaseError(e.to_string())
}
