use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::todo::adapter::outgoing::sea_orm_entity::todos::{ActiveModel, Column, Entity};
use crate::modules::todo::application::ports::outgoing::{
    CreateTodoData, PatchField, PatchTodoData, TodoRepository, TodoRepositoryError, TodoResult,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct TodoRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TodoRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TodoRepository for TodoRepositoryPostgres {
    async fn create_todo(&self, data: CreateTodoData) -> Result<TodoResult, TodoRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            todo_name: Set(data.todo_name),
            todo_desc: Set(data.todo_desc),
            todo_status: Set(data.todo_status.into()),
            todo_image: Set(data.todo_image),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(result.into())
    }

    async fn patch_todo(
        &self,
        todo_id: Uuid,
        data: PatchTodoData,
    ) -> Result<TodoResult, TodoRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(name) = data.todo_name {
            model.todo_name = Set(name);
        }

        if let PatchField::Value(desc) = data.todo_desc {
            model.todo_desc = Set(desc);
        }

        if let PatchField::Value(status) = data.todo_status {
            model.todo_status = Set(status.into());
        }

        // Column is NOT NULL; an explicit null clears the picture.
        match data.todo_image {
            PatchField::Unset => {}
            PatchField::Null => model.todo_image = Set(String::new()),
            PatchField::Value(url) => model.todo_image = Set(url),
        }

        let has_changes = model.todo_name.is_set()
            || model.todo_desc.is_set()
            || model.todo_status.is_set()
            || model.todo_image.is_set();

        if !has_changes {
            let result = Entity::find_by_id(todo_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(TodoRepositoryError::NotFound)?;

            return Ok(result.into());
        }

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(todo_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(TodoRepositoryError::NotFound)?;

        Ok(result.into())
    }

    async fn delete_todo(&self, todo_id: Uuid) -> Result<(), TodoRepositoryError> {
        let res = Entity::delete_many()
            .filter(Column::Id.eq(todo_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(TodoRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn map_db_err(e: DbErr) -> TodoRepositoryError {
    TodoRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
