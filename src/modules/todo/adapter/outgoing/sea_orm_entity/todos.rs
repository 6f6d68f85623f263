use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};

use crate::modules::todo::application::domain::TodoStatus;
use crate::modules::todo::application::ports::outgoing::TodoResult;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "todos")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub todo_name: String,

    #[sea_orm(column_type = "Text")]
    pub todo_desc: String,

    pub todo_status: TodoStatusDb,

    #[sea_orm(column_type = "Text")]
    pub todo_image: String,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "todo_status")]
pub enum TodoStatusDb {
    #[sea_orm(string_value = "active")]
    Active,

    #[sea_orm(string_value = "completed")]
    Completed,
}

impl From<TodoStatus> for TodoStatusDb {
    fn from(status: TodoStatus) -> Self {
        match status {
            TodoStatus::Active => TodoStatusDb::Active,
            TodoStatus::Completed => TodoStatusDb::Completed,
        }
    }
}

impl From<TodoStatusDb> for TodoStatus {
    fn from(status: TodoStatusDb) -> Self {
        match status {
            TodoStatusDb::Active => TodoStatus::Active,
            TodoStatusDb::Completed => TodoStatus::Completed,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(name) = &self.todo_name {
            self.todo_name = Set(name.trim().to_string());
        }

        #[cfg(feature = "no_db_triggers")]
        {
            if !_insert {
                self.updated_at = Set(chrono::Utc::now().into());
            }
        }

        Ok(self)
    }
}

impl From<Model> for TodoResult {
    fn from(model: Model) -> Self {
        TodoResult {
            id: model.id,
            todo_name: model.todo_name,
            todo_desc: model.todo_desc,
            todo_status: model.todo_status.into(),
            todo_image: model.todo_image,
            created_at: model.created_at.with_timezone(&chrono::Utc),
            updated_at: model.updated_at.with_timezone(&chrono::Utc),
        }
    }
}
