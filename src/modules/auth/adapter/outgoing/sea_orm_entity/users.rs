use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};

use crate::modules::auth::application::domain::entities::User;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,
    pub personal_id: String,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub address: String,
    pub phone_number: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub user_image: Option<String>,
    pub is_activated: bool,
    #[sea_orm(nullable)]
    pub refresh_token_hash: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(email) = &self.email {
            self.email = Set(email.trim().to_lowercase());
        }

        // Without the DB trigger, keep updated_at current from here.
        #[cfg(feature = "no_db_triggers")]
        {
            if !_insert {
                self.updated_at = Set(chrono::Utc::now().into());
            }
        }

        Ok(self)
    }
}

impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: model.id,
            personal_id: model.personal_id,
            name: model.name,
            email: model.email,
            password_hash: model.password_hash,
            address: model.address,
            phone_number: model.phone_number,
            user_image: model.user_image,
            is_activated: model.is_activated,
            refresh_token_hash: model.refresh_token_hash,
            created_at: model.created_at.with_timezone(&chrono::Utc),
            updated_at: model.updated_at.with_timezone(&chrono::Utc),
        }
    }
}

impl From<User> for ActiveModel {
    fn from(user: User) -> Self {
        ActiveModel {
            id: Set(user.id),
            personal_id: Set(user.personal_id),
            name: Set(user.name),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            address: Set(user.address),
            phone_number: Set(user.phone_number),
            user_image: Set(user.user_image),
            is_activated: Set(user.is_activated),
            refresh_token_hash: Set(user.refresh_token_hash),
            created_at: Set(user.created_at.fixed_offset()),
            updated_at: Set(user.updated_at.fixed_offset()),
        }
    }
}
