use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::users::{ActiveModel as UserActiveModel, Column, Entity as UserEntity};
use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> UserRepositoryError {
    UserRepositoryError::DatabaseError(e.to_string())
}

fn map_insert_err(e: DbErr) -> UserRepositoryError {
    let msg = e.to_string().to_lowercase();
    if msg.contains("23505") || msg.contains("duplicate key") || msg.contains("unique constraint")
    {
        UserRepositoryError::UserAlreadyExists
    } else {
        map_db_err(e)
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: User) -> Result<User, UserRepositoryError> {
        let inserted = UserActiveModel::from(user)
            .insert(&*self.db)
            .await
            .map_err(map_insert_err)?;

        Ok(inserted.into())
    }

    async fn replace_inactive_user(
        &self,
        stale_id: Uuid,
        user: User,
    ) -> Result<User, UserRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let removed = UserEntity::delete_many()
            .filter(Column::Id.eq(stale_id))
            .filter(Column::IsActivated.eq(false))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;
        if removed.rows_affected == 0 {
            let _ = txn.rollback().await;
            return Err(UserRepositoryError::UserAlreadyExists);
        }

        let inserted = UserActiveModel::from(user)
            .insert(&txn)
            .await
            .map_err(map_insert_err)?;
        txn.commit().await.map_err(map_db_err)?;

        Ok(inserted.into())
    }

    async fn activate_user(&self, user_id: Uuid) -> Result<User, UserRepositoryError> {
        let model = UserActiveModel {
            is_activated: Set(true),
            ..Default::default()
        };

        let updated = UserEntity::update_many()
            .set(model)
            .filter(Column::Id.eq(user_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        updated
            .into_iter()
            .next()
            .map(User::from)
            .ok_or(UserRepositoryError::UserNotFound)
    }

    async fn set_refresh_token_hash(
        &self,
        user_id: Uuid,
        refresh_token_hash: Option<String>,
    ) -> Result<(), UserRepositoryError> {
        let model = UserActiveModel {
            refresh_token_hash: Set(refresh_token_hash),
            ..Default::default()
        };

        let result = UserEntity::update_many()
            .set(model)
            .filter(Column::Id.eq(user_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }
        Ok(())
    }
}
