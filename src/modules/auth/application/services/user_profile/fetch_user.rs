use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::{
    domain::entities::UserProfile,
    ports::outgoing::UserQuery,
    use_cases::fetch_profile::{FetchUserProfileError, FetchUserProfileUseCase},
};

pub struct FetchUserProfileService<Q>
where
    Q: UserQuery,
{
    user_query: Q,
}

impl<Q> FetchUserProfileService<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q) -> Self {
        Self { user_query: query }
    }
}

#[async_trait]
impl<Q> FetchUserProfileUseCase for FetchUserProfileService<Q>
where
    Q: UserQuery,
{
    async fn execute(&self, user_id: Uuid) -> Result<UserProfile, FetchUserProfileError> {
        let user = self
            .user_query
            .find_by_id(user_id)
            .await
            .map_err(|e| FetchUserProfileError::QueryError(e.to_string()))?
            .ok_or(FetchUserProfileError::UserNotFound(user_id))?;

        if !user.is_activated {
            return Err(FetchUserProfileError::AccountNotActivated);
        }

        Ok(user.into())
    }
}
