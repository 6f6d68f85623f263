use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, serde::Serialize)]
pub struct User {
    pub id: Uuid,
    pub personal_id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub address: String,
    pub phone_number: String,
    pub user_image: Option<String>,
    pub is_activated: bool,
    #[serde(skip_serializing)]
    pub refresh_token_hash: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// A freshly signed-up account: inactive and without a session.
    #[allow(clippy::too_many_arguments)]
    pub fn new_inactive(
        personal_id: String,
        name: String,
        email: String,
        password_hash: String,
        address: String,
        phone_number: String,
        user_image: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            personal_id,
            name,
            email,
            password_hash,
            address,
            phone_number,
            user_image,
            is_activated: false,
            refresh_token_hash: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Public view of a user, never carries credentials.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub personal_id: String,
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: String,
    pub user_image: Option<String>,
    #[serde(rename = "isActivated")]
    pub is_activated: bool,
    #[serde(rename = "joinedAt")]
    pub joined_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            personal_id: user.personal_id,
            name: user.name,
            email: user.email,
            address: user.address,
            phone_number: user.phone_number,
            user_image: user.user_image,
            is_activated: user.is_activated,
            joined_at: user.created_at,
        }
    }
}
