use async_trait::async_trait;

use crate::domain::users::user::{User, UserProfile};

#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    // Returns None when the username is already taken
    async fn create_user(&self, username: &str, password_hash: &str)
    -> anyhow::Result<Option<User>>;
    async fn find_credentials(&self, username: &str) -> anyhow::Result<Option<UserCredentials>>;
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<User>>;
    async fn get_profile(&self, id: i64) -> anyhow::Result<Option<UserProfile>>;
}
