use async_trait::async_trait;

use crate::application::dto::pagination::{Page, PageRequest};
use crate::domain::tweets::like::Like;
use crate::domain::users::user::User;

#[async_trait]
pub trait LikeRepository: Send + Sync {
    // None => the pair already exists
    async fn create(&self, user_id: i64, tweet_id: i64) -> anyhow::Result<Option<Like>>;
    async fn delete(&self, user_id: i64, tweet_id: i64) -> anyhow::Result<bool>;
    async fn list_likers(&self, tweet_id: i64, page: PageRequest) -> anyhow::Result<Page<User>>;
}
