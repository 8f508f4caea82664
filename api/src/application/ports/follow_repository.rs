use async_trait::async_trait;

use crate::domain::users::follow::Follow;

#[async_trait]
pub trait FollowRepository: Send + Sync {
    // None => already following
    async fn create(&self, follower_id: i64, followed_id: i64) -> anyhow::Result<Option<Follow>>;
    async fn delete(&self, follower_id: i64, followed_id: i64) -> anyhow::Result<bool>;
}
