use async_trait::async_trait;

use crate::application::dto::pagination::{Page, PageRequest, SortOrder};
use crate::domain::tweets::tweet::Tweet;

/// One query per access pattern. Every returned tweet carries its like count.
#[async_trait]
pub trait TweetRepository: Send + Sync {
    async fn create(&self, owner_id: i64, content: &str) -> anyhow::Result<Tweet>;

    async fn get_by_id(&self, id: i64) -> anyhow::Result<Option<Tweet>>;

    async fn list_all(&self, page: PageRequest, sort: SortOrder) -> anyhow::Result<Page<Tweet>>;

    async fn list_by_owner(
        &self,
        owner_id: i64,
        page: PageRequest,
        sort: SortOrder,
    ) -> anyhow::Result<Page<Tweet>>;

    // Tweets authored by everyone `follower_id` follows
    async fn list_by_followed(
        &self,
        follower_id: i64,
        page: PageRequest,
        sort: SortOrder,
    ) -> anyhow::Result<Page<Tweet>>;

    async fn search(&self, keyword: &str, page: PageRequest) -> anyhow::Result<Page<Tweet>>;

    async fn update_content(&self, id: i64, content: &str) -> anyhow::Result<Option<Tweet>>;

    async fn delete(&self, id: i64) -> anyhow::Result<bool>;
}
