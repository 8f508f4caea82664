use crate::application::dto::pagination::{Page, PageRequest, SortOrder};
use crate::application::error::ServiceResult;
use crate::application::ports::tweet_repository::TweetRepository;
use crate::domain::tweets::tweet::Tweet;

pub struct ListMyTweets<'a, R: TweetRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: TweetRepository + ?Sized> ListMyTweets<'a, R> {
    pub async fn execute(
        &self,
        owner_id: i64,
        page: PageRequest,
        sort: SortOrder,
    ) -> ServiceResult<Page<Tweet>> {
        Ok(self.repo.list_by_owner(owner_id, page, sort).await?)
    }
}
