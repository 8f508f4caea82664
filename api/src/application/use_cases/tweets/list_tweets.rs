use crate::application::dto::pagination::{Page, PageRequest, SortOrder};
use crate::application::error::ServiceResult;
use crate::application::ports::tweet_repository::TweetRepository;
use crate::domain::tweets::tweet::Tweet;

pub struct ListTweets<'a, R: TweetRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: TweetRepository + ?Sized> ListTweets<'a, R> {
    pub async fn execute(&self, page: PageRequest, sort: SortOrder) -> ServiceResult<Page<Tweet>> {
        Ok(self.repo.list_all(page, sort).await?)
    }
}
