use crate::application::dto::pagination::{Page, PageRequest};
use crate::application::error::{ServiceError, ServiceResult};
use crate::application::ports::tweet_repository::TweetRepository;
use crate::domain::tweets::tweet::Tweet;

pub struct SearchTweets<'a, R: TweetRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: TweetRepository + ?Sized> SearchTweets<'a, R> {
    pub async fn execute(
        &self,
        keyword: Option<&str>,
        page: PageRequest,
    ) -> ServiceResult<Page<Tweet>> {
        let keyword = keyword
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ServiceError::validation("keyword must not be empty"))?;
        Ok(self.repo.search(keyword, page).await?)
    }
}
