use crate::application::error::{ServiceError, ServiceResult};
use crate::application::ports::tweet_repository::TweetRepository;
use crate::domain::tweets::tweet::{Tweet, validate_content};

pub struct CreateTweet<'a, R: TweetRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: TweetRepository + ?Sized> CreateTweet<'a, R> {
    pub async fn execute(&self, owner_id: i64, content: &str) -> ServiceResult<Tweet> {
        validate_content(content).map_err(ServiceError::validation)?;
        let tweet = self.repo.create(owner_id, content).await?;
        Ok(tweet)
    }
}
