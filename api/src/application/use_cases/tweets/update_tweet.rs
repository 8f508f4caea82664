use crate::application::error::{ServiceError, ServiceResult};
use crate::application::ports::tweet_repository::TweetRepository;
use crate::domain::tweets::tweet::{Tweet, validate_content};

pub struct UpdateTweet<'a, R: TweetRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: TweetRepository + ?Sized> UpdateTweet<'a, R> {
    pub async fn execute(&self, user_id: i64, tweet_id: i64, content: &str) -> ServiceResult<Tweet> {
        validate_content(content).map_err(ServiceError::validation)?;
        let existing = self
            .repo
            .get_by_id(tweet_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Tweet not found"))?;
        if existing.owner_id != user_id {
            return Err(ServiceError::forbidden("Not authorized to update this tweet"));
        }
        self.repo
            .update_content(tweet_id, content)
            .await?
            .ok_or_else(|| ServiceError::not_found("Tweet not found"))
    }
}
