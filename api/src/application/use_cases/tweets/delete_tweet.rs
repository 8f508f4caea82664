use crate::application::error::{ServiceError, ServiceResult};
use crate::application::ports::tweet_repository::TweetRepository;

pub struct DeleteTweet<'a, R: TweetRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: TweetRepository + ?Sized> DeleteTweet<'a, R> {
    pub async fn execute(&self, user_id: i64, tweet_id: i64) -> ServiceResult<()> {
        let existing = self
            .repo
            .get_by_id(tweet_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Tweet not found"))?;
        if existing.owner_id != user_id {
            return Err(ServiceError::forbidden("Not authorized to delete this tweet"));
        }
        if !self.repo.delete(tweet_id).await? {
            return Err(ServiceError::not_found("Tweet not found"));
        }
        tracing::debug!(tweet_id, user_id, "tweet_deleted");
        Ok(())
    }
}
