use crate::application::error::{ServiceError, ServiceResult};
use crate::application::ports::like_repository::LikeRepository;
use crate::application::ports::tweet_repository::TweetRepository;
use crate::domain::tweets::like::Like;

pub struct LikeTweet<'a, T, L>
where
    T: TweetRepository + ?Sized,
    L: LikeRepository + ?Sized,
{
    pub tweets: &'a T,
    pub likes: &'a L,
}

impl<'a, T, L> LikeTweet<'a, T, L>
where
    T: TweetRepository + ?Sized,
    L: LikeRepository + ?Sized,
{
    pub async fn execute(&self, user_id: i64, tweet_id: i64) -> ServiceResult<Like> {
        if self.tweets.get_by_id(tweet_id).await?.is_none() {
            return Err(ServiceError::not_found("Tweet not found"));
        }
        self.likes
            .create(user_id, tweet_id)
            .await?
            .ok_or_else(|| ServiceError::conflict("You already liked this tweet"))
    }
}
