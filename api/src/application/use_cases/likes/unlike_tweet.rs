use crate::application::error::{ServiceError, ServiceResult};
use crate::application::ports::like_repository::LikeRepository;

pub struct UnlikeTweet<'a, L: LikeRepository + ?Sized> {
    pub likes: &'a L,
}

impl<'a, L: LikeRepository + ?Sized> UnlikeTweet<'a, L> {
    pub async fn execute(&self, user_id: i64, tweet_id: i64) -> ServiceResult<()> {
        if self.likes.delete(user_id, tweet_id).await? {
            Ok(())
        } else {
            Err(ServiceError::not_found("Like not found"))
        }
    }
}
