use crate::application::dto::pagination::{Page, PageRequest};
use crate::application::error::{ServiceError, ServiceResult};
use crate::application::ports::like_repository::LikeRepository;
use crate::application::ports::tweet_repository::TweetRepository;
use crate::domain::users::user::User;

pub struct ListLikers<'a, T, L>
where
    T: TweetRepository + ?Sized,
    L: LikeRepository + ?Sized,
{
    pub tweets: &'a T,
    pub likes: &'a L,
}

impl<'a, T, L> ListLikers<'a, T, L>
where
    T: TweetRepository + ?Sized,
    L: LikeRepository + ?Sized,
{
    pub async fn execute(&self, tweet_id: i64, page: PageRequest) -> ServiceResult<Page<User>> {
        if self.tweets.get_by_id(tweet_id).await?.is_none() {
            return Err(ServiceError::not_found("Tweet not found"));
        }
        Ok(self.likes.list_likers(tweet_id, page).await?)
    }
}
