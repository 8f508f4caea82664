use crate::application::error::{ServiceError, ServiceResult};
use crate::application::ports::follow_repository::FollowRepository;

pub struct UnfollowUser<'a, F: FollowRepository + ?Sized> {
    pub follows: &'a F,
}

impl<'a, F: FollowRepository + ?Sized> UnfollowUser<'a, F> {
    pub async fn execute(&self, follower_id: i64, followed_id: i64) -> ServiceResult<()> {
        if self.follows.delete(follower_id, followed_id).await? {
            Ok(())
        } else {
            Err(ServiceError::not_found("Follow relationship not found"))
        }
    }
}
