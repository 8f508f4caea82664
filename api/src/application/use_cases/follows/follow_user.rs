use crate::application::error::{ServiceError, ServiceResult};
use crate::application::ports::follow_repository::FollowRepository;
use crate::application::ports::user_repository::UserRepository;
use crate::domain::users::follow::Follow;

pub struct FollowUser<'a, U, F>
where
    U: UserRepository + ?Sized,
    F: FollowRepository + ?Sized,
{
    pub users: &'a U,
    pub follows: &'a F,
}

impl<'a, U, F> FollowUser<'a, U, F>
where
    U: UserRepository + ?Sized,
    F: FollowRepository + ?Sized,
{
    pub async fn execute(&self, follower_id: i64, followed_id: i64) -> ServiceResult<Follow> {
        if follower_id == followed_id {
            return Err(ServiceError::validation("You cannot follow yourself"));
        }
        if self.users.find_by_id(followed_id).await?.is_none() {
            return Err(ServiceError::not_found("User to follow not found"));
        }
        self.follows
            .create(follower_id, followed_id)
            .await?
            .ok_or_else(|| ServiceError::conflict("You are already following this user"))
    }
}
