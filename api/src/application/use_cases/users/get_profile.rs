use crate::application::error::{ServiceError, ServiceResult};
use crate::application::ports::user_repository::UserRepository;
use crate::domain::users::user::UserProfile;

pub struct GetProfile<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: UserRepository + ?Sized> GetProfile<'a, R> {
    pub async fn execute(&self, user_id: i64) -> ServiceResult<UserProfile> {
        self.repo
            .get_profile(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User not found"))
    }
}
