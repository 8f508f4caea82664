use crate::application::error::{ServiceError, ServiceResult};
use crate::application::ports::user_repository::UserRepository;
use crate::domain::users::user::User;

pub struct GetMe<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: UserRepository + ?Sized> GetMe<'a, R> {
    // A valid token for a vanished account is treated as an invalid session
    pub async fn execute(&self, id: i64) -> ServiceResult<User> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::unauthorized("Could not validate credentials"))
    }
}
