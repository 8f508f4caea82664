use crate::application::error::{ServiceError, ServiceResult};
use crate::application::ports::user_repository::UserRepository;
use crate::application::services::auth::hash_password;
use crate::domain::users::user::{User, validate_password, validate_username};

pub struct Register<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

impl<'a, R: UserRepository + ?Sized> Register<'a, R> {
    pub async fn execute(&self, req: &RegisterRequest) -> ServiceResult<User> {
        validate_username(&req.username).map_err(ServiceError::validation)?;
        validate_password(&req.password).map_err(ServiceError::validation)?;
        let hash = hash_password(&req.password)?;
        match self.repo.create_user(&req.username, &hash).await? {
            Some(user) => {
                tracing::info!(user_id = user.id, "user_registered");
                Ok(user)
            }
            None => {
                tracing::debug!(username = %req.username, "register_conflict");
                Err(ServiceError::conflict("Username already registered"))
            }
        }
    }
}
