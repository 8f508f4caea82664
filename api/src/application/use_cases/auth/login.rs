use crate::application::error::{ServiceError, ServiceResult};
use crate::application::ports::user_repository::UserRepository;
use crate::application::services::auth::{IssuedToken, TokenService, verify_password};
use crate::domain::users::user::User;

pub struct Login<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
    pub tokens: &'a TokenService,
}

#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct LoginResult {
    pub user: User,
    pub token: IssuedToken,
}

fn invalid_credentials() -> ServiceError {
    ServiceError::unauthorized("Invalid credentials")
}

impl<'a, R: UserRepository + ?Sized> Login<'a, R> {
    pub async fn execute(&self, req: &LoginRequest) -> ServiceResult<LoginResult> {
        let creds = match self.repo.find_credentials(&req.username).await? {
            Some(c) => c,
            None => {
                tracing::debug!(username = %req.username, "login_unknown_user");
                return Err(invalid_credentials());
            }
        };
        if !verify_password(&req.password, &creds.password_hash)? {
            tracing::debug!(user_id = creds.user.id, "login_bad_password");
            return Err(invalid_credentials());
        }
        let token = self.tokens.issue(creds.user.id)?;
        Ok(LoginResult {
            user: creds.user,
            token,
        })
    }
}
