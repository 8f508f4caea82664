use axum::{Json, Router, extract::State, routing::get};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::dto::pagination::Page;
use crate::application::use_cases::users::get_profile::GetProfile;
use crate::bootstrap::app_context::AppContext;
use crate::domain::users::user::{User, UserProfile};
use crate::presentation::http::auth::UserResponse;
use crate::presentation::http::error::{ApiError, ErrorBody};
use crate::presentation::http::extract::PathParam;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponse {
    pub id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub tweet_count: i64,
    pub follower_count: i64,
    pub following_count: i64,
}

impl From<UserProfile> for ProfileResponse {
    fn from(p: UserProfile) -> Self {
        ProfileResponse {
            id: p.id,
            username: p.username,
            created_at: p.created_at,
            tweet_count: p.tweet_count,
            follower_count: p.follower_count,
            following_count: p.following_count,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserPage {
    pub items: Vec<UserResponse>,
    pub total: i64,
    pub page: u32,
    pub size: u32,
}

impl From<Page<User>> for UserPage {
    fn from(p: Page<User>) -> Self {
        let p = p.map(UserResponse::from);
        UserPage {
            items: p.items,
            total: p.total,
            page: p.page,
            size: p.size,
        }
    }
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/users/:user_id", get(get_profile))
        .with_state(ctx)
}

#[utoipa::path(get, path = "/users/{user_id}", tag = "Users",
    params(("user_id" = i64, Path, description = "User ID")),
    responses((status = 200, body = ProfileResponse), (status = 404, body = ErrorBody)))]
pub async fn get_profile(
    State(ctx): State<AppContext>,
    PathParam(user_id): PathParam<i64>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let repo = ctx.user_repo();
    let uc = GetProfile {
        repo: repo.as_ref(),
    };
    let profile = uc.execute(user_id).await?;
    Ok(Json(profile.into()))
}
