use axum::{
    Json, Router,
    extract::State,
    routing::{delete, post},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::use_cases::follows::follow_user::FollowUser;
use crate::application::use_cases::follows::unfollow_user::UnfollowUser;
use crate::bootstrap::app_context::AppContext;
use crate::domain::users::follow::Follow;
use crate::presentation::http::auth::{self, Bearer};
use crate::presentation::http::common::MessageResponse;
use crate::presentation::http::error::{ApiError, ErrorBody};
use crate::presentation::http::extract::{JsonBody, PathParam};

#[derive(Debug, Deserialize, ToSchema)]
pub struct FollowRequest {
    pub followed_id: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FollowResponse {
    pub id: i64,
    pub follower_id: i64,
    pub followed_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Follow> for FollowResponse {
    fn from(f: Follow) -> Self {
        FollowResponse {
            id: f.id,
            follower_id: f.follower_id,
            followed_id: f.followed_id,
            created_at: f.created_at,
        }
    }
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/follow", post(follow_user))
        .route("/follow/:user_id", delete(unfollow_user))
        .with_state(ctx)
}

#[utoipa::path(post, path = "/follow", tag = "Follows", request_body = FollowRequest, responses(
    (status = 200, body = FollowResponse),
    (status = 400, body = ErrorBody),
    (status = 404, body = ErrorBody),
    (status = 409, body = ErrorBody)
))]
pub async fn follow_user(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    JsonBody(req): JsonBody<FollowRequest>,
) -> Result<Json<FollowResponse>, ApiError> {
    let user_id = auth::authenticate(&ctx, bearer).await?.id;
    let users = ctx.user_repo();
    let follows = ctx.follow_repo();
    let uc = FollowUser {
        users: users.as_ref(),
        follows: follows.as_ref(),
    };
    let follow = uc.execute(user_id, req.followed_id).await?;
    Ok(Json(follow.into()))
}

#[utoipa::path(delete, path = "/follow/{user_id}", tag = "Follows",
    params(("user_id" = i64, Path, description = "User to stop following")),
    responses((status = 200, body = MessageResponse), (status = 404, body = ErrorBody)))]
pub async fn unfollow_user(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    PathParam(followed_id): PathParam<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let user_id = auth::authenticate(&ctx, bearer).await?.id;
    let follows = ctx.follow_repo();
    let uc = UnfollowUser {
        follows: follows.as_ref(),
    };
    uc.execute(user_id, followed_id).await?;
    Ok(Json(MessageResponse::new("Unfollowed successfully")))
}
