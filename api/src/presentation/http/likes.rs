use axum::{
    Json, Router,
    extract::State,
    routing::{delete, get, post},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::use_cases::likes::like_tweet::LikeTweet;
use crate::application::use_cases::likes::list_likers::ListLikers;
use crate::application::use_cases::likes::unlike_tweet::UnlikeTweet;
use crate::bootstrap::app_context::AppContext;
use crate::domain::tweets::like::Like;
use crate::presentation::http::auth::{self, Bearer};
use crate::presentation::http::common::{MessageResponse, PageQuery};
use crate::presentation::http::error::{ApiError, ErrorBody};
use crate::presentation::http::extract::{JsonBody, PathParam, QueryParams};
use crate::presentation::http::users::UserPage;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LikeRequest {
    pub tweet_id: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LikeResponse {
    pub id: i64,
    pub user_id: i64,
    pub tweet_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Like> for LikeResponse {
    fn from(l: Like) -> Self {
        LikeResponse {
            id: l.id,
            user_id: l.user_id,
            tweet_id: l.tweet_id,
            created_at: l.created_at,
        }
    }
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/like", post(like_tweet))
        .route("/like/:tweet_id", delete(unlike_tweet))
        .route("/tweets/:id/likes", get(list_likers))
        .with_state(ctx)
}

#[utoipa::path(post, path = "/like", tag = "Likes", request_body = LikeRequest, responses(
    (status = 200, body = LikeResponse),
    (status = 404, body = ErrorBody),
    (status = 409, body = ErrorBody)
))]
pub async fn like_tweet(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    JsonBody(req): JsonBody<LikeRequest>,
) -> Result<Json<LikeResponse>, ApiError> {
    let user_id = auth::authenticate(&ctx, bearer).await?.id;
    let tweets = ctx.tweet_repo();
    let likes = ctx.like_repo();
    let uc = LikeTweet {
        tweets: tweets.as_ref(),
        likes: likes.as_ref(),
    };
    let like = uc.execute(user_id, req.tweet_id).await?;
    Ok(Json(like.into()))
}

#[utoipa::path(delete, path = "/like/{tweet_id}", tag = "Likes",
    params(("tweet_id" = i64, Path, description = "Tweet ID")),
    responses((status = 200, body = MessageResponse), (status = 404, body = ErrorBody)))]
pub async fn unlike_tweet(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    PathParam(tweet_id): PathParam<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let user_id = auth::authenticate(&ctx, bearer).await?.id;
    let likes = ctx.like_repo();
    let uc = UnlikeTweet {
        likes: likes.as_ref(),
    };
    uc.execute(user_id, tweet_id).await?;
    Ok(Json(MessageResponse::new("Unliked successfully")))
}

#[utoipa::path(get, path = "/tweets/{id}/likes", tag = "Likes",
    params(
        ("id" = i64, Path, description = "Tweet ID"),
        ("page" = Option<u32>, Query, description = "Page number, starting at 1"),
        ("size" = Option<u32>, Query, description = "Page size (1-100, default 10)")
    ),
    responses((status = 200, body = UserPage), (status = 404, body = ErrorBody)))]
pub async fn list_likers(
    State(ctx): State<AppContext>,
    PathParam(id): PathParam<i64>,
    QueryParams(q): QueryParams<PageQuery>,
) -> Result<Json<UserPage>, ApiError> {
    let tweets = ctx.tweet_repo();
    let likes = ctx.like_repo();
    let uc = ListLikers {
        tweets: tweets.as_ref(),
        likes: likes.as_ref(),
    };
    let page = uc.execute(id, q.page_request()?).await?;
    Ok(Json(page.into()))
}
