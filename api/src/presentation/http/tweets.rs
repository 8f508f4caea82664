use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post, put},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::dto::pagination::{Page, PageRequest};
use crate::application::use_cases::tweets::create_tweet::CreateTweet;
use crate::application::use_cases::tweets::delete_tweet::DeleteTweet;
use crate::application::use_cases::tweets::get_feed::GetFeed;
use crate::application::use_cases::tweets::list_my_tweets::ListMyTweets;
use crate::application::use_cases::tweets::list_tweets::ListTweets;
use crate::application::use_cases::tweets::search_tweets::SearchTweets;
use crate::application::use_cases::tweets::update_tweet::UpdateTweet;
use crate::bootstrap::app_context::AppContext;
use crate::domain::tweets::tweet::Tweet;
use crate::presentation::http::auth::{self, Bearer};
use crate::presentation::http::common::PageQuery;
use crate::presentation::http::error::{ApiError, ErrorBody};
use crate::presentation::http::extract::{JsonBody, PathParam, QueryParams};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TweetResponse {
    pub id: i64,
    pub owner_id: i64,
    pub content: String,
    pub likes_count: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Tweet> for TweetResponse {
    fn from(t: Tweet) -> Self {
        TweetResponse {
            id: t.id,
            owner_id: t.owner_id,
            content: t.content,
            likes_count: t.likes_count,
            created_at: t.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TweetPage {
    pub items: Vec<TweetResponse>,
    pub total: i64,
    pub page: u32,
    pub size: u32,
}

impl From<Page<Tweet>> for TweetPage {
    fn from(p: Page<Tweet>) -> Self {
        let p = p.map(TweetResponse::from);
        TweetPage {
            items: p.items,
            total: p.total,
            page: p.page,
            size: p.size,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TweetContentRequest {
    pub content: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub keyword: Option<String>,
    pub page: Option<u32>,
    pub size: Option<u32>,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/tweets", post(create_tweet).get(list_tweets))
        .route("/tweets/me", get(list_my_tweets))
        .route("/tweets/search", get(search_tweets))
        .route("/tweets/:id", put(update_tweet).delete(delete_tweet))
        .route("/feed", get(get_feed))
        .with_state(ctx)
}

#[utoipa::path(post, path = "/tweets", tag = "Tweets", request_body = TweetContentRequest, responses(
    (status = 200, body = TweetResponse),
    (status = 400, body = ErrorBody),
    (status = 401, body = ErrorBody)
))]
pub async fn create_tweet(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    JsonBody(req): JsonBody<TweetContentRequest>,
) -> Result<Json<TweetResponse>, ApiError> {
    let user_id = auth::authenticate(&ctx, bearer).await?.id;
    let repo = ctx.tweet_repo();
    let uc = CreateTweet {
        repo: repo.as_ref(),
    };
    let tweet = uc.execute(user_id, &req.content).await?;
    Ok(Json(tweet.into()))
}

#[utoipa::path(get, path = "/tweets", tag = "Tweets",
    params(
        ("page" = Option<u32>, Query, description = "Page number, starting at 1"),
        ("size" = Option<u32>, Query, description = "Page size (1-100, default 10)"),
        ("sort" = Option<String>, Query, description = "asc or desc (default)")
    ),
    responses((status = 200, body = TweetPage), (status = 400, body = ErrorBody)))]
pub async fn list_tweets(
    State(ctx): State<AppContext>,
    QueryParams(q): QueryParams<PageQuery>,
) -> Result<Json<TweetPage>, ApiError> {
    let repo = ctx.tweet_repo();
    let uc = ListTweets {
        repo: repo.as_ref(),
    };
    let page = uc.execute(q.page_request()?, q.sort_order()?).await?;
    Ok(Json(page.into()))
}

#[utoipa::path(get, path = "/tweets/me", tag = "Tweets",
    params(
        ("page" = Option<u32>, Query, description = "Page number, starting at 1"),
        ("size" = Option<u32>, Query, description = "Page size (1-100, default 10)"),
        ("sort" = Option<String>, Query, description = "asc or desc (default)")
    ),
    responses((status = 200, body = TweetPage), (status = 401, body = ErrorBody)))]
pub async fn list_my_tweets(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    QueryParams(q): QueryParams<PageQuery>,
) -> Result<Json<TweetPage>, ApiError> {
    let user_id = auth::authenticate(&ctx, bearer).await?.id;
    let repo = ctx.tweet_repo();
    let uc = ListMyTweets {
        repo: repo.as_ref(),
    };
    let page = uc
        .execute(user_id, q.page_request()?, q.sort_order()?)
        .await?;
    Ok(Json(page.into()))
}

#[utoipa::path(put, path = "/tweets/{id}", tag = "Tweets", request_body = TweetContentRequest,
    params(("id" = i64, Path, description = "Tweet ID")),
    responses(
        (status = 200, body = TweetResponse),
        (status = 403, body = ErrorBody),
        (status = 404, body = ErrorBody)
    ))]
pub async fn update_tweet(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    PathParam(id): PathParam<i64>,
    JsonBody(req): JsonBody<TweetContentRequest>,
) -> Result<Json<TweetResponse>, ApiError> {
    let user_id = auth::authenticate(&ctx, bearer).await?.id;
    let repo = ctx.tweet_repo();
    let uc = UpdateTweet {
        repo: repo.as_ref(),
    };
    let tweet = uc.execute(user_id, id, &req.content).await?;
    Ok(Json(tweet.into()))
}

#[utoipa::path(delete, path = "/tweets/{id}", tag = "Tweets",
    params(("id" = i64, Path, description = "Tweet ID")),
    responses(
        (status = 204),
        (status = 403, body = ErrorBody),
        (status = 404, body = ErrorBody)
    ))]
pub async fn delete_tweet(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    PathParam(id): PathParam<i64>,
) -> Result<StatusCode, ApiError> {
    let user_id = auth::authenticate(&ctx, bearer).await?.id;
    let repo = ctx.tweet_repo();
    let uc = DeleteTweet {
        repo: repo.as_ref(),
    };
    uc.execute(user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(get, path = "/tweets/search", tag = "Tweets",
    params(
        ("keyword" = String, Query, description = "Case-insensitive substring to look for"),
        ("page" = Option<u32>, Query, description = "Page number, starting at 1"),
        ("size" = Option<u32>, Query, description = "Page size (1-100, default 10)")
    ),
    responses((status = 200, body = TweetPage), (status = 400, body = ErrorBody)))]
pub async fn search_tweets(
    State(ctx): State<AppContext>,
    QueryParams(q): QueryParams<SearchQuery>,
) -> Result<Json<TweetPage>, ApiError> {
    let page = PageRequest::new(q.page, q.size)?;
    let repo = ctx.tweet_repo();
    let uc = SearchTweets {
        repo: repo.as_ref(),
    };
    let hits = uc.execute(q.keyword.as_deref(), page).await?;
    Ok(Json(hits.into()))
}

#[utoipa::path(get, path = "/feed", tag = "Tweets",
    params(
        ("page" = Option<u32>, Query, description = "Page number, starting at 1"),
        ("size" = Option<u32>, Query, description = "Page size (1-100, default 10)"),
        ("sort" = Option<String>, Query, description = "asc or desc (default)")
    ),
    responses((status = 200, body = TweetPage), (status = 401, body = ErrorBody)))]
pub async fn get_feed(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    QueryParams(q): QueryParams<PageQuery>,
) -> Result<Json<TweetPage>, ApiError> {
    let user_id = auth::authenticate(&ctx, bearer).await?.id;
    let repo = ctx.tweet_repo();
    let uc = GetFeed {
        repo: repo.as_ref(),
    };
    let page = uc
        .execute(user_id, q.page_request()?, q.sort_order()?)
        .await?;
    Ok(Json(page.into()))
}
