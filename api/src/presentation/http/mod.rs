use axum::{Router, extract::MatchedPath};
use tower_http::trace::TraceLayer;

use crate::bootstrap::app_context::AppContext;

pub mod auth;
pub mod common;
pub mod error;
pub mod extract;
pub mod follows;
pub mod health;
pub mod likes;
pub mod tweets;
pub mod users;

/// All HTTP routes with request tracing attached.
pub fn router(ctx: AppContext) -> Router {
    Router::new()
        .merge(health::routes(ctx.clone()))
        .merge(auth::routes(ctx.clone()))
        .merge(tweets::routes(ctx.clone()))
        .merge(likes::routes(ctx.clone()))
        .merge(follows::routes(ctx.clone()))
        .merge(users::routes(ctx))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        )
}
