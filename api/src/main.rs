use std::net::SocketAddr;

use axum::Router;
use dotenvy::dotenv;
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{error, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use chirp_api::bootstrap::app_context::{AppContext, AppServices};
use chirp_api::bootstrap::config::Config;

#[derive(OpenApi)]
#[openapi(
        paths(
            chirp_api::presentation::http::auth::register,
            chirp_api::presentation::http::auth::login,
            chirp_api::presentation::http::auth::me,
            chirp_api::presentation::http::tweets::create_tweet,
            chirp_api::presentation::http::tweets::list_tweets,
            chirp_api::presentation::http::tweets::list_my_tweets,
            chirp_api::presentation::http::tweets::update_tweet,
            chirp_api::presentation::http::tweets::delete_tweet,
            chirp_api::presentation::http::tweets::search_tweets,
            chirp_api::presentation::http::tweets::get_feed,
            chirp_api::presentation::http::likes::like_tweet,
            chirp_api::presentation::http::likes::unlike_tweet,
            chirp_api::presentation::http::likes::list_likers,
            chirp_api::presentation::http::follows::follow_user,
            chirp_api::presentation::http::follows::unfollow_user,
            chirp_api::presentation::http::users::get_profile,
            chirp_api::presentation::http::health::health,
        ),
        components(schemas(
            chirp_api::presentation::http::error::ErrorBody,
            chirp_api::presentation::http::common::MessageResponse,
            chirp_api::presentation::http::auth::RegisterRequest,
            chirp_api::presentation::http::auth::LoginRequest,
            chirp_api::presentation::http::auth::LoginResponse,
            chirp_api::presentation::http::auth::UserResponse,
            chirp_api::presentation::http::tweets::TweetContentRequest,
            chirp_api::presentation::http::tweets::TweetResponse,
            chirp_api::presentation::http::tweets::TweetPage,
            chirp_api::presentation::http::likes::LikeRequest,
            chirp_api::presentation::http::likes::LikeResponse,
            chirp_api::presentation::http::follows::FollowRequest,
            chirp_api::presentation::http::follows::FollowResponse,
            chirp_api::presentation::http::users::ProfileResponse,
            chirp_api::presentation::http::users::UserPage,
            chirp_api::presentation::http::health::HealthResponse,
        )),
        tags(
            (name = "Auth", description = "Registration, login and session"),
            (name = "Tweets", description = "Tweets, feed and search"),
            (name = "Likes", description = "Liking tweets"),
            (name = "Follows", description = "Following users"),
            (name = "Users", description = "Public profiles"),
            (name = "Health", description = "System health checks")
        )
    )]
struct ApiDoc;

fn cors_layer(cfg: &Config) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([
            http::Method::GET,
            http::Method::POST,
            http::Method::PUT,
            http::Method::DELETE,
            http::Method::OPTIONS,
        ])
        .allow_headers([http::header::CONTENT_TYPE, http::header::AUTHORIZATION]);
    match cfg.frontend_url.as_deref().map(HeaderValue::from_str) {
        Some(Ok(origin)) => base.allow_origin(origin),
        Some(Err(_)) | None if cfg.is_production => {
            // No usable origin configured: deny cross-origin requests
            base.allow_origin(AllowOrigin::exact(HeaderValue::from_static(
                "http://invalid",
            )))
        }
        _ => base.allow_origin(AllowOrigin::mirror_request()),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(?e, "failed to listen for shutdown signal");
    }
    info!("shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "chirp_api=debug,axum=info,tower_http=info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    info!(
        port = cfg.api_port,
        database = %cfg.database_url,
        production = cfg.is_production,
        "Starting Chirp backend"
    );

    // Database
    let pool = chirp_api::infrastructure::db::connect_pool(
        &cfg.database_url,
        cfg.database_max_connections,
    )
    .await?;
    chirp_api::infrastructure::db::migrate(&pool).await?;

    let services = AppServices::from_pool(pool.clone(), &cfg);
    let ctx = AppContext::new(cfg.clone(), services);

    let app: Router = chirp_api::presentation::http::router(ctx)
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(cors_layer(&cfg));

    let host: std::net::IpAddr = cfg.api_host.parse()?;
    let api_addr = SocketAddr::from((host, cfg.api_port));
    info!(%api_addr, "HTTP API listening");
    let listener = tokio::net::TcpListener::bind(api_addr).await?;

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(?e, "API server failed");
        return Err(e.into());
    }

    pool.close().await;
    Ok(())
}
