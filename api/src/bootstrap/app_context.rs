use std::sync::Arc;

use crate::application::ports::follow_repository::FollowRepository;
use crate::application::ports::like_repository::LikeRepository;
use crate::application::ports::tweet_repository::TweetRepository;
use crate::application::ports::user_repository::UserRepository;
use crate::application::services::auth::TokenService;
use crate::bootstrap::config::Config;
use crate::infrastructure::db::DbPool;
use crate::infrastructure::db::repositories::follow_repository_sqlx::SqlxFollowRepository;
use crate::infrastructure::db::repositories::like_repository_sqlx::SqlxLikeRepository;
use crate::infrastructure::db::repositories::tweet_repository_sqlx::SqlxTweetRepository;
use crate::infrastructure::db::repositories::user_repository_sqlx::SqlxUserRepository;

/// Router state: configuration plus the store handle every handler receives.
#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

pub struct AppServices {
    pool: DbPool,
    user_repo: Arc<dyn UserRepository>,
    tweet_repo: Arc<dyn TweetRepository>,
    like_repo: Arc<dyn LikeRepository>,
    follow_repo: Arc<dyn FollowRepository>,
    tokens: TokenService,
}

impl AppServices {
    pub fn new(
        pool: DbPool,
        user_repo: Arc<dyn UserRepository>,
        tweet_repo: Arc<dyn TweetRepository>,
        like_repo: Arc<dyn LikeRepository>,
        follow_repo: Arc<dyn FollowRepository>,
        tokens: TokenService,
    ) -> Self {
        Self {
            pool,
            user_repo,
            tweet_repo,
            like_repo,
            follow_repo,
            tokens,
        }
    }

    /// Wires the sqlx-backed repositories over one shared pool.
    pub fn from_pool(pool: DbPool, cfg: &Config) -> Self {
        Self::new(
            pool.clone(),
            Arc::new(SqlxUserRepository::new(pool.clone())),
            Arc::new(SqlxTweetRepository::new(pool.clone())),
            Arc::new(SqlxLikeRepository::new(pool.clone())),
            Arc::new(SqlxFollowRepository::new(pool)),
            TokenService::new(&cfg.jwt_secret, cfg.jwt_expires_secs),
        )
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn pool(&self) -> &DbPool {
        &self.services.pool
    }

    pub fn user_repo(&self) -> Arc<dyn UserRepository> {
        self.services.user_repo.clone()
    }

    pub fn tweet_repo(&self) -> Arc<dyn TweetRepository> {
        self.services.tweet_repo.clone()
    }

    pub fn like_repo(&self) -> Arc<dyn LikeRepository> {
        self.services.like_repo.clone()
    }

    pub fn follow_repo(&self) -> Arc<dyn FollowRepository> {
        self.services.follow_repo.clone()
    }

    pub fn tokens(&self) -> &TokenService {
        &self.services.tokens
    }
}
