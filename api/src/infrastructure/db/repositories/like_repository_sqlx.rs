use async_trait::async_trait;
use chrono::Utc;
use sqlx::Row;

use crate::application::dto::pagination::{Page, PageRequest};
use crate::application::ports::like_repository::LikeRepository;
use crate::domain::tweets::like::Like;
use crate::domain::users::user::User;
use crate::infrastructure::db::repositories::user_repository_sqlx::user_from_row;
use crate::infrastructure::db::{DbPool, is_unique_violation};

pub struct SqlxLikeRepository {
    pub pool: DbPool,
}

impl SqlxLikeRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for SqlxLikeRepository {
    async fn create(&self, user_id: i64, tweet_id: i64) -> anyhow::Result<Option<Like>> {
        let res = sqlx::query(
            r#"INSERT INTO likes (user_id, tweet_id, created_at) VALUES (?1, ?2, ?3)
               RETURNING id, user_id, tweet_id, created_at"#,
        )
        .bind(user_id)
        .bind(tweet_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await;
        match res {
            Ok(r) => Ok(Some(Like {
                id: r.get("id"),
                user_id: r.get("user_id"),
                tweet_id: r.get("tweet_id"),
                created_at: r.get("created_at"),
            })),
            Err(e) if is_unique_violation(&e) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, user_id: i64, tweet_id: i64) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM likes WHERE user_id = ?1 AND tweet_id = ?2")
            .bind(user_id)
            .bind(tweet_id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn list_likers(&self, tweet_id: i64, page: PageRequest) -> anyhow::Result<Page<User>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM likes WHERE tweet_id = ?1")
            .bind(tweet_id)
            .fetch_one(&self.pool)
            .await?;
        let rows = sqlx::query(
            r#"SELECT u.id, u.username, u.created_at
               FROM likes l JOIN users u ON u.id = l.user_id
               WHERE l.tweet_id = ?1
               ORDER BY l.created_at DESC, l.id DESC
               LIMIT ?2 OFFSET ?3"#,
        )
        .bind(tweet_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;
        Ok(Page::new(rows.iter().map(user_from_row).collect(), total, page))
    }
}
