use async_trait::async_trait;
use chrono::Utc;
use sqlx::Row;

use crate::application::ports::follow_repository::FollowRepository;
use crate::domain::users::follow::Follow;
use crate::infrastructure::db::{DbPool, is_unique_violation};

pub struct SqlxFollowRepository {
    pub pool: DbPool,
}

impl SqlxFollowRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FollowRepository for SqlxFollowRepository {
    async fn create(&self, follower_id: i64, followed_id: i64) -> anyhow::Result<Option<Follow>> {
        let res = sqlx::query(
            r#"INSERT INTO follows (follower_id, followed_id, created_at) VALUES (?1, ?2, ?3)
               RETURNING id, follower_id, followed_id, created_at"#,
        )
        .bind(follower_id)
        .bind(followed_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await;
        match res {
            Ok(r) => Ok(Some(Follow {
                id: r.get("id"),
                follower_id: r.get("follower_id"),
                followed_id: r.get("followed_id"),
                created_at: r.get("created_at"),
            })),
            Err(e) if is_unique_violation(&e) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, follower_id: i64, followed_id: i64) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM follows WHERE follower_id = ?1 AND followed_id = ?2")
            .bind(follower_id)
            .bind(followed_id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}
