use async_trait::async_trait;
use chrono::Utc;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::application::ports::user_repository::{UserCredentials, UserRepository};
use crate::domain::users::user::{User, UserProfile};
use crate::infrastructure::db::{DbPool, is_unique_violation};

pub struct SqlxUserRepository {
    pub pool: DbPool,
}

impl SqlxUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

pub(crate) fn user_from_row(r: &SqliteRow) -> User {
    User {
        id: r.get("id"),
        username: r.get("username"),
        created_at: r.get("created_at"),
    }
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
    async fn create_user(
        &self,
        username: &str,
        password_hash: &str,
    ) -> anyhow::Result<Option<User>> {
        let res = sqlx::query(
            r#"INSERT INTO users (username, password_hash, created_at) VALUES (?1, ?2, ?3)
               RETURNING id, username, created_at"#,
        )
        .bind(username)
        .bind(password_hash)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await;
        match res {
            Ok(row) => Ok(Some(user_from_row(&row))),
            Err(e) if is_unique_violation(&e) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_credentials(&self, username: &str) -> anyhow::Result<Option<UserCredentials>> {
        let row = sqlx::query(
            r#"SELECT id, username, created_at, password_hash FROM users WHERE username = ?1"#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(|r| UserCredentials {
            user: user_from_row(&r),
            password_hash: r.get("password_hash"),
        }))
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<User>> {
        let row = sqlx::query(r#"SELECT id, username, created_at FROM users WHERE id = ?1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(user_from_row))
    }

    async fn get_profile(&self, id: i64) -> anyhow::Result<Option<UserProfile>> {
        let row = sqlx::query(
            r#"SELECT u.id, u.username, u.created_at,
                      (SELECT COUNT(*) FROM tweets t WHERE t.owner_id = u.id) AS tweet_count,
                      (SELECT COUNT(*) FROM follows f WHERE f.followed_id = u.id) AS follower_count,
                      (SELECT COUNT(*) FROM follows f WHERE f.follower_id = u.id) AS following_count
               FROM users u WHERE u.id = ?1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(|r| UserProfile {
            id: r.get("id"),
            username: r.get("username"),
            created_at: r.get("created_at"),
            tweet_count: r.get("tweet_count"),
            follower_count: r.get("follower_count"),
            following_count: r.get("following_count"),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::db::test_pool;

    #[tokio::test]
    async fn duplicate_username_yields_none() {
        let repo = SqlxUserRepository::new(test_pool().await);
        let first = repo.create_user("alice", "hash").await.unwrap();
        assert!(first.is_some());
        let second = repo.create_user("alice", "other").await.unwrap();
        assert!(second.is_none());
    }

    #[tokio::test]
    async fn credentials_carry_stored_hash() {
        let repo = SqlxUserRepository::new(test_pool().await);
        let user = repo.create_user("bob", "stored-hash").await.unwrap().unwrap();
        let creds = repo.find_credentials("bob").await.unwrap().unwrap();
        assert_eq!(creds.user, user);
        assert_eq!(creds.password_hash, "stored-hash");
        assert!(repo.find_credentials("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn fresh_profile_has_zero_counts() {
        let repo = SqlxUserRepository::new(test_pool().await);
        let user = repo.create_user("carol", "h").await.unwrap().unwrap();
        let profile = repo.get_profile(user.id).await.unwrap().unwrap();
        assert_eq!(profile.username, "carol");
        assert_eq!(
            (profile.tweet_count, profile.follower_count, profile.following_count),
            (0, 0, 0)
        );
        assert!(repo.get_profile(user.id + 100).await.unwrap().is_none());
    }
}
