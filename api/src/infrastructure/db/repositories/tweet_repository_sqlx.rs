use async_trait::async_trait;
use chrono::Utc;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::application::dto::pagination::{Page, PageRequest, SortOrder};
use crate::application::ports::tweet_repository::TweetRepository;
use crate::domain::tweets::tweet::Tweet;
use crate::infrastructure::db::DbPool;

const SELECT_TWEET: &str = r#"SELECT t.id, t.owner_id, t.content, t.created_at,
       (SELECT COUNT(*) FROM likes l WHERE l.tweet_id = t.id) AS likes_count
FROM tweets t"#;

pub struct SqlxTweetRepository {
    pub pool: DbPool,
}

impl SqlxTweetRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn tweet_from_row(r: &SqliteRow) -> Tweet {
    Tweet {
        id: r.get("id"),
        owner_id: r.get("owner_id"),
        content: r.get("content"),
        created_at: r.get("created_at"),
        likes_count: r.get("likes_count"),
    }
}

// id breaks ties between tweets stored within the same clock tick
fn order_by(sort: SortOrder) -> String {
    format!("ORDER BY t.created_at {0}, t.id {0}", sort.as_sql())
}

/// Escapes LIKE metacharacters so the keyword is matched literally.
pub(crate) fn escape_like(keyword: &str) -> String {
    let mut out = String::with_capacity(keyword.len());
    for c in keyword.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[async_trait]
impl TweetRepository for SqlxTweetRepository {
    async fn create(&self, owner_id: i64, content: &str) -> anyhow::Result<Tweet> {
        let row = sqlx::query(
            r#"INSERT INTO tweets (owner_id, content, content_folded, created_at)
               VALUES (?1, ?2, ?3, ?4)
               RETURNING id, owner_id, content, created_at, 0 AS likes_count"#,
        )
        .bind(owner_id)
        .bind(content)
        .bind(content.to_lowercase())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(tweet_from_row(&row))
    }

    async fn get_by_id(&self, id: i64) -> anyhow::Result<Option<Tweet>> {
        let row = sqlx::query(&format!("{SELECT_TWEET} WHERE t.id = ?1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(tweet_from_row))
    }

    async fn list_all(&self, page: PageRequest, sort: SortOrder) -> anyhow::Result<Page<Tweet>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tweets")
            .fetch_one(&self.pool)
            .await?;
        let rows = sqlx::query(&format!("{SELECT_TWEET} {} LIMIT ?1 OFFSET ?2", order_by(sort)))
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await?;
        Ok(Page::new(
            rows.iter().map(tweet_from_row).collect(),
            total,
            page,
        ))
    }

    async fn list_by_owner(
        &self,
        owner_id: i64,
        page: PageRequest,
        sort: SortOrder,
    ) -> anyhow::Result<Page<Tweet>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tweets WHERE owner_id = ?1")
            .bind(owner_id)
            .fetch_one(&self.pool)
            .await?;
        let rows = sqlx::query(&format!(
            "{SELECT_TWEET} WHERE t.owner_id = ?1 {} LIMIT ?2 OFFSET ?3",
            order_by(sort)
        ))
        .bind(owner_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;
        Ok(Page::new(
            rows.iter().map(tweet_from_row).collect(),
            total,
            page,
        ))
    }

    async fn list_by_followed(
        &self,
        follower_id: i64,
        page: PageRequest,
        sort: SortOrder,
    ) -> anyhow::Result<Page<Tweet>> {
        let total: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM tweets t
               WHERE t.owner_id IN (SELECT followed_id FROM follows WHERE follower_id = ?1)"#,
        )
        .bind(follower_id)
        .fetch_one(&self.pool)
        .await?;
        if total == 0 {
            return Ok(Page::empty(page));
        }
        let rows = sqlx::query(&format!(
            r#"{SELECT_TWEET}
               WHERE t.owner_id IN (SELECT followed_id FROM follows WHERE follower_id = ?1)
               {} LIMIT ?2 OFFSET ?3"#,
            order_by(sort)
        ))
        .bind(follower_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;
        Ok(Page::new(
            rows.iter().map(tweet_from_row).collect(),
            total,
            page,
        ))
    }

    async fn search(&self, keyword: &str, page: PageRequest) -> anyhow::Result<Page<Tweet>> {
        let pattern = format!("%{}%", escape_like(&keyword.to_lowercase()));
        let total: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM tweets t WHERE t.content_folded LIKE ?1 ESCAPE '\'"#,
        )
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await?;
        let rows = sqlx::query(&format!(
            r#"{SELECT_TWEET} WHERE t.content_folded LIKE ?1 ESCAPE '\'
               {} LIMIT ?2 OFFSET ?3"#,
            order_by(SortOrder::Desc)
        ))
        .bind(&pattern)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;
        Ok(Page::new(
            rows.iter().map(tweet_from_row).collect(),
            total,
            page,
        ))
    }

    async fn update_content(&self, id: i64, content: &str) -> anyhow::Result<Option<Tweet>> {
        let res = sqlx::query("UPDATE tweets SET content = ?1, content_folded = ?2 WHERE id = ?3")
            .bind(content)
            .bind(content.to_lowercase())
            .bind(id)
            .execute(&self.pool)
            .await?;
        if res.rows_affected() == 0 {
            return Ok(None);
        }
        self.get_by_id(id).await
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM tweets WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}
