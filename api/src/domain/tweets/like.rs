use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Like {
    pub id: i64,
    pub user_id: i64,
    pub tweet_id: i64,
    pub created_at: DateTime<Utc>,
}
