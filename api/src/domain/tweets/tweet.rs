use chrono::{DateTime, Utc};

pub const MAX_TWEET_LEN: usize = 280;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tweet {
    pub id: i64,
    pub owner_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub likes_count: i64,
}

pub fn validate_content(content: &str) -> Result<(), &'static str> {
    if content.trim().is_empty() {
        return Err("Tweet content must not be empty");
    }
    if content.chars().count() > MAX_TWEET_LEN {
        return Err("Tweet content exceeds 280 characters");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_bounds() {
        assert!(validate_content("hello").is_ok());
        assert!(validate_content(&"é".repeat(MAX_TWEET_LEN)).is_ok());
        assert!(validate_content(&"x".repeat(MAX_TWEET_LEN + 1)).is_err());
        assert!(validate_content(" \n ").is_err());
    }
}
