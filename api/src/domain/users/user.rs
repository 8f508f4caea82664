use chrono::{DateTime, Utc};

pub const MAX_USERNAME_LEN: usize = 50;
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// Public view of a user with counters computed at read time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub tweet_count: i64,
    pub follower_count: i64,
    pub following_count: i64,
}

pub fn validate_username(username: &str) -> Result<(), &'static str> {
    if username.trim().is_empty() {
        return Err("Username must not be empty");
    }
    if username.chars().count() > MAX_USERNAME_LEN {
        return Err("Username is too long");
    }
    if username.chars().any(char::is_whitespace) {
        return Err("Username must not contain whitespace");
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password is too short");
    }
    Ok(())
}
